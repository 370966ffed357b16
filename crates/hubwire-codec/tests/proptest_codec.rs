//! Property-based tests for the invocation codec
//!
//! Tests that invocations and results survive an encode/decode cycle with
//! any valid data, and that argument counts are enforced exactly.

use hubwire_codec::{InvocationAdapter, JsonInvocationAdapter};
use hubwire_core::{
    CancellationToken, CodecError, InvocationDescriptor, InvocationResultDescriptor,
    TypeDescriptor, typed,
};
use proptest::prelude::*;

// Strategy: Generate invocation ids and method names
fn arb_id() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9-]{1,36}"
}

fn arb_method() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9_]{0,31}"
}

proptest! {
    /// Property: an invocation with mixed argument types roundtrips losslessly
    #[test]
    fn proptest_invocation_roundtrip(
        id in arb_id(),
        method in arb_method(),
        number in any::<i64>(),
        text in ".*",
        flags in proptest::collection::vec(any::<bool>(), 0..8),
    ) {
        let adapter = JsonInvocationAdapter::new();
        let cancel = CancellationToken::new();
        let original = InvocationDescriptor::new(
            id.clone(),
            method.clone(),
            vec![typed(number), typed(text), typed(flags)],
        );
        let resolver = |_: &str| {
            vec![
                TypeDescriptor::of::<i64>(),
                TypeDescriptor::of::<String>(),
                TypeDescriptor::of::<Vec<bool>>(),
            ]
        };

        let mut wire = Vec::new();
        adapter
            .write_invocation(&original, &mut wire, &cancel)
            .expect("Encoding should succeed for valid data");
        let decoded = adapter
            .read_invocation(&mut wire.as_slice(), &resolver, &cancel)
            .expect("Decoding should succeed for encoded data")
            .expect("Encoded data should contain a message");

        prop_assert_eq!(decoded.id(), id.as_str());
        prop_assert_eq!(decoded.method(), method.as_str());
        prop_assert_eq!(decoded, original);
    }

    /// Property: successful results roundtrip losslessly
    #[test]
    fn proptest_result_success_roundtrip(id in arb_id(), value in any::<Option<u32>>()) {
        let adapter = JsonInvocationAdapter::new();
        let cancel = CancellationToken::new();
        let original = InvocationResultDescriptor::success(id, value);
        let resolver = |_: &str| Some(TypeDescriptor::of::<Option<u32>>());

        let mut wire = Vec::new();
        adapter
            .write_invocation_result(&original, &mut wire, &cancel)
            .expect("Encoding should succeed");
        let decoded = adapter
            .read_invocation_result(&mut wire.as_slice(), &resolver, &cancel)
            .expect("Decoding should succeed")
            .expect("Encoded data should contain a message");

        prop_assert_eq!(decoded, original);
    }

    /// Property: failed results roundtrip losslessly
    #[test]
    fn proptest_result_failure_roundtrip(id in arb_id(), message in ".*") {
        let adapter = JsonInvocationAdapter::new();
        let cancel = CancellationToken::new();
        let original = InvocationResultDescriptor::failure(id, message);
        let resolver = |_: &str| -> Option<TypeDescriptor> { None };

        let mut wire = Vec::new();
        adapter
            .write_invocation_result(&original, &mut wire, &cancel)
            .expect("Encoding should succeed");
        let decoded = adapter
            .read_invocation_result(&mut wire.as_slice(), &resolver, &cancel)
            .expect("Decoding a failure should not consult the resolver")
            .expect("Encoded data should contain a message");

        prop_assert_eq!(decoded, original);
    }

    /// Property: decoding succeeds only when the wire count equals the resolved count
    #[test]
    fn proptest_argument_count_enforced(
        resolved in 0usize..6,
        arguments in proptest::collection::vec(any::<i32>(), 0..6),
    ) {
        let adapter = JsonInvocationAdapter::new();
        let json = serde_json::json!({"Id": "1", "Method": "M", "Arguments": arguments});
        let bytes = serde_json::to_vec(&json).expect("json! values always serialize");
        let resolver = move |_: &str| vec![TypeDescriptor::of::<i32>(); resolved];

        let result = adapter.read_invocation(
            &mut bytes.as_slice(),
            &resolver,
            &CancellationToken::new(),
        );

        if arguments.len() == resolved {
            let invocation = result
                .expect("Matching counts should decode")
                .expect("Payload should contain a message");
            prop_assert_eq!(invocation.arguments().len(), resolved);
        } else {
            match result {
                Err(CodecError::ArgumentCountMismatch { expected, actual, .. }) => {
                    prop_assert_eq!(expected, resolved);
                    prop_assert_eq!(actual, arguments.len());
                }
                other => prop_assert!(false, "expected ArgumentCountMismatch, got {:?}", other),
            }
        }
    }
}
