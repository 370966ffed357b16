#![allow(non_snake_case)]

//! End-to-end exchange between a caller and a callee sharing one codec

use hubwire::prelude::*;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Quote {
    symbol: String,
    price: f64,
}

#[tokio::test]
async fn hub___call_and_reply___resolves_pending_invocation() {
    let worker = InvocationWorker::default();
    let signatures = Arc::new(
        MethodSignatures::new()
            .with_method("GetQuote", vec![TypeDescriptor::of::<String>()]),
    );
    let pending = Arc::new(PendingInvocations::new());
    let cancel = CancellationToken::new();

    // Caller issues the request
    let id = pending.register::<Quote>();
    let request = InvocationDescriptor::new(id.clone(), "GetQuote", Vec::new())
        .with_argument("ACME".to_string());
    let mut request_wire = Vec::new();
    worker
        .write_invocation(&request, &mut request_wire, &cancel)
        .unwrap();

    // Callee decodes it and replies
    let received = worker
        .read_invocation(Cursor::new(request_wire), signatures, cancel.clone())
        .await
        .unwrap()
        .message
        .unwrap()
        .unwrap();
    assert_eq!(received, request);
    let symbol = received.argument::<String>(0).unwrap().clone();
    let reply = InvocationResultDescriptor::success(
        received.id(),
        Quote {
            symbol,
            price: 12.5,
        },
    );
    let mut reply_wire = Vec::new();
    worker
        .write_invocation_result(&reply, &mut reply_wire, &cancel)
        .unwrap();

    // Caller decodes the reply against its pending table
    let outcome = worker
        .read_invocation_result(Cursor::new(reply_wire), pending.clone(), cancel)
        .await
        .unwrap()
        .message
        .unwrap()
        .unwrap();
    pending.complete(outcome.id());

    assert_eq!(
        outcome.result_as::<Quote>(),
        Some(&Quote {
            symbol: "ACME".into(),
            price: 12.5,
        })
    );
    assert!(pending.is_empty());
}

#[test]
fn hub___error_reply___reaches_caller_without_result() {
    let adapter = JsonInvocationAdapter::new();
    let pending = PendingInvocations::new();
    let cancel = CancellationToken::new();
    let id = pending.register::<i32>();

    let mut wire = Vec::new();
    adapter
        .write_invocation_result(
            &InvocationResultDescriptor::failure(id.clone(), "method threw"),
            &mut wire,
            &cancel,
        )
        .unwrap();
    let outcome = adapter
        .read_invocation_result(&mut wire.as_slice(), &pending, &cancel)
        .unwrap()
        .unwrap();

    assert_eq!(outcome.id(), id);
    assert_eq!(outcome.error(), Some("method threw"));
    assert!(outcome.result().is_none());
}
