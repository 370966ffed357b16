//! JSON implementation of the invocation adapter
//!
//! Wire shapes, one JSON object per message with no length prefix:
//!
//! ```text
//! {"Id": "1", "Method": "Add", "Arguments": [2, 3]}
//! {"Id": "1", "Result": 5, "Error": null}
//! ```
//!
//! Decoding happens in two phases. The message is first parsed with its
//! payload left as an untyped JSON tree; once the method name or invocation id
//! is known, the resolver supplies the target types and each element of the
//! tree is converted positionally.

use crate::adapter::InvocationAdapter;
use hubwire_core::{
    CancellationToken, CodecConfig, CodecError, CodecResult, HubValue, InvocationDescriptor,
    InvocationResultDescriptor, ParameterTypeResolver, ResultTypeResolver, TypeDescriptor,
    TypedValue,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::{debug, trace, warn};

/// Invocation request with its arguments still untyped
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireInvocation {
    id: String,
    method: String,
    #[serde(default)]
    arguments: Vec<serde_json::Value>,
}

/// Invocation result with its value still untyped
///
/// `Result` has no default: it must be present on the wire, even as `null`.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireInvocationResult {
    id: String,
    result: serde_json::Value,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct OutgoingInvocation<'a> {
    id: &'a str,
    method: &'a str,
    arguments: Vec<&'a dyn TypedValue>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct OutgoingInvocationResult<'a> {
    id: &'a str,
    result: Option<&'a dyn TypedValue>,
    error: Option<&'a str>,
}

/// JSON invocation adapter using serde_json
///
/// Holds only immutable configuration, so one adapter can be shared across
/// threads and used on many streams concurrently.
#[derive(Debug, Clone, Default)]
pub struct JsonInvocationAdapter {
    config: CodecConfig,
}

impl JsonInvocationAdapter {
    /// Create an adapter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter that pretty-prints output
    pub fn pretty() -> Self {
        Self::with_config(CodecConfig::default().with_pretty(true))
    }

    /// Create an adapter with the given configuration
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode an invocation request to bytes
    pub fn encode_invocation(&self, invocation: &InvocationDescriptor) -> CodecResult<Vec<u8>> {
        let message = OutgoingInvocation {
            id: invocation.id(),
            method: invocation.method(),
            arguments: invocation.arguments().iter().map(|arg| &**arg).collect(),
        };
        self.encode(&message)
    }

    /// Encode an invocation result to bytes
    pub fn encode_invocation_result(
        &self,
        result: &InvocationResultDescriptor,
    ) -> CodecResult<Vec<u8>> {
        let message = OutgoingInvocationResult {
            id: result.id(),
            result: result.result().map(|value| &**value),
            error: result.error(),
        };
        self.encode(&message)
    }

    fn encode<T: Serialize>(&self, message: &T) -> CodecResult<Vec<u8>> {
        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(message)
        } else {
            serde_json::to_vec(message)
        };
        encoded.map_err(|err| CodecError::Serialization(err.to_string()))
    }

    fn write_all<W: Write>(&self, writer: &mut W, bytes: &[u8]) -> CodecResult<()> {
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}

impl InvocationAdapter for JsonInvocationAdapter {
    fn read_invocation<R: Read>(
        &self,
        reader: &mut R,
        resolver: &dyn ParameterTypeResolver,
        cancel: &CancellationToken,
    ) -> CodecResult<Option<InvocationDescriptor>> {
        cancel.check()?;

        let Some(wire) = read_message::<_, WireInvocation>(reader)? else {
            trace!("no invocation available on stream");
            return Ok(None);
        };

        let types = resolver.parameter_types(&wire.method);
        if types.len() != wire.arguments.len() {
            return Err(CodecError::ArgumentCountMismatch {
                method: wire.method,
                expected: types.len(),
                actual: wire.arguments.len(),
            });
        }

        let arguments = wire
            .arguments
            .iter()
            .zip(&types)
            .enumerate()
            .map(|(index, (json, ty))| convert(index, ty, json))
            .collect::<CodecResult<Vec<_>>>()?;

        debug!(
            id = %wire.id,
            method = %wire.method,
            arguments = arguments.len(),
            "decoded invocation"
        );
        Ok(Some(InvocationDescriptor::new(
            wire.id,
            wire.method,
            arguments,
        )))
    }

    fn read_invocation_result<R: Read>(
        &self,
        reader: &mut R,
        resolver: &dyn ResultTypeResolver,
        cancel: &CancellationToken,
    ) -> CodecResult<Option<InvocationResultDescriptor>> {
        cancel.check()?;

        let Some(wire) = read_message::<_, WireInvocationResult>(reader)? else {
            trace!("no invocation result available on stream");
            return Ok(None);
        };

        let result = match wire.error.as_deref() {
            None => {
                let ty = resolver
                    .result_type(&wire.id)
                    .ok_or_else(|| CodecError::UnknownInvocation(wire.id.clone()))?;
                Some(convert(0, &ty, &wire.result)?)
            }
            Some(_) if wire.result.is_null() => None,
            Some(_) if self.config.strict_outcome => {
                return Err(CodecError::ConflictingOutcome(wire.id));
            }
            Some(error) => {
                warn!(id = %wire.id, error, "dropping result value sent alongside an error");
                None
            }
        };

        debug!(id = %wire.id, failed = wire.error.is_some(), "decoded invocation result");
        Ok(Some(InvocationResultDescriptor::new(
            wire.id, result, wire.error,
        )))
    }

    fn write_invocation<W: Write>(
        &self,
        invocation: &InvocationDescriptor,
        writer: &mut W,
        _cancel: &CancellationToken,
    ) -> CodecResult<()> {
        // Encode fully before touching the stream so a failure writes nothing
        let bytes = self.encode_invocation(invocation)?;
        self.write_all(writer, &bytes)?;
        debug!(
            id = invocation.id(),
            method = invocation.method(),
            bytes = bytes.len(),
            "wrote invocation"
        );
        Ok(())
    }

    fn write_invocation_result<W: Write>(
        &self,
        result: &InvocationResultDescriptor,
        writer: &mut W,
        _cancel: &CancellationToken,
    ) -> CodecResult<()> {
        let bytes = self.encode_invocation_result(result)?;
        self.write_all(writer, &bytes)?;
        debug!(id = result.id(), bytes = bytes.len(), "wrote invocation result");
        Ok(())
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Parse exactly one JSON object from the stream
///
/// Only an empty or whitespace-only stream means no message is available; any
/// other value that is not an object, `null` included, is `InvalidFormat`.
/// Bytes after the closing brace are left unread.
fn read_message<R: Read, T: DeserializeOwned>(reader: R) -> CodecResult<Option<T>> {
    let mut stream = serde_json::Deserializer::from_reader(reader).into_iter::<T>();
    match stream.next() {
        None => Ok(None),
        Some(message) => Ok(Some(message?)),
    }
}

fn convert(index: usize, ty: &TypeDescriptor, json: &serde_json::Value) -> CodecResult<HubValue> {
    ty.convert(json).map_err(|err| CodecError::Conversion {
        index,
        type_name: ty.name().to_string(),
        message: err.to_string(),
    })
}
