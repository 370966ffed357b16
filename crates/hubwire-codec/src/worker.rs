//! Running decodes off the async executor

use crate::adapter::InvocationAdapter;
use crate::json::JsonInvocationAdapter;
use hubwire_core::{
    CancellationToken, CodecError, CodecResult, InvocationDescriptor, InvocationResultDescriptor,
    ParameterTypeResolver, ResultTypeResolver,
};
use std::io::{Read, Write};
use std::sync::Arc;

/// A decode outcome together with the reader it was read from
#[derive(Debug)]
pub struct Decoded<R, T> {
    /// The stream, positioned after the decoded message
    pub reader: R,
    /// What was read: a message, no message, or a codec error
    pub message: CodecResult<Option<T>>,
}

impl<R, T> Decoded<R, T> {
    /// Split into the reader and the outcome
    pub fn into_parts(self) -> (R, CodecResult<Option<T>>) {
        (self.reader, self.message)
    }
}

/// Runs invocation decodes on tokio's blocking pool
///
/// Parsing and conversion can be slow for large payloads, so decodes are
/// moved off the calling task. The reader is moved into the worker and
/// handed back in [`Decoded`] together with the outcome, so one open stream
/// can be read message after message. The reader is lost only if the worker
/// itself fails, in which case the call returns [`CodecError::Worker`].
///
/// Encodes run inline: they complete synchronously from the caller's view.
#[derive(Debug, Clone)]
pub struct InvocationWorker {
    adapter: Arc<JsonInvocationAdapter>,
}

impl InvocationWorker {
    /// Create a worker sharing the given adapter
    pub fn new(adapter: Arc<JsonInvocationAdapter>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &JsonInvocationAdapter {
        &self.adapter
    }

    /// Decode one invocation request on the blocking pool
    ///
    /// Must be called from within a tokio runtime.
    pub async fn read_invocation<R>(
        &self,
        mut reader: R,
        resolver: Arc<dyn ParameterTypeResolver>,
        cancel: CancellationToken,
    ) -> CodecResult<Decoded<R, InvocationDescriptor>>
    where
        R: Read + Send + 'static,
    {
        let adapter = self.adapter.clone();
        tokio::task::spawn_blocking(move || {
            let message = adapter.read_invocation(&mut reader, resolver.as_ref(), &cancel);
            Decoded { reader, message }
        })
        .await
        .map_err(|err| CodecError::Worker(err.to_string()))
    }

    /// Decode one invocation result on the blocking pool
    ///
    /// Must be called from within a tokio runtime.
    pub async fn read_invocation_result<R>(
        &self,
        mut reader: R,
        resolver: Arc<dyn ResultTypeResolver>,
        cancel: CancellationToken,
    ) -> CodecResult<Decoded<R, InvocationResultDescriptor>>
    where
        R: Read + Send + 'static,
    {
        let adapter = self.adapter.clone();
        tokio::task::spawn_blocking(move || {
            let message = adapter.read_invocation_result(&mut reader, resolver.as_ref(), &cancel);
            Decoded { reader, message }
        })
        .await
        .map_err(|err| CodecError::Worker(err.to_string()))
    }

    /// Encode and write one invocation request
    pub fn write_invocation<W: Write>(
        &self,
        invocation: &InvocationDescriptor,
        writer: &mut W,
        cancel: &CancellationToken,
    ) -> CodecResult<()> {
        self.adapter.write_invocation(invocation, writer, cancel)
    }

    /// Encode and write one invocation result
    pub fn write_invocation_result<W: Write>(
        &self,
        result: &InvocationResultDescriptor,
        writer: &mut W,
        cancel: &CancellationToken,
    ) -> CodecResult<()> {
        self.adapter.write_invocation_result(result, writer, cancel)
    }
}

impl Default for InvocationWorker {
    fn default() -> Self {
        Self::new(Arc::new(JsonInvocationAdapter::new()))
    }
}
