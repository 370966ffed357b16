//! Invocation adapter trait

use hubwire_core::{
    CancellationToken, CodecResult, InvocationDescriptor, InvocationResultDescriptor,
    ParameterTypeResolver, ResultTypeResolver,
};
use std::io::{Read, Write};

/// Trait for reading and writing invocation messages on a byte stream
///
/// Each read consumes one message from the stream and returns `Ok(None)` when
/// the stream holds no message. Each write emits one message and flushes.
/// A stream should see at most one read and one write at a time.
pub trait InvocationAdapter: Send + Sync {
    /// Read one invocation request
    ///
    /// Argument types come from `resolver`, keyed by the decoded method name.
    fn read_invocation<R: Read>(
        &self,
        reader: &mut R,
        resolver: &dyn ParameterTypeResolver,
        cancel: &CancellationToken,
    ) -> CodecResult<Option<InvocationDescriptor>>;

    /// Read one invocation result
    ///
    /// The result type comes from `resolver`, keyed by the decoded invocation id.
    fn read_invocation_result<R: Read>(
        &self,
        reader: &mut R,
        resolver: &dyn ResultTypeResolver,
        cancel: &CancellationToken,
    ) -> CodecResult<Option<InvocationResultDescriptor>>;

    /// Write one invocation request
    ///
    /// `cancel` is not consulted once the write has started.
    fn write_invocation<W: Write>(
        &self,
        invocation: &InvocationDescriptor,
        writer: &mut W,
        cancel: &CancellationToken,
    ) -> CodecResult<()>;

    /// Write one invocation result
    fn write_invocation_result<W: Write>(
        &self,
        result: &InvocationResultDescriptor,
        writer: &mut W,
        cancel: &CancellationToken,
    ) -> CodecResult<()>;

    /// Get the content type for this adapter
    fn content_type(&self) -> &'static str;
}
