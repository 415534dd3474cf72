// src/common/error.rs

use super::types::{ChannelInfo, ChannelType};

/// Driver error type, generic over the transport's own error type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Cc2Error<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic Bus error
{
    /// Underlying bus error reported by the transport implementation.
    #[error("bus error: {0:?}")] // Format string requires Debug on E
    Bus(E),

    /// A Data Fetch transaction moved a different number of bytes than
    /// requested. The EIO equivalent: surfaced per call, never retried
    /// here, and no partial value is produced. Callers may re-issue.
    #[error("reply length mismatch: requested {requested}, got {got}")]
    ReplyLength { requested: usize, got: usize },

    /// The transport lacks the byte-write plus block-read primitives the
    /// Data Fetch exchange needs. Detected once when the driver is bound;
    /// fatal for that device instance.
    #[error("transport does not support byte-write + block-read")]
    UnsupportedTransport,

    /// The requested (channel, info) combination is not defined for this
    /// device. A contract violation by the caller, not a hardware fault.
    #[error("channel {channel:?} does not provide {info:?}")]
    InvalidRequest {
        channel: ChannelType,
        info: ChannelInfo,
    },
}

// Allow mapping from the underlying transport error via `?`
impl<E: core::fmt::Debug> From<E> for Cc2Error<E> {
    fn from(e: E) -> Self {
        Cc2Error::Bus(e)
    }
}
