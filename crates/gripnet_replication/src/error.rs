//! # Replication Error Types
//!
//! All errors that can occur at the codec's wire and registry boundaries.
//!
//! The pure transforms (quantize, equality) cannot fail; fallibility lives
//! where bytes and process-wide state are involved.

use thiserror::Error;

/// Errors that can occur in the replication codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplicationError {
    /// The write buffer ran out of space mid-record.
    #[error("bitstream writer out of space")]
    WriteOverflow,

    /// The input bitstream ended before the record did.
    #[error("bitstream truncated: wanted {wanted_bits} more bits")]
    TruncatedStream {
        /// Bits the decoder still needed when the stream ran dry.
        wanted_bits: u32,
    },

    /// A wire ordinal fell outside its enum's declared domain.
    #[error("wire ordinal {ordinal} out of domain for {field} (max {max})")]
    InvalidOrdinal {
        /// The field being decoded.
        field: &'static str,
        /// The ordinal read from the wire.
        ordinal: u32,
        /// The largest legal ordinal.
        max: u32,
    },

    /// Codec configuration failed validation.
    #[error("invalid codec configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// A serializer was registered twice under the same type name.
    #[error("serializer already registered: {type_name}")]
    AlreadyRegistered {
        /// The conflicting type name.
        type_name: &'static str,
    },

    /// Unregister was called for a type name never registered.
    #[error("serializer not registered: {type_name}")]
    NotRegistered {
        /// The unknown type name.
        type_name: String,
    },
}

/// Result type for replication operations.
pub type ReplicationResult<T> = Result<T, ReplicationError>;
