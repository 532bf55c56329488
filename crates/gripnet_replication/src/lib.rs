//! # GRIPNET Replication - Grip Settings Wire Codec
//!
//! Variable-length bitstream codec that replicates a
//! [`GripPhysicsSettings`](gripnet_core::GripPhysicsSettings) record across
//! the network and decides whether it changed since the last send.
//!
//! ## Architecture
//!
//! Send path:
//!
//! ```text
//! GripPhysicsSettings ──quantize──▶ QuantizedGripSettings ──serialize──▶ bitstream
//! ```
//!
//! Receive path is the exact inverse. The equality comparator is invoked
//! independently by the replication layer, on snapshots (bytewise, no-op
//! resend detection) or on raw records (near-equality, change detection).
//!
//! ## Performance Guarantees
//!
//! - Zero heap allocations in the per-tick transforms
//! - Every transform is a pure, `O(1)` function of its inputs
//! - One bit on the wire when grip physics is disabled
//!
//! ## Wire Contract
//!
//! Field *order* and *width* are the contract, not byte alignment. There is
//! no version field in the payload; wire changes bump the registered codec
//! version instead.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod protocol;
pub mod registry;

// Re-exports for convenience
pub use config::QuantizerConfig;
pub use error::{ReplicationError, ReplicationResult};
pub use protocol::{
    settings_equal, snapshots_equal, BitStreamReader, BitStreamWriter, FixedPointCodec,
    GripSettingsCodec, QuantizedGripSettings, MAX_STREAM_BYTES, WIRE_BITS_DISABLED,
    WIRE_BITS_ENABLED, WIRE_BITS_FULL,
};
pub use registry::{ReplicatedSerializer, SerializerRegistry};

/// Replication tick rate the codec is sized for (updates per second).
///
/// Snapshots are ephemeral per-tick values; nothing in this crate outlives
/// the tick that produced it.
pub const REPLICATION_TICK_RATE: u32 = 60;
