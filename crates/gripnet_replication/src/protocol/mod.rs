//! # Grip Settings Wire Protocol
//!
//! Conditional bit layout for one settings record, gated by its own flags.
//!
//! ## Record Structure
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ use_physics_settings (1 bit)                                  │
//! ├───────────────────────── if set ──────────────────────────────┤
//! │ location (3) │ constraint (1) │ gravity (1) │ skip sim (1)    │
//! ├───────────────────────────────────────────────────────────────┤
//! │ linear force code (17) │ angular force code (17) │ custom (1) │
//! ├──────────────────── if custom also set ───────────────────────┤
//! │ angular stiffness (32 raw) │ angular damping (32 raw)         │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! - Every bit counts - the common case (no physics settings) costs one
//! - Write and read traverse fields in exactly the order above; any
//!   deviation breaks wire compatibility
//! - Enums travel as zero-based unsigned ordinals

mod bitstream;
mod codec;
mod quantize;
mod snapshot;

pub use bitstream::{BitStreamReader, BitStreamWriter, MAX_STREAM_BYTES};
pub use codec::{
    settings_equal, snapshots_equal, GripSettingsCodec, WIRE_BITS_DISABLED, WIRE_BITS_ENABLED,
    WIRE_BITS_FULL,
};
pub use quantize::FixedPointCodec;
pub use snapshot::QuantizedGripSettings;
