//! # GRIPNET Core - Grip Physics Data Model
//!
//! The source-of-truth settings record for physically simulated grips,
//! shared between gameplay code (which owns and mutates it) and the
//! replication layer (which reads it once per tick).
//!
//! ## Architecture Rules
//!
//! 1. **Gameplay owns the record** - replication only ever reads it
//! 2. **Gates rule the fields** - when `use_physics_settings` is false,
//!    every other field is don't-care and must not be interpreted
//! 3. **Bounded domains** - enums carry explicit ordinal mappings so the
//!    wire layer never relies on compiler-assigned discriminants

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod math;
pub mod settings;

pub use math::{nearly_equal, NEARLY_EQUAL_EPSILON};
pub use settings::{GripConstraintMode, GripLocationMode, GripPhysicsSettings};
