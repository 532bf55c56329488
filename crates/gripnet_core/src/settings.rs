//! # Grip Physics Settings
//!
//! The settings record that controls how a physically simulated grip
//! constrains a held object. Gameplay state owns one record per grippable;
//! the replication layer reads it, never writes it.
//!
//! ## Gate Semantics
//!
//! `use_physics_settings` is the master gate: when false, every other field
//! is logically undefined and excluded from the wire. `use_custom_angular_values`
//! is a sub-gate guarding the two full-precision angular drive values.

use serde::{Deserialize, Serialize};

/// How the grip constraint drives the held object.
///
/// Replicated as a 1-bit ordinal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum GripConstraintMode {
    /// Acceleration-driven constraint - response is independent of the
    /// held object's mass.
    #[default]
    Acceleration = 0,
    /// Force-driven constraint - heavier objects resist the grip.
    Force = 1,
}

impl GripConstraintMode {
    /// Number of variants in the domain.
    pub const COUNT: u32 = 2;

    /// Zero-based unsigned ordinal, as written to the wire.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Maps a wire ordinal back into the domain.
    ///
    /// Returns `None` for ordinals outside `[0, COUNT)`.
    #[inline]
    #[must_use]
    pub const fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Acceleration),
            1 => Some(Self::Force),
            _ => None,
        }
    }
}

/// Where the grip constraint anchors on the held body.
///
/// Five states; replicated as a 3-bit ordinal, so wire values 5..=7 are
/// outside the domain and must be rejected by the decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum GripLocationMode {
    /// Leave the body's center of mass alone and anchor at it.
    #[default]
    Default = 0,
    /// Move the center of mass to the grip pivot before constraining.
    AtPivot = 1,
    /// Set the center of mass and anchor the constraint at it.
    SetAndGripAt = 2,
    /// Anchor at the current center of mass without moving it.
    GripAt = 3,
    /// Anchor the constraint at the controller's location.
    ControllerLocation = 4,
}

impl GripLocationMode {
    /// Number of variants in the domain.
    pub const COUNT: u32 = 5;

    /// Zero-based unsigned ordinal, as written to the wire.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Maps a wire ordinal back into the domain.
    ///
    /// Returns `None` for ordinals outside `[0, COUNT)`.
    #[inline]
    #[must_use]
    pub const fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Default),
            1 => Some(Self::AtPivot),
            2 => Some(Self::SetAndGripAt),
            3 => Some(Self::GripAt),
            4 => Some(Self::ControllerLocation),
            _ => None,
        }
    }
}

/// Physics settings for a single grip.
///
/// The two force coefficients are semantically bounded to
/// `[0, MAX_FORCE_COEFFICIENT]` and replicate at reduced precision; the two
/// angular drive values replicate bit-exact but only when
/// `use_custom_angular_values` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GripPhysicsSettings {
    /// Master gate. When false the rest of the record is don't-care and
    /// nothing beyond this flag is transmitted.
    pub use_physics_settings: bool,
    /// Constraint anchor placement.
    pub grip_location_mode: GripLocationMode,
    /// Constraint drive mode.
    pub constraint_mode: GripConstraintMode,
    /// Disable gravity on the held body for the duration of the grip.
    pub turn_off_gravity_during_grip: bool,
    /// Leave the body's simulating flag untouched when gripping.
    pub skip_setting_simulating: bool,
    /// Linear drive strength multiplier, bounded to `[0, 512]`.
    pub linear_max_force_coefficient: f32,
    /// Angular drive strength multiplier, bounded to `[0, 512]`.
    pub angular_max_force_coefficient: f32,
    /// Sub-gate: replace the default angular drive with the two values below.
    pub use_custom_angular_values: bool,
    /// Custom angular drive stiffness. Meaningful only under the sub-gate.
    pub angular_stiffness: f32,
    /// Custom angular drive damping. Meaningful only under the sub-gate.
    pub angular_damping: f32,
}

impl GripPhysicsSettings {
    /// Upper bound of the replicated force coefficient range.
    pub const MAX_FORCE_COEFFICIENT: f32 = 512.0;

    /// Creates a record with physics settings disabled and every other
    /// field at its default.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the angular drive values are meaningful, i.e. both
    /// gates are set.
    #[inline]
    #[must_use]
    pub const fn has_custom_angular_values(&self) -> bool {
        self.use_physics_settings && self.use_custom_angular_values
    }
}
