//! # Grip Settings Codec
//!
//! The four single-shot transforms (quantize, serialize, deserialize,
//! dequantize) plus the two-mode equality comparator used by the
//! replication layer for change detection.
//!
//! Each transform has two states: "gate off" (terminal, one wire bit) and
//! "gate on" (expands into the nested sub-gate states). There is no
//! persistent state machine; every record is transformed independently.

use gripnet_core::{nearly_equal, GripConstraintMode, GripLocationMode, GripPhysicsSettings};

use crate::config::QuantizerConfig;
use crate::error::{ReplicationError, ReplicationResult};
use crate::protocol::bitstream::{BitStreamReader, BitStreamWriter};
use crate::protocol::quantize::FixedPointCodec;
use crate::protocol::snapshot::QuantizedGripSettings;

/// Wire bits of the 3-bit grip location ordinal.
const GRIP_LOCATION_WIRE_BITS: u32 = 3;
/// Wire bits of the 1-bit constraint mode ordinal.
const CONSTRAINT_WIRE_BITS: u32 = 1;
/// Wire bits of one raw float.
const RAW_FLOAT_WIRE_BITS: usize = 32;

/// Serialized size when the master gate is off: the gate bit alone.
pub const WIRE_BITS_DISABLED: usize = 1;
/// Serialized size under the default config with the master gate on and
/// the sub-gate off: gate + 3 + 1 + 1 + 1 + 17 + 17 + sub-gate.
pub const WIRE_BITS_ENABLED: usize = 1
    + GRIP_LOCATION_WIRE_BITS as usize
    + CONSTRAINT_WIRE_BITS as usize
    + 1
    + 1
    + QuantizerConfig::DEFAULT_FORCE_BITS as usize
    + QuantizerConfig::DEFAULT_FORCE_BITS as usize
    + 1;
/// Serialized size under the default config with both gates on.
pub const WIRE_BITS_FULL: usize = WIRE_BITS_ENABLED + 2 * RAW_FLOAT_WIRE_BITS;

/// Codec for one grip settings record type.
///
/// Owns the configured fixed-point quantizer; all methods are pure and
/// stateless beyond that configuration.
#[derive(Clone, Copy, Debug)]
pub struct GripSettingsCodec {
    force_codec: FixedPointCodec,
}

impl GripSettingsCodec {
    /// Type name the codec registers under.
    pub const TYPE_NAME: &'static str = "GripPhysicsSettings";

    /// Wire format version. Bumped whenever the layout changes; there is
    /// no version field in the payload itself.
    pub const VERSION: u32 = 0;

    /// Builds a codec from validated quantizer parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::InvalidConfig`] when `config` fails
    /// [`QuantizerConfig::validate`].
    pub fn new(config: QuantizerConfig) -> ReplicationResult<Self> {
        config.validate()?;
        Ok(Self {
            force_codec: FixedPointCodec::new(config.force_max_range, config.force_bits),
        })
    }

    /// Creates a quantized snapshot of `source`.
    ///
    /// When the master gate is off every other snapshot field stays at its
    /// zero initialization; the force coefficients are encoded whenever
    /// the gate is on, and the angular values copied verbatim only when
    /// the sub-gate is on as well.
    #[must_use]
    pub fn quantize(&self, source: &GripPhysicsSettings) -> QuantizedGripSettings {
        let mut target = QuantizedGripSettings::new();

        target.set_flag(
            QuantizedGripSettings::FLAG_USE_PHYSICS_SETTINGS,
            source.use_physics_settings,
        );

        if source.use_physics_settings {
            target.set_constraint_ordinal(source.constraint_mode.ordinal());
            target.set_grip_location_ordinal(source.grip_location_mode.ordinal());
            target.set_flag(
                QuantizedGripSettings::FLAG_TURN_OFF_GRAVITY,
                source.turn_off_gravity_during_grip,
            );
            target.set_flag(
                QuantizedGripSettings::FLAG_SKIP_SETTING_SIMULATING,
                source.skip_setting_simulating,
            );

            target.linear_max_force_code =
                self.force_codec.encode(source.linear_max_force_coefficient);
            target.angular_max_force_code =
                self.force_codec.encode(source.angular_max_force_coefficient);

            target.set_flag(
                QuantizedGripSettings::FLAG_USE_CUSTOM_ANGULAR_VALUES,
                source.use_custom_angular_values,
            );

            if source.use_custom_angular_values {
                target.angular_stiffness = source.angular_stiffness;
                target.angular_damping = source.angular_damping;
            }
        }

        target
    }

    /// Applies a snapshot back onto a record owned by the receiver.
    ///
    /// Fields outside the active gates are left untouched, so the caller's
    /// defaults survive a gate-off snapshot. The force coefficients are
    /// decoded whenever the master gate is on, symmetric with
    /// [`quantize`](Self::quantize).
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::InvalidOrdinal`] when an enum ordinal
    /// is outside its domain; `target` is unmodified in that case.
    pub fn dequantize_into(
        &self,
        snapshot: &QuantizedGripSettings,
        target: &mut GripPhysicsSettings,
    ) -> ReplicationResult<()> {
        if !snapshot.use_physics_settings() {
            target.use_physics_settings = false;
            return Ok(());
        }

        let grip_location_mode =
            GripLocationMode::from_ordinal(snapshot.grip_location_ordinal()).ok_or(
                ReplicationError::InvalidOrdinal {
                    field: "grip_location_mode",
                    ordinal: snapshot.grip_location_ordinal(),
                    max: GripLocationMode::COUNT - 1,
                },
            )?;
        let constraint_mode = GripConstraintMode::from_ordinal(snapshot.constraint_ordinal())
            .ok_or(ReplicationError::InvalidOrdinal {
                field: "constraint_mode",
                ordinal: snapshot.constraint_ordinal(),
                max: GripConstraintMode::COUNT - 1,
            })?;

        target.use_physics_settings = true;
        target.grip_location_mode = grip_location_mode;
        target.constraint_mode = constraint_mode;
        target.turn_off_gravity_during_grip = snapshot.turn_off_gravity_during_grip();
        target.skip_setting_simulating = snapshot.skip_setting_simulating();
        target.linear_max_force_coefficient = self.force_codec.decode(snapshot.linear_max_force_code);
        target.angular_max_force_coefficient =
            self.force_codec.decode(snapshot.angular_max_force_code);
        target.use_custom_angular_values = snapshot.use_custom_angular_values();

        if snapshot.use_custom_angular_values() {
            target.angular_stiffness = snapshot.angular_stiffness;
            target.angular_damping = snapshot.angular_damping;
        }

        Ok(())
    }

    /// Produces a fresh record from a snapshot, starting from defaults.
    ///
    /// # Errors
    ///
    /// Same as [`dequantize_into`](Self::dequantize_into).
    pub fn dequantize(
        &self,
        snapshot: &QuantizedGripSettings,
    ) -> ReplicationResult<GripPhysicsSettings> {
        let mut target = GripPhysicsSettings::default();
        self.dequantize_into(snapshot, &mut target)?;
        Ok(target)
    }

    /// Writes a snapshot to the bitstream in the fixed conditional order.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::WriteOverflow`] when the writer runs
    /// out of space mid-record.
    pub fn serialize(
        &self,
        snapshot: &QuantizedGripSettings,
        writer: &mut BitStreamWriter,
    ) -> ReplicationResult<()> {
        let mut ok = writer.write_bool(snapshot.use_physics_settings());

        if snapshot.use_physics_settings() {
            ok = ok
                && writer.write_bits(snapshot.grip_location_ordinal(), GRIP_LOCATION_WIRE_BITS)
                && writer.write_bits(snapshot.constraint_ordinal(), CONSTRAINT_WIRE_BITS)
                && writer.write_bool(snapshot.turn_off_gravity_during_grip())
                && writer.write_bool(snapshot.skip_setting_simulating())
                && writer.write_bits(snapshot.linear_max_force_code, self.force_codec.num_bits())
                && writer.write_bits(snapshot.angular_max_force_code, self.force_codec.num_bits())
                && writer.write_bool(snapshot.use_custom_angular_values());

            if snapshot.use_custom_angular_values() {
                ok = ok
                    && writer.write_f32(snapshot.angular_stiffness)
                    && writer.write_f32(snapshot.angular_damping);
            }
        }

        if ok {
            Ok(())
        } else {
            Err(ReplicationError::WriteOverflow)
        }
    }

    /// Reads a snapshot from the bitstream, inverting
    /// [`serialize`](Self::serialize) field for field.
    ///
    /// Ordinal domains are not checked here; raw wire ordinals live in the
    /// snapshot until [`dequantize`](Self::dequantize) validates them.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::TruncatedStream`] when the stream ends
    /// mid-record.
    pub fn deserialize(
        &self,
        reader: &mut BitStreamReader<'_>,
    ) -> ReplicationResult<QuantizedGripSettings> {
        let mut snapshot = QuantizedGripSettings::new();

        let use_physics_settings = take_bool(reader)?;
        snapshot.set_flag(
            QuantizedGripSettings::FLAG_USE_PHYSICS_SETTINGS,
            use_physics_settings,
        );

        if use_physics_settings {
            snapshot.set_grip_location_ordinal(take_bits(reader, GRIP_LOCATION_WIRE_BITS)?);
            snapshot.set_constraint_ordinal(take_bits(reader, CONSTRAINT_WIRE_BITS)?);
            snapshot.set_flag(QuantizedGripSettings::FLAG_TURN_OFF_GRAVITY, take_bool(reader)?);
            snapshot.set_flag(
                QuantizedGripSettings::FLAG_SKIP_SETTING_SIMULATING,
                take_bool(reader)?,
            );

            snapshot.linear_max_force_code = take_bits(reader, self.force_codec.num_bits())?;
            snapshot.angular_max_force_code = take_bits(reader, self.force_codec.num_bits())?;

            let use_custom_angular_values = take_bool(reader)?;
            snapshot.set_flag(
                QuantizedGripSettings::FLAG_USE_CUSTOM_ANGULAR_VALUES,
                use_custom_angular_values,
            );

            if use_custom_angular_values {
                snapshot.angular_stiffness = take_f32(reader)?;
                snapshot.angular_damping = take_f32(reader)?;
            }
        }

        Ok(snapshot)
    }

    /// Exact serialized size of a snapshot under this codec's config.
    #[must_use]
    pub fn serialized_bit_len(&self, snapshot: &QuantizedGripSettings) -> usize {
        if !snapshot.use_physics_settings() {
            return WIRE_BITS_DISABLED;
        }

        let mut bits = 1
            + GRIP_LOCATION_WIRE_BITS as usize
            + CONSTRAINT_WIRE_BITS as usize
            + 1
            + 1
            + 2 * self.force_codec.num_bits() as usize
            + 1;
        if snapshot.use_custom_angular_values() {
            bits += 2 * RAW_FLOAT_WIRE_BITS;
        }
        bits
    }
}

/// Bytewise equality of two quantized snapshots.
///
/// Any bit difference counts, including in fields that are don't-care
/// under the current gate state; intentionally stricter than semantic
/// equality so the replication layer never mistakes a dirty snapshot for
/// a clean one.
#[inline]
#[must_use]
pub fn snapshots_equal(lhs: &QuantizedGripSettings, rhs: &QuantizedGripSettings) -> bool {
    bytemuck::bytes_of(lhs) == bytemuck::bytes_of(rhs)
}

/// Field-by-field near-equality of two logical records.
///
/// Short-circuits on the gates: differing master gates are unequal, two
/// cleared master gates are equal regardless of the other fields, and the
/// angular values are only consulted when both sub-gates are set.
#[must_use]
pub fn settings_equal(lhs: &GripPhysicsSettings, rhs: &GripPhysicsSettings) -> bool {
    if lhs.use_physics_settings != rhs.use_physics_settings {
        return false;
    }
    if !lhs.use_physics_settings {
        return true;
    }

    if lhs.grip_location_mode != rhs.grip_location_mode {
        return false;
    }
    if lhs.constraint_mode != rhs.constraint_mode {
        return false;
    }
    if lhs.turn_off_gravity_during_grip != rhs.turn_off_gravity_during_grip {
        return false;
    }
    if lhs.skip_setting_simulating != rhs.skip_setting_simulating {
        return false;
    }

    if !nearly_equal(lhs.linear_max_force_coefficient, rhs.linear_max_force_coefficient) {
        return false;
    }
    if !nearly_equal(lhs.angular_max_force_coefficient, rhs.angular_max_force_coefficient) {
        return false;
    }

    if lhs.use_custom_angular_values != rhs.use_custom_angular_values {
        return false;
    }
    if lhs.use_custom_angular_values {
        if !nearly_equal(lhs.angular_stiffness, rhs.angular_stiffness) {
            return false;
        }
        if !nearly_equal(lhs.angular_damping, rhs.angular_damping) {
            return false;
        }
    }

    true
}

#[inline]
fn take_bits(reader: &mut BitStreamReader<'_>, num_bits: u32) -> ReplicationResult<u32> {
    reader
        .read_bits(num_bits)
        .ok_or(ReplicationError::TruncatedStream {
            wanted_bits: num_bits,
        })
}

#[inline]
fn take_bool(reader: &mut BitStreamReader<'_>) -> ReplicationResult<bool> {
    reader
        .read_bool()
        .ok_or(ReplicationError::TruncatedStream { wanted_bits: 1 })
}

#[inline]
fn take_f32(reader: &mut BitStreamReader<'_>) -> ReplicationResult<f32> {
    reader
        .read_f32()
        .ok_or(ReplicationError::TruncatedStream { wanted_bits: 32 })
}
