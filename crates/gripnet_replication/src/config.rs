//! # Codec Configuration
//!
//! The quantizer parameters, loadable from a TOML config file at startup.
//!
//! These could be compile-time constants; carrying them as a validated
//! value instead lets deployments trade precision against bandwidth
//! without a rebuild, while the defaults reproduce the shipped wire
//! format exactly.

use gripnet_core::GripPhysicsSettings;
use serde::{Deserialize, Serialize};

use crate::error::{ReplicationError, ReplicationResult};

/// Parameters for the fixed-point force coefficient quantizer.
///
/// Both sides of a connection must agree on these; they define the wire
/// layout of the two 17-bit force fields.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizerConfig {
    /// Upper bound of the replicated force coefficient range.
    pub force_max_range: f32,
    /// Wire bits per quantized force coefficient.
    pub force_bits: u32,
}

impl QuantizerConfig {
    /// Shipped default range: force coefficients live in `[0, 512]`.
    pub const DEFAULT_FORCE_MAX_RANGE: f32 = GripPhysicsSettings::MAX_FORCE_COEFFICIENT;
    /// Shipped default width: 17 bits per coefficient.
    pub const DEFAULT_FORCE_BITS: u32 = 17;

    /// Checks the parameters against the fixed-point codec's requirements.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::InvalidConfig`] when the bit width
    /// falls outside `2..=32` or the range is not a positive finite float.
    pub fn validate(&self) -> ReplicationResult<()> {
        if !(2..=32).contains(&self.force_bits) {
            return Err(ReplicationError::InvalidConfig {
                reason: format!("force_bits {} outside 2..=32", self.force_bits),
            });
        }
        if !self.force_max_range.is_finite() || self.force_max_range <= 0.0 {
            return Err(ReplicationError::InvalidConfig {
                reason: format!("force_max_range {} not a positive finite value", self.force_max_range),
            });
        }
        Ok(())
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing keys fall back to the shipped defaults; the result is
    /// validated before it is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::InvalidConfig`] on malformed TOML or
    /// parameters that fail [`validate`](Self::validate).
    pub fn from_toml_str(raw: &str) -> ReplicationResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|parse_error| {
            ReplicationError::InvalidConfig {
                reason: parse_error.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            force_max_range: Self::DEFAULT_FORCE_MAX_RANGE,
            force_bits: Self::DEFAULT_FORCE_BITS,
        }
    }
}
