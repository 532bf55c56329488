//! # Fixed-Point Float Compression
//!
//! Maps a bounded float range onto a fixed number of bits with
//! deterministic rounding and saturation.
//!
//! ## Scheme
//!
//! For `num_bits` bits the codec represents the symmetric range around
//! zero with `max_bit_value = 2^(num_bits-1) - 1` codes per side and a
//! `bias = 2^(num_bits-1)` offset centering it, clamped against
//! `max_delta = 2^num_bits - 1`. When the configured range exceeds the
//! code resolution the value is scaled *down* with truncation; otherwise
//! it is scaled *up* by a whole-number factor with round-to-nearest so
//! whole inputs stay whole.
//!
//! Out-of-range inputs are not errors: they saturate to the representable
//! extreme, silently for [`FixedPointCodec::encode`] and observably for
//! [`FixedPointCodec::encode_checked`].

/// Fixed-point codec for one `(max_range, num_bits)` configuration.
///
/// The scale branch and both scale factors are resolved once at
/// construction; `encode`/`decode` are pure functions of their input and
/// this configuration.
#[derive(Clone, Copy, Debug)]
pub struct FixedPointCodec {
    /// Number of wire bits per code.
    num_bits: u32,
    /// Additive offset centering the representable range.
    bias: u32,
    /// Largest legal wire code; saturation point.
    max_delta: u32,
    /// True when `max_range` exceeds the per-side code count and values
    /// must be scaled down (losing sub-unit precision).
    scale_down: bool,
    /// Multiplier applied to the value in the scale-down branch.
    down_scale: f32,
    /// Whole-number multiplier applied in the scale-up branch.
    up_scale: u32,
    /// Decode multiplier, the inverse of whichever scale encode uses.
    inv_scale: f32,
}

impl FixedPointCodec {
    /// Builds a codec for floats bounded to `[-max_range, max_range]`
    /// replicated in `num_bits` bits.
    ///
    /// Callers validate parameters up front (see
    /// [`QuantizerConfig::validate`](crate::config::QuantizerConfig::validate)):
    /// `num_bits` must be in `2..=32` and `max_range` finite and positive.
    #[must_use]
    pub fn new(max_range: f32, num_bits: u32) -> Self {
        debug_assert!((2..=32).contains(&num_bits));
        debug_assert!(max_range.is_finite() && max_range > 0.0);

        let max_bit_value = (1u32 << (num_bits - 1)) - 1;
        let bias = 1u32 << (num_bits - 1);
        let max_delta = ((1u64 << num_bits) - 1) as u32;

        let scale_down = max_range > max_bit_value as f32;
        if scale_down {
            // More range than resolution. The scale has to be fractional.
            let down_scale = max_bit_value as f32 / max_range;
            Self {
                num_bits,
                bias,
                max_delta,
                scale_down,
                down_scale,
                up_scale: 1,
                inv_scale: max_range / max_bit_value as f32,
            }
        } else {
            // Resolution covers the range. Scale up by a whole number so
            // whole-valued inputs survive the round trip exactly.
            let up_scale = (max_bit_value as f32 / max_range) as u32;
            Self {
                num_bits,
                bias,
                max_delta,
                scale_down,
                down_scale: 1.0,
                up_scale,
                inv_scale: 1.0 / up_scale as f32,
            }
        }
    }

    /// Number of wire bits one code occupies.
    #[inline]
    #[must_use]
    pub const fn num_bits(&self) -> u32 {
        self.num_bits
    }

    /// Worst-case round-trip error of the quantization step alone.
    ///
    /// The scaling arithmetic can add float rounding noise on the order of
    /// an ulp on top of this bound.
    #[inline]
    #[must_use]
    pub fn resolution(&self) -> f32 {
        if self.scale_down {
            self.inv_scale
        } else {
            // Round-to-nearest loses at most half a step.
            0.5 * self.inv_scale
        }
    }

    /// Encodes `value` to a wire code, silently saturating out-of-range
    /// input to the representable extreme.
    #[inline]
    #[must_use]
    pub fn encode(&self, value: f32) -> u32 {
        self.encode_checked(value).0
    }

    /// Encodes `value` to a wire code, reporting whether saturation
    /// occurred.
    #[must_use]
    pub fn encode_checked(&self, value: f32) -> (u32, bool) {
        let scaled: i64 = if self.scale_down {
            // Truncation toward zero, not rounding.
            (self.down_scale * value).trunc() as i64
        } else {
            // Round-to-nearest, ties away from zero.
            (self.up_scale as f32 * value).round() as i64
        };

        // Saturating add: the float-to-int cast already pins infinities
        // at the i64 extremes.
        let delta = scaled.saturating_add(i64::from(self.bias));
        let clamped = delta.clamp(0, i64::from(self.max_delta));
        let saturated = clamped != delta;
        if saturated {
            tracing::trace!(value, code = clamped, "fixed-point encode saturated");
        }

        (clamped as u32, saturated)
    }

    /// Decodes a wire code back to a float.
    ///
    /// Algebraic inverse of [`encode`](Self::encode) up to the resolution
    /// of the bit width; never bit-exact for non-trivial ranges.
    #[inline]
    #[must_use]
    pub fn decode(&self, delta: u32) -> f32 {
        let unscaled = (i64::from(delta) - i64::from(self.bias)) as f32;
        unscaled * self.inv_scale
    }
}
