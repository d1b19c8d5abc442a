//! Conversion between raw ADC codes, volts and threshold register bytes.
//!
//! The code range is asymmetric: a 12-bit result spans -2048..=2047, so
//! positive values scale against `full_scale - 1` and non-positive values
//! against `full_scale`. Both directions apply the same split so that the
//! extremes map exactly onto ± the gain range.

use crate::config::{Chip, Gain};

/// Decode a big-endian conversion register value into a signed ADC code.
///
/// The ADS1015 left-justifies its 12-bit result in the 16-bit register, so
/// the bottom four bits are discarded before sign extension.
pub fn decode_sample(bytes: [u8; 2], chip: Chip) -> i32 {
    let word = u16::from_be_bytes(bytes) as i32;
    let bits = chip.resolution_bits();
    let mut value = word >> (16 - bits);
    if value & (1 << (bits - 1)) != 0 {
        value -= 1 << bits;
    }
    value
}

/// Scale a signed ADC code to volts for the given gain range.
pub fn raw_to_volts(raw: i32, gain: Gain, chip: Chip) -> f64 {
    let max = if raw > 0 {
        chip.full_scale() - 1
    } else {
        chip.full_scale()
    };
    raw as f64 / max as f64 * gain.volts()
}

/// Convert a voltage into the ADC code a comparator threshold should hold,
/// rounding toward negative infinity.
pub fn volts_to_threshold(volts: f64, gain: Gain, chip: Chip) -> i32 {
    let mut max = chip.full_scale() as f64;
    if volts > 0.0 {
        max -= 1.0;
    }
    libm::floor(volts * (max / gain.volts())) as i32
}

/// Encode a signed threshold as big-endian register bytes.
///
/// On the ADS1015 the threshold occupies bits 15-4 and bits 3-0 are
/// reserved, so the value is shifted left by four first.
pub fn threshold_to_bytes(value: i32, chip: Chip) -> [u8; 2] {
    let shifted = match chip {
        Chip::Ads1015 => value << 4,
        Chip::Ads1115 => value,
    };
    (shifted as u16).to_be_bytes()
}

// ── Unit Tests ───────────────────────────────────────────────────────
