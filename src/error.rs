//! Error types for the ADS1x15 driver.

use core::fmt;

use crate::config::Chip;

/// A rejected read request.
///
/// Raised before any bus traffic; the caller can always recover by fixing
/// the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// Single-ended channel index outside 0-3.
    InvalidChannel(i32),
    /// Differential pair index outside 0-3.
    InvalidDifferential(i32),
    /// Data rate not offered by the active chip.
    InvalidSampleRate { chip: Chip, sps: i32 },
    /// Gain range not one of the six PGA settings (millivolts).
    InvalidGain(i32),
    /// Comparator reading count not one of 0 (disabled), 1, 2 or 4.
    InvalidComparatorReadings(i32),
    InvalidLatchingMode(i32),
    InvalidPolarity(i32),
    InvalidComparatorMode(i32),
    /// Low threshold outside `[-full_scale, full_scale - 1]`.
    InvalidLowThreshold { chip: Chip, value: i32 },
    /// High threshold outside `[-full_scale, full_scale - 1]`.
    InvalidHighThreshold { chip: Chip, value: i32 },
}

impl ValidationError {
    /// Name of the rejected request field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidChannel(_) => "channel",
            ValidationError::InvalidDifferential(_) => "differential",
            ValidationError::InvalidSampleRate { .. } => "sample_rate",
            ValidationError::InvalidGain(_) => "gain",
            ValidationError::InvalidComparatorReadings(_) => "comparator_readings",
            ValidationError::InvalidLatchingMode(_) => "latching_mode",
            ValidationError::InvalidPolarity(_) => "polarity",
            ValidationError::InvalidComparatorMode(_) => "comparator_mode",
            ValidationError::InvalidLowThreshold { .. } => "low_threshold",
            ValidationError::InvalidHighThreshold { .. } => "high_threshold",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::InvalidChannel(v) => {
                write!(f, "Invalid channel '{}' (must be 0-3)", v)
            }
            ValidationError::InvalidDifferential(v) => {
                write!(f, "Invalid differential '{}' (must be 0-3)", v)
            }
            ValidationError::InvalidSampleRate { chip, sps } => match chip {
                Chip::Ads1015 => write!(
                    f,
                    "Invalid sample rate '{}' for ADS1015 (must be 128, 250, 490, 920, 1600, 2400 or 3300)",
                    sps
                ),
                Chip::Ads1115 => write!(
                    f,
                    "Invalid sample rate '{}' for ADS1115 (must be 8, 16, 32, 64, 128, 250, 475 or 860)",
                    sps
                ),
            },
            ValidationError::InvalidGain(v) => write!(
                f,
                "Invalid gain '{}' mV (must be 6144, 4096, 2048, 1024, 512 or 256)",
                v
            ),
            ValidationError::InvalidComparatorReadings(v) => write!(
                f,
                "Invalid comparator readings count '{}' (must be 0 = disabled, 1, 2 or 4)",
                v
            ),
            ValidationError::InvalidLatchingMode(v) => write!(
                f,
                "Invalid comparator latching mode '{}' (must be 0 = non-latching or 1 = latching)",
                v
            ),
            ValidationError::InvalidPolarity(v) => write!(
                f,
                "Invalid comparator polarity '{}' (must be 0 = active low or 1 = active high)",
                v
            ),
            ValidationError::InvalidComparatorMode(v) => write!(
                f,
                "Invalid comparator mode '{}' (must be 0 = traditional or 1 = window)",
                v
            ),
            ValidationError::InvalidLowThreshold { chip, value } => write!(
                f,
                "Invalid comparator low threshold '{}' for {} (must be {} to {})",
                value,
                chip.name(),
                chip.min_threshold(),
                chip.max_threshold()
            ),
            ValidationError::InvalidHighThreshold { chip, value } => write!(
                f,
                "Invalid comparator high threshold '{}' for {} (must be {} to {})",
                value,
                chip.name(),
                chip.min_threshold(),
                chip.max_threshold()
            ),
        }
    }
}

/// Register operation that a bus failure interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusOperation {
    WriteConfig,
    WriteHighThreshold,
    WriteLowThreshold,
    ReadConversion,
}

impl fmt::Display for BusOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            BusOperation::WriteConfig => "write config register",
            BusOperation::WriteHighThreshold => "write high threshold register",
            BusOperation::WriteLowThreshold => "write low threshold register",
            BusOperation::ReadConversion => "read conversion register",
        };
        f.write_str(s)
    }
}

/// Errors that can occur when talking to an ADS1x15.
#[derive(Debug, PartialEq)]
pub enum AdcError<E> {
    /// The request was rejected before touching the bus.
    Validation(ValidationError),

    /// Underlying I2C bus error. Not retried; registers written before the
    /// failure keep their new values.
    Bus { operation: BusOperation, source: E },
}

impl<E> From<ValidationError> for AdcError<E> {
    fn from(error: ValidationError) -> Self {
        AdcError::Validation(error)
    }
}

impl<E: fmt::Debug> fmt::Display for AdcError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdcError::Validation(e) => write!(f, "{}", e),
            AdcError::Bus { operation, source } => {
                write!(f, "Failed to {} on ADS1x15: {:?}", operation, source)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for AdcError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            AdcError::Validation(e) => defmt::write!(f, "Validation error: {}", e),
            AdcError::Bus { operation, source } => {
                defmt::write!(f, "I2C error during {}: {}", operation, source)
            }
        }
    }
}
