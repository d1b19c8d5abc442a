//! Raw read requests and their validation into a typed [`ReadPlan`].
//!
//! A [`ReadRequest`] carries plain integers, as they would arrive from a
//! command line or a configuration file. [`validate`] checks every field
//! against the active chip's tables in a fixed order and reports the first
//! offending field. Only the resulting [`ReadPlan`] can be encoded and sent
//! to the chip, so a rejected request never reaches the bus.

use crate::config::{
    Channel, Chip, ComparatorLatching, ComparatorMode, ComparatorPolarity, ComparatorQueue,
    Differential, Gain, Mode, Mux, SampleRate,
};
use crate::error::ValidationError;

/// Requested input, as a channel or differential pair index (0-3).
///
/// The two index spaces are independent: a value is only ever checked
/// against the set its variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSelect {
    SingleEnded(i32),
    Differential(i32),
}

impl From<Channel> for InputSelect {
    fn from(channel: Channel) -> Self {
        InputSelect::SingleEnded(channel.index())
    }
}

impl From<Differential> for InputSelect {
    fn from(pair: Differential) -> Self {
        InputSelect::Differential(pair.index())
    }
}

/// Raw comparator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComparatorRequest {
    /// Conversions beyond threshold before asserting: 0 (disabled), 1, 2 or 4.
    pub readings: i32,
    /// 0 = non-latching, 1 = latching.
    pub latching: i32,
    /// 0 = active low, 1 = active high.
    pub polarity: i32,
    /// 0 = traditional, 1 = window.
    pub mode: i32,
    pub low_threshold: i32,
    pub high_threshold: i32,
}

impl ComparatorRequest {
    /// Assert after one reading, non-latching, active low, traditional.
    pub const fn new(high_threshold: i32, low_threshold: i32) -> Self {
        Self {
            readings: 1,
            latching: 0,
            polarity: 0,
            mode: 0,
            low_threshold,
            high_threshold,
        }
    }
}

impl From<Comparator> for ComparatorRequest {
    fn from(c: Comparator) -> Self {
        Self {
            readings: c.queue.readings(),
            latching: c.latching.code(),
            polarity: c.polarity.code(),
            mode: c.mode.code(),
            low_threshold: c.low_threshold,
            high_threshold: c.high_threshold,
        }
    }
}

/// A fully populated, not yet validated read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadRequest {
    pub input: InputSelect,
    /// Full-scale range in millivolts.
    pub gain_mv: i32,
    pub samples_per_second: i32,
    pub mode: Mode,
    /// `None` runs without the comparator.
    pub comparator: Option<ComparatorRequest>,
}

impl ReadRequest {
    pub fn new(input: impl Into<InputSelect>, gain: Gain, sample_rate: SampleRate, mode: Mode) -> Self {
        Self {
            input: input.into(),
            gain_mv: gain.millivolts(),
            samples_per_second: sample_rate.sps() as i32,
            mode,
            comparator: None,
        }
    }

    pub fn with_comparator(mut self, comparator: impl Into<ComparatorRequest>) -> Self {
        self.comparator = Some(comparator.into());
        self
    }
}

/// Validated comparator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Comparator {
    pub queue: ComparatorQueue,
    pub latching: ComparatorLatching,
    pub polarity: ComparatorPolarity,
    pub mode: ComparatorMode,
    pub low_threshold: i32,
    pub high_threshold: i32,
}

impl Comparator {
    /// Assert after one reading, non-latching, active low, traditional.
    pub const fn new(high_threshold: i32, low_threshold: i32) -> Self {
        Self {
            queue: ComparatorQueue::One,
            latching: ComparatorLatching::NonLatching,
            polarity: ComparatorPolarity::ActiveLow,
            mode: ComparatorMode::Traditional,
            low_threshold,
            high_threshold,
        }
    }

    pub const fn with_queue(mut self, queue: ComparatorQueue) -> Self {
        self.queue = queue;
        self
    }

    pub const fn with_latching(mut self, latching: ComparatorLatching) -> Self {
        self.latching = latching;
        self
    }

    pub const fn with_polarity(mut self, polarity: ComparatorPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub const fn with_mode(mut self, mode: ComparatorMode) -> Self {
        self.mode = mode;
        self
    }
}

/// A validated request, ready to be encoded.
///
/// Only [`validate`] builds one, so every plan holds settings the chip it
/// was validated for actually supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReadPlan {
    pub(crate) chip: Chip,
    pub(crate) mux: Mux,
    pub(crate) gain: Gain,
    pub(crate) sample_rate: SampleRate,
    /// DR field code of `sample_rate` on `chip`.
    pub(crate) rate_code: u16,
    pub(crate) mode: Mode,
    pub(crate) comparator: Option<Comparator>,
}

impl ReadPlan {
    /// Chip the plan was validated against.
    pub fn chip(&self) -> Chip {
        self.chip
    }

    pub fn mux(&self) -> Mux {
        self.mux
    }

    pub fn gain(&self) -> Gain {
        self.gain
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Comparator settings as requested, including a disabled block.
    pub fn comparator(&self) -> Option<Comparator> {
        self.comparator
    }

    /// Comparator settings when the comparator is actually enabled, i.e.
    /// when threshold registers must be programmed.
    pub fn active_comparator(&self) -> Option<&Comparator> {
        self.comparator.as_ref().filter(|c| c.queue.is_enabled())
    }
}

/// Check `request` against `chip`'s tables.
///
/// Fields are checked in a fixed order (input, sample rate, gain, then the
/// comparator block) and the first failure is returned.
pub fn validate(chip: Chip, request: &ReadRequest) -> Result<ReadPlan, ValidationError> {
    let mux = match request.input {
        InputSelect::SingleEnded(index) => Channel::from_index(index)
            .map(Mux::SingleEnded)
            .ok_or(ValidationError::InvalidChannel(index))?,
        InputSelect::Differential(index) => Differential::from_index(index)
            .map(Mux::Differential)
            .ok_or(ValidationError::InvalidDifferential(index))?,
    };

    let sps = request.samples_per_second;
    let (sample_rate, rate_code) = SampleRate::from_sps(sps)
        .and_then(|rate| chip.rate_code(rate).map(|code| (rate, code)))
        .ok_or(ValidationError::InvalidSampleRate { chip, sps })?;

    let gain = Gain::from_millivolts(request.gain_mv)
        .ok_or(ValidationError::InvalidGain(request.gain_mv))?;

    let comparator = match request.comparator {
        Some(c) => Some(validate_comparator(chip, &c)?),
        None => None,
    };

    Ok(ReadPlan {
        chip,
        mux,
        gain,
        sample_rate,
        rate_code,
        mode: request.mode,
        comparator,
    })
}

fn validate_comparator(chip: Chip, c: &ComparatorRequest) -> Result<Comparator, ValidationError> {
    let queue = ComparatorQueue::from_readings(c.readings)
        .ok_or(ValidationError::InvalidComparatorReadings(c.readings))?;
    let latching = ComparatorLatching::from_code(c.latching)
        .ok_or(ValidationError::InvalidLatchingMode(c.latching))?;
    let polarity = ComparatorPolarity::from_code(c.polarity)
        .ok_or(ValidationError::InvalidPolarity(c.polarity))?;
    let mode = ComparatorMode::from_code(c.mode)
        .ok_or(ValidationError::InvalidComparatorMode(c.mode))?;

    let legal = chip.min_threshold()..=chip.max_threshold();
    if !legal.contains(&c.low_threshold) {
        return Err(ValidationError::InvalidLowThreshold { chip, value: c.low_threshold });
    }
    if !legal.contains(&c.high_threshold) {
        return Err(ValidationError::InvalidHighThreshold { chip, value: c.high_threshold });
    }

    Ok(Comparator {
        queue,
        latching,
        polarity,
        mode,
        low_threshold: c.low_threshold,
        high_threshold: c.high_threshold,
    })
}

// ── Unit Tests ───────────────────────────────────────────────────────
