//! Chip enumeration tables and driver configuration.
//!
//! Each enumeration knows its own register field encoding and, where the
//! chip defines one, its physical meaning (full-scale voltage, samples per
//! second). Sample rates are chip-scoped: the ADS1015 and ADS1115 accept
//! different sets and place them at different field codes.

use embassy_time::Duration;

use crate::registers::{
    ADS1015_FULL_SCALE, ADS1115_FULL_SCALE, CONFIG_CLAT_LATCH, CONFIG_CMODE_WINDOW,
    CONFIG_CPOL_ACTIVE_HIGH, CONFIG_CQUE_MASK, CONFIG_MODE_SINGLE, CONFIG_MUX_SHIFT,
    CONFIG_PGA_SHIFT, DEFAULT_EXTRA_DELAY_MS,
};

// ---------------------------------------------------------------------------
// Chip variant
// ---------------------------------------------------------------------------

/// Supported chip variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chip {
    /// 12-bit, 128-3300 SPS.
    Ads1015,
    /// 16-bit, 8-860 SPS.
    Ads1115,
}

/// ADS1015 data rates, indexed by their DR field code.
const ADS1015_RATES: [SampleRate; 7] = [
    SampleRate::Sps128,
    SampleRate::Sps250,
    SampleRate::Sps490,
    SampleRate::Sps920,
    SampleRate::Sps1600,
    SampleRate::Sps2400,
    SampleRate::Sps3300,
];

/// ADS1115 data rates, indexed by their DR field code.
const ADS1115_RATES: [SampleRate; 8] = [
    SampleRate::Sps8,
    SampleRate::Sps16,
    SampleRate::Sps32,
    SampleRate::Sps64,
    SampleRate::Sps128,
    SampleRate::Sps250,
    SampleRate::Sps475,
    SampleRate::Sps860,
];

impl Chip {
    /// Half the code range: 2048 for the ADS1015, 32768 for the ADS1115.
    pub const fn full_scale(self) -> i32 {
        match self {
            Chip::Ads1015 => ADS1015_FULL_SCALE,
            Chip::Ads1115 => ADS1115_FULL_SCALE,
        }
    }

    /// Significant bits in a conversion result.
    pub const fn resolution_bits(self) -> u32 {
        match self {
            Chip::Ads1015 => 12,
            Chip::Ads1115 => 16,
        }
    }

    /// Smallest legal comparator threshold (`-full_scale`).
    pub const fn min_threshold(self) -> i32 {
        -self.full_scale()
    }

    /// Largest legal comparator threshold (`full_scale - 1`).
    pub const fn max_threshold(self) -> i32 {
        self.full_scale() - 1
    }

    /// Data rate the chip powers up with.
    pub const fn default_sample_rate(self) -> SampleRate {
        match self {
            Chip::Ads1015 => SampleRate::Sps1600,
            Chip::Ads1115 => SampleRate::Sps250,
        }
    }

    /// All data rates this chip accepts, in DR field order.
    pub fn sample_rates(self) -> &'static [SampleRate] {
        match self {
            Chip::Ads1015 => &ADS1015_RATES,
            Chip::Ads1115 => &ADS1115_RATES,
        }
    }

    /// DR field code for `rate`, or `None` if this chip cannot run at it.
    pub fn rate_code(self, rate: SampleRate) -> Option<u16> {
        self.sample_rates()
            .iter()
            .position(|&r| r == rate)
            .map(|code| code as u16)
    }

    pub fn supports(self, rate: SampleRate) -> bool {
        self.rate_code(rate).is_some()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Chip::Ads1015 => "ADS1015",
            Chip::Ads1115 => "ADS1115",
        }
    }
}

// ---------------------------------------------------------------------------
// Bus address
// ---------------------------------------------------------------------------

/// I2C address, selected by strapping the ADDR pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Address {
    /// ADDR tied to GND (0x48).
    #[default]
    Gnd,
    /// ADDR tied to VDD (0x49).
    Vdd,
    /// ADDR tied to SDA (0x4A).
    Sda,
    /// ADDR tied to SCL (0x4B).
    Scl,
}

impl Address {
    /// Right-aligned 7-bit bus address.
    pub const fn addr(self) -> u8 {
        match self {
            Address::Gnd => 0x48,
            Address::Vdd => 0x49,
            Address::Sda => 0x4A,
            Address::Scl => 0x4B,
        }
    }
}

// ---------------------------------------------------------------------------
// Input multiplexer
// ---------------------------------------------------------------------------

/// Single-ended input, measured against GND.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Ain0,
    Ain1,
    Ain2,
    Ain3,
}

impl Channel {
    /// Channel number (0-3).
    pub const fn index(self) -> i32 {
        match self {
            Channel::Ain0 => 0,
            Channel::Ain1 => 1,
            Channel::Ain2 => 2,
            Channel::Ain3 => 3,
        }
    }

    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Channel::Ain0),
            1 => Some(Channel::Ain1),
            2 => Some(Channel::Ain2),
            3 => Some(Channel::Ain3),
            _ => None,
        }
    }
}

/// Differential input pair (positive minus negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Differential {
    /// AIN0 - AIN1 (power-on default).
    Ain0Ain1,
    /// AIN0 - AIN3.
    Ain0Ain3,
    /// AIN1 - AIN3.
    Ain1Ain3,
    /// AIN2 - AIN3.
    Ain2Ain3,
}

impl Differential {
    /// Pair number (0-3), which is also its MUX field code.
    pub const fn index(self) -> i32 {
        match self {
            Differential::Ain0Ain1 => 0,
            Differential::Ain0Ain3 => 1,
            Differential::Ain1Ain3 => 2,
            Differential::Ain2Ain3 => 3,
        }
    }

    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Differential::Ain0Ain1),
            1 => Some(Differential::Ain0Ain3),
            2 => Some(Differential::Ain1Ain3),
            3 => Some(Differential::Ain2Ain3),
            _ => None,
        }
    }
}

/// Validated multiplexer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mux {
    SingleEnded(Channel),
    Differential(Differential),
}

impl Mux {
    pub(crate) const fn bits(self) -> u16 {
        let code = match self {
            // Single-ended inputs occupy MUX codes 4-7.
            Mux::SingleEnded(channel) => 4 + channel.index() as u16,
            Mux::Differential(pair) => pair.index() as u16,
        };
        code << CONFIG_MUX_SHIFT
    }
}

// ---------------------------------------------------------------------------
// Programmable gain amplifier
// ---------------------------------------------------------------------------

/// Full-scale input range of the programmable gain amplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// ±6.144 V
    Within6_144V,
    /// ±4.096 V
    Within4_096V,
    /// ±2.048 V (power-on default)
    Within2_048V,
    /// ±1.024 V
    Within1_024V,
    /// ±0.512 V
    Within0_512V,
    /// ±0.256 V
    Within0_256V,
}

impl Gain {
    pub const ALL: [Gain; 6] = [
        Gain::Within6_144V,
        Gain::Within4_096V,
        Gain::Within2_048V,
        Gain::Within1_024V,
        Gain::Within0_512V,
        Gain::Within0_256V,
    ];

    /// Full-scale voltage magnitude.
    pub const fn volts(self) -> f64 {
        match self {
            Gain::Within6_144V => 6.144,
            Gain::Within4_096V => 4.096,
            Gain::Within2_048V => 2.048,
            Gain::Within1_024V => 1.024,
            Gain::Within0_512V => 0.512,
            Gain::Within0_256V => 0.256,
        }
    }

    pub const fn millivolts(self) -> i32 {
        match self {
            Gain::Within6_144V => 6144,
            Gain::Within4_096V => 4096,
            Gain::Within2_048V => 2048,
            Gain::Within1_024V => 1024,
            Gain::Within0_512V => 512,
            Gain::Within0_256V => 256,
        }
    }

    pub fn from_millivolts(millivolts: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.millivolts() == millivolts)
    }

    pub(crate) const fn bits(self) -> u16 {
        let code: u16 = match self {
            Gain::Within6_144V => 0b000,
            Gain::Within4_096V => 0b001,
            Gain::Within2_048V => 0b010,
            Gain::Within1_024V => 0b011,
            Gain::Within0_512V => 0b100,
            Gain::Within0_256V => 0b101,
        };
        code << CONFIG_PGA_SHIFT
    }
}

// ---------------------------------------------------------------------------
// Operating mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Convert continuously; the conversion register always holds the latest sample.
    Continuous,
    /// Convert once, then power down.
    SingleShot,
}

impl Mode {
    pub(crate) const fn bits(self) -> u16 {
        match self {
            Mode::Continuous => 0,
            Mode::SingleShot => CONFIG_MODE_SINGLE,
        }
    }
}

// ---------------------------------------------------------------------------
// Data rate
// ---------------------------------------------------------------------------

/// Conversion rate in samples per second.
///
/// The variants cover both chips; use [`Chip::supports`] to check whether a
/// given chip accepts a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleRate {
    Sps8,
    Sps16,
    Sps32,
    Sps64,
    Sps128,
    Sps250,
    Sps475,
    Sps490,
    Sps860,
    Sps920,
    Sps1600,
    Sps2400,
    Sps3300,
}

impl SampleRate {
    pub const fn sps(self) -> u16 {
        match self {
            SampleRate::Sps8 => 8,
            SampleRate::Sps16 => 16,
            SampleRate::Sps32 => 32,
            SampleRate::Sps64 => 64,
            SampleRate::Sps128 => 128,
            SampleRate::Sps250 => 250,
            SampleRate::Sps475 => 475,
            SampleRate::Sps490 => 490,
            SampleRate::Sps860 => 860,
            SampleRate::Sps920 => 920,
            SampleRate::Sps1600 => 1600,
            SampleRate::Sps2400 => 2400,
            SampleRate::Sps3300 => 3300,
        }
    }

    /// Look up a rate by its samples-per-second value, irrespective of chip.
    pub const fn from_sps(sps: i32) -> Option<Self> {
        match sps {
            8 => Some(SampleRate::Sps8),
            16 => Some(SampleRate::Sps16),
            32 => Some(SampleRate::Sps32),
            64 => Some(SampleRate::Sps64),
            128 => Some(SampleRate::Sps128),
            250 => Some(SampleRate::Sps250),
            475 => Some(SampleRate::Sps475),
            490 => Some(SampleRate::Sps490),
            860 => Some(SampleRate::Sps860),
            920 => Some(SampleRate::Sps920),
            1600 => Some(SampleRate::Sps1600),
            2400 => Some(SampleRate::Sps2400),
            3300 => Some(SampleRate::Sps3300),
            _ => None,
        }
    }

    /// Nominal conversion time (`1 / sps`) in microseconds, rounded up so the
    /// wait never ends before the conversion does.
    pub const fn conversion_micros(self) -> u32 {
        1_000_000u32.div_ceil(self.sps() as u32)
    }

    pub const fn conversion_time(self) -> Duration {
        Duration::from_micros(self.conversion_micros() as u64)
    }
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

/// Number of consecutive out-of-threshold conversions before ALERT/RDY asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComparatorQueue {
    One,
    Two,
    Four,
    /// Comparator off, ALERT/RDY high-impedance.
    Disabled,
}

impl ComparatorQueue {
    /// Reading count, with 0 standing for [`ComparatorQueue::Disabled`].
    pub const fn readings(self) -> i32 {
        match self {
            ComparatorQueue::One => 1,
            ComparatorQueue::Two => 2,
            ComparatorQueue::Four => 4,
            ComparatorQueue::Disabled => 0,
        }
    }

    pub const fn from_readings(readings: i32) -> Option<Self> {
        match readings {
            0 => Some(ComparatorQueue::Disabled),
            1 => Some(ComparatorQueue::One),
            2 => Some(ComparatorQueue::Two),
            4 => Some(ComparatorQueue::Four),
            _ => None,
        }
    }

    pub const fn is_enabled(self) -> bool {
        !matches!(self, ComparatorQueue::Disabled)
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            ComparatorQueue::One => 0b00,
            ComparatorQueue::Two => 0b01,
            ComparatorQueue::Four => 0b10,
            ComparatorQueue::Disabled => CONFIG_CQUE_MASK,
        }
    }
}

/// Whether ALERT/RDY stays asserted until the conversion register is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComparatorLatching {
    #[default]
    NonLatching,
    Latching,
}

impl ComparatorLatching {
    pub const fn code(self) -> i32 {
        match self {
            ComparatorLatching::NonLatching => 0,
            ComparatorLatching::Latching => 1,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ComparatorLatching::NonLatching),
            1 => Some(ComparatorLatching::Latching),
            _ => None,
        }
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            ComparatorLatching::NonLatching => 0,
            ComparatorLatching::Latching => CONFIG_CLAT_LATCH,
        }
    }
}

/// Electrical level of ALERT/RDY while asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComparatorPolarity {
    #[default]
    ActiveLow,
    ActiveHigh,
}

impl ComparatorPolarity {
    pub const fn code(self) -> i32 {
        match self {
            ComparatorPolarity::ActiveLow => 0,
            ComparatorPolarity::ActiveHigh => 1,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ComparatorPolarity::ActiveLow),
            1 => Some(ComparatorPolarity::ActiveHigh),
            _ => None,
        }
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            ComparatorPolarity::ActiveLow => 0,
            ComparatorPolarity::ActiveHigh => CONFIG_CPOL_ACTIVE_HIGH,
        }
    }
}

/// How readings are compared against the thresholds.
///
/// ```text
/// Traditional: (-MAX)-----(LOW)~~~~~(HIGH)*****(+MAX)   asserts above HIGH, releases below LOW
/// Window:      (-MAX)*****(LOW)-----(HIGH)*****(+MAX)   asserts outside [LOW, HIGH]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComparatorMode {
    #[default]
    Traditional,
    Window,
}

impl ComparatorMode {
    pub const fn code(self) -> i32 {
        match self {
            ComparatorMode::Traditional => 0,
            ComparatorMode::Window => 1,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ComparatorMode::Traditional),
            1 => Some(ComparatorMode::Window),
            _ => None,
        }
    }

    pub(crate) const fn bits(self) -> u16 {
        match self {
            ComparatorMode::Traditional => 0,
            ComparatorMode::Window => CONFIG_CMODE_WINDOW,
        }
    }
}

// ---------------------------------------------------------------------------
// Driver configuration
// ---------------------------------------------------------------------------

/// Driver-wide defaults, applied to every read that does not override them.
///
/// # Example
///
/// ```
/// use ads1x15_driver::{Address, Chip, Config, Gain, SampleRate};
///
/// let config = Config::new(Chip::Ads1015)
///     .with_address(Address::Vdd)
///     .with_gain(Gain::Within4_096V)
///     .with_sample_rate(SampleRate::Sps3300);
/// assert_eq!(config.address.addr(), 0x49);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Chip variant. Fixed for the lifetime of a driver.
    pub chip: Chip,
    pub address: Address,
    pub gain: Gain,
    /// Must be one of `chip.sample_rates()`; checked when a read is issued.
    pub sample_rate: SampleRate,
    /// Padding added to every conversion wait, in milliseconds.
    pub extra_delay_ms: u32,
}

impl Config {
    /// Power-on defaults for `chip`: ADDR at GND, ±2.048 V, the chip's
    /// default data rate and 1 ms of wait padding.
    pub const fn new(chip: Chip) -> Self {
        Self {
            chip,
            address: Address::Gnd,
            gain: Gain::Within2_048V,
            sample_rate: chip.default_sample_rate(),
            extra_delay_ms: DEFAULT_EXTRA_DELAY_MS,
        }
    }

    pub const fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub const fn with_gain(mut self, gain: Gain) -> Self {
        self.gain = gain;
        self
    }

    pub const fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub const fn with_extra_delay_ms(mut self, extra_delay_ms: u32) -> Self {
        self.extra_delay_ms = extra_delay_ms;
        self
    }
}

impl Default for Config {
    /// ADS1115 with power-on defaults.
    fn default() -> Self {
        Self::new(Chip::Ads1115)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
