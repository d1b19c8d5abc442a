//! Register map and configuration-word bit layout for the ADS1x15 family.
//!
//! Every register is 16 bits wide and transferred big-endian. The host selects
//! a register by writing its pointer byte, optionally followed by two data
//! bytes.
//!
//! ```text
//!  15  14 13 12  11 10 9   8    7 6 5   4      3      2      1 0
//! [OS][  MUX   ][  PGA  ][MODE][  DR  ][CMODE][CPOL][CLAT][CQUE]
//! ```

// ---------------------------------------------------------------------------
// Register pointers
// ---------------------------------------------------------------------------

/// Conversion result register (read-only).
pub const REG_CONVERSION: u8 = 0x00;

/// Configuration register.
pub const REG_CONFIG: u8 = 0x01;

/// Comparator low threshold register.
pub const REG_LOW_THRESHOLD: u8 = 0x02;

/// Comparator high threshold register.
pub const REG_HIGH_THRESHOLD: u8 = 0x03;

// ---------------------------------------------------------------------------
// Configuration word field positions
// ---------------------------------------------------------------------------

/// Write 1: start a single conversion (ignored in continuous mode).
pub const CONFIG_OS_SINGLE: u16 = 0x8000;

pub const CONFIG_MUX_SHIFT: u16 = 12;
pub const CONFIG_PGA_SHIFT: u16 = 9;
pub const CONFIG_DR_SHIFT: u16 = 5;

/// Power-down single-shot mode. Continuous mode leaves the bit clear.
pub const CONFIG_MODE_SINGLE: u16 = 0x0100;

pub const CONFIG_CMODE_WINDOW: u16 = 0x0010;
pub const CONFIG_CPOL_ACTIVE_HIGH: u16 = 0x0008;
pub const CONFIG_CLAT_LATCH: u16 = 0x0004;

/// Comparator queue field mask (bits 1-0).
pub const CONFIG_CQUE_MASK: u16 = 0x0003;

/// Power-on default: single-shot, AIN0-AIN1, ±2.048 V, comparator disabled.
/// Writing it stops a running continuous conversion.
pub const CONFIG_DEFAULT: u16 = 0x8583;

// ---------------------------------------------------------------------------
// Chip constants
// ---------------------------------------------------------------------------

/// Full-scale magnitude of the 12-bit ADS1015 (codes -2048..=2047).
pub const ADS1015_FULL_SCALE: i32 = 2048;

/// Full-scale magnitude of the 16-bit ADS1115 (codes -32768..=32767).
pub const ADS1115_FULL_SCALE: i32 = 32768;

/// Default ADC wait padding on top of the nominal conversion time.
pub const DEFAULT_EXTRA_DELAY_MS: u32 = 1;
