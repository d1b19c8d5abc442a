//! Async driver for the Texas Instruments ADS1015 and ADS1115 ADCs.
//!
//! Both chips are four-input, I2C analog-to-digital converters with a
//! programmable gain amplifier and a threshold comparator on the ALERT/RDY
//! pin. The ADS1015 is 12-bit and fast (128-3300 SPS). The ADS1115 is
//! 16-bit and slower (8-860 SPS).
//!
//! # Architecture
//!
//! - **`driver`** (crate-private): register pointer and big-endian transfer
//!   primitives.
//! - **[`validate`]**: turns a raw [`ReadRequest`] into a typed [`ReadPlan`],
//!   rejecting any field the active chip does not support.
//! - **[`control_word`]**: encodes a [`ReadPlan`] into the configuration register.
//! - **[`Ads1x15`]** (public): runs the conversion sequence and converts
//!   results to volts.
//!
//! # Quick start
//!
//! ```no_run
//! # use embedded_hal_async::{delay::DelayNs, i2c::I2c};
//! use ads1x15_driver::{AdcError, Ads1x15, Channel, Chip, Config, Differential};
//!
//! # async fn quick_start<I2C: I2c, D: DelayNs>(i2c: I2C, delay: D) -> Result<(), AdcError<I2C::Error>> {
//! // Construct with any `embedded-hal-async` I2C bus and delay
//! // (e.g. `embassy_time::Delay`)
//! let mut adc = Ads1x15::new(i2c, delay, Config::new(Chip::Ads1115));
//!
//! let single = adc.read_channel(Channel::Ain2).await?;
//! let diff = adc.read_differential(Differential::Ain0Ain1).await?;
//!
//! adc.start_continuous_channel(Channel::Ain0).await?;
//! let latest = adc.last_reading().await?;
//! adc.stop_continuous().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`defmt`**: derive [`defmt::Format`] on public types and emit
//!   debug/warn logs from the conversion sequence.

#![cfg_attr(not(test), no_std)]

pub use adc::{Ads1x15, Reading};
pub use config::{
    Address, Channel, Chip, ComparatorLatching, ComparatorMode, ComparatorPolarity,
    ComparatorQueue, Config, Differential, Gain, Mode, Mux, SampleRate,
};
pub use control::control_word;
pub use conversion::{decode_sample, raw_to_volts, threshold_to_bytes, volts_to_threshold};
pub use error::{AdcError, BusOperation, ValidationError};
pub use registers::CONFIG_DEFAULT;
pub use request::{validate, Comparator, ComparatorRequest, InputSelect, ReadPlan, ReadRequest};

mod adc;
mod config;
mod control;
mod conversion;
mod driver;
mod error;
mod registers;
mod request;

#[cfg(test)]
mod mock;
