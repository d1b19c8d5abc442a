//! Low-level register access for the ADS1x15.
//!
//! Every transfer starts with the register pointer byte. Writes append the
//! 16-bit value big-endian in the same transaction; reads use a
//! repeated-start `write_read` of the pointer followed by two data bytes.
//!
//! This module is crate-private. Consumers interact with [`Ads1x15`] in
//! `adc.rs` instead.
//!
//! [`Ads1x15`]: crate::Ads1x15

use embedded_hal_async::i2c::I2c;

use crate::error::{AdcError, BusOperation};
use crate::registers::{REG_CONFIG, REG_CONVERSION, REG_HIGH_THRESHOLD, REG_LOW_THRESHOLD};

/// Register-level driver.
///
/// Owns the I2C peripheral and the 7-bit device address.
pub(crate) struct RegisterDriver<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> RegisterDriver<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn release(self) -> I2C {
        self.i2c
    }

    // -----------------------------------------------------------------------
    // Core protocol primitives
    // -----------------------------------------------------------------------

    /// Write `bytes` (big-endian register value) to `register`.
    async fn write_register(
        &mut self,
        register: u8,
        bytes: [u8; 2],
        operation: BusOperation,
    ) -> Result<(), AdcError<I2C::Error>> {
        let buf = [register, bytes[0], bytes[1]];
        self.i2c
            .write(self.address, &buf)
            .await
            .map_err(|source| bus_error(operation, source))
    }

    /// Point at `register` and read its two bytes.
    async fn read_register(
        &mut self,
        register: u8,
        operation: BusOperation,
    ) -> Result<[u8; 2], AdcError<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .await
            .map_err(|source| bus_error(operation, source))?;
        Ok(buf)
    }

    // -----------------------------------------------------------------------
    // Typed register helpers
    // -----------------------------------------------------------------------

    pub async fn write_config(&mut self, word: u16) -> Result<(), AdcError<I2C::Error>> {
        self.write_register(REG_CONFIG, word.to_be_bytes(), BusOperation::WriteConfig)
            .await
    }

    pub async fn write_high_threshold(
        &mut self,
        bytes: [u8; 2],
    ) -> Result<(), AdcError<I2C::Error>> {
        self.write_register(REG_HIGH_THRESHOLD, bytes, BusOperation::WriteHighThreshold)
            .await
    }

    pub async fn write_low_threshold(
        &mut self,
        bytes: [u8; 2],
    ) -> Result<(), AdcError<I2C::Error>> {
        self.write_register(REG_LOW_THRESHOLD, bytes, BusOperation::WriteLowThreshold)
            .await
    }

    /// Read the raw conversion register.
    pub async fn read_conversion(&mut self) -> Result<[u8; 2], AdcError<I2C::Error>> {
        self.read_register(REG_CONVERSION, BusOperation::ReadConversion)
            .await
    }
}

fn bus_error<E>(operation: BusOperation, source: E) -> AdcError<E> {
    #[cfg(feature = "defmt")]
    defmt::warn!("ADS1x15 bus error: failed to {}", operation);

    AdcError::Bus { operation, source }
}
