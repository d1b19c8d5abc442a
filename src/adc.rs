//! High-level interface for the ADS1015 / ADS1115.
//!
//! [`Ads1x15`] wraps the register driver with request validation, the
//! conversion sequence and unit conversion.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::config::{Channel, Chip, Config, Differential, Gain, Mode, SampleRate};
use crate::control::control_word;
use crate::conversion::{decode_sample, raw_to_volts, threshold_to_bytes, volts_to_threshold};
use crate::driver::RegisterDriver;
use crate::error::AdcError;
use crate::registers::CONFIG_DEFAULT;
use crate::request::{validate, Comparator, InputSelect, ReadRequest};

/// One conversion result.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Signed ADC code (12-bit on the ADS1015, 16-bit on the ADS1115).
    pub raw: i32,
    /// `raw` scaled by the gain range in effect for the conversion.
    pub volts: f64,
}

/// Async driver for one ADS1015 or ADS1115 on an I2C bus.
///
/// Every read runs the same sequence: validate the request, program the
/// comparator thresholds (only when the comparator is enabled), write the
/// configuration register, wait for the conversion, then read and decode
/// the result. A request that fails validation never touches the bus.
///
/// The driver does not serialise overlapping reads. Both share the chip's
/// single conversion register, so callers must not interleave reads on the
/// same device.
///
/// # Example
///
/// ```no_run
/// # use embedded_hal_async::{delay::DelayNs, i2c::I2c};
/// use ads1x15_driver::{AdcError, Ads1x15, Channel, Chip, Config};
///
/// # async fn read_ain0<I2C: I2c, D: DelayNs>(i2c: I2C, delay: D) -> Result<f64, AdcError<I2C::Error>> {
/// let mut adc = Ads1x15::new(i2c, delay, Config::new(Chip::Ads1115));
///
/// let reading = adc.read_channel(Channel::Ain0).await?;
/// # Ok(reading.volts)
/// # }
/// ```
pub struct Ads1x15<I2C, D> {
    driver: RegisterDriver<I2C>,
    delay: D,
    config: Config,
    /// Gain of the most recently started continuous conversion, used to
    /// scale [`last_reading`](Self::last_reading).
    last_continuous_gain: Gain,
}

impl<I2C, D> Ads1x15<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver. No bus traffic is generated.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral (takes ownership for exclusive access)
    /// * `delay`: async delay used to wait out conversions
    ///   (e.g. `embassy_time::Delay`)
    /// * `config`: chip variant, address and read defaults
    pub fn new(i2c: I2C, delay: D, config: Config) -> Self {
        Self {
            driver: RegisterDriver::new(i2c, config.address.addr()),
            delay,
            config,
            last_continuous_gain: config.gain,
        }
    }

    /// Give back the I2C bus and the delay.
    pub fn release(self) -> (I2C, D) {
        (self.driver.release(), self.delay)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn chip(&self) -> Chip {
        self.config.chip
    }

    /// 7-bit bus address the driver talks to.
    pub fn address(&self) -> u8 {
        self.driver.address()
    }

    /// Change the default gain range used by reads.
    pub fn set_gain(&mut self, gain: Gain) {
        self.config.gain = gain;
    }

    /// Change the default data rate used by reads.
    ///
    /// Not checked against the chip here; a rate the chip does not offer is
    /// rejected when the next read is validated.
    pub fn set_sample_rate(&mut self, sample_rate: SampleRate) {
        self.config.sample_rate = sample_rate;
    }

    pub fn set_extra_delay_ms(&mut self, extra_delay_ms: u32) {
        self.config.extra_delay_ms = extra_delay_ms;
    }

    /// Gain range that [`last_reading`](Self::last_reading) scales with.
    pub fn last_continuous_gain(&self) -> Gain {
        self.last_continuous_gain
    }

    /// Build a request for `input` using the configured gain and data rate.
    ///
    /// Fields can be adjusted before passing it to [`read`](Self::read).
    pub fn request(&self, input: impl Into<InputSelect>, mode: Mode) -> ReadRequest {
        ReadRequest::new(input, self.config.gain, self.config.sample_rate, mode)
    }

    /// Time waited between starting a conversion at `rate` and reading it back:
    /// the nominal conversion time plus the configured padding.
    pub fn conversion_wait(&self, rate: SampleRate) -> Duration {
        rate.conversion_time() + Duration::from_millis(self.config.extra_delay_ms as u64)
    }

    // -----------------------------------------------------------------------
    // Unit conversion
    // -----------------------------------------------------------------------

    /// Convert an ADC code to volts for `gain`.
    pub fn voltage_from_value(&self, raw: i32, gain: Gain) -> f64 {
        raw_to_volts(raw, gain, self.config.chip)
    }

    /// Comparator threshold code for `volts`.
    ///
    /// Uses the configured gain when `gain` is `None`.
    pub fn threshold_from_volts(&self, volts: f64, gain: Option<Gain>) -> i32 {
        volts_to_threshold(volts, gain.unwrap_or(self.config.gain), self.config.chip)
    }

    // -----------------------------------------------------------------------
    // Single-shot reads
    // -----------------------------------------------------------------------

    /// Read a single-ended channel once.
    ///
    /// # Errors
    /// * [`AdcError::Validation`] if the configured data rate is not offered by the chip
    /// * [`AdcError::Bus`] on communication failure
    pub async fn read_channel(
        &mut self,
        channel: Channel,
    ) -> Result<Reading, AdcError<I2C::Error>> {
        self.read(self.request(channel, Mode::SingleShot)).await
    }

    /// Read a differential pair once.
    pub async fn read_differential(
        &mut self,
        pair: Differential,
    ) -> Result<Reading, AdcError<I2C::Error>> {
        self.read(self.request(pair, Mode::SingleShot)).await
    }

    // -----------------------------------------------------------------------
    // Continuous conversion
    // -----------------------------------------------------------------------

    /// Put the chip into continuous conversion on `channel` and return the
    /// first reading. Use [`last_reading`](Self::last_reading) for later ones.
    pub async fn start_continuous_channel(
        &mut self,
        channel: Channel,
    ) -> Result<Reading, AdcError<I2C::Error>> {
        self.read(self.request(channel, Mode::Continuous)).await
    }

    /// Continuous conversion on a differential pair.
    pub async fn start_continuous_differential(
        &mut self,
        pair: Differential,
    ) -> Result<Reading, AdcError<I2C::Error>> {
        self.read(self.request(pair, Mode::Continuous)).await
    }

    /// Continuous conversion on `channel` with the comparator driving ALERT/RDY.
    ///
    /// # Example
    /// ```no_run
    /// # use embedded_hal_async::{delay::DelayNs, i2c::I2c};
    /// # use ads1x15_driver::{AdcError, Ads1x15, Channel, Comparator};
    /// # async fn alert<I2C: I2c, D: DelayNs>(adc: &mut Ads1x15<I2C, D>) -> Result<(), AdcError<I2C::Error>> {
    /// let high = adc.threshold_from_volts(1.5, None);
    /// let low = adc.threshold_from_volts(0.5, None);
    /// adc.start_comparator_channel(Channel::Ain0, Comparator::new(high, low)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn start_comparator_channel(
        &mut self,
        channel: Channel,
        comparator: Comparator,
    ) -> Result<Reading, AdcError<I2C::Error>> {
        let request = self
            .request(channel, Mode::Continuous)
            .with_comparator(comparator);
        self.read(request).await
    }

    /// Continuous conversion on a differential pair with the comparator enabled.
    pub async fn start_comparator_differential(
        &mut self,
        pair: Differential,
        comparator: Comparator,
    ) -> Result<Reading, AdcError<I2C::Error>> {
        let request = self
            .request(pair, Mode::Continuous)
            .with_comparator(comparator);
        self.read(request).await
    }

    /// Fetch the latest result of a running continuous conversion.
    ///
    /// Reads the conversion register directly, without reconfiguring or
    /// waiting, and scales it with the gain of the last continuous start.
    pub async fn last_reading(&mut self) -> Result<Reading, AdcError<I2C::Error>> {
        self.read_result(self.last_continuous_gain).await
    }

    /// Stop continuous conversion by restoring the power-on configuration
    /// (single-shot, comparator disabled).
    ///
    /// Only affects conversions started after the write; a read already
    /// waiting on its conversion is not cancelled.
    pub async fn stop_continuous(&mut self) -> Result<(), AdcError<I2C::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ADS1x15 stop continuous");

        self.driver.write_config(CONFIG_DEFAULT).await
    }

    // -----------------------------------------------------------------------
    // Conversion sequence
    // -----------------------------------------------------------------------

    /// Validate `request` and run one conversion.
    ///
    /// # Errors
    /// * [`AdcError::Validation`] naming the first invalid field; nothing is
    ///   written to the chip
    /// * [`AdcError::Bus`] naming the register operation that failed; writes
    ///   completed before it are not rolled back
    pub async fn read(&mut self, request: ReadRequest) -> Result<Reading, AdcError<I2C::Error>> {
        let chip = self.config.chip;

        // Validating
        let plan = validate(chip, &request).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADS1x15 request rejected: {}", e);
            AdcError::Validation(e)
        })?;

        // Committing to a continuous plan records its gain before any bus
        // traffic, whether or not the writes below succeed.
        if plan.mode == Mode::Continuous {
            self.last_continuous_gain = plan.gain;
        }

        // ProgrammingThresholds (high before low)
        if let Some(comparator) = plan.active_comparator() {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "ADS1x15 thresholds high={} low={}",
                comparator.high_threshold,
                comparator.low_threshold
            );

            self.driver
                .write_high_threshold(threshold_to_bytes(comparator.high_threshold, chip))
                .await?;
            self.driver
                .write_low_threshold(threshold_to_bytes(comparator.low_threshold, chip))
                .await?;
        }

        // WritingConfig
        let word = control_word(&plan);
        #[cfg(feature = "defmt")]
        defmt::debug!("ADS1x15 config word {=u16:#x}", word);
        self.driver.write_config(word).await?;

        // Waiting
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ADS1x15 waiting {} us",
            self.conversion_wait(plan.sample_rate).as_micros()
        );
        self.delay
            .delay_us(plan.sample_rate.conversion_micros())
            .await;
        self.delay.delay_ms(self.config.extra_delay_ms).await;

        // ReadingResult
        self.read_result(plan.gain).await
    }

    async fn read_result(&mut self, gain: Gain) -> Result<Reading, AdcError<I2C::Error>> {
        let chip = self.config.chip;
        let bytes = self.driver.read_conversion().await?;
        let raw = decode_sample(bytes, chip);

        #[cfg(feature = "defmt")]
        defmt::debug!("ADS1x15 raw result {}", raw);

        Ok(Reading {
            raw,
            volts: raw_to_volts(raw, gain, chip),
        })
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::config::{ComparatorMode, ComparatorPolarity, ComparatorQueue};
    use crate::error::{BusOperation, ValidationError};
    use crate::mock::{MockDelay, MockError, MockI2c, Transfer};
    use crate::registers::{REG_CONFIG, REG_CONVERSION, REG_HIGH_THRESHOLD, REG_LOW_THRESHOLD};

    const ADDR: u8 = 0x48;

    fn config_write(word: u16) -> Transfer {
        Transfer::write(ADDR, REG_CONFIG, word.to_be_bytes())
    }

    fn conversion_read() -> Transfer {
        Transfer::read(ADDR, REG_CONVERSION)
    }

    #[test]
    fn single_shot_channel_sequence() {
        let mut i2c = MockI2c::with_responses(&[[0x7F, 0xF0]]);
        let mut delay = MockDelay::default();
        let config = Config::new(Chip::Ads1015).with_gain(Gain::Within4_096V);
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, config);

        let reading = block_on(adc.read_channel(Channel::Ain0)).unwrap();
        assert_eq!(reading, Reading { raw: 2047, volts: 4.096 });
        // Single-shot reads leave the continuous gain alone.
        assert_eq!(adc.last_continuous_gain(), Gain::Within4_096V);

        // OS | MUX 100 | PGA 001 | MODE 1 | DR 100 (1600) | CQUE 11
        assert_eq!(i2c.transfers, vec![config_write(0xC383), conversion_read()]);
        // 1000 / 1600 ms + 1 ms padding
        assert_eq!(delay.total_us(), 625 + 1_000);
    }

    #[test]
    fn differential_read_on_ads1115() {
        let mut i2c = MockI2c::with_responses(&[[0x80, 0x00]]);
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());

        let reading = block_on(adc.read_differential(Differential::Ain0Ain3)).unwrap();
        assert_eq!(reading.raw, -32768);
        assert_eq!(reading.volts, -2.048);

        // OS | MUX 001 | PGA 010 | MODE 1 | DR 101 (250) | CQUE 11
        assert_eq!(i2c.transfers, vec![config_write(0x95A3), conversion_read()]);
        assert_eq!(delay.total_us(), 4_000 + 1_000);
    }

    #[test]
    fn wait_covers_every_rate_of_both_chips() {
        for chip in [Chip::Ads1015, Chip::Ads1115] {
            for &rate in chip.sample_rates() {
                for extra in [0u32, 1, 5] {
                    let mut i2c = MockI2c::default();
                    let mut delay = MockDelay::default();
                    let config = Config::new(chip)
                        .with_sample_rate(rate)
                        .with_extra_delay_ms(extra);
                    let mut adc = Ads1x15::new(&mut i2c, &mut delay, config);

                    block_on(adc.read_channel(Channel::Ain1)).unwrap();
                    assert_eq!(
                        delay.total_us(),
                        1_000_000u64.div_ceil(rate.sps() as u64) + extra as u64 * 1_000,
                        "{:?} {:?}",
                        chip,
                        rate
                    );
                }
            }
        }
    }

    #[test]
    fn validation_failure_never_touches_the_bus() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        // 1600 SPS is not an ADS1115 rate.
        let config = Config::new(Chip::Ads1115).with_sample_rate(SampleRate::Sps1600);
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, config);

        let err = block_on(adc.start_continuous_channel(Channel::Ain0)).unwrap_err();
        assert_eq!(
            err,
            AdcError::Validation(ValidationError::InvalidSampleRate {
                chip: Chip::Ads1115,
                sps: 1600
            })
        );
        assert!(i2c.transfers.is_empty());
        assert_eq!(delay.total_ns, 0);
    }

    #[test]
    fn raw_request_with_bad_fields_is_rejected() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());

        let mut request = adc.request(InputSelect::SingleEnded(-1), Mode::SingleShot);
        let err = block_on(adc.read(request)).unwrap_err();
        assert_eq!(err, AdcError::Validation(ValidationError::InvalidChannel(-1)));

        request.input = InputSelect::Differential(-1);
        let err = block_on(adc.read(request)).unwrap_err();
        assert_eq!(err, AdcError::Validation(ValidationError::InvalidDifferential(-1)));

        request.input = InputSelect::Differential(0);
        request.gain_mv = -1;
        let err = block_on(adc.read(request)).unwrap_err();
        assert_eq!(err, AdcError::Validation(ValidationError::InvalidGain(-1)));

        assert!(i2c.transfers.is_empty());
    }

    #[test]
    fn continuous_start_records_gain_and_last_reading_uses_it() {
        let mut i2c = MockI2c::with_responses(&[[0x40, 0x00], [0x20, 0x00], [0x40, 0x00]]);
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());
        assert_eq!(adc.last_continuous_gain(), Gain::Within2_048V);

        let mut continuous = adc.request(Channel::Ain3, Mode::Continuous);
        continuous.gain_mv = 4096;
        let first = block_on(adc.read(continuous)).unwrap();
        assert_eq!(first.raw, 0x4000);
        assert_eq!(adc.last_continuous_gain(), Gain::Within4_096V);

        // A single-shot read with another gain does not disturb it.
        let mut single = adc.request(Channel::Ain0, Mode::SingleShot);
        single.gain_mv = 256;
        let second = block_on(adc.read(single)).unwrap();
        assert_eq!(second.volts, 0x2000 as f64 / 32767.0 * 0.256);
        assert_eq!(adc.last_continuous_gain(), Gain::Within4_096V);

        let latest = block_on(adc.last_reading()).unwrap();
        assert_eq!(latest.volts, 0x4000 as f64 / 32767.0 * 4.096);

        // OS | MUX 111 | PGA 001 | MODE 0 | DR 101 | CQUE 11
        assert_eq!(i2c.transfers.len(), 5);
        assert_eq!(i2c.transfers[0], config_write(0xF2A3));
        assert_eq!(i2c.transfers[4], conversion_read());
    }

    #[test]
    fn last_reading_skips_configuration_and_wait() {
        let mut i2c = MockI2c::with_responses(&[[0x7F, 0xFF], [0x40, 0x00]]);
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());

        block_on(adc.start_continuous_differential(Differential::Ain0Ain1)).unwrap();
        let waited = 4_000 + 1_000;

        let latest = block_on(adc.last_reading()).unwrap();
        assert_eq!(latest.raw, 0x4000);
        assert_eq!(latest.volts, 0x4000 as f64 / 32767.0 * 2.048);

        assert_eq!(
            i2c.transfers,
            vec![config_write(0x84A3), conversion_read(), conversion_read()]
        );
        assert_eq!(delay.total_us(), waited);
    }

    #[test]
    fn comparator_programs_high_then_low_before_config() {
        let mut i2c = MockI2c::with_responses(&[[0x12, 0x30]]);
        let mut delay = MockDelay::default();
        let config = Config::new(Chip::Ads1015).with_sample_rate(SampleRate::Sps3300);
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, config);

        let comparator = Comparator::new(2047, -2048)
            .with_queue(ComparatorQueue::Two)
            .with_polarity(ComparatorPolarity::ActiveHigh)
            .with_mode(ComparatorMode::Window);
        let reading = block_on(adc.start_comparator_channel(Channel::Ain1, comparator)).unwrap();
        assert_eq!(reading.raw, 0x123);
        assert_eq!(adc.last_continuous_gain(), Gain::Within2_048V);

        assert_eq!(
            i2c.transfers,
            vec![
                Transfer::write(ADDR, REG_HIGH_THRESHOLD, [0x7F, 0xF0]),
                Transfer::write(ADDR, REG_LOW_THRESHOLD, [0x80, 0x00]),
                // OS | MUX 101 | PGA 010 | MODE 0 | DR 110 | 1 1 0 01
                config_write(0xD4D9),
                conversion_read(),
            ]
        );
    }

    #[test]
    fn disabled_comparator_skips_thresholds() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());

        let comparator = Comparator::new(100, -100).with_queue(ComparatorQueue::Disabled);
        block_on(adc.start_comparator_differential(Differential::Ain2Ain3, comparator)).unwrap();

        assert_eq!(i2c.transfers.len(), 2);
        assert!(matches!(
            &i2c.transfers[0],
            Transfer::Write { bytes, .. } if bytes[0] == REG_CONFIG
        ));
    }

    #[test]
    fn comparator_threshold_out_of_range_is_rejected() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());

        let err = block_on(adc.start_comparator_channel(Channel::Ain0, Comparator::new(32768, 0)))
            .unwrap_err();
        assert_eq!(
            err,
            AdcError::Validation(ValidationError::InvalidHighThreshold {
                chip: Chip::Ads1115,
                value: 32768
            })
        );
        // A rejected request does not commit its gain either.
        assert_eq!(adc.last_continuous_gain(), Gain::Within2_048V);
        assert!(i2c.transfers.is_empty());
    }

    #[test]
    fn threshold_write_failure_aborts_sequence() {
        let mut i2c = MockI2c {
            fail_at: Some(0),
            ..MockI2c::default()
        };
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());
        adc.set_gain(Gain::Within1_024V);

        let err = block_on(adc.start_comparator_channel(Channel::Ain0, Comparator::new(10, 0)))
            .unwrap_err();
        assert_eq!(
            err,
            AdcError::Bus {
                operation: BusOperation::WriteHighThreshold,
                source: MockError
            }
        );
        // The continuous plan was committed before the bus failed.
        assert_eq!(adc.last_continuous_gain(), Gain::Within1_024V);
        assert_eq!(i2c.transfers.len(), 1);
        assert_eq!(delay.total_ns, 0);
    }

    #[test]
    fn low_threshold_write_failure_aborts_before_config() {
        let mut i2c = MockI2c {
            fail_at: Some(1),
            ..MockI2c::default()
        };
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::new(Chip::Ads1015));

        let err = block_on(adc.start_comparator_differential(
            Differential::Ain0Ain1,
            Comparator::new(1000, -1000),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            AdcError::Bus {
                operation: BusOperation::WriteLowThreshold,
                source: MockError
            }
        );
        assert_eq!(
            i2c.transfers,
            vec![
                Transfer::write(ADDR, REG_HIGH_THRESHOLD, threshold_to_bytes(1000, Chip::Ads1015)),
                Transfer::write(ADDR, REG_LOW_THRESHOLD, threshold_to_bytes(-1000, Chip::Ads1015)),
            ]
        );
        assert_eq!(delay.total_ns, 0);
    }

    #[test]
    fn long_padding_is_waited_in_full() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        let config = Config::new(Chip::Ads1115).with_extra_delay_ms(5_000_000);
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, config);

        block_on(adc.read_channel(Channel::Ain0)).unwrap();
        // 250 SPS plus 5000 s of padding, well past u32::MAX microseconds.
        assert_eq!(delay.total_us(), 4_000 + 5_000_000_000);
    }

    #[test]
    fn config_write_failure_is_reported() {
        let mut i2c = MockI2c {
            fail_at: Some(0),
            ..MockI2c::default()
        };
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());

        let err = block_on(adc.start_continuous_channel(Channel::Ain2)).unwrap_err();
        assert_eq!(
            err,
            AdcError::Bus {
                operation: BusOperation::WriteConfig,
                source: MockError
            }
        );
        assert_eq!(delay.total_ns, 0);
    }

    #[test]
    fn conversion_read_failure_is_reported() {
        let mut i2c = MockI2c {
            fail_at: Some(1),
            ..MockI2c::default()
        };
        let mut delay = MockDelay::default();
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, Config::default());

        let err = block_on(adc.read_channel(Channel::Ain0)).unwrap_err();
        assert_eq!(
            err,
            AdcError::Bus {
                operation: BusOperation::ReadConversion,
                source: MockError
            }
        );
    }

    #[test]
    fn stop_continuous_writes_default_word() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        let config = Config::new(Chip::Ads1015).with_address(crate::config::Address::Scl);
        let mut adc = Ads1x15::new(&mut i2c, &mut delay, config);
        assert_eq!(adc.address(), 0x4B);

        block_on(adc.start_continuous_channel(Channel::Ain0)).unwrap();
        block_on(adc.stop_continuous()).unwrap();
        block_on(adc.stop_continuous()).unwrap();

        let stop = Transfer::write(0x4B, REG_CONFIG, [0x85, 0x83]);
        assert_eq!(i2c.transfers[2], stop);
        assert_eq!(i2c.transfers[3], stop);
    }

    #[test]
    fn unit_helpers_follow_the_configured_chip() {
        let mut i2c = MockI2c::default();
        let mut delay = MockDelay::default();
        let config = Config::new(Chip::Ads1015).with_gain(Gain::Within2_048V);
        let adc = Ads1x15::new(&mut i2c, &mut delay, config);

        assert_eq!(adc.threshold_from_volts(2.048, None), 2047);
        assert_eq!(adc.threshold_from_volts(1.0, None), 999);
        assert_eq!(adc.threshold_from_volts(-1.0, None), -1000);
        assert_eq!(
            adc.threshold_from_volts(3.0, Some(Gain::Within4_096V)),
            volts_to_threshold(3.0, Gain::Within4_096V, Chip::Ads1015)
        );
        assert_eq!(adc.voltage_from_value(-2048, Gain::Within4_096V), -4.096);
        assert_eq!(
            adc.conversion_wait(SampleRate::Sps128).as_micros(),
            7_813 + 1_000
        );
    }
}
