use core::fmt;

use crate::secret;
use crate::{CodeGenerator, ConfigError, Secret, SystemTimeSource, TimeSource, TotpConfig, TotpError};

/// TotpManager turns the current time into a code, following [rfc-6238](https://tools.ietf.org/html/rfc6238)
///
/// It holds a validated [TotpConfig](struct.TotpConfig.html) and the [TimeSource](trait.TimeSource.html)
/// it reads "now" from. Secrets are passed per call and never stored.
///
/// # Example
/// ```
/// use totp_core::{Algorithm, FixedTimeSource, TotpConfig, TotpManager};
///
/// let config = TotpConfig::new(30, 8, Algorithm::SHA1).unwrap();
/// let manager = TotpManager::with_time_source(config, FixedTimeSource(59)).unwrap();
/// let code = manager.generate("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap();
/// assert_eq!(code, "94287082");
/// ```
#[derive(Debug, Clone)]
pub struct TotpManager<S = SystemTimeSource> {
    config: TotpConfig,
    time_source: S,
}

impl Default for TotpManager {
    /// 30 second steps, 6 digits, SHA1, system clock
    fn default() -> Self {
        TotpManager {
            config: TotpConfig::default(),
            time_source: SystemTimeSource,
        }
    }
}

impl<S> fmt::Display for TotpManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "digits: {}; step: {}; alg: {}",
            self.config.get_digits(),
            self.config.get_step(),
            self.config.get_algorithm(),
        )
    }
}

impl TotpManager {
    /// Will create a manager reading the system clock
    ///
    /// # Errors
    ///
    /// Will return an error when `config` did not pass validation, which can only happen
    /// for a deserialized configuration
    pub fn new(config: TotpConfig) -> Result<TotpManager, ConfigError> {
        TotpManager::with_time_source(config, SystemTimeSource)
    }
}

impl<S: TimeSource> TotpManager<S> {
    /// Will create a manager reading "now" from `time_source`
    pub fn with_time_source(config: TotpConfig, time_source: S) -> Result<TotpManager<S>, ConfigError> {
        config.validate()?;
        Ok(TotpManager {
            config,
            time_source,
        })
    }

    pub fn config(&self) -> &TotpConfig {
        &self.config
    }

    /// The moving factor for the given timestamp in seconds, `floor(time / step)`
    pub fn counter_at(&self, time: u64) -> u64 {
        time / self.config.get_step()
    }

    /// Returns the timestamp of the first second for the next step
    /// given the provided timestamp in seconds
    pub fn next_step(&self, time: u64) -> u64 {
        let step = self.counter_at(time);

        step.saturating_add(1).saturating_mul(self.config.get_step())
    }

    /// Give the ttl (in seconds) of the current token
    pub fn ttl(&self) -> Result<u64, TotpError> {
        let t = self.time_source.now()?;
        Ok(self.config.get_step() - (t % self.config.get_step()))
    }

    /// Generate a token for the current time from a base32 encoded secret
    ///
    /// # Errors
    ///
    /// - [TotpError::InvalidSecretEncoding](enum.TotpError.html#variant.InvalidSecretEncoding) when `secret`
    ///   is not base32, checked before the clock is read
    /// - [TotpError::ClockUnavailable](enum.TotpError.html#variant.ClockUnavailable) when the time source fails
    /// - [TotpError::CodeGeneration](enum.TotpError.html#variant.CodeGeneration) when HMAC rejects the key
    pub fn generate(&self, secret: &str) -> Result<String, TotpError> {
        let key = secret::decode(secret)?;
        let time = self.time_source.now()?;
        self.sign(&key, time)
    }

    /// Same as [generate](#method.generate), for a secret that may already be decoded
    pub fn generate_from(&self, secret: &Secret) -> Result<String, TotpError> {
        let key = secret.to_bytes()?;
        let time = self.time_source.now()?;
        self.sign(&key, time)
    }

    /// Will generate a token given the provided timestamp in seconds, ignoring the time source
    pub fn generate_at(&self, secret: &str, time: u64) -> Result<String, TotpError> {
        let key = secret::decode(secret)?;
        self.sign(&key, time)
    }

    fn sign(&self, key: &[u8], time: u64) -> Result<String, TotpError> {
        let counter = self.counter_at(time);
        log::trace!(
            "time {} falls in step {} of {}s",
            time,
            counter,
            self.config.get_step()
        );
        let generator = CodeGenerator::new(self.config.get_algorithm(), self.config.get_digits())?;
        Ok(generator.generate(key, counter)?)
    }
}
