use crate::{Algorithm, ConfigError};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// The recommended value per [rfc-6238](https://tools.ietf.org/html/rfc6238#section-5.2)
pub const DEFAULT_STEP: u64 = 30;
/// What authenticator apps expect unless told otherwise
pub const DEFAULT_DIGITS: u32 = 6;
/// Dynamic truncation keeps 31 bits, which is at most 10 decimal digits
pub const MAX_DIGITS: u32 = 10;

pub(crate) fn assert_digits(digits: u32) -> Result<(), ConfigError> {
    if !(1..=MAX_DIGITS).contains(&digits) {
        Err(ConfigError::InvalidDigits(digits))
    } else {
        Ok(())
    }
}

pub(crate) fn assert_step(step: u64) -> Result<(), ConfigError> {
    if step == 0 {
        Err(ConfigError::InvalidStep)
    } else {
        Ok(())
    }
}

/// Set of options describing how codes are generated, see [TotpManager](struct.TotpManager.html)
///
/// # Example
/// ```
/// use totp_core::{Algorithm, TotpConfig};
///
/// let mut config = TotpConfig::default();
///
/// // optional, set step, digits, algorithm
/// config.digits(8).unwrap();
/// config.step(60).unwrap();
/// config.algorithm(Algorithm::SHA256);
///
/// assert!(config.digits(0).is_err());
/// assert_eq!(config.get_digits(), 8);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct TotpConfig {
    /// Duration in seconds of a step. The recommended value per [rfc-6238](https://tools.ietf.org/html/rfc6238#section-5.2) is 30 seconds
    step: u64,
    /// The number of digits composing the auth code. [rfc-4226](https://tools.ietf.org/html/rfc4226#section-5.3) asks for 6 to 8, anything between 1 and 10 is accepted here
    digits: u32,
    /// SHA-1 is what most clients understand
    algorithm: Algorithm,
}

impl Default for TotpConfig {
    fn default() -> Self {
        TotpConfig {
            step: DEFAULT_STEP,
            digits: DEFAULT_DIGITS,
            algorithm: Algorithm::SHA1,
        }
    }
}

impl TotpConfig {
    /// # Errors
    ///
    /// will return a [ConfigError](enum.ConfigError.html) when
    /// - `step` is 0
    /// - `digits` is 0 or higher than 10
    pub fn new(step: u64, digits: u32, algorithm: Algorithm) -> Result<TotpConfig, ConfigError> {
        let config = TotpConfig {
            step,
            digits,
            algorithm,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks a configuration obtained without going through the setters, e.g. deserialized
    pub fn validate(&self) -> Result<(), ConfigError> {
        assert_step(self.step)?;
        assert_digits(self.digits)
    }

    /// Set the `step`
    pub fn step(&mut self, value: u64) -> Result<(), ConfigError> {
        assert_step(value)?;
        self.step = value;
        Ok(())
    }

    /// Set the `digits`
    pub fn digits(&mut self, value: u32) -> Result<(), ConfigError> {
        assert_digits(value)?;
        self.digits = value;
        Ok(())
    }

    /// Set the `algorithm`
    pub fn algorithm(&mut self, value: Algorithm) {
        self.algorithm = value;
    }

    pub fn get_step(&self) -> u64 {
        self.step
    }

    pub fn get_digits(&self) -> u32 {
        self.digits
    }

    pub fn get_algorithm(&self) -> Algorithm {
        self.algorithm
    }
}
