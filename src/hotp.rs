//! [rfc-4226](https://tools.ietf.org/html/rfc4226) HOTP: `HOTP(K, C) = Truncate(HMAC-H(K, C))`

use crate::config::assert_digits;
use crate::{Algorithm, CodeGenerationError, ConfigError, TotpError};

/// Turns a secret and a moving counter into a fixed width decimal code.
///
/// The generator keeps no state between calls, identical inputs always give the same code.
///
/// # Example
/// ```
/// use totp_core::{Algorithm, CodeGenerator};
///
/// let generator = CodeGenerator::new(Algorithm::SHA1, 6).unwrap();
/// assert_eq!(generator.generate(b"12345678901234567890", 0).unwrap(), "755224");
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CodeGenerator {
    algorithm: Algorithm,
    digits: u32,
}

impl CodeGenerator {
    /// # Errors
    ///
    /// will return a [ConfigError](enum.ConfigError.html) when `digits` is 0 or higher than 10
    pub fn new(algorithm: Algorithm, digits: u32) -> Result<CodeGenerator, ConfigError> {
        assert_digits(digits)?;
        Ok(CodeGenerator { algorithm, digits })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Will generate the code for `counter`, which is hashed as its 8-byte big-endian form
    pub fn generate(&self, secret: &[u8], counter: u64) -> Result<String, CodeGenerationError> {
        let mac = self.algorithm.sign(secret, &counter.to_be_bytes())?;
        let code = u64::from(truncate(&mac)?) % 10_u64.pow(self.digits);
        Ok(format!("{1:00$}", self.digits as usize, code))
    }
}

/// Dynamic truncation ([rfc-4226 section 5.3](https://tools.ietf.org/html/rfc4226#section-5.3))
///
/// The low nibble of the last byte selects four bytes of `mac`, read big-endian with the
/// most significant bit cleared.
pub fn truncate(mac: &[u8]) -> Result<u32, CodeGenerationError> {
    let offset = (mac.last().ok_or(CodeGenerationError::Truncation)? & 0x0f) as usize;
    let window: [u8; 4] = mac
        .get(offset..offset + 4)
        .and_then(|w| w.try_into().ok())
        .ok_or(CodeGenerationError::Truncation)?;
    Ok(u32::from_be_bytes(window) & 0x7fff_ffff)
}

/// One-shot HOTP for callers that already track their own counter.
pub fn hotp(
    secret: &[u8],
    counter: u64,
    algorithm: Algorithm,
    digits: u32,
) -> Result<String, TotpError> {
    Ok(CodeGenerator::new(algorithm, digits)?.generate(secret, counter)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RFC_SECRET: &[u8] = b"12345678901234567890";

    #[test]
    fn new_digits() {
        for x in 0..=20 {
            let generator = CodeGenerator::new(Algorithm::SHA1, x);
            if x == 0 || x > 10 {
                assert_eq!(generator.unwrap_err(), ConfigError::InvalidDigits(x));
            } else {
                assert_eq!(generator.unwrap().digits(), x);
            }
        }
    }

    #[test]
    fn truncate_rfc_example() {
        // rfc-4226 section 5.4
        let mac = [
            0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19,
            0xda, 0x8e, 0x94, 0x5b, 0x55, 0x5a,
        ];
        assert_eq!(truncate(&mac).unwrap(), 0x50ef_7f19);
    }

    #[test]
    fn truncate_clears_sign_bit() {
        let mut mac = [0xffu8; 20];
        mac[19] = 0xf0;
        assert_eq!(truncate(&mac).unwrap(), 0x7fff_ffff);
    }

    #[test]
    fn truncate_short_mac() {
        assert_eq!(truncate(&[]), Err(CodeGenerationError::Truncation));
        assert_eq!(truncate(&[0x0f; 16]), Err(CodeGenerationError::Truncation));
    }

    #[test]
    fn generates_rfc_4226_codes() {
        let generator = CodeGenerator::new(Algorithm::SHA1, 6).unwrap();
        let expected = [
            "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583",
            "399871", "520489",
        ];
        for (counter, code) in expected.iter().enumerate() {
            assert_eq!(&generator.generate(RFC_SECRET, counter as u64).unwrap(), code);
        }
    }

    #[test]
    fn generates_ten_digits() {
        let generator = CodeGenerator::new(Algorithm::SHA1, 10).unwrap();
        assert_eq!(generator.generate(RFC_SECRET, 0).unwrap(), "1284755224");
        assert_eq!(generator.generate(RFC_SECRET, 2).unwrap(), "0137359152");
    }

    #[test]
    fn generates_one_digit() {
        let generator = CodeGenerator::new(Algorithm::SHA1, 1).unwrap();
        assert_eq!(generator.generate(RFC_SECRET, 0).unwrap(), "4");
        assert_eq!(generator.generate(RFC_SECRET, 7).unwrap(), "3");
    }

    #[test]
    fn zero_pads() {
        // 82162583 at counter 7
        let generator = CodeGenerator::new(Algorithm::SHA1, 9).unwrap();
        assert_eq!(generator.generate(RFC_SECRET, 7).unwrap(), "082162583");
    }

    #[test]
    fn counter_is_fixed_width() {
        let generator = CodeGenerator::new(Algorithm::SHA1, 6).unwrap();
        assert_ne!(
            generator.generate(RFC_SECRET, 1).unwrap(),
            generator.generate(RFC_SECRET, 1 << 56).unwrap()
        );
    }

    #[test]
    fn empty_key_is_rejected() {
        let generator = CodeGenerator::new(Algorithm::SHA256, 6).unwrap();
        assert_eq!(
            generator.generate(&[], 1),
            Err(CodeGenerationError::KeyRejected)
        );
    }

    #[test]
    fn hotp_one_shot() {
        assert_eq!(hotp(RFC_SECRET, 1, Algorithm::SHA1, 6).unwrap(), "287082");
        assert!(matches!(
            hotp(RFC_SECRET, 1, Algorithm::SHA1, 11),
            Err(TotpError::InvalidConfiguration(ConfigError::InvalidDigits(11)))
        ));
    }
}
