//! This library generates 2FA authentification codes per TOTP ([rfc-6238](https://tools.ietf.org/html/rfc6238)),
//! built on the HOTP algorithm of [rfc-4226](https://tools.ietf.org/html/rfc4226), with configurable validity
//! time of each code, algorithm and number of digits. The clock is read through a pluggable
//! [TimeSource](trait.TimeSource.html) so that codes can be reproduced for any instant.
//!
//! Be aware that some authenticator apps will accept the `SHA256`
//! and `SHA512` algorithms but silently fallback to `SHA1`, producing
//! codes that never match.
//!
//! Use the `SHA1` algorithm to avoid this problem.
//!
//! # Examples
//!
//! ```rust
//! use totp_core::{generate_code, generate_code_with, Algorithm};
//!
//! // 30 second steps, 6 digits, SHA1
//! let code = generate_code("KRSXG5CTMVRXEZLUKN2XAZLSKNSWG4TFOQ").unwrap();
//! println!("{}", code);
//!
//! let code = generate_code_with("KRSXG5CTMVRXEZLUKN2XAZLSKNSWG4TFOQ", 60, 8, Algorithm::SHA256).unwrap();
//! assert_eq!(code.len(), 8);
//! ```
//!
//! ```rust
//! use totp_core::{Algorithm, FixedTimeSource, TotpConfig, TotpManager};
//!
//! let config = TotpConfig::new(30, 8, Algorithm::SHA1).unwrap();
//! let totp = TotpManager::with_time_source(config, FixedTimeSource(1_111_111_109)).unwrap();
//! assert_eq!(totp.generate("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ").unwrap(), "07081804");
//! ```

mod config;
mod error;
mod hotp;
mod manager;
mod secret;
mod time;

pub use config::{TotpConfig, DEFAULT_DIGITS, DEFAULT_STEP, MAX_DIGITS};
pub use error::{CodeGenerationError, ConfigError, ParseAlgorithmError, TotpError};
pub use hotp::{hotp, truncate, CodeGenerator};
pub use manager::TotpManager;
pub use secret::{Secret, SecretParseError};
pub use time::{FixedTimeSource, SystemTimeSource, TimeSource};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use core::fmt;
use std::str::FromStr;

use hmac::Mac;

type HmacSha1 = hmac::Hmac<sha1::Sha1>;
type HmacSha256 = hmac::Hmac<sha2::Sha256>;
type HmacSha512 = hmac::Hmac<sha2::Sha512>;

/// Algorithm enum holds the three standards algorithms for TOTP as per the [reference implementation](https://tools.ietf.org/html/rfc6238#appendix-A)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Algorithm {
    #[default]
    SHA1,
    SHA256,
    SHA512,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `SHA1`, `sha-256`, `Sha512`...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "").to_ascii_uppercase().as_str() {
            "SHA1" => Ok(Algorithm::SHA1),
            "SHA256" => Ok(Algorithm::SHA256),
            "SHA512" => Ok(Algorithm::SHA512),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

impl Algorithm {
    /// Human readable name, as found in `otpauth` URLs
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::SHA1 => "SHA1",
            Algorithm::SHA256 => "SHA256",
            Algorithm::SHA512 => "SHA512",
        }
    }

    /// Name of the HMAC construction over this hash
    pub fn hmac_name(&self) -> &'static str {
        match self {
            Algorithm::SHA1 => "HmacSHA1",
            Algorithm::SHA256 => "HmacSHA256",
            Algorithm::SHA512 => "HmacSHA512",
        }
    }

    fn hash<D>(mut digest: D, data: &[u8]) -> Vec<u8>
    where
        D: Mac,
    {
        digest.update(data);
        digest.finalize().into_bytes().to_vec()
    }

    fn sign(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, CodeGenerationError> {
        if key.is_empty() {
            return Err(CodeGenerationError::KeyRejected);
        }
        let mac = match self {
            Algorithm::SHA1 => Algorithm::hash(
                HmacSha1::new_from_slice(key).map_err(|_| CodeGenerationError::KeyRejected)?,
                data,
            ),
            Algorithm::SHA256 => Algorithm::hash(
                HmacSha256::new_from_slice(key).map_err(|_| CodeGenerationError::KeyRejected)?,
                data,
            ),
            Algorithm::SHA512 => Algorithm::hash(
                HmacSha512::new_from_slice(key).map_err(|_| CodeGenerationError::KeyRejected)?,
                data,
            ),
        };
        Ok(mac)
    }
}

/// Generate a code for the current time from a base32 encoded secret, with 30 second
/// steps, 6 digits and `SHA1`
pub fn generate_code(secret: &str) -> Result<String, TotpError> {
    let totp: TotpManager = TotpManager::default();
    totp.generate(secret)
}

/// Generate a code for the current time from a base32 encoded secret with custom parameters
///
/// # Errors
///
/// Will return [TotpError::InvalidConfiguration](enum.TotpError.html#variant.InvalidConfiguration)
/// before touching the secret when `step` is 0, or `digits` is 0 or higher than 10
pub fn generate_code_with(
    secret: &str,
    step: u64,
    digits: u32,
    algorithm: Algorithm,
) -> Result<String, TotpError> {
    let config = TotpConfig::new(step, digits, algorithm)?;
    TotpManager::new(config)?.generate(secret)
}
