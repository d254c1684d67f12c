//! Representation of a secret either a "raw" \[u8\] or "base 32" encoded String
//!
//! Encoded secrets are decoded the way authenticator apps display them: case does not
//! matter, trailing `=` padding is optional, and the groups may be separated by spaces
//! or hyphens.
//!
//! # Examples
//!
//! - Generate a code from a base32 encoded secret
//! ```
//! use totp_core::{Secret, TotpManager};
//!
//! let secret = Secret::Encoded(String::from("obwg c2lo fvzx i4tj nzts 243f mnzg k5bn gezd g==="));
//! let manager: TotpManager = TotpManager::default();
//! println!("code from base32:\t{}", manager.generate_from(&secret).unwrap());
//! ```
//!
//! - Generate a code from a "raw" secret
//! ```
//! use totp_core::{Secret, TotpManager};
//!
//! let secret = Secret::Raw(b"plain-string-secret-123".to_vec());
//! let manager: TotpManager = TotpManager::default();
//! println!("code from raw secret:\t{}", manager.generate_from(&secret).unwrap());
//! ```

use base32::{self, Alphabet};

use constant_time_eq::constant_time_eq;
use thiserror::Error;

/// Different ways secret parsing failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretParseError {
    /// Invalid base32 input.
    #[error("Could not decode base32 secret.")]
    ParseBase32,
    /// The secret decoded to zero bytes.
    #[error("Secret is empty.")]
    Empty,
}

/// Shared secret between client and server to generate tokens from.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize, zeroize::ZeroizeOnDrop))]
pub enum Secret {
    /// Non-encoded "raw" secret.
    Raw(Vec<u8>),
    /// Base32 encoded secret.
    Encoded(String),
}

impl PartialEq for Secret {
    /// Will check that to_bytes() returns the same.
    /// One secret can be Raw, and the other Encoded.
    /// A secret that cannot be decoded is never equal to anything.
    fn eq(&self, other: &Self) -> bool {
        match (self.to_bytes(), other.to_bytes()) {
            (Ok(a), Ok(b)) => constant_time_eq(&a, &b),
            _ => false,
        }
    }
}

impl Secret {
    /// Get the inner value as a Vec of bytes, decoding it if needed.
    ///
    /// # Errors
    ///
    /// Returns [SecretParseError](enum.SecretParseError.html) when the encoded value is not
    /// valid base32, or when either variant holds no key material.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SecretParseError> {
        let bytes = match self {
            Secret::Raw(s) => s.to_vec(),
            Secret::Encoded(s) => decode(s)?,
        };
        if bytes.is_empty() {
            return Err(SecretParseError::Empty);
        }
        Ok(bytes)
    }

    /// Try to transform a `Secret::Encoded` into a `Secret::Raw`
    pub fn to_raw(&self) -> Result<Self, SecretParseError> {
        match self {
            Secret::Raw(_) => Ok(self.clone()),
            Secret::Encoded(_) => Ok(Secret::Raw(self.to_bytes()?)),
        }
    }

    /// Transforms a `Secret::Raw` into a `Secret::Encoded`, without padding.
    pub fn to_encoded(&self) -> Self {
        match self {
            Secret::Raw(s) => {
                Secret::Encoded(base32::encode(Alphabet::Rfc4648 { padding: false }, s))
            }
            Secret::Encoded(_) => self.clone(),
        }
    }
}

impl std::str::FromStr for Secret {
    type Err = SecretParseError;

    /// Parses a base32 string, keeping the decoded bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Secret::Encoded(s.to_string()).to_raw()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Secret::Raw(bytes) => {
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
            Secret::Encoded(s) => write!(f, "{}", s),
        }
    }
}

/// Decodes an RFC 4648 base32 string, tolerating case, padding and group separators.
pub(crate) fn decode(encoded: &str) -> Result<Vec<u8>, SecretParseError> {
    let normalized: String = encoded
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let normalized = normalized.trim_end_matches('=');
    if normalized.is_empty() {
        return Err(SecretParseError::Empty);
    }

    // 8 characters carry 5 bytes; a tail of 1, 3 or 6 characters cannot end on a byte
    if matches!(normalized.len() % 8, 1 | 3 | 6) {
        return Err(SecretParseError::ParseBase32);
    }
    let bytes = base32::decode(Alphabet::Rfc4648 { padding: false }, normalized)
        .ok_or(SecretParseError::ParseBase32)?;
    if bytes.is_empty() {
        return Err(SecretParseError::Empty);
    }
    Ok(bytes)
}
