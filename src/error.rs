use std::time::SystemTimeError;

use thiserror::Error;

use crate::SecretParseError;

/// A [TotpConfig](struct.TotpConfig.html) value that cannot produce a meaningful code
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// The time step must be at least one second
    #[error("Time step must be a positive number of seconds")]
    InvalidStep,
    /// Dynamic truncation yields 31 bits, so codes are limited to 1 to 10 digits
    #[error("Digits must be between 1 and {max}, {0} digits is not allowed", max = crate::MAX_DIGITS)]
    InvalidDigits(u32),
}

/// The HMAC primitive could not produce a code.
///
/// Variants never carry key material.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum CodeGenerationError {
    /// The key was empty or refused by the HMAC implementation
    #[error("Secret key was rejected by the HMAC primitive")]
    KeyRejected,
    /// The MAC output was too short for dynamic truncation
    #[error("HMAC output is too short to be truncated")]
    Truncation,
}

/// The name does not match any [Algorithm](enum.Algorithm.html)
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Algorithm can only be SHA1, SHA256 or SHA512, not \"{0}\"")]
pub struct ParseAlgorithmError(pub String);

/// Everything that can go wrong while generating a code.
#[derive(Debug, Error)]
pub enum TotpError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Invalid secret encoding: {0}")]
    InvalidSecretEncoding(#[from] SecretParseError),
    #[error("Code generation failed: {0}")]
    CodeGeneration(#[from] CodeGenerationError),
    #[error("System clock is unavailable: {0}")]
    ClockUnavailable(#[from] SystemTimeError),
}
