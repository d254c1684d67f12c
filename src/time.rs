//! Sources of the current Unix time.
//!
//! [TotpManager](../struct.TotpManager.html) reads the clock through the [TimeSource](trait.TimeSource.html)
//! trait so that tests and replays can pin the instant a code is generated for.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::TotpError;

/// Provider of "now", as whole seconds since the Unix epoch.
pub trait TimeSource {
    /// Current Unix time in seconds.
    ///
    /// # Errors
    ///
    /// Returns [TotpError::ClockUnavailable](../enum.TotpError.html#variant.ClockUnavailable)
    /// when the clock cannot be read. Implementations must not fall back to a cached value.
    fn now(&self) -> Result<u64, TotpError>;
}

/// Reads the operating system wall clock.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Result<u64, TotpError> {
        let t = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        Ok(t)
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FixedTimeSource(pub u64);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Result<u64, TotpError> {
        Ok(self.0)
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> Result<u64, TotpError>,
{
    fn now(&self) -> Result<u64, TotpError> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn system_time_is_after_epoch() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let now = SystemTimeSource.now().unwrap();
        assert!(now >= before);
    }

    #[test]
    fn fixed_time() {
        let source = FixedTimeSource(1_111_111_109);
        assert_eq!(source.now().unwrap(), 1_111_111_109);
        assert_eq!(source.now().unwrap(), 1_111_111_109);
    }

    #[test]
    fn closure_sequence() {
        let next = Cell::new(59u64);
        let source = || -> Result<u64, TotpError> {
            let t = next.get();
            next.set(t + 30);
            Ok(t)
        };
        assert_eq!(source.now().unwrap(), 59);
        assert_eq!(source.now().unwrap(), 89);
        assert_eq!(source.now().unwrap(), 119);
    }

    #[test]
    fn closure_clock_failure() {
        let source = || -> Result<u64, TotpError> {
            let err = UNIX_EPOCH
                .duration_since(SystemTime::now())
                .unwrap_err();
            Err(TotpError::ClockUnavailable(err))
        };
        assert!(matches!(source.now(), Err(TotpError::ClockUnavailable(_))));
    }
}
