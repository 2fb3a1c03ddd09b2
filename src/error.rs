//! Error types shared by the drivers.

use core::fmt;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Rejected before any register was written.
    Configuration(ConfigError),
    /// A clock-gated peripheral never reported ready.
    HardwareTimeout(Peripheral),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Period must be at least 3 ticks.
    PeriodOutOfRange { period: u16 },
    /// Duty must satisfy `2 <= duty <= period - 1`.
    DutyOutOfRange { duty: u16, period: u16 },
    /// Frequency is zero or does not fit a 16-bit period.
    FrequencyOutOfRange { hz: u32 },
    /// Duty percentage above 100.
    PercentOutOfRange { percent: u8 },
    /// Duty update on a generator that was never started.
    NotRunning,
}

/// Clock-gated blocks that report readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peripheral {
    Gpio(crate::regs::Port),
    Pwm0,
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Configuration(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(e) => write!(f, "configuration error: {}", e),
            Error::HardwareTimeout(p) => write!(f, "{:?} did not become ready", p),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::PeriodOutOfRange { period } => {
                write!(f, "period {} below minimum of 3", period)
            }
            ConfigError::DutyOutOfRange { duty, period } => {
                write!(f, "duty {} outside 2..={} for period {}", duty, period.saturating_sub(1), period)
            }
            ConfigError::FrequencyOutOfRange { hz } => {
                write!(f, "frequency {} Hz not representable", hz)
            }
            ConfigError::PercentOutOfRange { percent } => {
                write!(f, "duty {}% above 100%", percent)
            }
            ConfigError::NotRunning => f.write_str("pwm generator not running"),
        }
    }
}
