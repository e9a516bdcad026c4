//! Output time units and display modes.
//!
//! Iteration times are always stored in microseconds. A subject chooses the
//! unit (and whether to show time or throughput) its results are shown in.

use serde::{Deserialize, Serialize};

use crate::format::format_decimal;

/// Unit a time is displayed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    #[default]
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

/// Whether a measurement is shown as elapsed time or operations per unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    Time,
    Throughput,
}

impl TimeUnit {
    /// Number of microseconds in one of this unit.
    pub fn microseconds(self) -> f64 {
        match self {
            TimeUnit::Microseconds => 1.0,
            TimeUnit::Milliseconds => 1_000.0,
            TimeUnit::Seconds => 1_000_000.0,
            TimeUnit::Minutes => 60_000_000.0,
            TimeUnit::Hours => 3_600_000_000.0,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Microseconds => "μs",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
        }
    }

    /// Converts a microsecond measurement into this unit.
    ///
    /// In throughput mode the result is operations per unit; a zero time
    /// yields zero rather than infinity.
    ///
    /// # Example
    ///
    /// ```
    /// use benchview_core::{OutputMode, TimeUnit};
    ///
    /// assert_eq!(TimeUnit::Milliseconds.convert(2_500.0, OutputMode::Time), 2.5);
    /// assert_eq!(TimeUnit::Milliseconds.convert(500.0, OutputMode::Throughput), 2.0);
    /// ```
    pub fn convert(self, micros: f64, mode: OutputMode) -> f64 {
        match mode {
            OutputMode::Time => micros / self.microseconds(),
            OutputMode::Throughput => {
                if micros == 0.0 {
                    0.0
                } else {
                    self.microseconds() / micros
                }
            }
        }
    }

    /// Suffix describing a converted value, e.g. `μs` or `ops/ms`.
    pub fn dest_suffix(self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Time => self.suffix().to_string(),
            OutputMode::Throughput => format!("ops/{}", self.suffix()),
        }
    }

    /// Converts and renders with a fixed number of fractional digits.
    pub fn format(self, micros: f64, mode: OutputMode, precision: usize) -> String {
        format_decimal(self.convert(micros, mode), precision)
    }
}
