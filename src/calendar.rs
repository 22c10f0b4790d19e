// 📅 Calendar - Day-of-year ordinals
// Pure functions: the calendar rule is always an explicit parameter, dates are read in UTC

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CALENDAR POLICY
// ============================================================================

/// How a date maps to its day-of-year ordinal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarPolicy {
    /// Proleptic Gregorian ordinal of the date within its own year (1..=366).
    /// Mar 1 is day 61 in a leap year and day 60 otherwise.
    #[default]
    Gregorian,

    /// Ordinal within a 365-day year (1..=365).
    /// In leap years Feb 29 collapses onto Feb 28 and later days shift back by one,
    /// so the same month/day always gets the same ordinal.
    FixedNonLeap,
}

impl CalendarPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarPolicy::Gregorian => "gregorian",
            CalendarPolicy::FixedNonLeap => "fixed-non-leap",
        }
    }
}

impl fmt::Display for CalendarPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gregorian" => Ok(CalendarPolicy::Gregorian),
            "fixed-non-leap" | "fixed" => Ok(CalendarPolicy::FixedNonLeap),
            other => Err(format!(
                "Unknown calendar policy '{}' (expected 'gregorian' or 'fixed-non-leap')",
                other
            )),
        }
    }
}

// ============================================================================
// ORDINALS
// ============================================================================

/// Ordinal of Feb 29 in a leap year
const LEAP_DAY: u32 = 60;

/// Day-of-year ordinal of `instant` under `policy`
pub fn day_of_year(instant: DateTime<Utc>, policy: CalendarPolicy) -> u32 {
    let date = instant.date_naive();
    let ordinal = date.ordinal();

    match policy {
        CalendarPolicy::Gregorian => ordinal,
        CalendarPolicy::FixedNonLeap => {
            if date.leap_year() && ordinal >= LEAP_DAY {
                ordinal - 1
            } else {
                ordinal
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
