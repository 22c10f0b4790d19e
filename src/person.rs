// 👤 Person - Immutable name + birth instant
// Values only: a person has no identity beyond its fields

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// PERSON
// ============================================================================

/// A person record.
///
/// Created once, never mutated. `birthdate` is a single absolute instant
/// (always present) and serializes as signed seconds since the Unix epoch,
/// so dates before 1970 are negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Birth_Timestamp", with = "chrono::serde::ts_seconds")]
    pub birthdate: DateTime<Utc>,
}

impl Person {
    pub fn new(name: impl Into<String>, birthdate: DateTime<Utc>) -> Self {
        Person {
            name: name.into(),
            birthdate,
        }
    }

    /// Build from signed epoch seconds
    ///
    /// Fails only when the value is outside the range chrono can represent.
    pub fn from_timestamp(name: impl Into<String>, secs: i64) -> Result<Self> {
        let birthdate = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| anyhow!("Birth timestamp out of range: {}", secs))?;
        Ok(Person::new(name, birthdate))
    }

    /// Signed epoch seconds of the birth instant
    pub fn timestamp(&self) -> i64 {
        self.birthdate.timestamp()
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

const SAMPLE: [(&str, i64); 3] = [
    ("Alice", 577_209_600),  // 1988-04-16T16:00Z
    ("Bob", 690_397_200),    // 1991-11-17T17:00Z
    ("Carol", -211_478_400), // 1963-04-20T08:00Z
];

/// The built-in sample list, in insertion order: Alice, Bob, Carol
pub fn sample_people() -> Vec<Person> {
    SAMPLE
        .iter()
        .filter_map(|&(name, secs)| Person::from_timestamp(name, secs).ok())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    #[test]
    fn test_from_timestamp_before_epoch() {
        let carol = Person::from_timestamp("Carol", -211_478_400).unwrap();

        assert_eq!(carol.birthdate.year(), 1963);
        assert_eq!(carol.birthdate.month(), 4);
        assert_eq!(carol.birthdate.day(), 20);
        assert_eq!(carol.timestamp(), -211_478_400);
    }

    #[test]
    fn test_from_timestamp_out_of_range() {
        assert!(Person::from_timestamp("Nobody", i64::MAX).is_err());
    }

    #[test]
    fn test_sample_people_order() {
        let people = sample_people();

        assert_eq!(people.len(), 3);
        assert_eq!(people[0].name, "Alice");
        assert_eq!(people[1].name, "Bob");
        assert_eq!(people[2].name, "Carol");
        assert_eq!(
            people[0].birthdate,
            Utc.with_ymd_and_hms(1988, 4, 16, 16, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_serializes_as_epoch_seconds() {
        let bob = Person::from_timestamp("Bob", 690_397_200).unwrap();
        let json = serde_json::to_value(&bob).unwrap();

        assert_eq!(json["Name"], "Bob");
        assert_eq!(json["Birth_Timestamp"], 690_397_200);

        let back: Person = serde_json::from_value(json).unwrap();
        assert_eq!(back, bob);
    }
}
