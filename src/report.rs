// 📋 Query Report - All query results for one reference instant

use crate::calendar::CalendarPolicy;
use crate::person::Person;
use crate::query::{earliest_birthdate, names_of, oldest, still_to_celebrate_with};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    pub reference: DateTime<Utc>,
    pub calendar: CalendarPolicy,
    pub total_people: usize,
    pub names: Vec<String>,
    pub still_to_celebrate: Vec<Person>,
    pub oldest: Option<Person>,
    pub earliest_birthdate: Option<DateTime<Utc>>,
}

impl QueryReport {
    /// Run every query against `people` as of `reference`
    pub fn build(people: &[Person], reference: DateTime<Utc>, calendar: CalendarPolicy) -> Self {
        QueryReport {
            reference,
            calendar,
            total_people: people.len(),
            names: names_of(people),
            still_to_celebrate: still_to_celebrate_with(people, reference, calendar),
            oldest: oldest(people).cloned(),
            earliest_birthdate: earliest_birthdate(people),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} people as of {} ({}): {} still to celebrate, oldest: {}",
            self.total_people,
            self.reference.format("%Y-%m-%d"),
            self.calendar,
            self.still_to_celebrate.len(),
            self.oldest
                .as_ref()
                .map(|p| format!("{} ({})", p.name, p.birthdate.format("%Y-%m-%d")))
                .unwrap_or_else(|| "none".to_string())
        )
    }
}
