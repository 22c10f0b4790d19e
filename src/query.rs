// 🔎 Query - Projection, filter and reductions over people
// Every function is pure: inputs are borrowed, nothing is mutated, the clock is never read here

use crate::calendar::{day_of_year, CalendarPolicy};
use crate::person::Person;
use chrono::{DateTime, Utc};

// ============================================================================
// PROJECTION
// ============================================================================

/// Names of all people, same order and length as the input
pub fn names_of(people: &[Person]) -> Vec<String> {
    people.iter().map(|person| person.name.clone()).collect()
}

// ============================================================================
// FILTER
// ============================================================================

/// People whose birthday is still ahead in the year of `reference`,
/// using Gregorian ordinals. See [`still_to_celebrate_with`].
pub fn still_to_celebrate(people: &[Person], reference: DateTime<Utc>) -> Vec<Person> {
    still_to_celebrate_with(people, reference, CalendarPolicy::Gregorian)
}

/// People whose birthday ordinal is >= the ordinal of `reference`.
///
/// A birthday falling on the reference day counts as not yet celebrated.
/// Relative order is preserved.
pub fn still_to_celebrate_with(
    people: &[Person],
    reference: DateTime<Utc>,
    policy: CalendarPolicy,
) -> Vec<Person> {
    let today = day_of_year(reference, policy);

    people
        .iter()
        .filter(|person| day_of_year(person.birthdate, policy) >= today)
        .cloned()
        .collect()
}

// ============================================================================
// REDUCTIONS
// ============================================================================

/// The earlier born of two people.
///
/// `candidate` wins only when strictly earlier, so on equal birthdates the
/// accumulator is kept.
pub fn earlier_born<'a>(best: &'a Person, candidate: &'a Person) -> &'a Person {
    if candidate.birthdate < best.birthdate {
        candidate
    } else {
        best
    }
}

/// Person with the earliest birthdate, `None` for an empty slice.
///
/// Ties keep the first one encountered.
pub fn oldest(people: &[Person]) -> Option<&Person> {
    let (first, rest) = people.split_first()?;
    Some(rest.iter().fold(first, earlier_born))
}

/// Earliest birth instant, folded from an absent accumulator
pub fn earliest_birthdate(people: &[Person]) -> Option<DateTime<Utc>> {
    people.iter().fold(None, |earliest, person| match earliest {
        Some(date) if date <= person.birthdate => Some(date),
        _ => Some(person.birthdate),
    })
}

// ============================================================================
// TESTS
// ============================================================================
