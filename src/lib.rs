// People Query - Core Library
// Name projection, birthday filter and oldest-person reductions over immutable records

pub mod person;
pub mod calendar;
pub mod query;
pub mod primes;   // Standalone: primality check
pub mod loader;
pub mod config;
pub mod report;

// Re-export commonly used types
pub use person::{Person, sample_people};
pub use calendar::{CalendarPolicy, day_of_year};
pub use query::{
    names_of, still_to_celebrate, still_to_celebrate_with,
    earlier_born, oldest, earliest_birthdate,
};
pub use primes::{is_prime, primes_up_to};
pub use loader::{load_people_csv, read_people_csv};
pub use config::QueryConfig;
pub use report::QueryReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
