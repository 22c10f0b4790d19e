// ⚙️ Config - Query settings as data
// Loaded from JSON; command-line flags override individual fields

use crate::calendar::CalendarPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Day-of-year rule used by the birthday filter
    pub calendar: CalendarPolicy,

    /// CSV file with people (None = built-in sample list)
    pub people_file: Option<PathBuf>,
}

impl QueryConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: QueryConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        debug!("Loaded config from {:?}: {:?}", path.as_ref(), config);
        Ok(config)
    }

    pub fn with_calendar(mut self, calendar: CalendarPolicy) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_people_file(mut self, path: PathBuf) -> Self {
        self.people_file = Some(path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = QueryConfig::default();

        assert_eq!(config.calendar, CalendarPolicy::Gregorian);
        assert!(config.people_file.is_none());
    }

    #[test]
    fn test_from_file() {
        let file = write_config(r#"{"calendar": "fixed-non-leap", "people_file": "people.csv"}"#);
        let config = QueryConfig::from_file(file.path()).unwrap();

        assert_eq!(config.calendar, CalendarPolicy::FixedNonLeap);
        assert_eq!(config.people_file, Some(PathBuf::from("people.csv")));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let file = write_config("{}");
        let config = QueryConfig::from_file(file.path()).unwrap();

        assert_eq!(config, QueryConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let file = write_config(r#"{"calendar": "lunar"}"#);
        let err = QueryConfig::from_file(file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config JSON"));
    }

    #[test]
    fn test_overrides() {
        let config = QueryConfig::default()
            .with_calendar(CalendarPolicy::FixedNonLeap)
            .with_people_file(PathBuf::from("other.csv"));

        assert_eq!(config.calendar, CalendarPolicy::FixedNonLeap);
        assert_eq!(config.people_file, Some(PathBuf::from("other.csv")));
    }
}
