// 📂 Loader - People from CSV
// Header: Name,Birth_Timestamp (signed seconds since the Unix epoch)

use crate::person::Person;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load people from a CSV file, keeping row order
pub fn load_people_csv(csv_path: &Path) -> Result<Vec<Person>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open people file: {:?}", csv_path))?;

    let people = read_people_csv(file)
        .with_context(|| format!("Failed to load people from {:?}", csv_path))?;

    debug!("Loaded {} people from {:?}", people.len(), csv_path);
    Ok(people)
}

/// Read people from any CSV source
pub fn read_people_csv<R: Read>(reader: R) -> Result<Vec<Person>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut people = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // Row 1 is the header
        let person: Person =
            result.with_context(|| format!("Failed to parse person on row {}", index + 2))?;
        people.push(person);
    }

    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::sample_people;
    use std::io::Write;

    const SAMPLE_CSV: &str = "Name,Birth_Timestamp\n\
                              Alice,577209600\n\
                              Bob,690397200\n\
                              Carol,-211478400\n";

    #[test]
    fn test_read_sample_csv() {
        let people = read_people_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(people, sample_people());
    }

    #[test]
    fn test_read_trims_whitespace() {
        let csv = "Name, Birth_Timestamp\n  Dave , 0 \n";
        let people = read_people_csv(csv.as_bytes()).unwrap();

        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Dave");
        assert_eq!(people[0].timestamp(), 0);
    }

    #[test]
    fn test_header_only_is_empty() {
        let people = read_people_csv("Name,Birth_Timestamp\n".as_bytes()).unwrap();
        assert!(people.is_empty());
    }

    #[test]
    fn test_bad_timestamp_reports_row() {
        let csv = "Name,Birth_Timestamp\nAlice,577209600\nBob,yesterday\n";
        let err = read_people_csv(csv.as_bytes()).unwrap_err();

        assert!(format!("{:#}", err).contains("row 3"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let people = load_people_csv(file.path()).unwrap();
        assert_eq!(people.len(), 3);
        assert_eq!(people[2].name, "Carol");
    }

    #[test]
    fn test_bundled_data_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/people.csv");
        assert_eq!(load_people_csv(&path).unwrap(), sample_people());
    }

    #[test]
    fn test_missing_file() {
        let err = load_people_csv(Path::new("/nonexistent/people.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open people file"));
    }
}
