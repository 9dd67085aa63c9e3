//! JSON roster sources.

mod file;
mod http;

pub use file::JsonFileRoster;
pub use http::HttpRoster;

use quiz_core::model::Person;
use serde_json::Value;

use crate::repository::StorageError;

/// Parse a roster payload.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for invalid JSON and
/// `StorageError::NotASequence` when the top-level value is not an array.
pub fn parse_roster(bytes: &[u8]) -> Result<Vec<Person>, StorageError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| StorageError::Serialization(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(StorageError::NotASequence);
    };
    Ok(items.iter().map(Person::from_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_people() {
        let people = parse_roster(
            br#"[
                {"name": "Jane Doe", "department": "math", "image": "a.jpg"},
                {"name": "Bob Lee", "department": "Math", "image": "b.jpg", "variants": ["Bobby"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].variants(), ["Bobby"]);
    }

    #[test]
    fn keeps_malformed_records() {
        let people = parse_roster(br#"[{"department": 3}, null]"#).unwrap();
        assert_eq!(people, vec![Person::default(), Person::default()]);
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_roster(br#"{"people": []}"#).unwrap_err();
        assert!(matches!(err, StorageError::NotASequence));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_roster(b"[{").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
