//! Hospital records returned by the data backend
//!
//! The `/data` endpoint returns rows from a public hospital dataset. The
//! columns are not under our control and new ones appear without notice, so
//! the record is kept as an opaque JSON object. Accessors expose the handful
//! of columns the UI renders; everything else passes through untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One hospital row, exactly as the backend sent it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HospitalRecord(Value);

impl HospitalRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw JSON value backing this record.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// "Hospital Name" column.
    pub fn name(&self) -> Option<&str> {
        self.str_field("Hospital Name")
    }

    /// "City" column.
    pub fn city(&self) -> Option<&str> {
        self.str_field("City")
    }

    /// "State" column.
    pub fn state(&self) -> Option<&str> {
        self.str_field("State")
    }

    /// "Hospital Type" column.
    pub fn hospital_type(&self) -> Option<&str> {
        self.str_field("Hospital Type")
    }

    /// "Hospital overall rating" column.
    ///
    /// The dataset encodes this inconsistently (sometimes a string, sometimes
    /// a number, sometimes "Not Available"), so it is normalized to a string.
    pub fn overall_rating(&self) -> Option<String> {
        match self.0.get("Hospital overall rating")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exposes_known_columns() {
        let record = HospitalRecord::new(json!({
            "Hospital Name": "Austin General",
            "City": "AUSTIN",
            "State": "TX",
            "Hospital Type": "Acute Care Hospitals",
            "Hospital overall rating": "4",
        }));

        assert_eq!(record.name(), Some("Austin General"));
        assert_eq!(record.city(), Some("AUSTIN"));
        assert_eq!(record.state(), Some("TX"));
        assert_eq!(record.hospital_type(), Some("Acute Care Hospitals"));
        assert_eq!(record.overall_rating(), Some("4".to_string()));
    }

    #[test]
    fn missing_columns_are_none() {
        let record = HospitalRecord::new(json!({ "ZIP Code": "73301" }));

        assert_eq!(record.name(), None);
        assert_eq!(record.overall_rating(), None);
    }

    #[test]
    fn numeric_rating_is_normalized() {
        let record = HospitalRecord::new(json!({ "Hospital overall rating": 3 }));

        assert_eq!(record.overall_rating(), Some("3".to_string()));
    }

    #[test]
    fn deserializes_transparently_from_a_plain_object() {
        let raw = r#"{"Hospital Name":"Mercy","City":"Tulsa"}"#;
        let record: HospitalRecord = serde_json::from_str(raw).expect("valid record json");

        assert_eq!(record.name(), Some("Mercy"));
        assert_eq!(record.as_value().get("City"), Some(&json!("Tulsa")));
    }
}
