use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::StoreError;

/// A persisted survey row: the answer columns plus the server-assigned ones.
///
/// Rows are immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: String,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub row: T,
}

/// RFC 3339, or a timestamp without offset read as UTC.
fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(at.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| D::Error::custom(format!("invalid timestamp {raw:?}")))
}

/// Rows of one collection that decoded, and the ones that did not.
#[derive(Debug)]
pub struct Decoded<T> {
    pub rows: Vec<Stored<T>>,
    pub rejected: Vec<StoreError>,
}

impl<T> Default for Decoded<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> From<Vec<Stored<T>>> for Decoded<T> {
    fn from(rows: Vec<Stored<T>>) -> Self {
        Self {
            rows,
            rejected: Vec::new(),
        }
    }
}

impl<T: DeserializeOwned> Stored<T> {
    /// Decode one raw row returned by a store for `collection`.
    pub fn decode(collection: &str, value: serde_json::Value) -> Result<Self, StoreError> {
        let id = value
            .get("id")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        serde_json::from_value(value).map_err(|source| StoreError::Decode {
            collection: collection.to_string(),
            id,
            source,
        })
    }

    /// Decode every row, keeping order. A bad row is set aside, not fatal.
    pub fn decode_all(collection: &str, values: Vec<serde_json::Value>) -> Decoded<T> {
        let mut decoded = Decoded::default();
        for value in values {
            match Self::decode(collection, value) {
                Ok(row) => decoded.rows.push(row),
                Err(err) => decoded.rejected.push(err),
            }
        }
        decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(default)]
        primary_role: Option<String>,
    }

    fn decode(values: Vec<serde_json::Value>) -> Decoded<Row> {
        Stored::<Row>::decode_all("real_estate_surveys", values)
    }

    #[test]
    fn decodes_server_columns_and_flattened_row() {
        let decoded = decode(vec![json!({
            "id": "a1",
            "created_at": "2025-06-01T10:00:00Z",
            "primary_role": "Property Manager",
        })]);

        assert!(decoded.rejected.is_empty());
        assert_eq!(decoded.rows[0].id, "a1");
        assert_eq!(
            decoded.rows[0].row.primary_role.as_deref(),
            Some("Property Manager")
        );
    }

    #[test]
    fn null_columns_decode_as_none() {
        let decoded = decode(vec![json!({
            "id": "a1",
            "created_at": "2025-06-01T10:00:00Z",
            "primary_role": null,
        })]);
        assert_eq!(decoded.rows[0].row.primary_role, None);
    }

    #[test]
    fn offset_less_timestamps_are_utc() {
        let decoded = decode(vec![
            json!({ "id": "a1", "created_at": "2025-02-03T10:00:00.123456" }),
            json!({ "id": "a2", "created_at": "2025-02-03 23:30:00" }),
            json!({ "id": "a3", "created_at": "2025-02-03T10:00:00+01:00" }),
        ]);

        assert!(decoded.rejected.is_empty());
        let times: Vec<String> = decoded
            .rows
            .iter()
            .map(|row| row.created_at.format("%Y-%m-%d %H:%M:%S").to_string())
            .collect();
        assert_eq!(
            times,
            vec!["2025-02-03 10:00:00", "2025-02-03 23:30:00", "2025-02-03 09:00:00"]
        );
    }

    #[test]
    fn bad_rows_are_set_aside_with_their_id() {
        let decoded = decode(vec![
            json!({ "id": "good", "created_at": "2025-06-01T10:00:00Z" }),
            json!({ "id": "a1" }),
            json!({ "id": "a2", "created_at": "yesterday" }),
            json!({ "created_at": "2025-06-01T10:00:00Z" }),
        ]);

        assert_eq!(decoded.rows.len(), 1);
        assert_eq!(decoded.rows[0].id, "good");

        let ids: Vec<Option<&str>> = decoded
            .rejected
            .iter()
            .map(|err| match err {
                StoreError::Decode { id, .. } => id.as_deref(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(ids, vec![Some("a1"), Some("a2"), None]);
        assert!(decoded.rejected[1].to_string().contains("row a2"));
    }
}
