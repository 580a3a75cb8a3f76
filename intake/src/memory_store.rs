//! In-process store for tests and offline runs.
//!
//! `MemoryStore` behaves like the hosted backend: it assigns `id` and
//! `created_at` on insert and returns rows newest first. It can also be told
//! to fail the next call, which is how submission failures are tested.
//!
//! # Example
//!
//! ```rust
//! use intake::{Gateway, MemoryStore, RecordingNotifier, Route, Session};
//! use intake::surveys::{UserSingle, UserSurvey};
//!
//! let store = MemoryStore::new();
//! let notifier = RecordingNotifier::new();
//! let gateway = Gateway::new(&store, &notifier);
//!
//! let mut session = Session::<UserSurvey>::new();
//! session.set(UserSingle::PrimaryReason, "Just browsing/researching");
//!
//! assert_eq!(gateway.submit(&mut session).unwrap(), Route::Complete);
//! assert_eq!(store.len("user_surveys"), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::anyhow;
use chrono::{DateTime, FixedOffset, Utc};
use intake_types::{StoreError, SurveyStore};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<String, Vec<Value>>,
    fail_inserts: usize,
    fail_selects: usize,
}

/// A store that keeps rows in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a row exactly as given, e.g. one with a fixed `created_at`.
    pub fn seed(&self, collection: &str, row: Value) {
        self.lock()
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(row);
    }

    /// Make the next `insert` fail with a backend error.
    pub fn fail_next_insert(&self) {
        self.lock().fail_inserts += 1;
    }

    /// Make the next `select` fail with a backend error.
    pub fn fail_next_select(&self) {
        self.lock().fail_selects += 1;
    }

    /// Number of rows in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.lock().collections.get(collection).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().collections.values().all(Vec::is_empty)
    }

    /// Rows of a collection in insertion order.
    pub fn rows(&self, collection: &str) -> Vec<Value> {
        self.lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

fn created_at(row: &Value) -> Option<DateTime<FixedOffset>> {
    row.get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

impl SurveyStore for MemoryStore {
    fn insert(&self, collection: &str, row: Value) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.fail_inserts > 0 {
            inner.fail_inserts -= 1;
            return Err(StoreError::backend(anyhow!("insert into {collection} refused")));
        }

        let Value::Object(mut fields) = row else {
            return Err(StoreError::backend(anyhow!(
                "row for {collection} must be a JSON object"
            )));
        };
        fields.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        fields.insert("created_at".into(), Value::String(Utc::now().to_rfc3339()));

        debug!(collection, "inserted row");
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(Value::Object(fields));
        Ok(())
    }

    fn select(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let mut inner = self.lock();
        if inner.fail_selects > 0 {
            inner.fail_selects -= 1;
            return Err(StoreError::backend(anyhow!("select from {collection} refused")));
        }

        // later inserts win ties on equal timestamps
        let mut rows: Vec<Value> = inner
            .collections
            .get(collection)
            .map(|rows| rows.iter().rev().cloned().collect())
            .unwrap_or_default();
        rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_assigns_server_columns() {
        let store = MemoryStore::new();
        store
            .insert("user_surveys", json!({ "primary_reason": "Other" }))
            .unwrap();

        let rows = store.select("user_surveys").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["primary_reason"], "Other");
        assert!(Uuid::parse_str(rows[0]["id"].as_str().unwrap()).is_ok());
        assert!(created_at(&rows[0]).is_some());
    }

    #[test]
    fn select_is_newest_first() {
        let store = MemoryStore::new();
        store.seed(
            "real_estate_surveys",
            json!({ "id": "old", "created_at": "2025-01-01T00:00:00Z" }),
        );
        store.seed(
            "real_estate_surveys",
            json!({ "id": "new", "created_at": "2025-03-01T00:00:00Z" }),
        );
        store.seed(
            "real_estate_surveys",
            json!({ "id": "mid", "created_at": "2025-02-01T00:00:00+01:00" }),
        );

        let ids: Vec<_> = store
            .select("real_estate_surveys")
            .unwrap()
            .iter()
            .map(|row| row["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.select("nothing_here").unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn armed_failures_fire_once() {
        let store = MemoryStore::new();
        store.fail_next_insert();
        store.fail_next_select();

        assert!(store.insert("user_surveys", json!({})).is_err());
        assert!(store.insert("user_surveys", json!({})).is_ok());
        assert!(store.select("user_surveys").is_err());
        assert_eq!(store.select("user_surveys").unwrap().len(), 1);
    }

    #[test]
    fn non_object_rows_are_rejected() {
        let store = MemoryStore::new();
        assert!(store.insert("user_surveys", json!(["not", "a", "row"])).is_err());
        assert_eq!(store.len("user_surveys"), 0);
    }
}
