//! Document store boundary.
//!
//! The platform backend is a managed document database; this trait is
//! the seam the registry talks through. [`MemoryStore`] is the reference
//! implementation used by tests and local development.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};

use lifecycle::AuditEntry;

use crate::error::{RegistryError, Result};

/// A document store keyed by `(collection, id)`.
///
/// `swap_status` is deliberately compare-and-swap rather than a blind
/// write: two reviewers acting on the same entity must not silently
/// lose an update or duplicate an audit entry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point read.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Full document write.
    async fn put(&self, collection: &str, id: &str, doc: Value) -> Result<()>;

    /// Shallow field merge into an existing document.
    async fn merge(&self, collection: &str, id: &str, patch: Value) -> Result<()>;

    /// All documents in a collection.
    async fn list(&self, collection: &str) -> Result<Vec<Value>>;

    /// Compare-and-swap a state field.
    ///
    /// Sets `field` to `next` and bumps `updatedAt` only if the stored
    /// value still equals `expected`; otherwise fails with
    /// [`RegistryError::ConcurrentModification`] and writes nothing.
    async fn swap_status(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        expected: &str,
        next: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Append one audit entry to a timeline collection.
    async fn append_audit(&self, collection: &str, entry: &AuditEntry) -> Result<()>;

    /// Timeline entries for one entity, most recent first.
    async fn audit_for(&self, collection: &str, entity_id: &str) -> Result<Vec<AuditEntry>>;
}

/// In-memory document store backed by dashmap.
pub struct MemoryStore {
    collections: DashMap<String, DashMap<String, Value>>,
    timelines: DashMap<String, Vec<AuditEntry>>,
    // Test hook: simulate a store outage.
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
            timelines: DashMap::new(),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Simulate the backing store going down; all operations fail with
    /// [`RegistryError::StoreUnavailable`] until restored.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(RegistryError::StoreUnavailable(
                "memory store marked unavailable".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        self.check_available()?;
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id).map(|doc| doc.clone())))
    }

    async fn put(&self, collection: &str, id: &str, doc: Value) -> Result<()> {
        self.check_available()?;
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), doc);
        Ok(())
    }

    async fn merge(&self, collection: &str, id: &str, patch: Value) -> Result<()> {
        self.check_available()?;
        let docs = self
            .collections
            .entry(collection.to_string())
            .or_default();
        let mut existing = docs.get_mut(&id.to_string()).ok_or_else(|| {
            RegistryError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }
        })?;
        if let (Some(doc), Some(fields)) = (existing.as_object_mut(), patch.as_object()) {
            for (key, value) in fields {
                doc.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>> {
        self.check_available()?;
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.iter().map(|doc| doc.clone()).collect())
            .unwrap_or_default())
    }

    async fn swap_status(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        expected: &str,
        next: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        self.check_available()?;
        let docs = self
            .collections
            .get(collection)
            .ok_or_else(|| RegistryError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let mut doc = docs.get_mut(id).ok_or_else(|| RegistryError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        })?;

        let actual = doc
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if actual != expected {
            return Err(RegistryError::ConcurrentModification {
                entity_id: id.to_string(),
                expected: expected.to_string(),
                actual,
            });
        }

        if let Some(fields) = doc.as_object_mut() {
            fields.insert(field.to_string(), Value::String(next.to_string()));
            fields.insert(
                "updatedAt".to_string(),
                serde_json::to_value(updated_at)
                    .map_err(|e| RegistryError::StoreUnavailable(e.to_string()))?,
            );
        }
        Ok(())
    }

    async fn append_audit(&self, collection: &str, entry: &AuditEntry) -> Result<()> {
        self.check_available()?;
        self.timelines
            .entry(collection.to_string())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn audit_for(&self, collection: &str, entity_id: &str) -> Result<Vec<AuditEntry>> {
        self.check_available()?;
        let mut entries: Vec<AuditEntry> = self
            .timelines
            .get(collection)
            .map(|timeline| {
                timeline
                    .iter()
                    .filter(|e| e.entity_id == entity_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_put_get_merge() {
        let store = MemoryStore::new();
        store
            .put("ipr", "ipr-1", json!({"status": "draft", "title": "Filter"}))
            .await
            .unwrap();

        store
            .merge("ipr", "ipr-1", json!({"title": "Water filter"}))
            .await
            .unwrap();

        let doc = store.get("ipr", "ipr-1").await.unwrap().unwrap();
        assert_eq!(doc["status"], "draft");
        assert_eq!(doc["title"], "Water filter");
    }

    #[tokio::test]
    async fn test_merge_missing_doc_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .merge("ipr", "nope", json!({"title": "x"}))
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_swap_status_enforces_expected_state() {
        let store = MemoryStore::new();
        store
            .put("ipr", "ipr-1", json!({"status": "filed"}))
            .await
            .unwrap();

        // Matching expectation wins.
        store
            .swap_status("ipr", "ipr-1", "status", "filed", "published", Utc::now())
            .await
            .unwrap();

        // A second caller still expecting "filed" loses the race.
        let err = store
            .swap_status("ipr", "ipr-1", "status", "filed", "rejected", Utc::now())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::ConcurrentModification {
                entity_id: "ipr-1".to_string(),
                expected: "filed".to_string(),
                actual: "published".to_string(),
            }
        );

        let doc = store.get("ipr", "ipr-1").await.unwrap().unwrap();
        assert_eq!(doc["status"], "published");
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_everything() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        let err = store.get("ipr", "ipr-1").await.unwrap_err();
        assert!(matches!(err, RegistryError::StoreUnavailable(_)));
    }
}
