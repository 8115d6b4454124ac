// Copyright 2025 Cowboy AI, LLC.

//! In-memory reference backends
//!
//! Order-preserving implementations of the backend contracts, used by tests,
//! benches, and demos. The runtime store iterates in creation order; the
//! declarative store is seeded once and iterates in declaration order, the
//! order resources appear in their configuration bundle.

use crate::errors::{StoreError, StoreResult};
use crate::store::backend::{DeclarativeStore, Resource, RuntimeStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory mutable runtime store
#[derive(Clone)]
pub struct InMemoryRuntimeStore<T> {
    resources: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Resource> InMemoryRuntimeStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            resources: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Number of stored resources
    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    /// Whether the store holds no resources
    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }
}

impl<T: Resource> Default for InMemoryRuntimeStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> RuntimeStore<T> for InMemoryRuntimeStore<T> {
    async fn get(&self, id: &str) -> StoreResult<T> {
        self.resources
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(T::resource_type(), id))
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.resources.read().await.contains_key(id))
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.resources.read().await.len() as i64)
    }

    async fn fetch(&self, limit: i64) -> StoreResult<Vec<T>> {
        let resources = self.resources.read().await;
        Ok(resources
            .values()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, resource: T) -> StoreResult<()> {
        let mut resources = self.resources.write().await;
        let id = resource.resource_id().to_string();
        if resources.contains_key(&id) {
            return Err(StoreError::InvalidOperation {
                reason: format!("{} {id} already exists", T::resource_type()),
            });
        }
        resources.insert(id, resource);
        Ok(())
    }

    async fn update(&self, resource: T) -> StoreResult<()> {
        let mut resources = self.resources.write().await;
        let id = resource.resource_id().to_string();
        if !resources.contains_key(&id) {
            return Err(StoreError::not_found(T::resource_type(), id));
        }
        resources.insert(id, resource);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut resources = self.resources.write().await;
        match resources.shift_remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::not_found(T::resource_type(), id)),
        }
    }
}

/// In-memory read-only declarative store, seeded once
#[derive(Clone)]
pub struct InMemoryDeclarativeStore<T> {
    resources: IndexMap<String, T>,
    loaded_at: DateTime<Utc>,
}

impl<T: Resource> InMemoryDeclarativeStore<T> {
    /// Seed the store from a declared resource set
    ///
    /// Declaration order is preserved; a repeated id keeps the last
    /// declaration, matching how later configuration entries override
    /// earlier ones.
    pub fn from_resources(declared: Vec<T>) -> Self {
        let mut resources = IndexMap::with_capacity(declared.len());
        for resource in declared {
            resources.insert(resource.resource_id().to_string(), resource);
        }
        Self {
            resources,
            loaded_at: Utc::now(),
        }
    }

    /// An empty declarative store
    pub fn empty() -> Self {
        Self::from_resources(Vec::new())
    }

    /// When the declared set was loaded
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of declared resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the declared set is empty
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl<T: Resource> DeclarativeStore<T> for InMemoryDeclarativeStore<T> {
    async fn get(&self, id: &str) -> StoreResult<T> {
        self.resources
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(T::resource_type(), id))
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.resources.contains_key(id))
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.resources.len() as i64)
    }

    async fn fetch(&self, limit: i64) -> StoreResult<Vec<T>> {
        Ok(self
            .resources
            .values()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct OrgUnit {
        id: String,
        name: String,
    }

    impl Resource for OrgUnit {
        fn resource_id(&self) -> &str {
            &self.id
        }

        fn resource_type() -> &'static str {
            "org_unit"
        }
    }

    fn unit(id: &str, name: &str) -> OrgUnit {
        OrgUnit {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn runtime_store_round_trip() {
        let store = InMemoryRuntimeStore::new();

        store.create(unit("ou-1", "engineering")).await.unwrap();
        assert!(store.exists("ou-1").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);

        let loaded = store.get("ou-1").await.unwrap();
        assert_eq!(loaded.name, "engineering");

        store.update(unit("ou-1", "platform")).await.unwrap();
        assert_eq!(store.get("ou-1").await.unwrap().name, "platform");

        store.delete("ou-1").await.unwrap();
        assert!(!store.exists("ou-1").await.unwrap());
    }

    #[tokio::test]
    async fn runtime_store_rejects_duplicate_create() {
        let store = InMemoryRuntimeStore::new();
        store.create(unit("ou-1", "engineering")).await.unwrap();

        let err = store.create(unit("ou-1", "sales")).await.unwrap_err();
        assert!(err.to_string().contains("ou-1"));
    }

    #[tokio::test]
    async fn runtime_store_missing_rows_are_not_found() {
        let store: InMemoryRuntimeStore<OrgUnit> = InMemoryRuntimeStore::new();

        assert!(store.get("ou-x").await.unwrap_err().is_not_found());
        assert!(store.update(unit("ou-x", "ghost")).await.unwrap_err().is_not_found());
        assert!(store.delete("ou-x").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn runtime_fetch_preserves_creation_order() {
        let store = InMemoryRuntimeStore::new();
        store.create(unit("b", "second")).await.unwrap();
        store.create(unit("a", "first")).await.unwrap();
        store.create(unit("c", "third")).await.unwrap();

        let fetched = store.fetch(2).await.unwrap();
        let ids: Vec<&str> = fetched.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn declarative_store_is_seeded_in_declaration_order() {
        let store = InMemoryDeclarativeStore::from_resources(vec![
            unit("root", "root"),
            unit("ou-hr", "people"),
        ]);

        assert_eq!(store.len(), 2);
        assert!(store.exists("root").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 2);

        let fetched = store.fetch(10).await.unwrap();
        let ids: Vec<&str> = fetched.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "ou-hr"]);
    }

    #[tokio::test]
    async fn declarative_repeated_declaration_keeps_last() {
        let store = InMemoryDeclarativeStore::from_resources(vec![
            unit("root", "old-name"),
            unit("root", "new-name"),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("root").await.unwrap().name, "new-name");
    }
}
