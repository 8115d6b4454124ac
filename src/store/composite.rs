// Copyright 2025 Cowboy AI, LLC.

//! Composite store binding a runtime and a declarative backend

use crate::composite::{
    any_exists, guarded_create, guarded_delete, guarded_update, merge_list, merge_list_bounded,
    merged_count, resolve,
};
use crate::errors::{StoreError, StoreResult};
use crate::pagination::{merge_by_identity, MergedPage, PageRequest};
use crate::store::backend::{DeclarativeStore, Resource, RuntimeStore};
use std::marker::PhantomData;

/// A single consistent view over one resource type's two backing stores
///
/// Every operation delegates to the coordination engine; the store itself
/// owns no merge or guard logic. Reads resolve runtime-first with
/// declarative fallback, existence checks gate on the declarative store,
/// mutations are blocked for declarative ids, and merged listings give
/// declarative resources precedence on identity collisions.
#[derive(Clone)]
pub struct CompositeStore<T, R, D>
where
    T: Resource,
    R: RuntimeStore<T>,
    D: DeclarativeStore<T>,
{
    runtime: R,
    declarative: D,
    max_records: i64,
    _resource: PhantomData<T>,
}

impl<T, R, D> CompositeStore<T, R, D>
where
    T: Resource,
    R: RuntimeStore<T>,
    D: DeclarativeStore<T>,
{
    /// Create a composite store with no record cap
    pub fn new(runtime: R, declarative: D) -> Self {
        Self {
            runtime,
            declarative,
            max_records: 0,
            _resource: PhantomData,
        }
    }

    /// Set the hard cap on combined record counts for bounded listings
    ///
    /// `0` means no cap.
    pub fn with_max_records(mut self, max_records: i64) -> Self {
        self.max_records = max_records;
        self
    }

    /// The configured record cap (`0` = no cap)
    pub fn max_records(&self) -> i64 {
        self.max_records
    }

    /// The runtime backend
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// The declarative backend
    pub fn declarative(&self) -> &D {
        &self.declarative
    }

    /// Get a resource by id, runtime store first, declarative fallback
    pub async fn get(&self, id: &str) -> StoreResult<T> {
        resolve(|| self.runtime.get(id), || self.declarative.get(id)).await
    }

    /// Create a runtime resource unless its id is declared
    pub async fn create(&self, resource: T) -> StoreResult<()> {
        guarded_create(
            resource,
            |r| r.resource_id().to_string(),
            |id| async move { self.declarative.exists(&id).await },
            |r| self.runtime.create(r),
        )
        .await
    }

    /// Update a runtime resource unless its id is declared
    pub async fn update(&self, resource: T) -> StoreResult<()> {
        guarded_update(
            resource,
            |r| r.resource_id().to_string(),
            |id| async move { self.declarative.exists(&id).await },
            |r| self.runtime.update(r),
            |id| StoreError::ImmutableResource {
                resource_type: T::resource_type().to_string(),
                id,
            },
        )
        .await
    }

    /// Delete a runtime resource unless its id is declared
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        guarded_delete(
            id,
            |id| async move { self.declarative.exists(&id).await },
            |id| async move { self.runtime.delete(&id).await },
            |id| StoreError::ImmutableResource {
                resource_type: T::resource_type().to_string(),
                id,
            },
        )
        .await
    }

    /// Check whether the id exists in either store, declarative first
    pub async fn exists(&self, id: &str) -> StoreResult<bool> {
        any_exists(|| self.declarative.exists(id), || self.runtime.exists(id)).await
    }

    /// Combined resource count across both stores
    pub async fn count(&self) -> StoreResult<i64> {
        merged_count(|| self.runtime.count(), || self.declarative.count()).await
    }

    /// Merged, deduplicated page with no cap on the combined size
    ///
    /// Fetches both stores in full; use [`CompositeStore::list_bounded`] for
    /// resource types with more than a handful of entries.
    pub async fn list(&self, page: PageRequest) -> StoreResult<Vec<T>> {
        merge_list(
            || self.runtime.count(),
            || self.declarative.count(),
            |limit| self.runtime.fetch(limit),
            |limit| self.declarative.fetch(limit),
            |runtime_items, declarative_items| {
                merge_by_identity(declarative_items, runtime_items, |r| r.resource_id())
            },
            page,
        )
        .await
    }

    /// Merged, deduplicated page under the configured record cap
    pub async fn list_bounded(&self, page: PageRequest) -> StoreResult<MergedPage<T>> {
        merge_list_bounded(
            || self.runtime.count(),
            || self.declarative.count(),
            |limit| self.runtime.fetch(limit),
            |limit| self.declarative.fetch(limit),
            |runtime_items, declarative_items| {
                merge_by_identity(declarative_items, runtime_items, |r| r.resource_id())
            },
            page,
            self.max_records,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{InMemoryDeclarativeStore, InMemoryRuntimeStore};

    #[derive(Debug, Clone, PartialEq)]
    struct Application {
        id: String,
        label: String,
    }

    impl Resource for Application {
        fn resource_id(&self) -> &str {
            &self.id
        }

        fn resource_type() -> &'static str {
            "application"
        }
    }

    fn app(id: &str, label: &str) -> Application {
        Application {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    fn store_with(
        declared: Vec<Application>,
    ) -> CompositeStore<
        Application,
        InMemoryRuntimeStore<Application>,
        InMemoryDeclarativeStore<Application>,
    > {
        CompositeStore::new(
            InMemoryRuntimeStore::new(),
            InMemoryDeclarativeStore::from_resources(declared),
        )
    }

    #[tokio::test]
    async fn get_prefers_runtime_row() {
        let store = store_with(vec![app("console", "declared console")]);
        store
            .runtime()
            .create(app("console", "runtime console"))
            .await
            .unwrap();

        // read precedence is runtime-first, unlike merged listings
        let found = store.get("console").await.unwrap();
        assert_eq!(found.label, "runtime console");
    }

    #[tokio::test]
    async fn get_falls_back_to_declared_resource() {
        let store = store_with(vec![app("console", "declared console")]);

        let found = store.get("console").await.unwrap();
        assert_eq!(found.label, "declared console");
    }

    #[tokio::test]
    async fn get_missing_everywhere_is_not_found() {
        let store = store_with(vec![]);

        let err = store.get("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn create_rejects_declared_id() {
        let store = store_with(vec![app("console", "declared console")]);

        let err = store.create(app("console", "shadow")).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.runtime().len().await, 0);
    }

    #[tokio::test]
    async fn mutations_on_declared_resources_are_immutable_errors() {
        let store = store_with(vec![app("console", "declared console")]);

        let err = store.update(app("console", "renamed")).await.unwrap_err();
        assert!(err.is_immutable());
        assert!(err.to_string().contains("application"));

        let err = store.delete("console").await.unwrap_err();
        assert!(err.is_immutable());
    }

    #[tokio::test]
    async fn runtime_resources_stay_mutable() {
        let store = store_with(vec![app("console", "declared console")]);

        store.create(app("grafana", "dashboards")).await.unwrap();
        store.update(app("grafana", "observability")).await.unwrap();
        assert_eq!(store.get("grafana").await.unwrap().label, "observability");

        store.delete("grafana").await.unwrap();
        assert!(store.get("grafana").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn exists_and_count_span_both_stores() {
        let store = store_with(vec![app("console", "declared console")]);
        store.create(app("grafana", "dashboards")).await.unwrap();

        assert!(store.exists("console").await.unwrap());
        assert!(store.exists("grafana").await.unwrap());
        assert!(!store.exists("ghost").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn list_gives_declared_resources_precedence() {
        let store = store_with(vec![app("console", "declared console")]);
        store.create(app("console-shadow", "runtime row")).await.unwrap();
        store
            .runtime()
            .create(app("console", "runtime shadow"))
            .await
            .unwrap();

        let items = store.list(PageRequest::new(10, 0)).await.unwrap();

        // the shared id appears once, with the declared payload
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "console");
        assert_eq!(items[0].label, "declared console");
    }

    #[tokio::test]
    async fn list_bounded_honours_configured_cap() {
        let store = store_with(vec![
            app("console", "declared console"),
            app("grafana", "declared dashboards"),
        ])
        .with_max_records(1);

        let page = store.list_bounded(PageRequest::new(10, 0)).await.unwrap();
        assert!(page.limit_exceeded);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn list_bounded_without_cap_matches_list() {
        let store = store_with(vec![app("console", "declared console")]);
        store.create(app("grafana", "dashboards")).await.unwrap();

        let page = PageRequest::new(10, 0);
        let unbounded = store.list(page).await.unwrap();
        let bounded = store.list_bounded(page).await.unwrap();

        assert!(!bounded.limit_exceeded);
        assert_eq!(bounded.items, unbounded);
    }
}
