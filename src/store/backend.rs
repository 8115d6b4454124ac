// Copyright 2025 Cowboy AI, LLC.

//! Backend contracts for the runtime and declarative stores

use crate::errors::StoreResult;
use async_trait::async_trait;

/// A resource with a stable string identity
///
/// The engine never inspects resource internals beyond the identity; the
/// type label is used in not-found and immutability errors and in logs.
pub trait Resource: Clone + Send + Sync {
    /// The resource's unique identifier
    fn resource_id(&self) -> &str;

    /// Label for this resource type
    fn resource_type() -> &'static str;
}

/// The mutable runtime backend for one resource type
///
/// Implementations map onto the system's read-write store (typically a
/// relational database). Timeouts and retries are the implementation's
/// concern; the coordination engine never retries.
#[async_trait]
pub trait RuntimeStore<T: Resource>: Send + Sync {
    /// Load a resource by id, failing with a not-found error when absent
    async fn get(&self, id: &str) -> StoreResult<T>;

    /// Check whether a resource with this id exists
    async fn exists(&self, id: &str) -> StoreResult<bool>;

    /// Count stored resources
    async fn count(&self) -> StoreResult<i64>;

    /// Fetch up to `limit` resources in the store's own order
    async fn fetch(&self, limit: i64) -> StoreResult<Vec<T>>;

    /// Persist a new resource
    async fn create(&self, resource: T) -> StoreResult<()>;

    /// Replace an existing resource
    async fn update(&self, resource: T) -> StoreResult<()>;

    /// Remove a resource by id
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

/// The read-only declarative backend for one resource type
///
/// Declarative resources are loaded from versioned configuration deployed
/// alongside the system. They are immutable and are never written through
/// this crate, so the contract is the read subset of [`RuntimeStore`].
#[async_trait]
pub trait DeclarativeStore<T: Resource>: Send + Sync {
    /// Load a declared resource by id, failing with a not-found error when absent
    async fn get(&self, id: &str) -> StoreResult<T>;

    /// Check whether a resource with this id is declared
    async fn exists(&self, id: &str) -> StoreResult<bool>;

    /// Count declared resources
    async fn count(&self) -> StoreResult<i64>;

    /// Fetch up to `limit` declared resources in declaration order
    async fn fetch(&self, limit: i64) -> StoreResult<Vec<T>>;
}
