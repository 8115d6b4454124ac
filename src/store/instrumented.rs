//! Instrumented store wrapper that adds tracing around runtime-store calls

use crate::errors::StoreResult;
use crate::store::backend::{Resource, RuntimeStore};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::time::Instant;
use tracing::debug;

/// Runtime-store decorator that emits a tracing event per call
///
/// Wraps any [`RuntimeStore`] and logs the operation, resource type,
/// outcome, and elapsed time at debug level. Behaviour is otherwise
/// unchanged; errors pass through untouched.
#[derive(Clone)]
pub struct InstrumentedStore<T, S>
where
    T: Resource,
    S: RuntimeStore<T>,
{
    inner: S,
    _resource: PhantomData<T>,
}

impl<T, S> InstrumentedStore<T, S>
where
    T: Resource,
    S: RuntimeStore<T>,
{
    /// Wrap a runtime store
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            _resource: PhantomData,
        }
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<T, S> RuntimeStore<T> for InstrumentedStore<T, S>
where
    T: Resource,
    S: RuntimeStore<T>,
{
    async fn get(&self, id: &str) -> StoreResult<T> {
        let started = Instant::now();
        let result = self.inner.get(id).await;
        match &result {
            Ok(_) => debug!(
                resource_type = T::resource_type(),
                id,
                elapsed_us = started.elapsed().as_micros() as u64,
                "store.get hit"
            ),
            Err(e) if e.is_not_found() => debug!(
                resource_type = T::resource_type(),
                id,
                elapsed_us = started.elapsed().as_micros() as u64,
                "store.get miss"
            ),
            Err(e) => debug!(
                resource_type = T::resource_type(),
                id,
                error = %e,
                "store.get failed"
            ),
        }
        result
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        let result = self.inner.exists(id).await;
        if let Ok(exists) = &result {
            debug!(resource_type = T::resource_type(), id, exists, "store.exists");
        }
        result
    }

    async fn count(&self) -> StoreResult<i64> {
        let result = self.inner.count().await;
        if let Ok(total) = &result {
            debug!(resource_type = T::resource_type(), total, "store.count");
        }
        result
    }

    async fn fetch(&self, limit: i64) -> StoreResult<Vec<T>> {
        let started = Instant::now();
        let result = self.inner.fetch(limit).await;
        match &result {
            Ok(items) => debug!(
                resource_type = T::resource_type(),
                limit,
                returned = items.len(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "store.fetch"
            ),
            Err(e) => debug!(
                resource_type = T::resource_type(),
                limit,
                error = %e,
                "store.fetch failed"
            ),
        }
        result
    }

    async fn create(&self, resource: T) -> StoreResult<()> {
        let id = resource.resource_id().to_string();
        let started = Instant::now();
        let result = self.inner.create(resource).await;
        match &result {
            Ok(()) => debug!(
                resource_type = T::resource_type(),
                %id,
                elapsed_us = started.elapsed().as_micros() as u64,
                "store.create"
            ),
            Err(e) => debug!(
                resource_type = T::resource_type(),
                %id,
                error = %e,
                "store.create failed"
            ),
        }
        result
    }

    async fn update(&self, resource: T) -> StoreResult<()> {
        let id = resource.resource_id().to_string();
        let result = self.inner.update(resource).await;
        match &result {
            Ok(()) => debug!(resource_type = T::resource_type(), %id, "store.update"),
            Err(e) => debug!(
                resource_type = T::resource_type(),
                %id,
                error = %e,
                "store.update failed"
            ),
        }
        result
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = self.inner.delete(id).await;
        match &result {
            Ok(()) => debug!(resource_type = T::resource_type(), id, "store.delete"),
            Err(e) => debug!(
                resource_type = T::resource_type(),
                id,
                error = %e,
                "store.delete failed"
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryRuntimeStore;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: String,
        email: String,
    }

    impl Resource for User {
        fn resource_id(&self) -> &str {
            &self.id
        }

        fn resource_type() -> &'static str {
            "user"
        }
    }

    #[tokio::test]
    async fn instrumented_store_passes_calls_through() {
        let instrumented = InstrumentedStore::new(InMemoryRuntimeStore::new());

        let user = User {
            id: "u-1".to_string(),
            email: "alex@example.com".to_string(),
        };
        instrumented.create(user.clone()).await.unwrap();

        assert!(instrumented.exists("u-1").await.unwrap());
        assert_eq!(instrumented.count().await.unwrap(), 1);
        assert_eq!(instrumented.get("u-1").await.unwrap(), user);
        assert_eq!(instrumented.fetch(10).await.unwrap().len(), 1);

        instrumented.delete("u-1").await.unwrap();
        assert!(instrumented.get("u-1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn instrumented_store_passes_errors_through() {
        let instrumented: InstrumentedStore<User, _> =
            InstrumentedStore::new(InMemoryRuntimeStore::new());

        let err = instrumented.get("ghost").await.unwrap_err();
        assert!(err.is_not_found());

        let err = instrumented.delete("ghost").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
