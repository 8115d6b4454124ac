// Copyright 2025 Cowboy AI, LLC.

//! Mutation guards enforcing declarative-resource immutability
//!
//! Every guard checks declarative existence before touching the runtime
//! store. The runtime mutator is invoked at most once per call, and never
//! after a positive or erroring declarative check: the check must complete
//! and be evaluated first, strictly sequentially.

use crate::errors::{StoreError, StoreResult};
use std::future::Future;
use tracing::debug;

/// Create a resource in the runtime store unless its id is declarative
///
/// The candidate id is taken from the resource via `id_of`. If the
/// declarative store already holds that id the call fails with
/// [`StoreError::DeclarativeConflict`]; if the existence check itself fails
/// its error propagates and the runtime create is never attempted.
pub async fn guarded_create<T, I, X, C, XFut, CFut>(
    resource: T,
    id_of: I,
    declared: X,
    create: C,
) -> StoreResult<()>
where
    I: FnOnce(&T) -> String,
    X: FnOnce(String) -> XFut,
    XFut: Future<Output = StoreResult<bool>>,
    C: FnOnce(T) -> CFut,
    CFut: Future<Output = StoreResult<()>>,
{
    let id = id_of(&resource);
    if declared(id.clone()).await? {
        debug!(%id, "create rejected: id belongs to a declarative resource");
        return Err(StoreError::DeclarativeConflict { id });
    }
    create(resource).await
}

/// Update a runtime resource unless its id is declarative
///
/// Declarative resources are immutable; when the declarative store holds the
/// id, the caller-supplied `immutable` error is returned so update rejections
/// stay distinguishable from create conflicts. An erroring existence check
/// propagates and the runtime update is never attempted.
pub async fn guarded_update<T, I, X, U, E, XFut, UFut>(
    resource: T,
    id_of: I,
    declared: X,
    update: U,
    immutable: E,
) -> StoreResult<()>
where
    I: FnOnce(&T) -> String,
    X: FnOnce(String) -> XFut,
    XFut: Future<Output = StoreResult<bool>>,
    U: FnOnce(T) -> UFut,
    UFut: Future<Output = StoreResult<()>>,
    E: FnOnce(String) -> StoreError,
{
    let id = id_of(&resource);
    if declared(id.clone()).await? {
        debug!(%id, "update rejected: resource is declarative");
        return Err(immutable(id));
    }
    update(resource).await
}

/// Delete a runtime resource unless its id is declarative
///
/// Same shape as [`guarded_update`]: a declarative id yields the
/// caller-supplied `immutable` error, an erroring check propagates, and the
/// runtime delete runs only after a clean negative check.
pub async fn guarded_delete<X, Del, E, XFut, DelFut>(
    id: impl Into<String>,
    declared: X,
    delete: Del,
    immutable: E,
) -> StoreResult<()>
where
    X: FnOnce(String) -> XFut,
    XFut: Future<Output = StoreResult<bool>>,
    Del: FnOnce(String) -> DelFut,
    DelFut: Future<Output = StoreResult<()>>,
    E: FnOnce(String) -> StoreError,
{
    let id = id.into();
    if declared(id.clone()).await? {
        debug!(%id, "delete rejected: resource is declarative");
        return Err(immutable(id));
    }
    delete(id).await
}
