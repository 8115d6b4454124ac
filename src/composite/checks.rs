// Copyright 2025 Cowboy AI, LLC.

//! Boolean and count aggregation across the two stores

use crate::errors::StoreResult;
use std::future::Future;

/// OR-combine two boolean checks, declarative store first
///
/// The declarative checker runs first: an error propagates immediately and a
/// `true` short-circuits, in both cases without calling the runtime checker.
/// Otherwise the runtime checker's result is returned as-is.
///
/// Note the ordering is the opposite of [`resolve`](crate::resolve): the
/// declarative check is a cheap local gate, while resolve gives the runtime
/// store read precedence.
pub async fn any_exists<D, P, DFut, PFut>(declarative: D, primary: P) -> StoreResult<bool>
where
    D: FnOnce() -> DFut,
    P: FnOnce() -> PFut,
    DFut: Future<Output = StoreResult<bool>>,
    PFut: Future<Output = StoreResult<bool>>,
{
    if declarative().await? {
        return Ok(true);
    }
    primary().await
}

/// Sum resource counts from the runtime and declarative stores
///
/// The runtime counter runs first; its error propagates without calling the
/// declarative counter. Addition is plain `i64` arithmetic.
pub async fn merged_count<P, D, PFut, DFut>(primary: P, declarative: D) -> StoreResult<i64>
where
    P: FnOnce() -> PFut,
    D: FnOnce() -> DFut,
    PFut: Future<Output = StoreResult<i64>>,
    DFut: Future<Output = StoreResult<i64>>,
{
    let primary_total = primary().await?;
    let declarative_total = declarative().await?;
    Ok(primary_total + declarative_total)
}
