// Copyright 2025 Cowboy AI, LLC.

//! Unbounded merged listing across the two stores

use crate::errors::StoreResult;
use crate::pagination::PageRequest;
use std::future::Future;

/// Merge and paginate the full contents of both stores
///
/// Validates the page window before any accessor is invoked, short-circuits
/// to an empty result when the offset is at or past the combined count, and
/// otherwise fetches **everything** from both stores (each fetch sized by
/// that store's own count), merges via the caller's merger, and slices the
/// requested window out of the merged list.
///
/// The counts and the fetches are each issued concurrently; no ordering or
/// snapshot consistency between the two stores is assumed.
///
/// This variant is O(total size of both stores) per call and is meant for
/// resource types with small cardinality, such as root-level configuration
/// objects. Use [`merge_list_bounded`](crate::merge_list_bounded) for large
/// collections.
///
/// The merger is treated as a black box: it must deduplicate by identity and
/// define the output order; no ordering is imposed here beyond slicing its
/// output.
pub async fn merge_list<T, PC, DC, PF, DF, M, PCFut, DCFut, PFFut, DFFut>(
    primary_count: PC,
    declarative_count: DC,
    primary_fetch: PF,
    declarative_fetch: DF,
    merge: M,
    page: PageRequest,
) -> StoreResult<Vec<T>>
where
    PC: FnOnce() -> PCFut,
    DC: FnOnce() -> DCFut,
    PCFut: Future<Output = StoreResult<i64>>,
    DCFut: Future<Output = StoreResult<i64>>,
    PF: FnOnce(i64) -> PFFut,
    DF: FnOnce(i64) -> DFFut,
    PFFut: Future<Output = StoreResult<Vec<T>>>,
    DFFut: Future<Output = StoreResult<Vec<T>>>,
    M: FnOnce(Vec<T>, Vec<T>) -> Vec<T>,
{
    page.validate()?;

    let (primary_total, declarative_total) =
        futures::try_join!(primary_count(), declarative_count())?;
    let total = primary_total + declarative_total;

    if page.offset >= total {
        return Ok(Vec::new());
    }

    let (primary_items, declarative_items) = futures::try_join!(
        primary_fetch(primary_total),
        declarative_fetch(declarative_total)
    )?;

    Ok(page.slice(merge(primary_items, declarative_items)))
}
