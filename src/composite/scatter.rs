// Copyright 2025 Cowboy AI, LLC.

//! Cap-bounded scatter-gather pagination across the two stores

use crate::errors::{StoreError, StoreResult};
use crate::pagination::{MergedPage, PageRequest};
use std::future::Future;
use tracing::debug;

/// Merge and paginate under a hard cap on the combined record count
///
/// Externally this produces the same pages as
/// [`merge_list`](crate::merge_list), but it never fetches more than needed
/// to satisfy `offset + limit` and it refuses to do any fetch work at all
/// once the combined count exceeds `max_records` (`0` means no cap):
///
/// 1. `limit`, `offset`, and `max_records` are validated non-negative before
///    any accessor is invoked, each failure naming the parameter.
/// 2. Both counts are obtained (concurrently). If `max_records > 0` and the
///    combined count exceeds it, the call returns
///    [`MergedPage::exceeded`] immediately and neither fetcher is invoked.
///    This cap check precedes the offset check.
/// 3. An offset at or past the combined count returns an empty page without
///    fetching.
/// 4. Otherwise `depth = min(offset + limit, total)` leading merged items
///    are required, and each store is asked for `min(depth, store_count)`
///    items. Each side is asked for up to `depth`, not a split of it: the
///    merge order is unknown until both partial results are combined, so
///    the merged-then-sliced result stays correct for any merger
///    interleaving, at the cost of over-fetching up to the other store's
///    share.
/// 5. The two fetches run concurrently, the merger combines them, and the
///    page window is sliced from the merged list.
///
/// Any counter or fetcher error aborts immediately; `limit_exceeded` is
/// never reported alongside an error since the cap check happens before any
/// error-prone fetch.
pub async fn merge_list_bounded<T, PC, DC, PF, DF, M, PCFut, DCFut, PFFut, DFFut>(
    primary_count: PC,
    declarative_count: DC,
    primary_fetch: PF,
    declarative_fetch: DF,
    merge: M,
    page: PageRequest,
    max_records: i64,
) -> StoreResult<MergedPage<T>>
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
    if max_records < 0 {
        return Err(StoreError::NegativeParameter {
            parameter: "max_records",
            value: max_records,
        });
    }

    let (primary_total, declarative_total) =
        futures::try_join!(primary_count(), declarative_count())?;
    let total = primary_total + declarative_total;

    if max_records > 0 && total > max_records {
        debug!(
            total,
            max_records, "combined record count over cap, refusing to fetch"
        );
        return Ok(MergedPage::exceeded());
    }

    if page.offset >= total {
        return Ok(MergedPage::empty());
    }

    let depth = page.depth().min(total);

    let (primary_items, declarative_items) = futures::try_join!(
        primary_fetch(depth.min(primary_total)),
        declarative_fetch(depth.min(declarative_total))
    )?;

    Ok(MergedPage::of(
        page.slice(merge(primary_items, declarative_items)),
    ))
}
