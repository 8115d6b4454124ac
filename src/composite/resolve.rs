// Copyright 2025 Cowboy AI, LLC.

//! Composite get with runtime-store precedence and declarative fallback

use crate::errors::StoreResult;
use std::future::Future;
use tracing::trace;

/// Resolve a resource from the runtime store, falling back to the declarative store
///
/// The primary getter is consulted first and a hit is returned immediately.
/// On a not-found error the declarative getter is attempted; if it also
/// fails, for any reason, the original not-found error is returned, since
/// "no declarative override and no runtime row" is simply not found from the
/// caller's perspective. Primary errors other than not-found propagate
/// unmodified.
///
/// # Examples
///
/// ```rust
/// use irm_store::{resolve, StoreError, StoreResult};
///
/// # futures::executor::block_on(async {
/// let found: StoreResult<&str> = resolve(
///     || async { Err(StoreError::not_found("user", "u-1")) },
///     || async { Ok("declared user") },
/// )
/// .await;
/// assert_eq!(found.unwrap(), "declared user");
/// # });
/// ```
pub async fn resolve<T, P, D, PFut, DFut>(primary: P, declarative: D) -> StoreResult<T>
where
    P: FnOnce() -> PFut,
    D: FnOnce() -> DFut,
    PFut: Future<Output = StoreResult<T>>,
    DFut: Future<Output = StoreResult<T>>,
{
    match primary().await {
        Ok(resource) => Ok(resource),
        Err(err) if err.is_not_found() => match declarative().await {
            Ok(resource) => Ok(resource),
            Err(_) => {
                trace!("declarative fallback failed, reporting not found");
                Err(err)
            }
        },
        Err(err) => Err(err),
    }
}
