//! Pagination support for merged store reads

use crate::errors::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A validated limit/offset window over a merged result set
///
/// Both fields must be non-negative; [`PageRequest::validate`] is called by
/// every merged read before any store accessor is invoked. Values are `i64`
/// to match the width relational backends use for LIMIT/OFFSET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: i64,
    /// Number of leading merged items to skip
    pub offset: i64,
}

impl PageRequest {
    /// Create a new page request
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// First page of the given size
    pub fn first(limit: i64) -> Self {
        Self { limit, offset: 0 }
    }

    /// Reject negative limit or offset, naming the offending parameter
    pub fn validate(&self) -> StoreResult<()> {
        if self.limit < 0 {
            return Err(StoreError::NegativeParameter {
                parameter: "limit",
                value: self.limit,
            });
        }
        if self.offset < 0 {
            return Err(StoreError::NegativeParameter {
                parameter: "offset",
                value: self.offset,
            });
        }
        Ok(())
    }

    /// Number of leading merged items needed to satisfy this request
    pub fn depth(&self) -> i64 {
        self.offset + self.limit
    }

    /// Apply the window to a merged list
    ///
    /// Returns `merged[offset .. min(offset + limit, len)]`, or an empty list
    /// when the offset is at or past the end. Must only be called on a
    /// validated request.
    pub fn slice<T>(&self, merged: Vec<T>) -> Vec<T> {
        let offset = self.offset as usize;
        if offset >= merged.len() {
            return Vec::new();
        }
        merged
            .into_iter()
            .skip(offset)
            .take(self.limit as usize)
            .collect()
    }
}

/// Result of a bounded merged read
///
/// `limit_exceeded` is only ever set by the cap check; when it is `true` the
/// item list is empty and no fetch accessor was invoked for the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedPage<T> {
    /// The page of merged items
    pub items: Vec<T>,
    /// Whether the combined record count exceeded the configured cap
    pub limit_exceeded: bool,
}

impl<T> MergedPage<T> {
    /// A page of items, cap not exceeded
    pub fn of(items: Vec<T>) -> Self {
        Self {
            items,
            limit_exceeded: false,
        }
    }

    /// An empty page, cap not exceeded
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            limit_exceeded: false,
        }
    }

    /// The cap was exceeded; no items were fetched
    pub fn exceeded() -> Self {
        Self {
            items: Vec::new(),
            limit_exceeded: true,
        }
    }
}

/// Merge two lists keyed by identity, first input winning on collisions
///
/// Order is the first input's order followed by unseen items of the second,
/// so feeding the declarative list first gives declarative resources
/// precedence over runtime rows with the same identity.
pub fn merge_by_identity<T, F>(first: Vec<T>, second: Vec<T>, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen: HashSet<String> = HashSet::with_capacity(first.len() + second.len());
    let mut merged = Vec::with_capacity(first.len() + second.len());

    for item in first.into_iter().chain(second) {
        if seen.insert(id_of(&item).to_string()) {
            merged.push(item);
        }
    }

    merged
}
