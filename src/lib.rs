//! # IRM Store
//!
//! Composite dual-store coordination for identity and resource management.
//!
//! Domain resources such as organization units, applications, identity
//! providers, and users can exist in two backing stores at once: a mutable
//! **runtime store** (typically a relational database) and an immutable
//! **declarative store** loaded from versioned configuration. This crate gives callers a
//! single consistent view across both:
//!
//! - **Resolve**: get-by-id with runtime precedence and declarative fallback
//! - **Guards**: create/update/delete that refuse to shadow or mutate
//!   declarative resources
//! - **Checks**: OR-combined existence checks and summed counts
//! - **Merged Lists**: deduplicated pagination across both stores, either
//!   fetch-all or bounded scatter-gather under a hard record cap
//!
//! ## Design Principles
//!
//! 1. **Pure orchestration**: the engine performs no I/O of its own and
//!    retains no state between calls; callers supply accessor closures
//! 2. **Immutability**: declarative resources are never written and win
//!    identity collisions in merged listings
//! 3. **Fail fast**: parameters are validated before any accessor runs, and
//!    the first accessor error aborts the call
//! 4. **Short-circuit by early return**: once a cap or guard trips, no
//!    further accessor is invoked
//! 5. **No caching**: every call re-invokes the accessors; caching belongs
//!    in a wrapping layer, keeping the merge logic auditable

#![warn(missing_docs)]

mod composite;
mod errors;
mod pagination;
mod store;

// Re-export core types
pub use composite::{
    any_exists, guarded_create, guarded_delete, guarded_update, merge_list, merge_list_bounded,
    merged_count, resolve,
};
pub use errors::{StoreError, StoreResult};
pub use pagination::{merge_by_identity, MergedPage, PageRequest};
pub use store::{
    CompositeStore, DeclarativeStore, InMemoryDeclarativeStore, InMemoryRuntimeStore,
    InstrumentedStore, Resource, RuntimeStore,
};
