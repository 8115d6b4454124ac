// Copyright 2025 Cowboy AI, LLC.

//! # Composite Coordination Engine
//!
//! Coordinates reads and writes over two independently-queried backing
//! stores of the same logical resource type: a mutable runtime store and an
//! immutable declarative store populated from versioned configuration.
//!
//! ## Components
//!
//! - **Resolve**: dual-store lookup with declarative fallback
//! - **Guards**: block runtime mutations that collide with declarative resources
//! - **Checks**: OR-combined existence checks and summed counts
//! - **Merged Lists**: fetch-all merge or cap-bounded scatter-gather pagination
//!
//! Every function here is pure orchestration over caller-supplied accessor
//! closures: no state is retained between calls, no I/O is performed
//! directly, and short-circuit paths return before any further accessor is
//! invoked.

pub mod checks;
pub mod guard;
pub mod list;
pub mod resolve;
pub mod scatter;

pub use checks::{any_exists, merged_count};
pub use guard::{guarded_create, guarded_delete, guarded_update};
pub use list::merge_list;
pub use resolve::resolve;
pub use scatter::merge_list_bounded;
