// Copyright 2025 Cowboy AI, LLC.

//! # Store Layer
//!
//! The accessor boundary between the coordination engine and the backing
//! stores, plus the glue domain stores reuse.
//!
//! ## Components
//!
//! - **Backend contracts**: [`Resource`], [`RuntimeStore`], [`DeclarativeStore`]
//! - **Composite binding**: [`CompositeStore`] delegates every operation to
//!   the engine so domain code owns no merge logic
//! - **In-memory backends**: order-preserving reference implementations for
//!   tests, benches, and demos
//! - **Instrumentation**: [`InstrumentedStore`] wraps any runtime backend
//!   with tracing

pub mod backend;
pub mod composite;
pub mod instrumented;
pub mod memory;

pub use backend::{DeclarativeStore, Resource, RuntimeStore};
pub use composite::CompositeStore;
pub use instrumented::InstrumentedStore;
pub use memory::{InMemoryDeclarativeStore, InMemoryRuntimeStore};
