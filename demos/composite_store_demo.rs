//! Composite store walkthrough
//!
//! This demo shows:
//! - Seeding a declarative store from a declared resource set
//! - Creating and mutating runtime resources behind the guards
//! - Guard rejections for declarative ids
//! - Merged listing with declarative precedence
//!
//! Run with `RUST_LOG=debug` to see the store instrumentation.

use anyhow::Result;
use irm_store::{
    CompositeStore, InMemoryDeclarativeStore, InMemoryRuntimeStore, InstrumentedStore,
    PageRequest, Resource,
};
use uuid::Uuid;

/// An organization unit as the domain store would model it
#[derive(Debug, Clone, PartialEq)]
struct OrgUnit {
    id: String,
    name: String,
    parent: Option<String>,
}

impl OrgUnit {
    fn declared(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            parent: None,
        }
    }

    fn child(name: &str, parent: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            parent: Some(parent.to_string()),
        }
    }
}

impl Resource for OrgUnit {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn resource_type() -> &'static str {
        "org_unit"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Declarative units ship with the deployment and cannot be changed at runtime
    let declarative = InMemoryDeclarativeStore::from_resources(vec![
        OrgUnit::declared("root", "Acme"),
        OrgUnit::declared("ou-platform", "Platform"),
    ]);
    println!(
        "declarative store: {} units, loaded at {}",
        declarative.len(),
        declarative.loaded_at()
    );

    let store = CompositeStore::new(
        InstrumentedStore::new(InMemoryRuntimeStore::new()),
        declarative,
    );

    // Runtime units come and go freely
    let engineering = OrgUnit::child("Engineering", "root");
    let engineering_id = engineering.id.clone();
    store.create(engineering).await?;
    store.create(OrgUnit::child("Sales", "root")).await?;

    println!("combined count: {}", store.count().await?);

    // The declared root resolves, and refuses every mutation
    let root = store.get("root").await?;
    println!("resolved {} ({})", root.name, root.id);

    match store.delete("root").await {
        Err(e) => println!("delete root rejected: {e}"),
        Ok(()) => unreachable!("declarative units are immutable"),
    }
    match store.create(OrgUnit::declared("root", "Shadow Acme")).await {
        Err(e) => println!("create shadow rejected: {e}"),
        Ok(()) => unreachable!("declared ids cannot be reused"),
    }

    // Runtime units stay mutable
    let mut engineering = store.get(&engineering_id).await?;
    engineering.name = "Engineering & Research".to_string();
    store.update(engineering).await?;

    // Merged listing: declared units first, runtime units in creation order
    let units = store.list(PageRequest::new(10, 0)).await?;
    println!("merged listing:");
    for unit in &units {
        println!("  {} <- {:?}", unit.name, unit.parent);
    }

    Ok(())
}
