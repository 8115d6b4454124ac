//! Bounded scatter-gather pagination demo
//!
//! Pages through a large merged resource set under a hard record cap,
//! then trips the cap to show the fetch-free refusal.

use anyhow::Result;
use irm_store::{
    CompositeStore, InMemoryDeclarativeStore, InMemoryRuntimeStore, PageRequest, Resource,
    RuntimeStore,
};

#[derive(Debug, Clone)]
struct Application {
    id: String,
    label: String,
}

impl Resource for Application {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn resource_type() -> &'static str {
        "application"
    }
}

fn app(id: String, label: String) -> Application {
    Application { id, label }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let declared: Vec<Application> = (0..40)
        .map(|i| app(format!("builtin-{i}"), format!("Builtin app {i}")))
        .collect();

    let runtime = InMemoryRuntimeStore::new();
    for i in 0..400 {
        runtime
            .create(app(format!("app-{i}"), format!("Registered app {i}")))
            .await?;
    }

    let store = CompositeStore::new(runtime, InMemoryDeclarativeStore::from_resources(declared))
        .with_max_records(1000);

    println!("combined count: {}", store.count().await?);

    // Walk a few pages; each call fetches at most offset + limit per store
    for offset in [0i64, 100, 420] {
        let page = store.list_bounded(PageRequest::new(5, offset)).await?;
        let ids: Vec<&str> = page.items.iter().map(|a| a.id.as_str()).collect();
        println!("offset {offset:>3}: {ids:?}");
    }

    // Shrink the cap below the combined count: the engine refuses to fetch
    let capped = store.with_max_records(100);
    let page = capped.list_bounded(PageRequest::new(5, 0)).await?;
    println!(
        "cap 100: limit_exceeded = {}, items = {}",
        page.limit_exceeded,
        page.items.len()
    );

    Ok(())
}
