pub mod report;
pub mod resolve;
pub mod shopping_list;

use anyhow::Context;
use mealbook_catalog::Catalog;

fn load_catalog(config: &mealbook::Config) -> anyhow::Result<Catalog> {
    tracing::debug!(path = %config.catalog.path, "reading catalog export");

    Catalog::load(&config.catalog.path)
        .with_context(|| format!("failed to load catalog from {}", config.catalog.path))
}
