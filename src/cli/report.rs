use std::path::PathBuf;

use anyhow::Context;
use mealbook::{ChefReport, Config, OrderFile};

#[tracing::instrument(skip(config))]
pub fn run(config: Config, order: PathBuf, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(&config)?;

    let content = std::fs::read_to_string(&order)
        .with_context(|| format!("failed to read order {}", order.display()))?;
    let order_file: OrderFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse order {}", order.display()))?;

    let session = order_file.into_session(&catalog, config.report.default_portion)?;
    let report = ChefReport::build(&catalog, &session);

    tracing::info!(
        booking = %report.booking_id,
        meals = report.meals.len(),
        sections = report.shopping_list.len(),
        "chef report built"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
