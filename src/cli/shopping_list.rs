use mealbook::Config;
use mealbook_shopping::IngredientAggregator;

#[tracing::instrument(skip(config))]
pub fn run(config: Config, ids: Vec<String>, json: bool) -> anyhow::Result<()> {
    let catalog = super::load_catalog(&config)?;
    let line_items = catalog.line_items(&ids);

    if line_items.len() < ids.len() {
        tracing::warn!(
            requested = ids.len(),
            found = line_items.len(),
            "some shopping list records were not found"
        );
    }

    let groups = IngredientAggregator::aggregate(&line_items);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        print!("{}", mealbook_shopping::render_text(&groups));
    }

    Ok(())
}
