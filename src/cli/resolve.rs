use anyhow::Context;
use mealbook::Config;
use mealbook_menu::VariationResolver;
use mealbook_shared::Portion;

#[tracing::instrument(skip(config))]
pub fn run(
    config: Config,
    menu_item_id: String,
    portion: Option<Portion>,
    selections: Vec<String>,
    customizations: Vec<String>,
) -> anyhow::Result<()> {
    let catalog = super::load_catalog(&config)?;
    let menu_item = catalog
        .menu_item(&menu_item_id)
        .with_context(|| format!("menu item {menu_item_id} not found in catalog"))?;

    let check = menu_item.check_required_selections(&selections);
    if !check.is_satisfied() {
        tracing::warn!(
            menu_item = %menu_item.id,
            unknown = ?check.unknown,
            missing = check.missing,
            "required selections are not satisfied"
        );
    }

    let portion = portion.unwrap_or(config.report.default_portion);
    let selection = VariationResolver::resolve(menu_item, portion, &selections, &customizations);

    println!("{}", serde_json::to_string_pretty(&selection)?);

    Ok(())
}
