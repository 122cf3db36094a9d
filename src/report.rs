use anyhow::{Context, Result};
use mealbook_basket::{AddItemInput, Booking, Session};
use mealbook_catalog::{Catalog, RecipeRecord};
use mealbook_shared::Portion;
use mealbook_shopping::{IngredientAggregator, ShoppingListGroup};
use serde::{Deserialize, Serialize};

/// Order as handed over by the booking form: a booking plus the chosen meals.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFile {
    pub booking: Booking,
    #[serde(default)]
    pub items: Vec<OrderFileItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFileItem {
    pub menu_item: String,
    pub portion: Option<Portion>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub required_selections: Vec<String>,
    #[serde(default)]
    pub customizations: Vec<String>,
}

fn default_quantity() -> u32 {
    1
}

impl OrderFile {
    pub fn into_session(self, catalog: &Catalog, default_portion: Portion) -> Result<Session> {
        let mut session = Session::start(self.booking)?;

        for item in self.items {
            let menu_item = catalog
                .menu_item(&item.menu_item)
                .with_context(|| format!("menu item {} not found in catalog", item.menu_item))?;

            session
                .add_item(
                    menu_item,
                    AddItemInput {
                        portion: item.portion.unwrap_or(default_portion),
                        quantity: item.quantity,
                        required_selections: item.required_selections,
                        customizations: item.customizations,
                    },
                )
                .with_context(|| format!("failed to add {} to the basket", item.menu_item))?;
        }

        Ok(session)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealReport {
    pub name: String,
    pub portion: Portion,
    pub quantity: u32,
    pub recipes: Vec<RecipeRecord>,
}

/// Everything the chef needs for one booking: what to cook, how to reheat it and
/// what to buy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefReport {
    pub booking_id: String,
    pub client_name: String,
    pub meals: Vec<MealReport>,
    pub shopping_list: Vec<ShoppingListGroup>,
}

impl ChefReport {
    pub fn build(catalog: &Catalog, session: &Session) -> Self {
        let meals = session
            .items()
            .iter()
            .map(|item| MealReport {
                name: item.selection.name.to_owned(),
                portion: item.portion,
                quantity: item.quantity,
                recipes: catalog.recipes(item.selection.recipes.as_deref().unwrap_or_default()),
            })
            .collect();

        let line_items = catalog.line_items(session.shopping_list_ids());

        Self {
            booking_id: session.booking().id.to_owned(),
            client_name: session.booking().client_name.to_owned(),
            meals,
            shopping_list: IngredientAggregator::aggregate(&line_items),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("Booking {} for {}\n\n", self.booking_id, self.client_name);

        for meal in &self.meals {
            out.push_str(&format!(
                "{} x{} ({})\n",
                meal.name, meal.quantity, meal.portion
            ));

            for recipe in &meal.recipes {
                out.push_str(&format!("  Recipe: {}\n", recipe.name));
                if let Some(instructions) = &recipe.instructions {
                    out.push_str(&format!("    {instructions}\n"));
                }
                if let Some(tips) = &recipe.reheating_tips {
                    out.push_str(&format!("    Reheating: {tips}\n"));
                }
            }
        }

        out.push('\n');

        if self.shopping_list.is_empty() {
            out.push_str("Shopping list is empty\n");
        } else {
            out.push_str("Shopping list\n");
            out.push_str(&mealbook_shopping::render_text(&self.shopping_list));
        }

        out
    }
}
