//! Column names of the catalog tables.

use mealbook_shared::Portion;

pub const NAME: &str = "Name";
pub const INGREDIENTS: &str = "Ingredients";
pub const REQUIRED_SELECTION_OPTIONS: &str = "Required Selection Options";
pub const VARIATION_OPTIONS: &str = "Variation Options";

pub const DISPLAY_NAME: &str = "Display Name";
pub const VARIATION_NAME: &str = "Variation Name";

pub const INGREDIENT_NAME: &str = "Ingredient Name";
pub const UNIT: &str = "Unit";
pub const SECTION: &str = "Section";
pub const DESCRIPTION: &str = "Description";
pub const AMOUNT: &str = "Amount";

pub const INSTRUCTIONS: &str = "Instructions";
pub const REHEATING_TIPS: &str = "Reheating Tips";

pub fn shopping_list(portion: Portion) -> String {
    format!("Shopping List ({portion})")
}

pub fn recipes(portion: Portion) -> String {
    format!("Recipes ({portion})")
}
