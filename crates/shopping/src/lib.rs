pub mod aggregation;
pub mod format;
pub mod section;

pub use aggregation::{
    AggregatedIngredient, IngredientAggregator, IngredientLineItem, ShoppingListGroup,
};
pub use format::{format_amount, render_text};
pub use section::Section;
