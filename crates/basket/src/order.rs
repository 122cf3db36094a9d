use mealbook_shared::Portion;
use serde::Serialize;
use validator::Validate;

use crate::{BasketItem, Session};

/// One ordered meal, as written back to the external store.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    pub name: String,
    pub portion: Portion,
    pub quantity: u32,
    pub required_selections: Vec<String>,
    pub customizations: Vec<String>,
    pub shopping_list: Vec<String>,
    pub recipes: Vec<String>,
}

impl From<&BasketItem> for OrderLine {
    fn from(item: &BasketItem) -> Self {
        Self {
            menu_item_id: item.selection.id.to_owned(),
            original_id: item.selection.original_id.to_owned(),
            name: item.selection.name.to_owned(),
            portion: item.portion,
            quantity: item.quantity,
            required_selections: item.required_selections.to_owned(),
            customizations: item.customizations.to_owned(),
            shopping_list: item.selection.shopping_list.to_owned().unwrap_or_default(),
            recipes: item.selection.recipes.to_owned().unwrap_or_default(),
        }
    }
}

#[derive(Validate, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    pub id: String,
    pub booking_id: String,
    pub client_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_week: Option<String>,
    #[validate(length(min = 1))]
    pub lines: Vec<OrderLine>,
}

impl Session {
    /// Build the order payload for the current basket.
    pub fn submit(&self) -> mealbook_shared::Result<OrderSubmission> {
        let booking = self.booking();
        let submission = OrderSubmission {
            id: ulid::Ulid::new().to_string(),
            booking_id: booking.id.to_owned(),
            client_name: booking.client_name.to_owned(),
            email: booking.email.to_owned(),
            delivery_week: booking.delivery_week.to_owned(),
            lines: self.items().iter().map(OrderLine::from).collect(),
        };

        submission.validate()?;

        tracing::info!(
            booking = %submission.booking_id,
            order = %submission.id,
            lines = submission.lines.len(),
            "order submitted"
        );

        Ok(submission)
    }
}
