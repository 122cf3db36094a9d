use mealbook_menu::{MenuItem, ResolvedSelection, VariationResolver, canonical_key};
use mealbook_shared::{Error, Portion};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_QUANTITY: u32 = 50;

#[derive(Validate, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1, max = 100))]
    pub client_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub delivery_week: Option<String>,
}

#[derive(Validate, Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    #[serde(default)]
    pub portion: Portion,
    #[validate(range(min = 1, max = 50))]
    pub quantity: u32,
    #[serde(default)]
    pub required_selections: Vec<String>,
    #[serde(default)]
    pub customizations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    pub key: String,
    pub menu_item_id: String,
    pub portion: Portion,
    pub quantity: u32,
    pub required_selections: Vec<String>,
    pub customizations: Vec<String>,
    pub selection: ResolvedSelection,
}

impl BasketItem {
    fn labels_key(&self) -> String {
        canonical_key(self.required_selections.iter().chain(&self.customizations))
    }
}

/// State of one client interaction: the booking being filled and its basket.
///
/// Nothing here is global; callers own the session and pass it along.
#[derive(Clone, Debug)]
pub struct Session {
    booking: Booking,
    items: Vec<BasketItem>,
}

impl Session {
    pub fn start(booking: Booking) -> mealbook_shared::Result<Self> {
        booking.validate()?;

        tracing::debug!(booking = %booking.id, "session started");

        Ok(Self {
            booking,
            items: vec![],
        })
    }

    /// Empty the basket, keeping the booking.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Resolve a menu item with the client's choices and put it in the basket.
    ///
    /// Returns the key of the basket line; an identical line (same resolved
    /// selection, portion and labels) has its quantity increased instead.
    pub fn add_item(
        &mut self,
        menu_item: &MenuItem,
        input: AddItemInput,
    ) -> mealbook_shared::Result<String> {
        input.validate()?;

        let check = menu_item.check_required_selections(&input.required_selections);
        if !check.unknown.is_empty() {
            mealbook_shared::bail!(
                "{} does not offer: {}",
                menu_item.name,
                check.unknown.join(", ")
            );
        }
        if check.missing {
            mealbook_shared::bail!(
                "{} requires one of: {}",
                menu_item.name,
                menu_item.required_selection_options.join(", ")
            );
        }

        let selection = VariationResolver::resolve(
            menu_item,
            input.portion,
            &input.required_selections,
            &input.customizations,
        );

        let labels_key = canonical_key(
            input
                .required_selections
                .iter()
                .chain(&input.customizations),
        );

        if let Some(item) = self.items.iter_mut().find(|i| {
            i.selection.id == selection.id
                && i.portion == input.portion
                && i.labels_key() == labels_key
        }) {
            let quantity = item.quantity + input.quantity;
            if quantity > MAX_QUANTITY {
                mealbook_shared::bail!(
                    "at most {MAX_QUANTITY} of {} per booking",
                    item.selection.name
                );
            }

            item.quantity = quantity;

            return Ok(item.key.to_owned());
        }

        let key = ulid::Ulid::new().to_string();

        tracing::debug!(
            booking = %self.booking.id,
            menu_item = %menu_item.id,
            selection = %selection.id,
            "basket item added"
        );

        self.items.push(BasketItem {
            key: key.to_owned(),
            menu_item_id: menu_item.id.to_owned(),
            portion: input.portion,
            quantity: input.quantity,
            required_selections: input.required_selections,
            customizations: input.customizations,
            selection,
        });

        Ok(key)
    }

    pub fn remove_item(&mut self, key: &str) -> mealbook_shared::Result<BasketItem> {
        let Some(position) = self.items.iter().position(|i| i.key == key) else {
            return Err(Error::NotFound(format!("basket item {key}")));
        };

        Ok(self.items.remove(position))
    }

    /// Change the quantity of a basket line; zero removes it.
    pub fn set_quantity(&mut self, key: &str, quantity: u32) -> mealbook_shared::Result<()> {
        if quantity == 0 {
            self.remove_item(key)?;
            return Ok(());
        }

        if quantity > MAX_QUANTITY {
            mealbook_shared::bail!("quantity must be at most {MAX_QUANTITY}");
        }

        let Some(item) = self.items.iter_mut().find(|i| i.key == key) else {
            return Err(Error::NotFound(format!("basket item {key}")));
        };

        item.quantity = quantity;

        Ok(())
    }

    /// Shopping list record ids of the whole basket, once per ordered unit.
    pub fn shopping_list_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .flat_map(|item| {
                let ids = item.selection.shopping_list.as_deref().unwrap_or_default();
                (0..item.quantity).flat_map(move |_| ids.iter().cloned())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> Booking {
        Booking {
            id: "recBooking".to_owned(),
            client_name: "Ada".to_owned(),
            email: "ada@mealbook.test".to_owned(),
            delivery_week: None,
        }
    }

    #[test]
    fn test_start_rejects_invalid_email() {
        let mut invalid = booking();
        invalid.email = "not-an-email".to_owned();

        assert!(matches!(Session::start(invalid), Err(Error::Validate(_))));
    }

    #[test]
    fn test_start_rejects_empty_client_name() {
        let mut invalid = booking();
        invalid.client_name = String::new();

        assert!(matches!(Session::start(invalid), Err(Error::Validate(_))));
    }

    #[test]
    fn test_add_item_rejects_zero_quantity() {
        let mut session = Session::start(booking()).unwrap();
        let item = MenuItem {
            id: "recSoup".to_owned(),
            name: "Soup".to_owned(),
            ..Default::default()
        };

        let result = session.add_item(
            &item,
            AddItemInput {
                quantity: 0,
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(Error::Validate(_))));
        assert!(session.is_empty());
    }
}
