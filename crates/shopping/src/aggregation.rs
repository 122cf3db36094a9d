use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// One ingredient quantity contributed by a recipe to a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLineItem {
    pub id: String,
    pub ingredient_name: Option<String>,
    pub unit: Option<String>,
    #[serde(default)]
    pub section: Section,
    pub description: Option<String>,
    pub amount: Option<f64>,
}

impl IngredientLineItem {
    /// Name and amount of a row that takes part in aggregation.
    ///
    /// Empty names and zero or NaN amounts are treated like missing values.
    fn usable(&self) -> Option<(&str, f64)> {
        let name = self.ingredient_name.as_deref().filter(|n| !n.is_empty())?;
        let amount = self.amount.filter(|a| *a != 0.0 && !a.is_nan())?;

        Some((name, amount))
    }
}

/// Aggregated ingredient, one per distinct ingredient name.
///
/// `id` is the id of the last merged line item and is only meant as a render key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedIngredient {
    pub id: String,
    pub ingredient: String,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub section: Section,
    pub amount: f64,
}

impl AggregatedIngredient {
    pub fn to_line_item(&self) -> IngredientLineItem {
        IngredientLineItem {
            id: self.id.to_owned(),
            ingredient_name: Some(self.ingredient.to_owned()),
            unit: self.unit.to_owned(),
            section: self.section.to_owned(),
            description: self.description.to_owned(),
            amount: Some(self.amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListGroup {
    pub section: Section,
    pub ingredients: Vec<AggregatedIngredient>,
}

/// Ingredient Aggregator
///
/// Stateless service that turns the flat line items of a booking into a
/// shopping list:
/// - rows without a name or amount are dropped
/// - rows sharing an ingredient name are merged, amounts summed
/// - merged ingredients are grouped by store section, known sections first
pub struct IngredientAggregator;

impl IngredientAggregator {
    pub fn aggregate(line_items: &[IngredientLineItem]) -> Vec<ShoppingListGroup> {
        let mut usable = line_items
            .iter()
            .filter_map(|item| item.usable().map(|(name, amount)| (name, amount, item)))
            .collect::<Vec<_>>();

        let dropped = line_items.len() - usable.len();

        // Stable: rows with the same name keep their input order.
        usable.sort_by(|a, b| a.0.cmp(b.0));

        let mut merged: Vec<AggregatedIngredient> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for (name, amount, item) in usable {
            match positions.get(name).copied() {
                Some(position) => {
                    let entry = &mut merged[position];
                    entry.id = item.id.to_owned();
                    entry.unit = item.unit.to_owned();
                    entry.description = item.description.to_owned();
                    entry.section = item.section.to_owned();
                    entry.amount += amount;
                }
                None => {
                    positions.insert(name, merged.len());
                    merged.push(AggregatedIngredient {
                        id: item.id.to_owned(),
                        ingredient: name.to_owned(),
                        unit: item.unit.to_owned(),
                        description: item.description.to_owned(),
                        section: item.section.to_owned(),
                        amount,
                    });
                }
            }
        }

        let groups = Self::group_by_section(merged);

        tracing::debug!(
            line_items = line_items.len(),
            dropped,
            groups = groups.len(),
            "shopping list aggregated"
        );

        groups
    }

    fn group_by_section(ingredients: Vec<AggregatedIngredient>) -> Vec<ShoppingListGroup> {
        let mut groups = Section::KNOWN
            .into_iter()
            .map(|section| ShoppingListGroup {
                section,
                ingredients: vec![],
            })
            .collect::<Vec<_>>();

        for ingredient in ingredients {
            match groups.iter_mut().find(|g| g.section == ingredient.section) {
                Some(group) => group.ingredients.push(ingredient),
                None => groups.push(ShoppingListGroup {
                    section: ingredient.section.to_owned(),
                    ingredients: vec![ingredient],
                }),
            }
        }

        groups.retain(|g| !g.ingredients.is_empty());

        groups
    }
}
