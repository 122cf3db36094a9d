use mealbook_shared::ByPortion;
use serde::{Deserialize, Serialize};

/// Pre-authored alternate version of a menu item.
///
/// Matched when the chosen labels are exactly `variation_name`, order aside.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationRecord {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub variation_name: Vec<String>,
    #[serde(default)]
    pub shopping_list_by_portion: ByPortion<Vec<String>>,
    #[serde(default)]
    pub recipes_by_portion: ByPortion<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub required_selection_options: Vec<String>,
    #[serde(default)]
    pub variation_options: Vec<VariationRecord>,
    #[serde(default)]
    pub shopping_list_by_portion: ByPortion<Vec<String>>,
    #[serde(default)]
    pub recipes_by_portion: ByPortion<Vec<String>>,
}

/// Outcome of checking a client's required selections against a menu item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequiredSelectionCheck {
    /// Selections that are not offered by the menu item.
    pub unknown: Vec<String>,
    /// The item offers required options but none was chosen.
    pub missing: bool,
}

impl RequiredSelectionCheck {
    pub fn is_satisfied(&self) -> bool {
        self.unknown.is_empty() && !self.missing
    }
}

impl MenuItem {
    pub fn check_required_selections(&self, selections: &[String]) -> RequiredSelectionCheck {
        let unknown = selections
            .iter()
            .filter(|s| !self.required_selection_options.contains(s))
            .cloned()
            .collect::<Vec<_>>();

        let missing = !self.required_selection_options.is_empty()
            && !selections
                .iter()
                .any(|s| self.required_selection_options.contains(s));

        RequiredSelectionCheck { unknown, missing }
    }
}

/// What a client actually ordered once customizations are applied.
///
/// `original_id` points back to the base menu item and is only set when a
/// variation was matched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSelection {
    pub id: String,
    pub name: String,
    pub shopping_list: Option<Vec<String>>,
    pub recipes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
}

impl ResolvedSelection {
    pub fn is_variation(&self) -> bool {
        self.original_id.is_some()
    }
}
