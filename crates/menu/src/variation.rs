use mealbook_shared::Portion;

use crate::item::{MenuItem, ResolvedSelection, VariationRecord};

pub const KEY_SEPARATOR: &str = ",";

/// Canonical form of a label set: labels sorted ordinally and joined by a comma.
///
/// An empty set yields the empty string.
pub fn canonical_key<I, S>(labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut labels = labels
        .into_iter()
        .map(|l| l.as_ref().to_owned())
        .collect::<Vec<_>>();
    labels.sort();

    labels.join(KEY_SEPARATOR)
}

impl VariationRecord {
    pub fn key(&self) -> String {
        canonical_key(&self.variation_name)
    }
}

/// Variation Resolver
///
/// Stateless service that picks what a client actually orders: the base menu
/// item, or the first variation (in catalog order) whose labels are exactly the
/// required selections plus customizations.
pub struct VariationResolver;

impl VariationResolver {
    pub fn resolve(
        base: &MenuItem,
        portion: Portion,
        required_selections: &[String],
        customization_labels: &[String],
    ) -> ResolvedSelection {
        let key = canonical_key(required_selections.iter().chain(customization_labels));

        match Self::find(base, &key) {
            Some(variation) => {
                tracing::debug!(
                    menu_item = %base.id,
                    variation = %variation.id,
                    key = %key,
                    "variation matched"
                );

                ResolvedSelection {
                    id: variation.id.to_owned(),
                    name: variation
                        .display_name
                        .to_owned()
                        .unwrap_or_else(|| base.name.to_owned()),
                    shopping_list: variation.shopping_list_by_portion.get(portion).cloned(),
                    recipes: variation.recipes_by_portion.get(portion).cloned(),
                    original_id: Some(base.id.to_owned()),
                }
            }
            None => ResolvedSelection {
                id: base.id.to_owned(),
                name: base.name.to_owned(),
                shopping_list: base.shopping_list_by_portion.get(portion).cloned(),
                recipes: base.recipes_by_portion.get(portion).cloned(),
                original_id: None,
            },
        }
    }

    fn find<'a>(base: &'a MenuItem, key: &str) -> Option<&'a VariationRecord> {
        base.variation_options.iter().find(|v| v.key() == key)
    }
}
