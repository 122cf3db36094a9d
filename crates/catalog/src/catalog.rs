use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use mealbook_menu::{MenuItem, VariationRecord};
use mealbook_shopping::IngredientLineItem;
use serde::{Deserialize, Serialize};

use crate::{RawRecord, RecipeRecord, RecordError, record_id_filter};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Export of the catalog tables, one list of raw records per table.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogExport {
    #[serde(default)]
    pub menu: Vec<RawRecord>,
    #[serde(default)]
    pub variations: Vec<RawRecord>,
    #[serde(default)]
    pub ingredients: Vec<RawRecord>,
    #[serde(default)]
    pub recipes: Vec<RawRecord>,
}

/// Typed, in-memory view of the catalog.
///
/// Raw records are converted once when the catalog is built, so everything
/// handed out from here is already validated.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    menu: Vec<MenuItem>,
    line_items: HashMap<String, IngredientLineItem>,
    recipes: HashMap<String, RecipeRecord>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;

        let export = serde_json::from_str::<CatalogExport>(&content)?;

        Self::from_export(export)
    }

    pub fn from_export(export: CatalogExport) -> Result<Self, CatalogError> {
        let variations = export
            .variations
            .iter()
            .filter_map(|r| Self::skip_invalid(r, r.variation()))
            .map(|v| (v.id.to_owned(), v))
            .collect::<HashMap<_, _>>();

        let mut menu = Vec::with_capacity(export.menu.len());
        for record in &export.menu {
            let mut item = record.menu_item()?;
            let ids = record.variation_option_ids()?;
            item.variation_options = Self::variations_by_ids(&variations, &ids);
            menu.push(item);
        }

        let line_items = export
            .ingredients
            .iter()
            .map(|r| (r.id.to_owned(), r.line_item()))
            .collect();

        let recipes = export
            .recipes
            .iter()
            .filter_map(|r| Self::skip_invalid(r, r.recipe()))
            .map(|recipe| (recipe.id.to_owned(), recipe))
            .collect::<HashMap<_, _>>();

        tracing::info!(
            menu = menu.len(),
            variations = variations.len(),
            "catalog loaded"
        );

        Ok(Self {
            menu,
            line_items,
            recipes,
        })
    }

    /// Variation and recipe records are optional detail: a broken one is left
    /// out of the catalog instead of failing the load.
    fn skip_invalid<T>(record: &RawRecord, value: Result<T, RecordError>) -> Option<T> {
        value
            .inspect_err(|e| {
                tracing::warn!(id = %record.id, error = %e, "skipping invalid catalog record")
            })
            .ok()
    }

    /// Batched lookup of a menu item's variations, keeping the listed order.
    fn variations_by_ids(
        variations: &HashMap<String, VariationRecord>,
        ids: &[String],
    ) -> Vec<VariationRecord> {
        if ids.is_empty() {
            return vec![];
        }

        tracing::debug!(filter = %record_id_filter(ids), "fetching variation records");

        ids.iter()
            .filter_map(|id| {
                let variation = variations.get(id).cloned();
                if variation.is_none() {
                    tracing::warn!(id = %id, "unknown variation record");
                }
                variation
            })
            .collect()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|m| m.id == id)
    }

    /// Line items for the given ids, in the given order. Unknown ids are skipped.
    pub fn line_items<I, S>(&self, ids: I) -> Vec<IngredientLineItem>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| {
                let item = self.line_items.get(id.as_ref()).cloned();
                if item.is_none() {
                    tracing::warn!(id = id.as_ref(), "unknown line item record");
                }
                item
            })
            .collect()
    }

    /// Recipes for the given ids, in the given order. Unknown ids are skipped.
    pub fn recipes<I, S>(&self, ids: I) -> Vec<RecipeRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| {
                let recipe = self.recipes.get(id.as_ref()).cloned();
                if recipe.is_none() {
                    tracing::warn!(id = id.as_ref(), "unknown recipe record");
                }
                recipe
            })
            .collect()
    }
}
