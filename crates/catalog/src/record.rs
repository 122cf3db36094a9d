use mealbook_menu::{MenuItem, VariationRecord};
use mealbook_shared::{ByPortion, Portion};
use mealbook_shopping::{IngredientLineItem, Section};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::VariantArray;

use crate::fields;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record {record}: missing field '{field}'")]
    MissingField { record: String, field: String },

    #[error("record {record}: invalid field '{field}': {reason}")]
    InvalidField {
        record: String,
        field: String,
        reason: String,
    },
}

/// A record as exported from the tabular datastore: an id plus a bag of fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };

        Self {
            id: id.into(),
            fields,
        }
    }

    fn invalid(&self, field: &str, reason: impl Into<String>) -> RecordError {
        RecordError::InvalidField {
            record: self.id.to_owned(),
            field: field.to_owned(),
            reason: reason.into(),
        }
    }

    fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Plain text field.
    pub fn text(&self, field: &str) -> Result<Option<String>, RecordError> {
        match self.value(field) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.to_owned())),
            Some(other) => Err(self.invalid(field, format!("expected text, got {other}"))),
        }
    }

    /// First element of a list field (lookups and links), or the value itself
    /// when the field holds a single text or number.
    pub fn first_text(&self, field: &str) -> Result<Option<String>, RecordError> {
        let value = match self.value(field) {
            None => return Ok(None),
            Some(Value::Array(values)) => match values.first() {
                Some(first) => first,
                None => return Ok(None),
            },
            Some(value) => value,
        };

        match value {
            Value::String(value) => Ok(Some(value.to_owned())),
            Value::Number(value) => Ok(Some(value.to_string())),
            Value::Null => Ok(None),
            other => Err(self.invalid(field, format!("expected text, got {other}"))),
        }
    }

    /// List of texts; a single text is read as a one element list.
    pub fn text_list(&self, field: &str) -> Result<Vec<String>, RecordError> {
        match self.value(field) {
            None => Ok(vec![]),
            Some(Value::String(value)) => Ok(vec![value.to_owned()]),
            Some(Value::Array(values)) => values
                .iter()
                .map(|v| match v {
                    Value::String(value) => Ok(value.to_owned()),
                    other => Err(self.invalid(field, format!("expected text list, got {other}"))),
                })
                .collect(),
            Some(other) => Err(self.invalid(field, format!("expected text list, got {other}"))),
        }
    }

    /// Numeric field; numeric text and single element lookups are accepted.
    pub fn number(&self, field: &str) -> Result<Option<f64>, RecordError> {
        let value = match self.value(field) {
            None => return Ok(None),
            Some(Value::Array(values)) => match values.first() {
                Some(first) => first,
                None => return Ok(None),
            },
            Some(value) => value,
        };

        match value {
            Value::Number(value) => Ok(value.as_f64()),
            Value::String(value) if value.trim().is_empty() => Ok(None),
            Value::String(value) => value
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|e| self.invalid(field, e.to_string())),
            Value::Null => Ok(None),
            other => Err(self.invalid(field, format!("expected number, got {other}"))),
        }
    }

    fn by_portion(
        &self,
        field: impl Fn(Portion) -> String,
    ) -> Result<ByPortion<Vec<String>>, RecordError> {
        let mut values = ByPortion::default();

        for portion in Portion::VARIANTS {
            let name = field(*portion);
            if self.value(&name).is_some() {
                values.set(*portion, self.text_list(&name)?);
            }
        }

        Ok(values)
    }

    /// Ingredient line item. Never fails: unreadable fields are left empty and
    /// the aggregator decides whether the row is usable.
    pub fn line_item(&self) -> IngredientLineItem {
        IngredientLineItem {
            id: self.id.to_owned(),
            ingredient_name: self.lenient(self.first_text(fields::INGREDIENT_NAME)),
            unit: self.lenient(self.first_text(fields::UNIT)),
            section: self
                .lenient(self.first_text(fields::SECTION))
                .map(Section::from)
                .unwrap_or_default(),
            description: self.lenient(self.first_text(fields::DESCRIPTION)),
            amount: self.lenient(self.number(fields::AMOUNT)),
        }
    }

    fn lenient<T>(&self, value: Result<Option<T>, RecordError>) -> Option<T> {
        value.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable line item field");
            None
        })
    }

    /// Base menu item. Variation options are left empty; see
    /// [`RawRecord::variation_option_ids`].
    pub fn menu_item(&self) -> Result<MenuItem, RecordError> {
        let name = self
            .first_text(fields::NAME)?
            .ok_or_else(|| RecordError::MissingField {
                record: self.id.to_owned(),
                field: fields::NAME.to_owned(),
            })?;

        Ok(MenuItem {
            id: self.id.to_owned(),
            name,
            ingredients: self.text_list(fields::INGREDIENTS)?,
            required_selection_options: self.text_list(fields::REQUIRED_SELECTION_OPTIONS)?,
            variation_options: vec![],
            shopping_list_by_portion: self.by_portion(fields::shopping_list)?,
            recipes_by_portion: self.by_portion(fields::recipes)?,
        })
    }

    pub fn variation_option_ids(&self) -> Result<Vec<String>, RecordError> {
        self.text_list(fields::VARIATION_OPTIONS)
    }

    pub fn variation(&self) -> Result<VariationRecord, RecordError> {
        Ok(VariationRecord {
            id: self.id.to_owned(),
            display_name: self.first_text(fields::DISPLAY_NAME)?,
            variation_name: self.text_list(fields::VARIATION_NAME)?,
            shopping_list_by_portion: self.by_portion(fields::shopping_list)?,
            recipes_by_portion: self.by_portion(fields::recipes)?,
        })
    }
}
