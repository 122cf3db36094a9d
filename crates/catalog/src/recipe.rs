use serde::{Deserialize, Serialize};

use crate::{RawRecord, RecordError, fields};

/// Recipe sheet handed to the chef with a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: String,
    pub name: String,
    pub instructions: Option<String>,
    pub reheating_tips: Option<String>,
}

impl RawRecord {
    pub fn recipe(&self) -> Result<RecipeRecord, RecordError> {
        let name = self
            .first_text(fields::NAME)?
            .ok_or_else(|| RecordError::MissingField {
                record: self.id.to_owned(),
                field: fields::NAME.to_owned(),
            })?;

        Ok(RecipeRecord {
            id: self.id.to_owned(),
            name,
            instructions: self.text(fields::INSTRUCTIONS)?,
            reheating_tips: self.text(fields::REHEATING_TIPS)?,
        })
    }
}
