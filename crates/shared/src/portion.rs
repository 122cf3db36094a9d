use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Portion {
    Small,
    #[default]
    Medium,
    Large,
}

/// One value per portion size.
///
/// Catalog data is not guaranteed to be complete, so every slot is optional and
/// a lookup for a missing portion yields `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ByPortion<T> {
    pub small: Option<T>,
    pub medium: Option<T>,
    pub large: Option<T>,
}

impl<T> Default for ByPortion<T> {
    fn default() -> Self {
        Self {
            small: None,
            medium: None,
            large: None,
        }
    }
}

impl<T> ByPortion<T> {
    pub fn get(&self, portion: Portion) -> Option<&T> {
        match portion {
            Portion::Small => self.small.as_ref(),
            Portion::Medium => self.medium.as_ref(),
            Portion::Large => self.large.as_ref(),
        }
    }

    pub fn set(&mut self, portion: Portion, value: T) {
        let slot = match portion {
            Portion::Small => &mut self.small,
            Portion::Medium => &mut self.medium,
            Portion::Large => &mut self.large,
        };

        *slot = Some(value);
    }
}
