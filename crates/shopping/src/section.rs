use std::fmt;

use serde::{Deserialize, Serialize};

/// Grocery store section an ingredient is shopped from.
///
/// The catalog stores sections as free text. The five known values are matched
/// exactly (case-sensitive); anything else is kept verbatim in `Other` so that
/// unexpected sections still get their own group instead of being lost.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    Produce,
    Pantry,
    Meat,
    Dairy,
    Supplies,
    Other(String),
}

impl Section {
    /// Known sections, in the order a shopper walks the store.
    pub const KNOWN: [Section; 5] = [
        Section::Produce,
        Section::Pantry,
        Section::Meat,
        Section::Dairy,
        Section::Supplies,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Section::Produce => "PRODUCE",
            Section::Pantry => "PANTRY",
            Section::Meat => "MEAT",
            Section::Dairy => "DAIRY",
            Section::Supplies => "SUPPLIES",
            Section::Other(value) => value,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Section::Other(_))
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Other(String::new())
    }
}

impl From<&str> for Section {
    fn from(value: &str) -> Self {
        match value {
            "PRODUCE" => Section::Produce,
            "PANTRY" => Section::Pantry,
            "MEAT" => Section::Meat,
            "DAIRY" => Section::Dairy,
            "SUPPLIES" => Section::Supplies,
            other => Section::Other(other.to_owned()),
        }
    }
}

impl From<String> for Section {
    fn from(value: String) -> Self {
        match Section::from(value.as_str()) {
            Section::Other(_) => Section::Other(value),
            known => known,
        }
    }
}

impl From<Section> for String {
    fn from(value: Section) -> Self {
        match value {
            Section::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
