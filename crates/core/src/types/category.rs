//! Product categories.

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(String);

/// The two product lines sold in the showcase.
///
/// Serialized with the catalog's French identifiers (`montre`, `lunette`);
/// English names are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Watches.
    #[serde(rename = "montre", alias = "watch")]
    Watch,
    /// Sunglasses and eyewear.
    #[serde(rename = "lunette", alias = "eyewear")]
    Eyewear,
}

impl Category {
    /// All categories, in showcase order.
    pub const ALL: [Self; 2] = [Self::Watch, Self::Eyewear];

    /// Catalog identifier, as used in data files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Watch => "montre",
            Self::Eyewear => "lunette",
        }
    }

    /// Section heading shown above the category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Watch => "Montres",
            Self::Eyewear => "Lunettes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "montre" | "montres" | "watch" | "watches" => Ok(Self::Watch),
            "lunette" | "lunettes" | "eyewear" | "glasses" | "sunglasses" => Ok(Self::Eyewear),
            _ => Err(CategoryError(s.to_owned())),
        }
    }
}
