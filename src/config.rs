use serde::{Deserialize, Serialize};

use crate::core::toppings::EmbeddedColumns;
use crate::error::ConfigError;

/// Knobs for parsing requests and reading the embedded topping columns.
///
/// Every field is optional in the TOON source; missing ones keep their defaults:
///
/// ```text
/// separator: " and "
/// veg_category: veg
/// veg_column: Toppings veg
/// non_veg_column: Toppings non veg
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Separator between values in the size, crust and topping fields.
    pub separator: String,
    pub veg_category: String,
    pub veg_column: String,
    pub non_veg_column: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            separator: " and ".to_string(),
            veg_category: "veg".to_string(),
            veg_column: "Toppings veg".to_string(),
            non_veg_column: "Toppings non veg".to_string(),
        }
    }
}

impl CheckerConfig {
    pub fn from_toon(text: &str) -> Result<Self, ConfigError> {
        toon_format::decode_default(text).map_err(|e| ConfigError::Toon(e.to_string()))
    }

    pub fn embedded_columns(&self) -> EmbeddedColumns {
        EmbeddedColumns {
            veg_category: self.veg_category.clone(),
            veg_column: self.veg_column.clone(),
            non_veg_column: self.non_veg_column.clone(),
        }
    }
}
