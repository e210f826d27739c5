//! Catalog snapshots.
//!
//! A [`Catalog`] is loaded once (or per refresh) by the caller and passed to the
//! checker by reference; nothing in the crate mutates it, so it can sit behind an
//! `Arc` and be shared across concurrent requests.

pub mod loader;

use crate::config::CheckerConfig;
use crate::core::toppings::{ToppingVocabulary, VocabularySource};
use crate::core::types::{CatalogRow, ToppingRow};
use crate::error::CatalogError;

pub use loader::CatalogFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
    vocabulary: VocabularySource,
}

impl Catalog {
    /// Menu rows carrying their own per-category topping columns.
    pub fn with_embedded_toppings(rows: Vec<CatalogRow>, config: &CheckerConfig) -> Self {
        Self {
            rows,
            vocabulary: VocabularySource::Embedded(config.embedded_columns()),
        }
    }

    /// Menu rows plus a separate toppings table.
    pub fn with_topping_table(rows: Vec<CatalogRow>, toppings: Vec<ToppingRow>) -> Self {
        Self {
            rows,
            vocabulary: VocabularySource::Table(toppings),
        }
    }

    /// Decode a catalog document. The layout follows the document: a `toppings`
    /// table selects the table layout, otherwise toppings are read from the menu
    /// rows' columns.
    pub fn parse(text: &str, format: CatalogFormat, config: &CheckerConfig) -> Result<Self, CatalogError> {
        let tables = loader::load_tables(text, format)?;

        Ok(match tables.toppings {
            Some(toppings) => Self::with_topping_table(tables.menu, toppings),
            None => Self::with_embedded_toppings(tables.menu, config),
        })
    }

    pub fn from_toon(text: &str, config: &CheckerConfig) -> Result<Self, CatalogError> {
        Self::parse(text, CatalogFormat::Toon, config)
    }

    pub fn from_json(text: &str, config: &CheckerConfig) -> Result<Self, CatalogError> {
        Self::parse(text, CatalogFormat::Json, config)
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Topping vocabulary for a folded request category.
    pub fn vocabulary(&self, category: &str) -> ToppingVocabulary {
        self.vocabulary.build_vocabulary(&self.rows, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_document() {
        let config = CheckerConfig::default();

        let embedded = Catalog::from_json(
            r#"{"menu": [{"Name": "Margherita", "Size": "Small", "Crust": "Thin", "Type": "veg", "Toppings veg": "Corn"}]}"#,
            &config,
        )
        .unwrap();
        assert!(matches!(&embedded.vocabulary, VocabularySource::Embedded(_)));
        assert!(embedded.vocabulary("veg").contains("corn"));

        let table = Catalog::from_json(
            r#"{"menu": [{"Name": "Margherita", "Size": "Small", "Crust": "Thin"}], "toppings": [{"Toppings": "Paneer"}]}"#,
            &config,
        )
        .unwrap();
        assert!(matches!(&table.vocabulary, VocabularySource::Table(_)));
        assert!(table.vocabulary("").contains("paneer"));
    }
}
