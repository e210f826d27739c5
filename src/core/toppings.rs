// topping vocabulary + validation
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::normalize::{fold_category, normalize};
use crate::core::types::{CatalogRow, ToppingClassification, ToppingRow};

/// Normalized topping -> canonical display string (first spelling seen).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToppingVocabulary {
    entries: BTreeMap<String, String>,
}

impl ToppingVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every comma-separated topping in `raw`. Blank items are skipped.
    pub fn extend_from_list(&mut self, raw: &str) {
        for item in raw.split(',') {
            let display = item.trim();
            if display.is_empty() {
                continue;
            }
            self.entries
                .entry(normalize(display))
                .or_insert_with(|| display.to_string());
        }
    }

    pub fn contains(&self, topping: &str) -> bool {
        self.entries.contains_key(topping)
    }

    pub fn display(&self, topping: &str) -> Option<&str> {
        self.entries.get(topping).map(String::as_str)
    }

    /// All display strings, sorted by the display string itself.
    pub fn sorted_display(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self.entries.values().map(String::as_str).collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the menu's topping columns live for the embedded layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedColumns {
    pub veg_category: String,
    pub veg_column: String,
    pub non_veg_column: String,
}

impl EmbeddedColumns {
    /// The column read for a (folded) request category: the veg column for the
    /// veg category, the non-veg column for anything else.
    pub fn column_for(&self, category: &str) -> &str {
        if category == fold_category(&self.veg_category) {
            &self.veg_column
        } else {
            &self.non_veg_column
        }
    }
}

/// The two catalog layouts a topping vocabulary can come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    /// Comma-separated topping columns on the menu rows, one column per category.
    Embedded(EmbeddedColumns),
    /// A separate toppings table, shared by every category.
    Table(Vec<ToppingRow>),
}

impl VocabularySource {
    pub fn build_vocabulary(&self, rows: &[CatalogRow], category: &str) -> ToppingVocabulary {
        let mut vocab = ToppingVocabulary::new();

        match self {
            VocabularySource::Embedded(columns) => {
                let column = columns.column_for(category);
                let mut seen_column = false;
                for value in rows.iter().filter_map(|r| r.column(column)) {
                    seen_column = true;
                    vocab.extend_from_list(value);
                }
                if !seen_column && !rows.is_empty() {
                    warn!(column, "topping column missing from every menu row");
                }
            }
            VocabularySource::Table(table) => {
                for row in table {
                    vocab.extend_from_list(&row.toppings);
                }
            }
        }

        debug!(category, toppings = vocab.len(), "built topping vocabulary");
        vocab
    }
}

/// Partition normalized requested toppings by vocabulary membership.
/// Empty tokens are ignored; duplicates collapse to their first occurrence.
pub fn validate_toppings(requested: &[String], vocab: &ToppingVocabulary) -> ToppingClassification {
    let mut out = ToppingClassification::default();

    for topping in requested.iter().filter(|t| !t.is_empty()) {
        let bucket = if vocab.contains(topping) { &mut out.valid } else { &mut out.invalid };
        if !bucket.contains(topping) {
            bucket.push(topping.clone());
        }
    }
    out
}

/// The topping line of the report, if any toppings were requested.
pub fn topping_report(classification: &ToppingClassification, vocab: &ToppingVocabulary) -> Option<String> {
    if !classification.invalid.is_empty() {
        return Some(format!(
            "Toppings not available: {}. But we do have these available: {}.",
            classification.invalid.join(", "),
            vocab.sorted_display().join(", ")
        ));
    }

    if !classification.valid.is_empty() {
        let mut valid: Vec<&str> = classification
            .valid
            .iter()
            .filter_map(|t| vocab.display(t))
            .collect();
        valid.sort_unstable();
        valid.dedup();
        return Some(format!("Toppings available: {}.", valid.join(", ")));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> EmbeddedColumns {
        EmbeddedColumns {
            veg_category: "veg".into(),
            veg_column: "Toppings veg".into(),
            non_veg_column: "Toppings non veg".into(),
        }
    }

    fn menu() -> Vec<CatalogRow> {
        vec![
            CatalogRow::new("Margherita", "Small", "Thin", "veg")
                .with_column("Toppings veg", "Onion, Mushrooms, ")
                .with_column("Toppings non veg", "Chicken"),
            CatalogRow::new("Pepperoni", "Large", "Thin", "non veg")
                .with_column("Toppings veg", "Olives")
                .with_column("Toppings non veg", "Chicken, Sausages"),
        ]
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn embedded_layout_reads_column_for_category() {
        let source = VocabularySource::Embedded(columns());

        let veg = source.build_vocabulary(&menu(), "veg");
        assert_eq!(veg.sorted_display(), vec!["Mushrooms", "Olives", "Onion"]);
        assert!(veg.contains("mushroom"));

        //anything that is not the veg category reads the non-veg column
        let other = source.build_vocabulary(&menu(), "");
        assert_eq!(other.sorted_display(), vec!["Chicken", "Sausages"]);
    }

    #[test]
    fn table_layout_ignores_category() {
        let source = VocabularySource::Table(vec![ToppingRow::new("Jalapenos"), ToppingRow::new("Paneer, Corn")]);
        let vocab = source.build_vocabulary(&[], "veg");
        assert_eq!(vocab.sorted_display(), vec!["Corn", "Jalapenos", "Paneer"]);
        assert_eq!(vocab, source.build_vocabulary(&[], "non veg"));
    }

    #[test]
    fn first_spelling_wins_as_display() {
        let mut vocab = ToppingVocabulary::new();
        vocab.extend_from_list("Olives, olive ,OLIVES");
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.display("olive"), Some("Olives"));
    }

    #[test]
    fn invalid_branch_shows_full_vocabulary() {
        let mut vocab = ToppingVocabulary::new();
        vocab.extend_from_list("Mushroom, Onion");

        let cls = validate_toppings(&strings(&["mushroom", "unicorn"]), &vocab);
        assert_eq!(cls.valid, strings(&["mushroom"]));
        assert_eq!(cls.invalid, strings(&["unicorn"]));
        assert_eq!(
            topping_report(&cls, &vocab).unwrap(),
            "Toppings not available: unicorn. But we do have these available: Mushroom, Onion."
        );
    }

    #[test]
    fn valid_branch_lists_display_forms_sorted() {
        let mut vocab = ToppingVocabulary::new();
        vocab.extend_from_list("Onions, Mushrooms, Corn");

        let cls = validate_toppings(&strings(&["onion", "corn", "onion"]), &vocab);
        assert_eq!(cls.valid, strings(&["onion", "corn"]));
        assert!(cls.invalid.is_empty());
        assert_eq!(topping_report(&cls, &vocab).unwrap(), "Toppings available: Corn, Onions.");
    }

    #[test]
    fn repeated_invalid_topping_is_listed_once() {
        let mut vocab = ToppingVocabulary::new();
        vocab.extend_from_list("Onion");

        let cls = validate_toppings(&strings(&["unicorn", "onion", "unicorn"]), &vocab);
        assert_eq!(cls.invalid, strings(&["unicorn"]));
        assert_eq!(cls.valid, strings(&["onion"]));
        assert_eq!(
            topping_report(&cls, &vocab).unwrap(),
            "Toppings not available: unicorn. But we do have these available: Onion."
        );
    }

    #[test]
    fn nothing_requested_emits_nothing() {
        let mut vocab = ToppingVocabulary::new();
        vocab.extend_from_list("Onion");

        let cls = validate_toppings(&strings(&[""]), &vocab);
        assert_eq!(cls, ToppingClassification::default());
        assert_eq!(topping_report(&cls, &vocab), None);
    }
}
