// request -> report pipeline
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::config::CheckerConfig;
use crate::core::align::align_attributes;
use crate::core::classify::{match_orders, MatchSummary};
use crate::core::normalize::{fold_category, split_multi};
use crate::core::parse::parse_orders;
use crate::core::toppings::{topping_report, validate_toppings};
use crate::core::types::{AlignedAttributes, MatchResult, OrderLine, OrderRequest, ToppingClassification};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    pub line: OrderLine,
    pub attributes: AlignedAttributes,
    pub result: MatchResult,
}

/// Everything a check produced. `render` gives the text body returned to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub lines: Vec<LineOutcome>,
    pub all_available: bool,
    pub toppings: ToppingClassification,
    pub topping_message: Option<String>,
}

impl OrderReport {
    /// Per-line diagnostics, the summary line (when every line matched), then the
    /// topping line.
    pub fn messages(&self) -> Vec<String> {
        let summary = MatchSummary {
            results: self.lines.iter().map(|l| l.result.clone()).collect(),
            all_available: self.all_available,
        };
        let mut out = summary.report_lines();
        out.extend(self.topping_message.clone());
        out
    }

    pub fn render(&self) -> String {
        self.messages().join("\n")
    }
}

/// Validates orders against one catalog snapshot.
#[derive(Debug, Clone)]
pub struct OrderChecker {
    catalog: Arc<Catalog>,
    config: CheckerConfig,
}

impl OrderChecker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, CheckerConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: CheckerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[instrument(skip_all, fields(category = %request.pizza_type))]
    pub fn check(&self, request: &OrderRequest) -> OrderReport {
        let sep = self.config.separator.as_str();
        let category = fold_category(&request.pizza_type);

        let orders = parse_orders(&request.pizza_name);
        let sizes = split_multi(&request.pizza_size, sep);
        let crusts = split_multi(&request.pizza_crust, sep);
        let requested = split_multi(&request.pizza_toppings, sep);
        debug!(lines = orders.len(), sizes = sizes.len(), crusts = crusts.len(), "parsed order");

        let aligned = align_attributes(&orders, &sizes, &crusts);
        let summary = match_orders(&orders, &aligned, self.catalog.rows(), &category);

        let vocab = self.catalog.vocabulary(&category);
        let toppings = validate_toppings(&requested, &vocab);
        let topping_message = topping_report(&toppings, &vocab);

        let lines = orders
            .into_iter()
            .zip(aligned)
            .zip(summary.results)
            .map(|((line, attributes), result)| LineOutcome { line, attributes, result })
            .collect();

        OrderReport {
            lines,
            all_available: summary.all_available,
            toppings,
            topping_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CatalogRow;

    fn checker() -> OrderChecker {
        let config = CheckerConfig::default();
        let rows = vec![
            CatalogRow::new("Margherita", "Large", "Thin", "veg").with_column("Toppings veg", "Onion, Mushroom"),
            CatalogRow::new("Farmhouse", "Large", "Stuffed", "veg").with_column("Toppings veg", "Corn"),
        ];
        OrderChecker::with_config(Arc::new(Catalog::with_embedded_toppings(rows, &config)), config)
    }

    fn request(name: &str, size: &str, crust: &str, toppings: &str) -> OrderRequest {
        OrderRequest {
            pizza_name: name.into(),
            pizza_size: size.into(),
            pizza_crust: crust.into(),
            pizza_toppings: toppings.into(),
            pizza_type: "Veg".into(),
        }
    }

    #[test]
    fn available_order_with_valid_toppings() {
        let report = checker().check(&request("2 Margheritas and 1 farmhouse", "Large", "thin and stuffed", "onions and corn"));

        assert!(report.all_available);
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[1].attributes.crust, "stuffed");
        assert_eq!(
            report.render(),
            "The items you ordered are available in our menu.\nToppings available: Corn, Onion."
        );
    }

    #[test]
    fn failures_come_before_topping_line() {
        let report = checker().check(&request("1 margherita", "small", "thin", "unicorn"));

        assert!(!report.all_available);
        assert_eq!(
            report.messages(),
            vec![
                "We do not have Margherita pizza in Small size but we do have it in Large.".to_string(),
                "Toppings not available: unicorn. But we do have these available: Corn, Mushroom, Onion.".to_string(),
            ]
        );
    }

    #[test]
    fn no_parsed_lines_still_reports_available() {
        let report = checker().check(&request("margherita please", "", "", ""));
        assert!(report.lines.is_empty());
        assert_eq!(report.render(), "The items you ordered are available in our menu.");
    }
}
