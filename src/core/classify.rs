// catalog matching: name -> size -> crust cascade
/*
Per order line, each stage only runs on the candidates the previous stage kept:

    name + category  -> Unavailable       (lists every name in the category)
    size             -> SizeUnavailable   (lists sizes of the matched name)
    crust            -> CrustUnavailable  (lists crusts of the matched name + size)
    otherwise        -> Available         (no diagnostic line)

Equality after normalization only, no fuzzy matching. Rows are only read.
*/
use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::core::normalize::{fold_category, normalize, title_case};
use crate::core::types::{AlignedAttributes, CatalogRow, MatchResult, OrderLine};

pub const ALL_AVAILABLE: &str = "The items you ordered are available in our menu.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub results: Vec<MatchResult>,
    pub all_available: bool,
}

impl MatchSummary {
    /// Diagnostics in order-line order, then the summary line when every line
    /// matched.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.results.iter().filter_map(MatchResult::diagnostic).collect();
        if self.all_available {
            lines.push(ALL_AVAILABLE.to_string());
        }
        lines
    }
}

impl MatchResult {
    /// Human-readable message, `None` for an available line.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            MatchResult::Available => None,
            MatchResult::Unavailable { name, alternatives } => Some(format!(
                "Sorry! we do not have {} pizza in our menu. However, here are some pizzas you can choose from: {}.",
                title_case(name),
                alternatives.join(", ")
            )),
            MatchResult::SizeUnavailable { name, size, available } => Some(format!(
                "We do not have {} pizza in {} size but we do have it in {}.",
                title_case(name),
                title_case(size),
                available.join(", ")
            )),
            MatchResult::CrustUnavailable { name, size, crust, available } => Some(format!(
                "{} in {} size is not available with '{}' crust. Available crusts: {}.",
                title_case(name),
                title_case(size),
                title_case(crust),
                available.join(", ")
            )),
        }
    }
}

//distinct raw values, sorted, then optionally title-cased for display
fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>, titled: bool) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter()
        .map(|v| if titled { title_case(v) } else { v.to_string() })
        .collect()
}

/// Run the cascade for one line. `category` must already be folded.
pub fn match_line(line: &OrderLine, attrs: &AlignedAttributes, rows: &[CatalogRow], category: &str) -> MatchResult {
    let by_name: Vec<&CatalogRow> = rows
        .iter()
        .filter(|r| normalize(&r.name) == line.name && fold_category(&r.kind) == category)
        .collect();

    if by_name.is_empty() {
        debug!(name = %line.name, category, "no catalog row for item");
        let alternatives = distinct_sorted(
            rows.iter()
                .filter(|r| fold_category(&r.kind) == category)
                .map(|r| r.name.as_str()),
            false,
        );
        return MatchResult::Unavailable { name: line.name.clone(), alternatives };
    }

    let by_size: Vec<&CatalogRow> = by_name
        .iter()
        .copied()
        .filter(|r| normalize(&r.size) == attrs.size)
        .collect();

    if by_size.is_empty() {
        debug!(name = %line.name, size = %attrs.size, "size not offered");
        return MatchResult::SizeUnavailable {
            name: line.name.clone(),
            size: attrs.size.clone(),
            available: distinct_sorted(by_name.iter().map(|r| r.size.as_str()), true),
        };
    }

    let crust_matched = by_size.iter().any(|r| normalize(&r.crust) == attrs.crust);

    if !crust_matched {
        debug!(name = %line.name, size = %attrs.size, crust = %attrs.crust, "crust not offered");
        return MatchResult::CrustUnavailable {
            name: line.name.clone(),
            size: attrs.size.clone(),
            crust: attrs.crust.clone(),
            available: distinct_sorted(by_size.iter().map(|r| r.crust.as_str()), true),
        };
    }

    trace!(name = %line.name, quantity = %line.quantity, "line available");
    MatchResult::Available
}

/// Match every order line against the catalog rows.
///
/// `attrs[i]` belongs to `lines[i]`; a missing entry is treated as empty size and
/// crust. With zero lines the summary is still `all_available`.
pub fn match_orders(lines: &[OrderLine], attrs: &[AlignedAttributes], rows: &[CatalogRow], category: &str) -> MatchSummary {
    let empty = AlignedAttributes::default();

    let results: Vec<MatchResult> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match_line(line, attrs.get(i).unwrap_or(&empty), rows, category))
        .collect();

    let all_available = results.iter().all(MatchResult::is_available);
    MatchSummary { results, all_available }
}
