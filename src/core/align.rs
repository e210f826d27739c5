// positional size/crust alignment
//
// line i takes value i, falls back to value 0, then to "". quantities are never
// checked against the number of values given.
use crate::core::types::{AlignedAttributes, OrderLine};

pub fn attribute_at(values: &[String], index: usize) -> &str {
    values
        .get(index)
        .or_else(|| values.first())
        .map(String::as_str)
        .unwrap_or("")
}

pub fn align_attributes(lines: &[OrderLine], sizes: &[String], crusts: &[String]) -> Vec<AlignedAttributes> {
    (0..lines.len())
        .map(|i| AlignedAttributes {
            size: attribute_at(sizes, i).to_string(),
            crust: attribute_at(crusts, i).to_string(),
        })
        .collect()
}
