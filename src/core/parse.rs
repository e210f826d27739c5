// order parsing: "2 pepperonis and 1 margherita" -> [("2", "pepperoni"), ("1", "margherita")]
/*
Shape of one order segment:

    <digits> <whitespace> <letters and spaces> <whitespace>* ("and" | end)

- the name is taken lazily: the shortest run after which the terminator holds
- "and" is a plain literal, there is no word boundary ("2 sandwich" -> "s")
- the terminator holds no digits, so consuming it never hides the next segment
*/
use std::sync::LazyLock;

use regex::Regex;

use crate::core::normalize::normalize;
use crate::core::types::OrderLine;

static ORDER_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+([a-zA-Z ]+?)\s*(?:and|$)").expect("order segment pattern should be valid")
});

/// Extract `(quantity, name)` order lines from a raw `PizzaName` value.
///
/// Lines come back in left-to-right order; that order is the index used to align
/// sizes and crusts. Input with no digit-prefixed segment yields no lines.
pub fn parse_orders(raw: &str) -> Vec<OrderLine> {
    let text = raw.trim().to_lowercase();

    ORDER_SEGMENT
        .captures_iter(&text)
        .map(|c| OrderLine::new(&c[1], normalize(&c[2])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &str) -> Vec<(String, String)> {
        parse_orders(raw)
            .into_iter()
            .map(|l| (l.quantity, l.name))
            .collect()
    }

    fn owned(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter().map(|(q, n)| (q.to_string(), n.to_string())).collect()
    }

    #[test]
    fn parses_two_items_in_order() {
        assert_eq!(
            pairs("2 pepperoni and 1 margherita"),
            owned(&[("2", "pepperoni"), ("1", "margherita")])
        );
    }

    #[test]
    fn names_are_singularized_and_lowercased() {
        assert_eq!(
            pairs("  3 Farmhouses AND 10 BBQ Chicken "),
            owned(&[("3", "farmhouse"), ("10", "bbq chicken")])
        );
    }

    #[test]
    fn no_digits_means_no_lines() {
        assert!(parse_orders("a pepperoni please").is_empty());
        assert!(parse_orders("").is_empty());
    }

    #[test]
    fn segment_without_terminator_is_skipped() {
        //"2 pepperoni, 1 veggie" -> the comma breaks the first name run
        assert_eq!(pairs("2 pepperoni, 1 veggie"), owned(&[("1", "veggie")]));
    }

    #[test]
    fn and_is_matched_without_word_boundary() {
        assert_eq!(pairs("2 sandwich"), owned(&[("2", "")]));
    }

    #[test]
    fn quantity_requires_whitespace_before_name() {
        assert!(parse_orders("2pepperoni").is_empty());
    }

    #[test]
    fn multi_digit_quantities_are_kept_as_text() {
        assert_eq!(pairs("012 veggie"), owned(&[("012", "veggie")]));
    }

    #[test]
    fn non_ascii_digits_count_as_quantity() {
        assert_eq!(pairs("٢ veggie and ३ farmhouse"), owned(&[("٢", "veggie"), ("३", "farmhouse")]));
    }
}
