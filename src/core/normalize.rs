// word normalization shared by the parser, aligner, matcher and topping validator
//
// every comparison against the catalog goes through `normalize`, so "Pepperonis ",
// "pepperoni" and "PEPPERONI" all land on the same key.

/// Lower-case, trim, and strip a single plural `s`.
///
/// The plural strip is a heuristic, not a linguistic singularizer: a trailing `s`
/// is removed unless it follows another `s` ("boss" stays "boss") or whitespace
/// (a lone trailing "s" word is kept so the result never ends in a space).
/// Normalizing an already-normalized word is a no-op.
pub fn normalize(word: &str) -> String {
    let mut word = word.trim().to_lowercase();

    let plural = word
        .strip_suffix('s')
        .is_some_and(|stem| !stem.ends_with(|c: char| c == 's' || c.is_whitespace()));
    if plural {
        word.pop();
    }
    word
}

/// Fold a category value (`PizzaType` / row `Type`): lower-case and trim only.
pub fn fold_category(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Split a multi-value attribute string ("large and small") into normalized tokens.
///
/// The split only happens when `separator` literally occurs in the folded input;
/// otherwise the whole string is a single token. Empty input yields `[""]`.
pub fn split_multi(raw: &str, separator: &str) -> Vec<String> {
    let folded = raw.trim().to_lowercase();

    if !separator.is_empty() && folded.contains(separator) {
        folded.split(separator).map(normalize).collect()
    } else {
        vec![normalize(&folded)]
    }
}

/// Capitalise the first letter of every run of letters and lower-case the rest.
///
/// "bbq chicken" -> "Bbq Chicken", "hand-tossed" -> "Hand-Tossed", "12inch" -> "12Inch".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}
