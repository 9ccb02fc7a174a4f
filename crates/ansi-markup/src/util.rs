//! Field splitting shared by the configuration parser and the token scanner.

/// Splits `s` on `sep` the way pattern-layout configuration strings are split.
///
/// An empty input yields a single empty field. Otherwise trailing empty
/// fields are dropped, so `"red,"` gives `["red"]` and `","` gives no fields
/// at all. Leading and inner empty fields are kept.
pub(crate) fn split_fields(s: &str, sep: char) -> Vec<&str> {
    if s.is_empty() {
        return vec![s];
    }

    let mut fields: Vec<&str> = s.split(sep).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
