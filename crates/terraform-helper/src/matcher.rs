//! Case-insensitive substring matching over an inventory.

/// Every item that contains `term`, ignoring case, in inventory order.
pub fn find_matches(term: &str, items: &[String]) -> Vec<String> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// First item of `matches` equal to `term`, ignoring case.
pub fn find_exact_match<'a>(term: &str, matches: &'a [String]) -> Option<&'a str> {
    let needle = term.to_lowercase();
    matches
        .iter()
        .find(|m| m.to_lowercase() == needle)
        .map(String::as_str)
}
