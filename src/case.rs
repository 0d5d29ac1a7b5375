//! Case splitting for model names: "OrderItem" -> route segment "order-item", collection "order_item".

use regex::Regex;
use std::sync::LazyLock;

/// Uppercase runs, e.g. the "HTTPS" in "HTTPServer".
static UPPER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z]+)").expect("static pattern"));

/// A capital followed by lowercase letters, e.g. "Server".
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]+)").expect("static pattern"));

/// Split a camel/Pascal case name into its words, keeping the original casing.
/// e.g. "UserProfile" -> ["User", "Profile"], "HTTPServer" -> ["HTTP", "Server"], "userProfile" -> ["user", "Profile"]
pub fn split_words(name: &str) -> Vec<String> {
    let spaced = UPPER_RUN.replace_all(name, " ${1}");
    let spaced = CAPITALIZED_WORD.replace_all(&spaced, " ${1}");
    spaced.split_whitespace().map(str::to_string).collect()
}

fn join_lower(name: &str, sep: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Hyphenated, lower-case URL segment. e.g. "OrderItem" -> "order-item"
pub fn to_route_segment(name: &str) -> String {
    join_lower(name, "-")
}

/// Underscored, lower-case collection name. e.g. "OrderItem" -> "order_item"
pub fn to_collection_name(name: &str) -> String {
    join_lower(name, "_")
}
