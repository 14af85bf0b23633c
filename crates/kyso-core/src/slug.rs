//! URL-safe identifiers derived from display names

use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static slug regex is valid"));

/// Lowercase `name` and collapse every run of non-alphanumeric ASCII into a
/// single `-`, trimming dashes at both ends.
///
/// ```
/// assert_eq!(kyso_core::slugify("Q1 Sales: EMEA & APAC"), "q1-sales-emea-apac");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALNUM
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
