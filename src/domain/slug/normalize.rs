use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern compiles"));

/// Default slug normalization.
///
/// Trims surrounding whitespace, lower-cases, then replaces every maximal run of
/// characters outside `[a-z0-9]` with a single `-`. Runs at the edges are replaced
/// too, so `"-Foo-"` becomes `"-foo-"`.
#[must_use]
pub fn normalize_slug(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    SEPARATOR_RUN.replace_all(&lowered, "-").into_owned()
}
