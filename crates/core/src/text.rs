//! Token joining and text clean-up shared by every formatter.
//!
//! Full names are assembled from an ordered list of candidate tokens, one per
//! attribute. `clean_join` is the single place where empties are dropped and
//! stuttering tokens ("FHD FHD") are collapsed.

/// Join candidate tokens into a display string.
///
/// - Absent tokens and tokens that are empty after trimming are dropped.
/// - A token equal (ignoring case) to the previously *kept* token is skipped.
///   Only adjacent repeats collapse: `A B A` stays as is.
/// - Survivors are emitted trimmed and separated by a single space.
pub fn clean_join<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<T>>,
    T: AsRef<str>,
{
    let mut kept: Vec<String> = Vec::new();

    for token in tokens.into_iter().flatten() {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }
        if let Some(prev) = kept.last() {
            if eq_ignore_case(prev, token) {
                continue;
            }
        }
        kept.push(token.to_string());
    }

    kept.join(" ")
}

/// Case-insensitive equality (full Unicode lowercase, not just ASCII).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring test: is `needle` contained in `haystack`?
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when `token` is present and already spelled out inside `within`.
///
/// Used to suppress a brand or family that the model string already carries.
/// An absent `within` never makes a token redundant.
pub(crate) fn redundant_in(token: Option<&str>, within: Option<&str>) -> bool {
    match (token.map(str::trim), within) {
        (Some(token), Some(within)) if !token.is_empty() => contains_ignore_case(within, token),
        _ => false,
    }
}

/// Remove trademark markers and collapse whitespace.
///
/// Product feeds tend to ship names like `Intel® Core™ i7-1260P`; the catalog
/// stores them without the symbols.
pub fn normalize_text(text: &str) -> String {
    let stripped =
        text.replace('®', "").replace('™', "").replace("(R)", "").replace("(TM)", "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
