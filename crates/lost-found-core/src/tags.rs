//! Suggested Tags
//!
//! Fixed quick-filter shortcuts. Selecting one writes its text into the query,
//! except the `All` sentinel which clears it.

/// Sentinel tag that clears the query
pub const ALL_TAG: &str = "All";

/// Default suggested tags
pub const DEFAULT_TAGS: &[&str] = &["All", "Wallet", "Keys", "Phone", "Bottle", "Laptop"];

pub fn is_all(tag: &str) -> bool {
    tag == ALL_TAG
}

/// Trim, drop blanks and case-insensitive duplicates, and put `All` first.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = vec![ALL_TAG.to_string()];
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            continue;
        }
        if out.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}
