//! Slug derivation for article URLs
//!
//! A slug is the lowercase ASCII-alphanumeric normalization of a title,
//! hyphen-separated. Uniqueness across articles is resolved with
//! deterministic numeric suffixes over the set of already-taken slugs.

/// Placeholder for titles that normalize to nothing (all symbols)
const EMPTY_SLUG: &str = "n-a";

/// Normalize a title into its base slug
///
/// Keeps ASCII letters and digits (lowercased); every other run of
/// characters collapses into a single hyphen. No leading or trailing
/// hyphens. Applying `slugify` to its own output is a no-op.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut gap = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }

    if slug.is_empty() {
        return EMPTY_SLUG.to_string();
    }
    slug
}

/// Resolve a base slug against the set of slugs already in use
///
/// Returns `base` untouched when free, otherwise the first free
/// `base-1`, `base-2`, ... candidate. Same inputs, same answer.
pub fn dedupe_slug<F>(base: &str, mut taken: F) -> String
where
    F: FnMut(&str) -> bool,
{
    if !taken(base) {
        return base.to_owned();
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
