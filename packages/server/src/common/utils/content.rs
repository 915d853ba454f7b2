/// Pure utility functions for catalog text handling
///
/// These functions contain NO side effects - they take inputs and return outputs
/// without touching the network or the filesystem.

/// Derive a catalog id from a title.
///
/// Lower-cases the title, collapses every run of characters outside `[a-z0-9]`
/// into a single `-` and strips leading/trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Case-insensitive substring test. `needle_lower` must already be lower-cased.
///
/// The needle is matched literally, and an empty needle matches everything.
pub fn contains_lowered(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}
