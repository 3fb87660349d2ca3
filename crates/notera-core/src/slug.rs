//! URL-safe slug derivation from note titles.

/// Derive a URL-safe slug from a title.
///
/// The title is lowercased, runs of whitespace become a single hyphen,
/// characters that are neither word characters (`[a-z0-9_]`) nor hyphens are
/// stripped, repeated hyphens collapse to one, and leading/trailing hyphens
/// are trimmed. Slugs are for display and linking; they are not unique.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            // Collapses runs and drops leading separators in one go.
            pending_hyphen = !slug.is_empty();
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        }
        // Anything else is stripped.
    }

    slug
}
