//! Destination URL cleaning for the save path.
//!
//! Mirrors the editing-flow rules: entries are trimmed, empties are dropped,
//! a missing scheme is coerced to `https://`, and anything that still does
//! not parse as an absolute URL is dropped silently rather than failing the
//! whole save.

use crate::domain::token_deriver::ensure_scheme;
use url::Url;

/// Errors that can occur when validating a single destination entry.
#[derive(Debug, thiserror::Error)]
pub enum InvalidDestination {
    #[error("Destination is empty")]
    Empty,

    #[error("Not an absolute URL: {0}")]
    NotAbsolute(String),
}

/// Validates one raw destination entry, returning its coerced form.
///
/// The returned string is exactly the trimmed input with at most an
/// `https://` prefix added — it is never re-serialized through a URL parser,
/// because the token is hashed over this value (wire contract).
///
/// # Errors
///
/// Returns [`InvalidDestination::Empty`] for blank input and
/// [`InvalidDestination::NotAbsolute`] when the coerced string still fails to
/// parse as an absolute URL.
pub fn validate_destination(raw: &str) -> Result<String, InvalidDestination> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidDestination::Empty);
    }

    let coerced = ensure_scheme(trimmed);
    Url::parse(&coerced).map_err(|e| InvalidDestination::NotAbsolute(e.to_string()))?;

    Ok(coerced)
}

/// Cleans an ordered destination list for saving.
///
/// Invalid entries are dropped, valid ones keep their order; duplicates are
/// permitted. An entirely invalid input yields an empty list, which the save
/// path treats as "remove the list".
pub fn clean_destinations<I, S>(raw_urls: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_urls
        .into_iter()
        .filter_map(|raw| validate_destination(raw.as_ref()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_whitespace() {
        assert_eq!(
            validate_destination("  https://example.com  ").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_validate_coerces_scheme() {
        assert_eq!(
            validate_destination("example.com/path").unwrap(),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_validate_keeps_existing_scheme_untouched() {
        // No trailing slash or case normalization may sneak in: the token is
        // hashed over this exact string.
        assert_eq!(
            validate_destination("http://Example.com").unwrap(),
            "http://Example.com"
        );
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(
            validate_destination("   "),
            Err(InvalidDestination::Empty)
        ));
    }

    #[test]
    fn test_validate_rejects_unparsable() {
        assert!(matches!(
            validate_destination("not a url"),
            Err(InvalidDestination::NotAbsolute(_))
        ));
    }

    #[test]
    fn test_clean_drops_invalid_and_keeps_order() {
        let cleaned = clean_destinations([
            "https://a.example.com",
            "",
            "b.example.com",
            "not a url",
            "https://c.example.com",
        ]);

        assert_eq!(
            cleaned,
            vec![
                "https://a.example.com",
                "https://b.example.com",
                "https://c.example.com"
            ]
        );
    }

    #[test]
    fn test_clean_permits_duplicates() {
        let cleaned = clean_destinations(["https://example.com", "https://example.com"]);
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn test_clean_all_invalid_yields_empty() {
        let cleaned = clean_destinations(["", "   ", "no spaces allowed here"]);
        assert!(cleaned.is_empty());
    }
}
