//! Backend response parsing.
//!
//! The success body is a JSON object with a `memes` array of result items.
//! An absent or `null` array means "no recommendations" and parses to an
//! empty list; a body that is not a JSON object (or not UTF-8) is a parse
//! failure and settles the search as failed.

use crate::domain::error::{MemefinderError, Result};
use crate::domain::Meme;
use serde::Deserialize;

/// Wire shape of the backend's success body.
///
/// Unknown sibling fields are ignored; `memes` itself may be absent or null.
#[derive(Debug, Deserialize)]
struct MemesEnvelope {
    #[serde(default)]
    memes: Option<Vec<Meme>>,
}

/// Returns whether an HTTP status code counts as a successful settlement.
#[must_use]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Converts a non-success status into the error it settles with.
#[must_use]
pub fn status_error(status: u16) -> MemefinderError {
    MemefinderError::BackendStatus { status }
}

/// Parses a success body into the result list.
///
/// The server-returned order is preserved verbatim; nothing is sorted,
/// deduplicated, or merged.
///
/// # Errors
///
/// Returns an error when the body is not UTF-8 or not a JSON object with
/// the expected item shape.
///
/// # Example
///
/// ```
/// use memefinder::backend::parse_memes;
///
/// let memes = parse_memes(br#"{"memes":[{"id":"http://x/1.png","title":"sad1"}]}"#).unwrap();
/// assert_eq!(memes[0].title, "sad1");
/// ```
pub fn parse_memes(body: &[u8]) -> Result<Vec<Meme>> {
    let text = std::str::from_utf8(body)?;
    let envelope: MemesEnvelope = serde_json::from_str(text)?;
    Ok(envelope.memes.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_server_order_without_dedup() {
        let body = br#"{"memes":[
            {"id":"http://x/2.png","title":"b"},
            {"id":"http://x/1.png","title":"a"},
            {"id":"http://x/2.png","title":"b"}
        ]}"#;
        let memes = parse_memes(body).unwrap();
        let ids: Vec<&str> = memes.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["http://x/2.png", "http://x/1.png", "http://x/2.png"]);
    }

    #[test]
    fn missing_memes_field_is_an_empty_list() {
        assert!(parse_memes(b"{}").unwrap().is_empty());
    }

    #[test]
    fn null_memes_field_is_an_empty_list() {
        assert!(parse_memes(br#"{"memes":null}"#).unwrap().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = r#"{"classified_emotion":"슬픔","memes":[{"id":"u","title":"t","score":3}]}"#.as_bytes();
        let memes = parse_memes(body).unwrap();
        assert_eq!(memes.len(), 1);
        assert_eq!(memes[0].id, "u");
    }

    #[test]
    fn malformed_body_is_a_parse_failure() {
        assert!(parse_memes(b"<html>502</html>").is_err());
        assert!(parse_memes(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn status_classification() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(!is_success_status(302));
        assert!(!is_success_status(500));
        assert_eq!(status_error(500).to_string(), "Backend returned status 500");
    }
}
