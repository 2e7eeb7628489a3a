//! Meme domain model.
//!
//! This module defines the core `Meme` type representing one recommended item
//! returned by the backend. The `id` field doubles as the unique key and the
//! image locator; the `title` field is the human-readable caption.

use serde::{Deserialize, Serialize};

/// One recommended meme returned by the backend.
///
/// Memes are produced only from a backend response and are immutable after
/// creation. The list they arrive in preserves the server-returned order
/// verbatim; nothing in the plugin sorts, deduplicates, or merges them.
///
/// # Fields
///
/// - `id`: unique key and image source locator (a URL in practice)
/// - `title`: caption used as the thumbnail label and preview alt text
///
/// Unknown fields in the backend payload are ignored during deserialization.
///
/// # Examples
///
/// ```
/// use memefinder::Meme;
///
/// let meme: Meme = serde_json::from_str(
///     r#"{"id":"http://x/1.png","title":"sad1","score":0.9}"#
/// ).unwrap();
/// assert_eq!(meme.id, "http://x/1.png");
/// assert_eq!(meme.title, "sad1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meme {
    pub id: String,
    pub title: String,
}

impl Meme {
    /// Creates a meme from an image locator and a title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
