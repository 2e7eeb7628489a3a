//! Story deep-link templating for the share action.
//!
//! Sharing opens a fixed external URL template in a new top-level context.
//! The template takes a single percent-encoded `url` parameter; nothing is
//! read back from the target, and the action never touches plugin state.

/// Fixed share target: the story composer's deep-link prefix.
const STORY_TEMPLATE: &str = "https://www.instagram.com/create/story/?url=";

/// Default command used to launch the deep link.
pub const DEFAULT_OPENER: &str = "xdg-open";

/// Builds the story deep link for an image locator.
///
/// # Example
///
/// ```
/// use memefinder::backend::story_url;
///
/// assert_eq!(
///     story_url("http://x/1.png"),
///     "https://www.instagram.com/create/story/?url=http%3A%2F%2Fx%2F1.png"
/// );
/// ```
#[must_use]
pub fn story_url(image_url: &str) -> String {
    format!("{STORY_TEMPLATE}{}", urlencoding::encode(image_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encodes_the_image_locator() {
        assert_eq!(
            story_url("http://x/1.png"),
            "https://www.instagram.com/create/story/?url=http%3A%2F%2Fx%2F1.png"
        );
    }

    #[test]
    fn query_strings_in_the_locator_stay_inside_the_parameter() {
        let link = story_url("https://cdn.example.com/m.png?sig=a&e=b");
        assert_eq!(
            link,
            "https://www.instagram.com/create/story/?url=https%3A%2F%2Fcdn.example.com%2Fm.png%3Fsig%3Da%26e%3Db"
        );
    }
}
