//! Search request construction and context-map protocol.
//!
//! The host's `web_request` facility accepts an opaque string-to-string
//! context map and echoes it back verbatim with the result event. That round
//! trip is the transport for the sequence number: the request encodes it on
//! the way out, and the shim decodes it on the way back to tag the settlement
//! event. A settlement whose decoded number is no longer current is stale and
//! gets discarded by the reducer.

use std::collections::BTreeMap;

/// Context key identifying what kind of host call a result belongs to.
pub const CONTEXT_KIND: &str = "kind";

/// Context kind for the recommendation search call.
pub const KIND_SEARCH: &str = "memes-search";

/// Context kind for the share-opener command.
pub const KIND_SHARE: &str = "share-open";

/// Context key carrying the search call's sequence number.
pub const CONTEXT_SEQ: &str = "seq";

/// One outbound search call, ready to be issued by the shim.
///
/// Carries the query captured at submit time and the sequence number the
/// reducer assigned to the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Query text captured when the submit was handled.
    pub query: String,
    /// Sequence number assigned to this call.
    pub seq: u64,
}

impl SearchRequest {
    /// Creates a search request for a captured query.
    #[must_use]
    pub fn new(query: impl Into<String>, seq: u64) -> Self {
        Self {
            query: query.into(),
            seq,
        }
    }

    /// Builds the full request URL against a backend base URL.
    ///
    /// The query is percent-encoded as UTF-8 into the `emotion_text`
    /// parameter. A trailing slash on the base URL is tolerated.
    ///
    /// # Example
    ///
    /// ```
    /// use memefinder::backend::SearchRequest;
    ///
    /// let request = SearchRequest::new("너무 슬퍼", 1);
    /// assert_eq!(
    ///     request.url("http://127.0.0.1:8000"),
    ///     "http://127.0.0.1:8000/api/memes?emotion_text=%EB%84%88%EB%AC%B4%20%EC%8A%AC%ED%8D%BC"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/api/memes?emotion_text={}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(&self.query)
        )
    }

    /// Builds the context map that travels with the host call.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_KIND.to_string(), KIND_SEARCH.to_string()),
            (CONTEXT_SEQ.to_string(), self.seq.to_string()),
        ])
    }
}

/// Returns whether a result context belongs to a search call.
#[must_use]
pub fn is_search_context(context: &BTreeMap<String, String>) -> bool {
    context.get(CONTEXT_KIND).map(String::as_str) == Some(KIND_SEARCH)
}

/// Decodes the sequence number out of a result context.
///
/// Returns `None` when the key is absent or not a number, which marks the
/// result as foreign (not one of ours) rather than stale.
#[must_use]
pub fn seq_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(CONTEXT_SEQ)?.parse().ok()
}
