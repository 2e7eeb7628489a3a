//! Backend boundary: request construction, response parsing, share links.
//!
//! This module holds the pure half of the effect layer. The plugin's single
//! asynchronous operation is a host `web_request` whose settlement returns as
//! an event; everything that can be computed without I/O lives here so it can
//! be tested directly:
//!
//! - [`request`]: search URL construction and the context-map protocol that
//!   carries the sequence number to the host and back
//! - [`response`]: settlement body parsing into domain results
//! - [`share`]: story deep-link templating for the share action
//!
//! The effectful half (actually issuing `web_request` and `run_command`)
//! lives in the shim (`main.rs`), which consumes these builders.

pub mod request;
pub mod response;
pub mod share;

pub use request::SearchRequest;
pub use response::parse_memes;
pub use share::story_url;
