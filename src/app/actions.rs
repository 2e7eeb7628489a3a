//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! settlement events. Actions bridge pure state transformations and effectful
//! operations like issuing the search request or launching the share target.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin runtime executes these actions in sequence; the handler itself never
//! performs I/O.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the shim in
/// `main.rs`. They represent the boundary between pure state transformations
/// and effectful operations like host web requests and command launches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin.
    CloseFocus,

    /// Issues the recommendation request to the backend.
    ///
    /// Carries the query captured at submit time (never re-read from state,
    /// so later edits to the input field cannot leak into an in-flight call)
    /// and the sequence number assigned to this call. The settlement event
    /// echoes the number back so stale responses can be discarded.
    FetchMemes {
        /// Query text captured when the submit was handled.
        query: String,
        /// Sequence number assigned to this search call.
        seq: u64,
    },

    /// Opens the share deep link for an image in a new top-level context.
    ///
    /// Fire-and-forget: there is no settlement event, and the modal stays
    /// open. The runtime percent-encodes `url` into the share template before
    /// launching it.
    OpenShare {
        /// Image locator of the result being shared.
        url: String,
    },
}
