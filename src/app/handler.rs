//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and search settlement events, translating them into state changes and
//! action sequences. It is the primary control flow coordinator for the
//! plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (translated keys/clicks) or as
//!    search settlements
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! The handler itself performs no I/O: issuing the network call and opening
//! the share target are [`Action`]s executed by the runtime.
//!
//! # Sequence gating
//!
//! Every issued search carries a monotonically increasing sequence number,
//! and every settlement event echoes the number of the call it settles. A
//! settlement whose number is not the current one is stale (superseded by a
//! newer call, or orphaned by a reset) and is discarded without touching
//! state. The call issued last therefore determines the final displayed
//! state regardless of arrival order.

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Meme;

/// Events triggered by user input or search settlement.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Submits the current query to the recommendation backend.
    Submit,
    /// Enlarges the result with the given id.
    ///
    /// Ignored unless the id is present in the current result list.
    Select {
        /// Id of the clicked result.
        id: String,
    },
    /// Closes the preview modal. Always legal.
    Dismiss,
    /// Opens the share deep link for the enlarged result.
    ///
    /// Fire-and-forget; leaves the modal open and the selection unchanged.
    Share,
    /// Returns to the initial screen: clears query, results, and selection.
    Reset,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// A search call settled successfully.
    ///
    /// Carries the sequence number of the call it settles and the parsed
    /// result list. Applied only when the number is current.
    SearchCompleted {
        /// Sequence number echoed from the issued call.
        seq: u64,
        /// Parsed results in server-returned order.
        memes: Vec<Meme>,
    },

    /// A search call settled with a failure.
    ///
    /// Network error, non-success status, unparseable body, or the
    /// defensive timeout. Applied only when the number is current; clears
    /// the loading flag and leaves the displayed results untouched.
    SearchFailed {
        /// Sequence number echoed from the issued call.
        seq: u64,
        /// Diagnostic description of the failure.
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, mutates [`AppState`],
/// and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is false when the
/// event was ignored or changed nothing observable.
///
/// # Errors
///
/// Reserved for state transitions that can fail; every current transition
/// is total.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::Char(c) => {
            if state.is_modal_open() {
                return Ok((false, vec![]));
            }
            state.query.push(*c);
            tracing::trace!(query = %state.query, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.is_modal_open() {
                return Ok((false, vec![]));
            }
            if state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::Submit => {
            // Captured here, at submit time; later edits to the field must
            // not leak into the in-flight call.
            let query = state.query.clone();
            if query.trim().is_empty() {
                tracing::debug!("empty query, submit suppressed");
                return Ok((false, vec![]));
            }

            state.seq += 1;
            state.loading = true;
            tracing::debug!(seq = state.seq, query = %query, "search issued");

            Ok((
                true,
                vec![Action::FetchMemes {
                    query,
                    seq: state.seq,
                }],
            ))
        }
        Event::Select { id } => {
            if !state.contains_id(id) {
                tracing::debug!(id = %id, "selection ignored, id not in result list");
                return Ok((false, vec![]));
            }
            tracing::debug!(id = %id, "result selected");
            state.selected_id = Some(id.clone());
            Ok((true, vec![]))
        }
        Event::Dismiss => {
            let was_open = state.selected_id.take().is_some();
            Ok((was_open, vec![]))
        }
        Event::Share => {
            state.selected_id.as_ref().map_or_else(
                || {
                    tracing::debug!("share ignored, no result enlarged");
                    Ok((false, vec![]))
                },
                |id| {
                    tracing::debug!(url = %id, "share requested");
                    Ok((false, vec![Action::OpenShare { url: id.clone() }]))
                },
            )
        }
        Event::Reset => {
            // Bumping the sequence number orphans any in-flight call; its
            // settlement will arrive with a stale number and be discarded.
            state.query.clear();
            state.memes.clear();
            state.selected_id = None;
            state.loading = false;
            state.seq += 1;
            tracing::debug!(seq = state.seq, "state reset");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchCompleted { seq, memes } => {
            if *seq != state.seq {
                tracing::debug!(
                    settled_seq = seq,
                    current_seq = state.seq,
                    "stale search result discarded"
                );
                return Ok((false, vec![]));
            }

            tracing::debug!(seq = seq, meme_count = memes.len(), "search completed");
            state.loading = false;
            state.memes.clone_from(memes);

            // Wholesale replacement may drop the enlarged result; the
            // selection must never reference an id outside the current list.
            if let Some(selected) = &state.selected_id {
                if !state.contains_id(selected) {
                    tracing::debug!(id = %selected, "selection cleared, id left the result list");
                    state.selected_id = None;
                }
            }

            Ok((true, vec![]))
        }
        Event::SearchFailed { seq, error } => {
            if *seq != state.seq {
                tracing::debug!(
                    settled_seq = seq,
                    current_seq = state.seq,
                    "stale search failure discarded"
                );
                return Ok((false, vec![]));
            }

            // Prior results stay visible; only the busy indicator clears.
            tracing::error!(seq = seq, error = %error, "search failed");
            state.loading = false;
            Ok((true, vec![]))
        }
    }
}

/// Gets a short name for an event for logging purposes.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Submit => "Submit",
        Event::Select { .. } => "Select",
        Event::Dismiss => "Dismiss",
        Event::Share => "Share",
        Event::Reset => "Reset",
        Event::CloseFocus => "CloseFocus",
        Event::SearchCompleted { .. } => "SearchCompleted",
        Event::SearchFailed { .. } => "SearchFailed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn new_state() -> AppState {
        AppState::new(Theme::default())
    }

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn submit(state: &mut AppState) -> Vec<Action> {
        handle_event(state, &Event::Submit).unwrap().1
    }

    fn completed(seq: u64, memes: Vec<Meme>) -> Event {
        Event::SearchCompleted { seq, memes }
    }

    fn sad_memes() -> Vec<Meme> {
        vec![
            Meme::new("http://x/1.png", "sad1"),
            Meme::new("http://x/2.png", "sad2"),
        ]
    }

    #[test]
    fn empty_query_never_issues_a_request() {
        let mut state = new_state();
        let actions = submit(&mut state);
        assert!(actions.is_empty());
        assert!(!state.loading);

        type_query(&mut state, "   ");
        let actions = submit(&mut state);
        assert!(actions.is_empty());
        assert!(!state.loading);
        assert_eq!(state.seq, 0);
    }

    #[test]
    fn submit_captures_query_and_sets_loading() {
        let mut state = new_state();
        type_query(&mut state, "너무 슬퍼");
        let actions = submit(&mut state);

        assert!(state.loading);
        assert_eq!(
            actions,
            vec![Action::FetchMemes {
                query: "너무 슬퍼".to_string(),
                seq: 1,
            }]
        );

        // Edits after submit must not affect the captured query.
        type_query(&mut state, "!!");
        assert_eq!(state.query, "너무 슬퍼!!");
    }

    #[test]
    fn successful_settlement_replaces_list_wholesale() {
        let mut state = new_state();
        type_query(&mut state, "sad");
        submit(&mut state);

        handle_event(&mut state, &completed(1, sad_memes())).unwrap();
        assert!(!state.loading);
        let ids: Vec<&str> = state.memes.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["http://x/1.png", "http://x/2.png"]);
    }

    #[test]
    fn failure_keeps_prior_results_and_clears_loading() {
        let mut state = new_state();
        type_query(&mut state, "sad");
        submit(&mut state);
        handle_event(&mut state, &completed(1, sad_memes())).unwrap();

        handle_event(&mut state, &Event::Char('!')).unwrap();
        submit(&mut state);
        assert!(state.loading);

        handle_event(
            &mut state,
            &Event::SearchFailed {
                seq: 2,
                error: "connection refused".to_string(),
            },
        )
        .unwrap();

        assert!(!state.loading);
        assert_eq!(state.memes, sad_memes());
    }

    #[test]
    fn failure_leaves_open_modal_alone() {
        let mut state = new_state();
        type_query(&mut state, "sad");
        submit(&mut state);
        handle_event(&mut state, &completed(1, sad_memes())).unwrap();
        handle_event(
            &mut state,
            &Event::Select {
                id: "http://x/1.png".to_string(),
            },
        )
        .unwrap();

        submit(&mut state);
        handle_event(
            &mut state,
            &Event::SearchFailed {
                seq: 2,
                error: "boom".to_string(),
            },
        )
        .unwrap();

        assert_eq!(state.selected_id.as_deref(), Some("http://x/1.png"));
    }

    #[test]
    fn last_issued_search_wins_regardless_of_arrival_order() {
        let mut state = new_state();
        type_query(&mut state, "happy");
        submit(&mut state); // seq 1

        state.query.clear();
        type_query(&mut state, "sad");
        submit(&mut state); // seq 2 supersedes seq 1

        // B settles first.
        handle_event(&mut state, &completed(2, sad_memes())).unwrap();
        assert!(!state.loading);

        // A's response straggles in afterwards and must be discarded.
        let (rendered, actions) = handle_event(
            &mut state,
            &completed(1, vec![Meme::new("http://x/h.png", "happy1")]),
        )
        .unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.memes, sad_memes());
    }

    #[test]
    fn stale_failure_is_discarded_too() {
        let mut state = new_state();
        type_query(&mut state, "sad");
        submit(&mut state); // seq 1
        submit(&mut state); // seq 2

        handle_event(&mut state, &completed(2, sad_memes())).unwrap();
        handle_event(
            &mut state,
            &Event::SearchFailed {
                seq: 1,
                error: "late timeout".to_string(),
            },
        )
        .unwrap();

        assert!(!state.loading);
        assert_eq!(state.memes, sad_memes());
    }

    #[test]
    fn select_then_dismiss_round_trip() {
        let mut state = new_state();
        state.memes = sad_memes();

        handle_event(
            &mut state,
            &Event::Select {
                id: "http://x/2.png".to_string(),
            },
        )
        .unwrap();
        assert_eq!(state.selected_id.as_deref(), Some("http://x/2.png"));

        handle_event(&mut state, &Event::Dismiss).unwrap();
        assert!(state.selected_id.is_none());
        assert_eq!(state.memes, sad_memes());
    }

    #[test]
    fn selecting_unknown_id_is_ignored() {
        let mut state = new_state();
        state.memes = sad_memes();

        let (rendered, _) = handle_event(
            &mut state,
            &Event::Select {
                id: "http://x/999.png".to_string(),
            },
        )
        .unwrap();

        assert!(!rendered);
        assert!(state.selected_id.is_none());
    }

    #[test]
    fn reset_restores_initial_state_from_anywhere() {
        let mut state = new_state();
        type_query(&mut state, "sad");
        submit(&mut state);
        handle_event(&mut state, &completed(1, sad_memes())).unwrap();
        handle_event(
            &mut state,
            &Event::Select {
                id: "http://x/1.png".to_string(),
            },
        )
        .unwrap();

        handle_event(&mut state, &Event::Reset).unwrap();
        assert_eq!(state.query, "");
        assert!(state.memes.is_empty());
        assert!(state.selected_id.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn reset_during_flight_orphans_the_inflight_call() {
        let mut state = new_state();
        type_query(&mut state, "sad");
        submit(&mut state); // seq 1
        assert!(state.loading);

        handle_event(&mut state, &Event::Reset).unwrap(); // seq 2
        assert!(!state.loading);

        // The orphaned settlement arrives; state must stay reset.
        let (rendered, _) = handle_event(&mut state, &completed(1, sad_memes())).unwrap();
        assert!(!rendered);
        assert!(state.memes.is_empty());
        assert_eq!(state.query, "");
    }

    #[test]
    fn replacement_clears_selection_when_id_drops_out() {
        let mut state = new_state();
        state.memes = sad_memes();
        state.selected_id = Some("http://x/1.png".to_string());

        state.seq = 3;
        handle_event(
            &mut state,
            &completed(3, vec![Meme::new("http://x/9.png", "other")]),
        )
        .unwrap();

        assert!(state.selected_id.is_none());
    }

    #[test]
    fn replacement_keeps_selection_when_id_survives() {
        let mut state = new_state();
        state.memes = sad_memes();
        state.selected_id = Some("http://x/1.png".to_string());

        state.seq = 3;
        let mut next = sad_memes();
        next.push(Meme::new("http://x/3.png", "sad3"));
        handle_event(&mut state, &completed(3, next)).unwrap();

        assert_eq!(state.selected_id.as_deref(), Some("http://x/1.png"));
    }

    #[test]
    fn share_emits_action_without_touching_state() {
        let mut state = new_state();
        state.memes = sad_memes();
        state.selected_id = Some("http://x/1.png".to_string());

        let (rendered, actions) = handle_event(&mut state, &Event::Share).unwrap();
        assert!(!rendered);
        assert_eq!(
            actions,
            vec![Action::OpenShare {
                url: "http://x/1.png".to_string(),
            }]
        );
        assert_eq!(state.selected_id.as_deref(), Some("http://x/1.png"));
    }

    #[test]
    fn share_without_modal_is_a_no_op() {
        let mut state = new_state();
        let (rendered, actions) = handle_event(&mut state, &Event::Share).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn typing_is_suspended_while_modal_open() {
        let mut state = new_state();
        state.memes = sad_memes();
        state.selected_id = Some("http://x/1.png".to_string());

        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.query, "");
    }

    #[test]
    fn submit_while_loading_supersedes_previous_call() {
        let mut state = new_state();
        type_query(&mut state, "happy");
        let first = submit(&mut state);
        let second = submit(&mut state);

        assert_eq!(
            first,
            vec![Action::FetchMemes {
                query: "happy".to_string(),
                seq: 1,
            }]
        );
        assert_eq!(
            second,
            vec![Action::FetchMemes {
                query: "happy".to_string(),
                seq: 2,
            }]
        );

        // Only the superseding call may settle.
        handle_event(&mut state, &completed(1, sad_memes())).unwrap();
        assert!(state.loading);
        handle_event(&mut state, &completed(2, sad_memes())).unwrap();
        assert!(!state.loading);
    }
}
