//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Memefinder
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle; all decisions live in the
//! library's event handler.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: register for `Key`, `Mouse`, `WebRequestResult`,
//!    `RunCommandResult`, `Timer`, `PermissionRequestResult` events
//! 3. **Update**: translate Zellij events to library events, execute the
//!    returned actions
//! 4. **Render**: capture the pane size and delegate to the library
//!
//! # Event Mapping
//!
//! - `Key(Enter)` → `Event::Submit` (suppressed while a search is in
//!   flight: the submit surface is disabled, not re-enterable)
//! - `Key(Esc)` → `Event::Dismiss` with the preview open, `Event::Reset`
//!   otherwise
//! - `Key(char)` → `Event::Char` (suspended while the preview is open;
//!   `s` shares instead)
//! - `Mouse(LeftClick)` → hit-tested against the view model: submit
//!   control, grid cell, header, modal close/share, or overlay
//! - `WebRequestResult` → `SearchCompleted`/`SearchFailed`, tagged with
//!   the sequence number decoded from the request context
//! - `Timer` → synthesized `SearchFailed` for a search that outlived the
//!   defensive timeout
//!
//! # Keybindings
//!
//! - printable characters: edit the query
//! - `Enter`: submit (idle only)
//! - `Esc`: close the preview, or start over
//! - `s`: share the enlarged result (preview only)
//! - `Ctrl+c`: hide the plugin pane

#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use memefinder::backend::{self, request, SearchRequest};
use memefinder::{handle_event, Action, AppState, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the
/// resolved configuration, the pane size captured at render time (for mouse
/// hit-testing), and the queue of armed watchdog timers.
struct State {
    /// Core application state from the library layer.
    app: AppState,

    /// Base URL of the recommendation backend.
    backend_url: String,

    /// Defensive timeout for search calls, in seconds.
    request_timeout_secs: f64,

    /// Command used to open the share deep link.
    opener: String,

    /// Pane size from the most recent render, `(rows, cols)`.
    size: (usize, usize),

    /// Sequence numbers of searches with an armed watchdog timer.
    ///
    /// Timers of equal duration fire in arming order, so the front entry
    /// always belongs to the timer that fires next.
    pending_timeouts: VecDeque<u64>,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: memefinder::initialize(&config),
            backend_url: config.backend_url,
            request_timeout_secs: config.request_timeout_secs,
            opener: config.opener,
            size: (0, 0),
            pending_timeouts: VecDeque::new(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes tracing, creates application
    /// state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `WebAccess`: issue the recommendation request
    /// - `RunCommands`: launch the share opener
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        memefinder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(backend_url = %config.backend_url, "parsed configuration");
        self.app = memefinder::initialize(&config);
        self.backend_url = config.backend_url;
        self.request_timeout_secs = config.request_timeout_secs;
        self.opener = config.opener;

        request_permission(&[PermissionType::WebAccess, PermissionType::RunCommands]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::RunCommandResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if
    /// the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(ref mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                Self::log_share_result(exit_code, &stderr, &context);
                return false;
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => match self.map_timer_event() {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - plugin functionality limited");
                    }
                }
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Captures the pane size for mouse hit-testing, then delegates to the
    /// library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        self.size = (rows, cols);
        memefinder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// While the preview modal is open, text entry is suspended and only
    /// the modal keys are live. While a search is in flight, `Enter` is not
    /// translated: the submit surface is disabled rather than re-enterable.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('c') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CloseFocus);
        }

        if self.app.is_modal_open() {
            return match key.bare_key {
                BareKey::Esc => Some(Event::Dismiss),
                BareKey::Char('s') => Some(Event::Share),
                _ => None,
            };
        }

        match key.bare_key {
            BareKey::Enter => {
                if self.app.loading {
                    tracing::debug!("submit suppressed, control disabled while in flight");
                    None
                } else {
                    Some(Event::Submit)
                }
            }
            BareKey::Esc => Some(Event::Reset),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) => Some(Event::Char(c)),
            _ => None,
        }
    }

    /// Maps mouse events to application events via the view-model hit-test.
    ///
    /// Zellij reports 0-based pane coordinates; the view model's geometry
    /// is 1-based.
    fn map_mouse_event(&self, mouse: &Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let (rows, cols) = self.size;
                if rows == 0 || cols == 0 {
                    return None;
                }
                let line = usize::try_from(*line).ok()? + 1;
                let col = col + 1;

                let vm = self.app.compute_viewmodel(rows, cols);
                memefinder::ui::hit_test(&vm, line, col)
            }
            _ => None,
        }
    }

    /// Maps a web request settlement to an application event.
    ///
    /// Results that did not originate from a search call (or lost their
    /// sequence number) are ignored entirely. Non-success statuses and
    /// unparseable bodies settle the search as failed; the reducer keeps
    /// the previously displayed results either way.
    fn map_web_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if !request::is_search_context(context) {
            return None;
        }

        let Some(seq) = request::seq_from_context(context) else {
            tracing::debug!("search result without sequence number, ignored");
            return None;
        };

        if !backend::response::is_success_status(status) {
            return Some(Event::SearchFailed {
                seq,
                error: backend::response::status_error(status).to_string(),
            });
        }

        match backend::parse_memes(body) {
            Ok(memes) => Some(Event::SearchCompleted { seq, memes }),
            Err(e) => Some(Event::SearchFailed {
                seq,
                error: e.to_string(),
            }),
        }
    }

    /// Maps a watchdog timer expiry to an application event.
    ///
    /// The front of the queue belongs to the timer that just fired. Its
    /// search only fails if it is still the current, unsettled one;
    /// anything else (settled, superseded, or reset away) is ignored.
    fn map_timer_event(&mut self) -> Option<Event> {
        let seq = self.pending_timeouts.pop_front()?;

        if self.app.loading && self.app.seq == seq {
            tracing::debug!(seq = seq, "search timed out");
            Some(Event::SearchFailed {
                seq,
                error: format!("no response within {}s", self.request_timeout_secs),
            })
        } else {
            None
        }
    }

    /// Logs the outcome of the share opener command.
    ///
    /// The share action is fire-and-forget: nothing in the application
    /// state depends on it, so failures are only surfaced diagnostically.
    fn log_share_result(exit_code: Option<i32>, stderr: &[u8], context: &BTreeMap<String, String>) {
        if context.get(request::CONTEXT_KIND).map(String::as_str) != Some(request::KIND_SHARE) {
            return;
        }

        if exit_code == Some(0) {
            tracing::debug!("share target opened");
        } else {
            let error = String::from_utf8_lossy(stderr);
            tracing::warn!(exit_code = ?exit_code, error = %error, "share opener failed");
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: hide the plugin pane
    /// - `FetchMemes`: issue the host web request with the sequence number
    ///   in its context, and arm the watchdog timer
    /// - `OpenShare`: build the story deep link and launch the opener
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchMemes { ref query, seq } => {
                let search = SearchRequest::new(query.clone(), *seq);
                let url = search.url(&self.backend_url);
                tracing::debug!(url = %url, seq = seq, "issuing search request");

                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], search.context());

                self.pending_timeouts.push_back(*seq);
                set_timeout(self.request_timeout_secs);
            }
            Action::OpenShare { ref url } => {
                let link = backend::story_url(url);
                tracing::debug!(link = %link, "opening share target");

                let context = BTreeMap::from([(
                    request::CONTEXT_KIND.to_string(),
                    request::KIND_SHARE.to_string(),
                )]);
                run_command(&[self.opener.as_str(), link.as_str()], context);
            }
        }
    }
}
