//! Memefinder: a Zellij plugin for emotion-driven meme recommendation.
//!
//! Type a sentence, and the recommendation backend classifies its emotion
//! and answers with matching memes; the plugin shows them in a clickable
//! grid with an enlarged preview and a story-share action.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Reducer
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Backend Layer │
//! │ (ui/)         │   │ (backend/)    │
//! │ - Rendering   │   │ - Request URL │
//! │ - Hit-testing │   │ - Parsing     │
//! │ - Theming     │   │ - Share link  │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Meme model (domain/meme)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`backend`]: Request construction, response parsing, share links
//! - [`domain`]: Core domain types (Meme, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering and hit-testing with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/memefinder.wasm" {
//!         backend_url "http://127.0.0.1:8000"
//!         request_timeout "15"
//!         opener "xdg-open"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Event Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, request permissions, subscribe to events.
//! 2. **Submit**: the reducer captures the query, bumps the sequence
//!    number, and emits a fetch action; the shim issues the host web
//!    request with the number in its context map.
//! 3. **Settlement**: the web result event comes back carrying the context;
//!    the shim decodes the number and feeds a completion or failure event
//!    to the reducer, which discards it if it is stale.
//! 4. **Interaction**: clicks are hit-tested against the computed view
//!    model into select/dismiss/share/reset events.
//!
//! # Key Design Decisions
//!
//! ## Sequence-Gated Settlements
//!
//! Every search call carries a monotonically increasing sequence number and
//! every settlement echoes it back. The reducer applies a settlement only
//! when its number is current, so the last *issued* search determines the
//! final displayed state regardless of response arrival order, and a reset
//! orphans whatever was still in flight.
//!
//! ## Pure Reducer, Effectful Shim
//!
//! `handle_event` performs no I/O; it returns actions that the shim
//! executes against the host (web request, share opener, pane close). The
//! whole interaction state machine is therefore testable without a host.
//!
//! ## Geometry-Carrying View Models
//!
//! The view model carries a rect for every interactive element, so the
//! renderer and the mouse hit-test cannot disagree about where a control
//! is. The modal containment rule (clicks inside never dismiss) falls out
//! of the same geometry.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod backend;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Layout};
pub use domain::{Meme, MemefinderError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/memefinder.wasm" {
///     backend_url "http://recommender.local:8000"
///     request_timeout "10"
///     theme "catppuccin-latte"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the recommendation backend.
    ///
    /// The search request path (`/api/memes`) is appended to this value.
    /// Default: `http://127.0.0.1:8000`
    pub backend_url: String,

    /// Defensive timeout for the search call, in seconds.
    ///
    /// The backend contract specifies no timeout of its own, so the plugin
    /// imposes one; a search that has not settled by then fails with the
    /// prior results kept. Default: 15
    pub request_timeout_secs: f64,

    /// Command used to open the share deep link.
    ///
    /// Invoked as `<opener> <url>`, fire-and-forget. Default: `xdg-open`
    pub opener: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 15.0,
            opener: backend::share::DEFAULT_OPENER.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with per-key fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `backend_url`: string, trailing whitespace trimmed
    /// - `request_timeout`: string → `f64` seconds (falls back to 15 on
    ///   parse error or non-positive values)
    /// - `opener`: string
    /// - `theme` / `theme_file` / `trace_level`: optional strings
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use memefinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("backend_url".to_string(), "http://10.0.0.2:8000".to_string());
    /// map.insert("request_timeout".to_string(), "30".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.backend_url, "http://10.0.0.2:8000");
    /// assert_eq!(config.request_timeout_secs, 30.0);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let backend_url = config
            .get("backend_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.backend_url);

        let request_timeout_secs = config
            .get("request_timeout")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|t| *t > 0.0)
            .unwrap_or(defaults.request_timeout_secs);

        let opener = config
            .get("opener")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.opener);

        Self {
            backend_url,
            request_timeout_secs,
            opener,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the loaded theme (from file, name, or
/// default). Everything else starts at its reset value: empty query, empty
/// result list, no selection, not loading.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing memefinder plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_per_key() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "catppuccin-latte".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout_secs, 15.0);
        assert_eq!(config.opener, "xdg-open");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn malformed_timeout_falls_back() {
        let mut map = BTreeMap::new();
        map.insert("request_timeout".to_string(), "soon".to_string());
        assert_eq!(Config::from_zellij(&map).request_timeout_secs, 15.0);

        map.insert("request_timeout".to_string(), "-3".to_string());
        assert_eq!(Config::from_zellij(&map).request_timeout_secs, 15.0);
    }

    #[test]
    fn full_flow_from_submit_to_share() {
        let mut state = initialize(&Config::default());

        for c in "너무 슬퍼".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let Action::FetchMemes { query, seq } = &actions[0] else {
            panic!("expected a fetch action");
        };
        assert_eq!(query, "너무 슬퍼");

        let body =
            br#"{"memes":[{"id":"http://x/1.png","title":"sad1"},{"id":"http://x/2.png","title":"sad2"}]}"#;
        let memes = backend::parse_memes(body).unwrap();
        handle_event(&mut state, &Event::SearchCompleted { seq: *seq, memes }).unwrap();

        let vm = state.compute_viewmodel(30, 100);
        assert_eq!(vm.cells.len(), 2);
        assert_eq!(vm.cells[0].id, "http://x/1.png");
        assert_eq!(vm.cells[1].id, "http://x/2.png");

        // Click the first thumbnail; the preview must show it enlarged.
        let cell = vm.cells[0].rect;
        let click = ui::hit_test(&vm, cell.row, cell.col).unwrap();
        handle_event(&mut state, &click).unwrap();

        let vm = state.compute_viewmodel(30, 100);
        let modal = vm.modal.as_ref().unwrap();
        assert_eq!(modal.id, "http://x/1.png");

        // Click share; the deep link carries the percent-encoded locator.
        let share = ui::hit_test(&vm, modal.share.row, modal.share.col).unwrap();
        let (_, actions) = handle_event(&mut state, &share).unwrap();
        let Action::OpenShare { url } = &actions[0] else {
            panic!("expected a share action");
        };
        assert_eq!(
            backend::story_url(url),
            "https://www.instagram.com/create/story/?url=http%3A%2F%2Fx%2F1.png"
        );
    }

    #[test]
    fn initialize_honors_theme_name() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-frappe");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
