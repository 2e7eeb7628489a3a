//! User interface layer: view models, hit-testing, and ANSI rendering.
//!
//! This module turns application state into what the user sees and maps
//! what the user clicks back into application events.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel ─┬→ render → ANSI output
//!                                             └→ hit_test → Event
//! ```
//!
//! The same geometry-carrying view model drives both directions, so a
//! control is clickable exactly where it is painted.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types with cell geometry
//! - [`hittest`]: Pure click-to-event mapping (modal containment rule)
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities
//! - [`theme`]: Color scheme definitions and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod hittest;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use hittest::hit_test;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    FooterInfo, GridCell, HeaderInfo, ModalView, Rect, SearchBoxInfo, UiViewModel,
};
