//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the domain/backend layers. It implements the
//! event-driven state machine that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────── Search Settlements ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`layout`]: Pure layout derivation from state facts
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod layout;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use layout::Layout;
pub use state::AppState;
