//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to the layout's component group
//!
//! The view model is recomputed on every call; nothing rendered here is
//! cached between frames.

use crate::app::{AppState, Layout};
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// layout the state derives. Prints ANSI-styled output using `print!`; does
/// not clear the screen or manage cursor visibility (the host does).
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let vm = state.compute_viewmodel(rows, cols);

    match vm.layout {
        Layout::Initial => components::render_initial(&vm, &state.theme, rows, cols),
        Layout::Results | Layout::ResultsWithModal => {
            components::render_results(&vm, &state.theme, rows, cols);
        }
    }
}
