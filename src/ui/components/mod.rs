//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different
//! parts of the pane. Each component paints at the geometry its view model
//! carries, so layout decisions stay in the view-model computation.
//!
//! # Components
//!
//! - [`header`]: title (doubles as the reset affordance)
//! - [`search`]: bordered input box with the submit control
//! - [`grid`]: thumbnail cards in server order
//! - [`modal`]: enlarged preview with close and share controls
//! - [`footer`]: keybinding hints
//!
//! # Layout Modes
//!
//! Two high-level layout functions match the derived [`Layout`](crate::app::Layout):
//!
//! - [`render_initial`]: centered title + search box + footer
//! - [`render_results`]: header + search box + grid (+ modal) + footer

mod footer;
mod grid;
mod header;
mod modal;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

use footer::render_footer;
use grid::render_cells;
use header::render_header;
use modal::render_modal;
use search::render_search_box;

/// Renders a horizontal separator line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
}

/// Renders the initial layout: centered search affordance, no grid.
pub fn render_initial(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    render_header(&vm.header, theme);
    render_search_box(&vm.search_box, theme);
    render_footer(rows, &vm.footer, theme, cols);
}

/// Renders the results layout, with the preview modal on top when open.
pub fn render_results(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    render_header(&vm.header, theme);
    render_border(3, &theme.colors.border, cols);
    render_search_box(&vm.search_box, theme);
    render_cells(&vm.cells, theme);

    render_border(rows.saturating_sub(1), &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);

    // Painted last so the preview sits on top of the grid.
    if let Some(modal) = &vm.modal {
        render_modal(modal, theme);
    }
}
