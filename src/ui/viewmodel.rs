//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and carry concrete geometry
//! ([`Rect`]) for every interactive element, so the same structure drives
//! both the ANSI renderer and the mouse hit-test.
//!
//! View models are created via `AppState::compute_viewmodel()` and contain no
//! business logic, only display-ready data.

use crate::app::Layout;

/// A rectangle of pane cells, 1-indexed, rows down and columns right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// First row (1-indexed).
    pub row: usize,
    /// First column (1-indexed).
    pub col: usize,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Creates a one-row rectangle horizontally centered in `cols` columns.
    #[must_use]
    pub const fn centered_line(row: usize, cols: usize, width: usize) -> Self {
        let col = (cols.saturating_sub(width)) / 2 + 1;
        Self::new(row, col, width, 1)
    }

    /// Returns whether the cell at `(line, col)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, line: usize, col: usize) -> bool {
        line >= self.row
            && line < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }
}

/// Complete UI view model for rendering and hit-testing.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Derived presentation mode of the pane.
    pub layout: Layout,

    /// Header information (title text and clickable area).
    pub header: HeaderInfo,

    /// Search box with its embedded submit control.
    pub search_box: SearchBoxInfo,

    /// Visible grid cells in server order (empty in the initial layout).
    pub cells: Vec<GridCell>,

    /// Count of results that did not fit the pane.
    pub hidden_cells: usize,

    /// Preview modal, present only while a result is enlarged.
    pub modal: Option<ModalView>,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Header display information.
///
/// The header doubles as the reset affordance; clicking its rect returns the
/// plugin to the initial screen.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the result count in the results layout.
    pub title: String,

    /// Area the title occupies (the click target for reset).
    pub rect: Rect,
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBoxInfo {
    /// Current query text.
    pub query: String,

    /// Hint shown while the query is empty.
    pub placeholder: String,

    /// Submit control label, idle or busy.
    pub submit_label: String,

    /// Whether the submit control accepts input (false while loading).
    pub submit_enabled: bool,

    /// Outer bordered box, three rows tall.
    pub rect: Rect,

    /// Submit control area inside the box.
    pub submit: Rect,
}

/// Display information for a single thumbnail cell.
#[derive(Debug, Clone)]
pub struct GridCell {
    /// Result id; doubles as the image locator.
    pub id: String,

    /// Caption shown inside the cell.
    pub title: String,

    /// Whether this result is currently enlarged.
    pub is_selected: bool,

    /// Area the cell occupies (the click target for selection).
    pub rect: Rect,
}

/// Preview modal display information.
///
/// Everything inside `content` belongs to the modal; clicks there never
/// dismiss it. Everything outside `content` is the overlay, and clicking the
/// overlay dismisses the modal.
#[derive(Debug, Clone)]
pub struct ModalView {
    /// Id (image locator) of the enlarged result.
    pub id: String,

    /// Caption of the enlarged result.
    pub title: String,

    /// Share control label.
    pub share_label: String,

    /// The modal's content area.
    pub content: Rect,

    /// Close control on the top border.
    pub close: Rect,

    /// Share control near the bottom of the content area.
    pub share: Rect,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_inclusive_start_exclusive_end() {
        let rect = Rect::new(5, 10, 4, 2);
        assert!(rect.contains(5, 10));
        assert!(rect.contains(6, 13));
        assert!(!rect.contains(4, 10));
        assert!(!rect.contains(7, 10));
        assert!(!rect.contains(5, 14));
        assert!(!rect.contains(5, 9));
    }

    #[test]
    fn centered_line_splits_padding_evenly() {
        let rect = Rect::centered_line(3, 80, 10);
        assert_eq!(rect.row, 3);
        assert_eq!(rect.col, 36);
        assert_eq!(rect.height, 1);
    }

    #[test]
    fn centered_line_wider_than_pane_clamps_to_first_column() {
        let rect = Rect::centered_line(1, 8, 20);
        assert_eq!(rect.col, 1);
    }
}
