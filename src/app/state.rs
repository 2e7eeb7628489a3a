//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with the view-model computation that turns a state snapshot
//! into a renderable (and hit-testable) description of the pane. It is the
//! single source of truth for all transient UI state.
//!
//! # State Components
//!
//! - **Query**: the sentence being typed; empty is the reset value
//! - **Memes**: the current result list, replaced wholesale per search
//! - **Loading**: true strictly between call-issued and call-settled
//! - **Selected id**: the result currently enlarged, if any
//! - **Sequence number**: tag of the most recently issued search call
//!
//! # View Model Computation
//!
//! `compute_viewmodel` derives the layout from `(memes empty?, modal open?)`
//! and lays out concrete cell geometry for the search box, the thumbnail
//! grid, and the preview modal. The result carries everything the renderer
//! and the mouse hit-test need; it is recomputed from scratch on every call
//! and never cached.

use super::layout::Layout;
use crate::domain::Meme;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    FooterInfo, GridCell, HeaderInfo, ModalView, Rect, SearchBoxInfo, UiViewModel,
};

/// Number of thumbnail columns in the results grid.
const GRID_COLUMNS: usize = 4;

/// Height of one grid cell in rows, borders included.
const CELL_HEIGHT: usize = 4;

/// Horizontal gap between grid cells.
const CELL_GAP_X: usize = 2;

/// Vertical gap between grid rows.
const CELL_GAP_Y: usize = 1;

/// Left and right margin around the grid.
const GRID_MARGIN: usize = 2;

/// First row of the grid in the results layout.
const GRID_START_ROW: usize = 8;

/// Rows reserved at the bottom for the footer and its separator.
const FOOTER_ROWS: usize = 2;

/// Widest the search box is allowed to grow.
const SEARCH_BOX_WIDTH_MAX: usize = 60;

/// Widest the preview modal is allowed to grow.
const MODAL_WIDTH_MAX: usize = 72;

/// Tallest the preview modal is allowed to grow.
const MODAL_HEIGHT_MAX: usize = 16;

/// Submit control labels, idle and in-flight.
const SUBMIT_LABEL_IDLE: &str = "[ Get Meme ]";
const SUBMIT_LABEL_BUSY: &str = "[ Recommending... ]";

/// Input placeholder shown while the query is empty.
const PLACEHOLDER: &str = "Type a sentence (AI will analyze and suggest a meme)";

/// Share control label inside the modal.
const SHARE_LABEL: &str = "[ Share to Instagram Story ]";

/// Central application state container.
///
/// Holds all transient UI state. Mutated only by the event handler in
/// response to discrete events; view models are computed on demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current query text.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events, cleared
    /// by `Reset`. Whitespace-only values are never submitted.
    pub query: String,

    /// Current result list in server-returned order.
    ///
    /// Replaced wholesale when a current-sequence search settles
    /// successfully; never merged, sorted, or deduplicated. Empty is the
    /// canonical "no results / initial" state.
    pub memes: Vec<Meme>,

    /// True strictly between call-issued and call-settled.
    ///
    /// While set, the submit surface is disabled and rendered with the busy
    /// label.
    pub loading: bool,

    /// Id of the result currently enlarged, `None` when no modal is open.
    ///
    /// Always references an id present in `memes`; transitions that clear or
    /// replace the list enforce this invariant.
    pub selected_id: Option<String>,

    /// Sequence number of the most recently issued search call.
    ///
    /// Bumped on every issued search and on reset. Settlement events carry
    /// the number of the call they settle; any mismatch means the settlement
    /// is stale and must be discarded.
    pub seq: u64,

    /// Color scheme for UI rendering.
    ///
    /// Loaded from plugin configuration on initialization.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with the given theme.
    ///
    /// All fields start at their reset values: empty query, empty result
    /// list, no selection, not loading, sequence number zero.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            memes: Vec::new(),
            loading: false,
            selected_id: None,
            seq: 0,
            theme,
        }
    }

    /// Returns whether the preview modal is open.
    ///
    /// Modal visibility is purely derived: open iff a result is selected.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.selected_id.is_some()
    }

    /// Returns the currently enlarged result, if any.
    #[must_use]
    pub fn selected_meme(&self) -> Option<&Meme> {
        let id = self.selected_id.as_deref()?;
        self.memes.iter().find(|m| m.id == id)
    }

    /// Returns whether `id` names a result in the current list.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.memes.iter().any(|m| m.id == id)
    }

    /// Computes a renderable view model from current state and pane size.
    ///
    /// Derives the layout, then lays out concrete geometry: header rect,
    /// search box with its submit control, one rect per visible grid cell
    /// (server order, row-major, four columns), and the modal content/close/
    /// share rects when a result is enlarged. Cells that do not fit the pane
    /// are dropped and counted in `hidden_cells`.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height in character cells
    /// * `cols` - Pane width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            meme_count = self.memes.len(),
            loading = self.loading,
            modal_open = self.is_modal_open()
        )
        .entered();

        let layout = Layout::derive(self.memes.is_empty(), self.is_modal_open());

        match layout {
            Layout::Initial => self.compute_initial(rows, cols),
            Layout::Results | Layout::ResultsWithModal => self.compute_results(layout, rows, cols),
        }
    }

    /// Lays out the centered initial screen: title, search box, footer.
    fn compute_initial(&self, rows: usize, cols: usize) -> UiViewModel {
        let title = " Meme Finder ".to_string();
        let header_row = (rows / 3).max(2);
        let header_rect = Rect::centered_line(header_row, cols, title.chars().count());

        let box_width = cols.saturating_sub(10).clamp(20, SEARCH_BOX_WIDTH_MAX);
        let box_col = (cols.saturating_sub(box_width)) / 2 + 1;
        let search_rect = Rect::new(header_row + 2, box_col, box_width, 3);

        UiViewModel {
            layout: Layout::Initial,
            header: HeaderInfo {
                title,
                rect: header_rect,
            },
            search_box: self.compute_search_box(search_rect),
            cells: Vec::new(),
            hidden_cells: 0,
            modal: None,
            footer: self.compute_footer(Layout::Initial),
        }
    }

    /// Lays out the results screen: left-aligned header, search box, grid,
    /// and optionally the preview modal on top.
    fn compute_results(&self, layout: Layout, rows: usize, cols: usize) -> UiViewModel {
        let title = format!(" Meme Finder ({}) ", self.memes.len());
        let header_rect = Rect::new(2, GRID_MARGIN, title.chars().count(), 1);

        let box_width = cols.saturating_sub(2 * GRID_MARGIN).clamp(20, SEARCH_BOX_WIDTH_MAX);
        let search_rect = Rect::new(4, GRID_MARGIN, box_width, 3);

        let (cells, hidden_cells) = self.compute_grid(rows, cols);

        if hidden_cells > 0 {
            tracing::debug!(hidden_cells, "grid cells dropped, pane too small");
        }

        let modal = if layout == Layout::ResultsWithModal {
            self.selected_meme().map(|m| Self::compute_modal(m, rows, cols))
        } else {
            None
        };

        UiViewModel {
            layout,
            header: HeaderInfo {
                title,
                rect: header_rect,
            },
            search_box: self.compute_search_box(search_rect),
            cells,
            hidden_cells,
            modal,
            footer: self.compute_footer(layout),
        }
    }

    /// Computes the search box info with the submit control rect inside it.
    fn compute_search_box(&self, rect: Rect) -> SearchBoxInfo {
        let submit_label = if self.loading {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL_IDLE
        };
        let label_len = submit_label.chars().count();
        let submit = Rect::new(
            rect.row + 1,
            (rect.col + rect.width).saturating_sub(label_len + 1),
            label_len,
            1,
        );

        SearchBoxInfo {
            query: self.query.clone(),
            placeholder: PLACEHOLDER.to_string(),
            submit_label: submit_label.to_string(),
            submit_enabled: !self.loading,
            rect,
            submit,
        }
    }

    /// Lays out grid cells in server order, row-major across four columns.
    ///
    /// Returns the visible cells and the count of results that did not fit.
    fn compute_grid(&self, rows: usize, cols: usize) -> (Vec<GridCell>, usize) {
        let usable_width = cols.saturating_sub(2 * GRID_MARGIN);
        let cell_width = usable_width
            .saturating_sub((GRID_COLUMNS - 1) * CELL_GAP_X)
            .checked_div(GRID_COLUMNS)
            .unwrap_or(0)
            .max(12);
        let last_usable_row = rows.saturating_sub(FOOTER_ROWS);

        let mut cells = Vec::new();
        let mut hidden = 0;

        for (index, meme) in self.memes.iter().enumerate() {
            let grid_row = index / GRID_COLUMNS;
            let grid_col = index % GRID_COLUMNS;
            let row = GRID_START_ROW + grid_row * (CELL_HEIGHT + CELL_GAP_Y);
            let col = GRID_MARGIN + grid_col * (cell_width + CELL_GAP_X);

            if row + CELL_HEIGHT - 1 > last_usable_row {
                hidden += 1;
                continue;
            }

            cells.push(GridCell {
                id: meme.id.clone(),
                title: meme.title.clone(),
                is_selected: self.selected_id.as_deref() == Some(meme.id.as_str()),
                rect: Rect::new(row, col, cell_width, CELL_HEIGHT),
            });
        }

        (cells, hidden)
    }

    /// Lays out the preview modal for the enlarged result.
    ///
    /// The content rect is centered; the close control sits on the top
    /// border's right end and the share control on the second-to-last
    /// content row. Everything outside the content rect belongs to the
    /// overlay.
    fn compute_modal(meme: &Meme, rows: usize, cols: usize) -> ModalView {
        let width = cols.saturating_sub(8).clamp(24, MODAL_WIDTH_MAX);
        let height = rows.saturating_sub(4).clamp(9, MODAL_HEIGHT_MAX);
        let row = (rows.saturating_sub(height)) / 2 + 1;
        let col = (cols.saturating_sub(width)) / 2 + 1;
        let content = Rect::new(row, col, width, height);

        let close = Rect::new(row, col + width - 4, 3, 1);

        let share_len = SHARE_LABEL.chars().count().min(width.saturating_sub(2));
        let share = Rect::new(
            row + height - 2,
            col + (width.saturating_sub(share_len)) / 2,
            share_len,
            1,
        );

        ModalView {
            id: meme.id.clone(),
            title: meme.title.clone(),
            share_label: SHARE_LABEL.to_string(),
            content,
            close,
            share,
        }
    }

    /// Computes footer keybinding hints for the current layout.
    fn compute_footer(&self, layout: Layout) -> FooterInfo {
        let keybindings = match layout {
            Layout::ResultsWithModal => {
                "Esc: close  s: share to story  click outside to close".to_string()
            }
            Layout::Initial | Layout::Results => {
                if self.loading {
                    "Recommending...  Esc: start over  Ctrl+c: close".to_string()
                } else {
                    "Type a sentence  Enter: get memes  Esc: start over  Ctrl+c: close".to_string()
                }
            }
        };

        FooterInfo { keybindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_memes(memes: Vec<Meme>) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.memes = memes;
        state
    }

    fn two_memes() -> Vec<Meme> {
        vec![
            Meme::new("http://x/1.png", "sad1"),
            Meme::new("http://x/2.png", "sad2"),
        ]
    }

    #[test]
    fn empty_state_derives_initial_layout() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.layout, Layout::Initial);
        assert!(vm.cells.is_empty());
        assert!(vm.modal.is_none());
    }

    #[test]
    fn results_preserve_server_order() {
        let state = state_with_memes(two_memes());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.layout, Layout::Results);
        let ids: Vec<&str> = vm.cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["http://x/1.png", "http://x/2.png"]);
    }

    #[test]
    fn selected_result_opens_modal_layout() {
        let mut state = state_with_memes(two_memes());
        state.selected_id = Some("http://x/1.png".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.layout, Layout::ResultsWithModal);
        let modal = vm.modal.expect("modal view");
        assert_eq!(modal.id, "http://x/1.png");
        assert!(modal.content.contains(modal.close.row, modal.close.col));
        assert!(modal.content.contains(modal.share.row, modal.share.col));
    }

    #[test]
    fn submit_control_disabled_while_loading() {
        let mut state = AppState::new(Theme::default());
        assert!(state.compute_viewmodel(24, 80).search_box.submit_enabled);

        state.loading = true;
        let vm = state.compute_viewmodel(24, 80);
        assert!(!vm.search_box.submit_enabled);
        assert_eq!(vm.search_box.submit_label, SUBMIT_LABEL_BUSY);
    }

    #[test]
    fn overflowing_cells_are_hidden_not_wrapped() {
        let memes: Vec<Meme> = (0..16)
            .map(|i| Meme::new(format!("http://x/{i}.png"), format!("m{i}")))
            .collect();
        let state = state_with_memes(memes);
        let vm = state.compute_viewmodel(14, 80);
        assert!(vm.hidden_cells > 0);
        assert_eq!(vm.cells.len() + vm.hidden_cells, 16);
    }

    #[test]
    fn grid_cells_do_not_overlap() {
        let state = state_with_memes(
            (0..8)
                .map(|i| Meme::new(format!("http://x/{i}.png"), format!("m{i}")))
                .collect(),
        );
        let vm = state.compute_viewmodel(30, 100);
        for a in &vm.cells {
            for b in &vm.cells {
                if a.id != b.id {
                    assert!(
                        !a.rect.contains(b.rect.row, b.rect.col),
                        "{} overlaps {}",
                        a.id,
                        b.id
                    );
                }
            }
        }
    }

    #[test]
    fn selected_meme_requires_membership() {
        let mut state = state_with_memes(two_memes());
        state.selected_id = Some("http://x/999.png".to_string());
        assert!(state.selected_meme().is_none());
        state.selected_id = Some("http://x/2.png".to_string());
        assert_eq!(state.selected_meme().map(|m| m.title.as_str()), Some("sad2"));
    }
}
