//! Pure mouse hit-testing against the computed view model.
//!
//! A terminal pane has no DOM, so there is no event propagation to stop; the
//! modal containment rule becomes geometry instead. [`hit_test`] maps a left
//! click to at most one application event:
//!
//! - modal open: close control → `Dismiss`, share control → `Share`,
//!   anywhere else inside the content area → nothing (clicks inside the
//!   modal must never dismiss it), anywhere on the overlay → `Dismiss`
//! - no modal: submit control (when enabled) → `Submit`, a grid cell →
//!   `Select`, the header → `Reset`, anything else → nothing
//!
//! The function is total and side-effect free; the shim feeds its result to
//! the event handler.

use crate::app::Event;
use crate::ui::viewmodel::UiViewModel;

/// Maps a left click at pane cell `(line, col)` to an application event.
///
/// Coordinates are 1-indexed, matching the view model's geometry.
#[must_use]
pub fn hit_test(vm: &UiViewModel, line: usize, col: usize) -> Option<Event> {
    if let Some(modal) = &vm.modal {
        if modal.close.contains(line, col) {
            return Some(Event::Dismiss);
        }
        if modal.share.contains(line, col) {
            return Some(Event::Share);
        }
        if modal.content.contains(line, col) {
            // Containment rule: the enlarged image and its controls must be
            // clickable without closing the modal.
            return None;
        }
        return Some(Event::Dismiss);
    }

    if vm.search_box.submit.contains(line, col) {
        return vm.search_box.submit_enabled.then_some(Event::Submit);
    }

    if let Some(cell) = vm.cells.iter().find(|c| c.rect.contains(line, col)) {
        return Some(Event::Select {
            id: cell.id.clone(),
        });
    }

    if vm.header.rect.contains(line, col) {
        return Some(Event::Reset);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::domain::Meme;
    use crate::ui::theme::Theme;

    const ROWS: usize = 30;
    const COLS: usize = 100;

    fn results_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.memes = vec![
            Meme::new("http://x/1.png", "sad1"),
            Meme::new("http://x/2.png", "sad2"),
        ];
        state
    }

    #[test]
    fn clicking_a_grid_cell_selects_it() {
        let state = results_state();
        let vm = state.compute_viewmodel(ROWS, COLS);
        let cell = &vm.cells[1];

        let event = hit_test(&vm, cell.rect.row + 1, cell.rect.col + 1);
        assert_eq!(
            event,
            Some(Event::Select {
                id: "http://x/2.png".to_string()
            })
        );
    }

    #[test]
    fn clicking_between_cells_does_nothing() {
        let state = results_state();
        let vm = state.compute_viewmodel(ROWS, COLS);
        let first = &vm.cells[0];
        // One column past the first cell's right edge sits in the gap.
        let gap_col = first.rect.col + first.rect.width;
        assert_eq!(hit_test(&vm, first.rect.row, gap_col), None);
    }

    #[test]
    fn clicking_the_header_resets() {
        let state = results_state();
        let vm = state.compute_viewmodel(ROWS, COLS);
        let event = hit_test(&vm, vm.header.rect.row, vm.header.rect.col);
        assert_eq!(event, Some(Event::Reset));
    }

    #[test]
    fn clicking_submit_respects_the_disabled_state() {
        let mut state = results_state();
        let vm = state.compute_viewmodel(ROWS, COLS);
        let submit = vm.search_box.submit;
        assert_eq!(hit_test(&vm, submit.row, submit.col), Some(Event::Submit));

        state.loading = true;
        let vm = state.compute_viewmodel(ROWS, COLS);
        let submit = vm.search_box.submit;
        assert_eq!(hit_test(&vm, submit.row, submit.col), None);
    }

    #[test]
    fn clicks_inside_modal_content_never_dismiss() {
        let mut state = results_state();
        state.selected_id = Some("http://x/1.png".to_string());
        let vm = state.compute_viewmodel(ROWS, COLS);
        let content = vm.modal.as_ref().unwrap().content;

        // Center of the content area, well away from both controls.
        let line = content.row + content.height / 2;
        let col = content.col + content.width / 2;
        assert_eq!(hit_test(&vm, line, col), None);
    }

    #[test]
    fn clicks_on_the_overlay_dismiss() {
        let mut state = results_state();
        state.selected_id = Some("http://x/1.png".to_string());
        let vm = state.compute_viewmodel(ROWS, COLS);
        let content = vm.modal.as_ref().unwrap().content;

        assert_eq!(hit_test(&vm, content.row - 1, content.col), Some(Event::Dismiss));
        assert_eq!(hit_test(&vm, 1, 1), Some(Event::Dismiss));
    }

    #[test]
    fn modal_controls_map_to_their_events() {
        let mut state = results_state();
        state.selected_id = Some("http://x/1.png".to_string());
        let vm = state.compute_viewmodel(ROWS, COLS);
        let modal = vm.modal.as_ref().unwrap();

        assert_eq!(hit_test(&vm, modal.close.row, modal.close.col), Some(Event::Dismiss));
        assert_eq!(hit_test(&vm, modal.share.row, modal.share.col), Some(Event::Share));
    }

    #[test]
    fn grid_is_inert_behind_the_overlay() {
        let mut state = results_state();
        state.selected_id = Some("http://x/1.png".to_string());
        let vm = state.compute_viewmodel(ROWS, COLS);
        let content = vm.modal.as_ref().unwrap().content;

        // A cell click outside the modal content lands on the overlay and
        // dismisses instead of re-selecting.
        let cell = vm
            .cells
            .iter()
            .find(|c| !content.contains(c.rect.row, c.rect.col))
            .expect("a cell outside the modal content");
        assert_eq!(hit_test(&vm, cell.rect.row, cell.rect.col), Some(Event::Dismiss));
    }
}
