//! Thumbnail grid component renderer.
//!
//! A terminal cannot render the images themselves, so each result is drawn
//! as a bordered card carrying its caption and a tail-truncated locator. The
//! enlarged (selected) card uses the selection border color.

use crate::ui::helpers::{pad_right, position_cursor, truncate, truncate_head};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridCell;

/// Renders all visible grid cells.
pub fn render_cells(cells: &[GridCell], theme: &Theme) {
    for cell in cells {
        render_cell(cell, theme);
    }
}

/// Renders a single card: border, caption row, locator row, border.
fn render_cell(cell: &GridCell, theme: &Theme) {
    let rect = cell.rect;
    let inner_width = rect.width.saturating_sub(2);
    let border_color = if cell.is_selected {
        &theme.colors.selection_bg
    } else {
        &theme.colors.border
    };

    position_cursor(rect.row, rect.col);
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));

    position_cursor(rect.row + 1, rect.col);
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad_right(&truncate(&cell.title, inner_width), inner_width));
    print!("{}", Theme::fg(border_color));
    print!("│");

    position_cursor(rect.row + 2, rect.col);
    print!("│");
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{}", pad_right(&truncate_head(&cell.id, inner_width), inner_width));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(border_color));
    print!("│");

    position_cursor(rect.row + 3, rect.col);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
