//! Search box component renderer.
//!
//! Renders the three-row bordered input box with the query (or a dim
//! placeholder) on the left and the submit control on the right. The submit
//! control shows the busy label and drops its button styling while a search
//! is in flight.

use crate::ui::helpers::{pad_right, position_cursor, truncate, truncate_head};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBoxInfo;

/// Renders the search box at its view-model rect.
pub fn render_search_box(search: &SearchBoxInfo, theme: &Theme) {
    let rect = search.rect;
    let inner_width = rect.width.saturating_sub(2);

    position_cursor(rect.row, rect.col);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));

    position_cursor(rect.row + 1, rect.col);
    print!("│");
    render_input_line(search, theme, inner_width);
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");

    position_cursor(rect.row + 2, rect.col);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders the inner input line: prompt, query or placeholder, submit label.
fn render_input_line(search: &SearchBoxInfo, theme: &Theme, inner_width: usize) {
    let label_len = search.submit_label.chars().count();
    // " > " prompt on the left, one space of breathing room before the label.
    let query_width = inner_width.saturating_sub(3 + label_len + 1);

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" > ");

    if search.query.is_empty() {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.placeholder_fg));
        print!("{}", pad_right(&truncate(&search.placeholder, query_width), query_width));
        print!("{}", Theme::reset());
    } else {
        // Long queries keep their tail visible, like a real input caret.
        print!("{}", pad_right(&truncate_head(&search.query, query_width), query_width));
    }

    print!(" ");
    if search.submit_enabled {
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", search.submit_label);
    print!("{}", Theme::reset());
}
