//! Preview modal component renderer.
//!
//! Draws the enlarged-result box over the grid: bordered content area with
//! the caption, the image locator, the share button, and a close control on
//! the top border. Dismissal geometry (overlay versus content) lives in the
//! hit-test, not here.

use crate::ui::helpers::{position_cursor, truncate, truncate_head};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalView;

/// Renders the preview modal at its view-model rects.
pub fn render_modal(modal: &ModalView, theme: &Theme) {
    let content = modal.content;
    let inner_width = content.width.saturating_sub(2);

    for r in 0..content.height {
        position_cursor(content.row + r, content.col);
        print!("{}", Theme::fg(&theme.colors.modal_border));

        if r == 0 {
            print!("┌{}┐", "─".repeat(inner_width));
        } else if r == content.height - 1 {
            print!("└{}┘", "─".repeat(inner_width));
        } else {
            print!("│");
            render_inner_row(modal, theme, r, inner_width);
            print!("{}", Theme::fg(&theme.colors.modal_border));
            print!("│");
        }
    }

    // Close control painted over the top border's right end.
    position_cursor(modal.close.row, modal.close.col);
    print!("{}", Theme::fg(&theme.colors.modal_border));
    print!("[✕]");
    print!("{}", Theme::reset());
}

/// Renders one interior row of the modal.
fn render_inner_row(modal: &ModalView, theme: &Theme, r: usize, inner_width: usize) {
    let content = modal.content;

    if r == 1 {
        let title = truncate(&modal.title, inner_width.saturating_sub(2));
        print_centered(&title, inner_width, Theme::bold(), &theme.colors.text_normal);
    } else if r == content.height / 2 {
        let locator = truncate_head(&modal.id, inner_width.saturating_sub(2));
        print_centered(&locator, inner_width, Theme::dim(), &theme.colors.text_dim);
    } else if content.row + r == modal.share.row {
        let pad = modal.share.col.saturating_sub(content.col + 1);
        print!("{}", " ".repeat(pad));
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
        print!("{}", modal.share_label);
        print!("{}", Theme::reset());
        let used = pad + modal.share_label.chars().count();
        print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    } else {
        print!("{}", " ".repeat(inner_width));
    }
}

/// Prints styled text horizontally centered within the inner width.
fn print_centered(text: &str, inner_width: usize, style: &str, color: &str) {
    let len = text.chars().count();
    let pad = (inner_width.saturating_sub(len)) / 2;
    print!("{}", " ".repeat(pad));
    print!("{style}{}", Theme::fg(color));
    print!("{text}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(inner_width.saturating_sub(pad + len)));
}
