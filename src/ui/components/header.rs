//! Header component renderer.
//!
//! Renders the plugin title at its computed position. The header is also the
//! reset affordance; the clickable area is the rect the view model computed,
//! which is exactly the span painted here.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title at its view-model rect.
///
/// Bold, theme header color, optional background. Centering versus left
/// alignment is already encoded in the rect.
pub fn render_header(header: &HeaderInfo, theme: &Theme) {
    position_cursor(header.rect.row, header.rect.col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", header.title);
    print!("{}", Theme::reset());
}
