//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header: app name, product title, cart count
    pub header: Rect,
    /// Product card (left column)
    pub card: Rect,
    /// Submitted reviews (right column, top)
    pub reviews: Rect,
    /// Review form (right column, bottom)
    pub form: Rect,
    /// Key hints / status line
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(area);

    let [card, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    let [reviews, form] =
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(right);

    ScreenAreas {
        header,
        card,
        reviews,
        form,
        footer,
    }
}
