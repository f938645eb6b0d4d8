//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use storefront_app::state::{AppState, Focus};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads `state`, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let title = state.product.title();

    frame.render_widget(
        widgets::MainHeader::new(&title)
            .cart_len(state.cart.len())
            .premium(state.premium),
        areas.header,
    );

    frame.render_widget(
        widgets::ProductCardView::new(&state.product, state.premium)
            .focused(state.focus == Focus::Card),
        areas.card,
    );

    frame.render_widget(
        widgets::ReviewList::new(state.product.reviews()),
        areas.reviews,
    );

    frame.render_widget(
        widgets::ReviewFormView::new(&state.product.review_form)
            .focused(state.focus == Focus::ReviewForm),
        areas.form,
    );

    frame.render_widget(Paragraph::new(footer_line(state)), areas.footer);
}

/// Status message when there is one, otherwise key hints for the focus
fn footer_line(state: &AppState) -> Line<'_> {
    if let Some(status) = &state.status {
        return Line::from(vec![
            Span::raw(" "),
            Span::styled(status.as_str(), styles::error()),
        ]);
    }

    let hints: &[(&str, &str)] = match state.focus {
        Focus::Card => &[
            ("1-9", "Color"),
            ("←/→", "Cycle"),
            ("a", "Add to Cart"),
            ("d", "Remove"),
            ("Tab", "Review"),
            ("q", "Quit"),
        ],
        Focus::ReviewForm => &[
            ("Tab", "Next field"),
            ("1-5", "Rating"),
            ("y/n", "Recommend"),
            ("Enter", "Submit"),
            ("Esc", "Back"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled("[", styles::text_muted()));
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(format!("] {label}  "), styles::text_muted()));
    }
    Line::from(spans)
}
