//! Header bar widget
//!
//! Shows the app name, the product title, the cart count and the premium
//! badge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the app title, product, cart and premium badge
pub struct MainHeader<'a> {
    product_title: &'a str,
    cart_len: usize,
    premium: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(product_title: &'a str) -> Self {
        Self {
            product_title,
            cart_len: 0,
            premium: false,
        }
    }

    pub fn cart_len(mut self, cart_len: usize) -> Self {
        self.cart_len = cart_len;
        self
    }

    pub fn premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }

    fn left_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Storefront",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.product_title, styles::text_secondary()),
        ])
    }

    fn right_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if self.premium {
            spans.push(Span::styled("★ Premium", styles::accent_bold()));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("Cart", styles::text_muted()));
        spans.push(Span::styled(
            format!("({})", self.cart_len),
            styles::text_primary().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = self.left_line();
        let right = self.right_line();
        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right-align the cart when there is room for both
        if left_width + right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_cart_count() {
        let mut term = TestTerminal::with_size(60, 3);

        term.render_widget(
            MainHeader::new("Vue Mastery Socks").cart_len(3),
            term.area(),
        );

        assert!(term.buffer_contains("Storefront"));
        assert!(term.buffer_contains("Vue Mastery Socks"));
        assert!(term.buffer_contains("Cart(3)"));
        assert!(!term.buffer_contains("Premium"));
    }

    #[test]
    fn test_header_premium_badge() {
        let mut term = TestTerminal::with_size(60, 3);

        term.render_widget(MainHeader::new("Socks").premium(true), term.area());

        assert!(term.buffer_contains("Premium"));
        assert!(term.buffer_contains("Cart(0)"));
    }

    #[test]
    fn test_header_narrow_keeps_title() {
        let mut term = TestTerminal::with_size(24, 3);

        term.render_widget(
            MainHeader::new("Vue Mastery Socks").cart_len(1),
            term.area(),
        );

        assert!(term.buffer_contains("Storefront"));
        assert!(!term.buffer_contains("Cart(1)"));
    }
}
