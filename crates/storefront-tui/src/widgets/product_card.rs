//! Product card widget
//!
//! Renders everything the card derives from the selected variant: title,
//! image, stock line, shipping label, details, color swatches, sizes and the
//! cart buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use storefront_app::ProductCard;

use crate::theme::{palette, styles};

use super::ProductDetailsList;

pub struct ProductCardView<'a> {
    card: &'a ProductCard,
    premium: bool,
    focused: bool,
}

impl<'a> ProductCardView<'a> {
    pub fn new(card: &'a ProductCard, premium: bool) -> Self {
        Self {
            card,
            premium,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn stock_line(&self) -> Line<'static> {
        if self.card.in_stock() {
            Line::from(Span::styled("In Stock", styles::in_stock()))
        } else {
            Line::from(Span::styled("Out of Stock", styles::out_of_stock()))
        }
    }

    fn swatch_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled("Colors: ", styles::text_secondary())];
        let selected = self.card.selected_index();

        for (i, variant) in self.card.variants().iter().enumerate() {
            let label_style = if i == selected {
                if self.focused {
                    styles::focused_selected()
                } else {
                    styles::accent_bold()
                }
            } else {
                styles::text_primary()
            };
            let (open, close) = if i == selected { ("[", "]") } else { (" ", " ") };

            spans.push(Span::styled(open, styles::text_muted()));
            spans.push(Span::styled(format!("{}", i + 1), styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                "■",
                Style::default().fg(styles::swatch_color(&variant.color)),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(variant.color.as_str(), label_style));
            spans.push(Span::styled(close, styles::text_muted()));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn sizes_line(&self) -> Option<Line<'a>> {
        if self.card.sizes().is_empty() {
            return None;
        }
        let mut spans = vec![Span::styled("Sizes: ", styles::text_secondary())];
        for size in self.card.sizes() {
            spans.push(Span::styled(size.as_str(), styles::text_primary()));
            spans.push(Span::raw("  "));
        }
        Some(Line::from(spans))
    }

    fn button_line(&self) -> Line<'static> {
        let add_style = if self.card.in_stock() {
            styles::button()
        } else {
            styles::button_disabled()
        };
        Line::from(vec![
            Span::styled(" Add to Cart ", add_style),
            Span::raw("  "),
            Span::styled(" Remove ", styles::button()),
        ])
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled(self.card.title(), styles::title())),
            Line::from(vec![
                Span::styled("Image: ", styles::text_muted()),
                Span::styled(self.card.image(), styles::code()),
            ]),
        ];
        if let Some(link) = self.card.link() {
            lines.push(Line::from(vec![
                Span::styled("More products like this: ", styles::text_muted()),
                Span::styled(link, styles::accent()),
            ]));
        }

        lines.push(Line::raw(""));
        lines.push(self.stock_line());
        lines.push(Line::from(vec![
            Span::styled("Shipping: ", styles::text_secondary()),
            Span::styled(
                self.card.shipping(self.premium).label(),
                styles::text_primary(),
            ),
        ]));

        lines.push(Line::raw(""));
        lines.extend(ProductDetailsList::new(self.card.details()).lines());

        lines.push(Line::raw(""));
        lines.push(self.swatch_line());
        if let Some(sizes) = self.sizes_line() {
            lines.push(sizes);
        }

        lines.push(Line::raw(""));
        lines.push(self.button_line());
        lines
    }
}

impl Widget for ProductCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Product ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
