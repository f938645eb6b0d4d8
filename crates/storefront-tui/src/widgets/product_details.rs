//! Bullet list of product details

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use storefront_app::components::ProductDetails;

use crate::theme::styles;

pub struct ProductDetailsList<'a> {
    details: ProductDetails<'a>,
}

impl<'a> ProductDetailsList<'a> {
    pub fn new(details: ProductDetails<'a>) -> Self {
        Self { details }
    }

    /// One line per detail, in order
    pub fn lines(&self) -> Vec<Line<'a>> {
        self.details
            .items()
            .map(|item| {
                Line::from(vec![
                    Span::styled(" • ", styles::text_muted()),
                    Span::styled(item, styles::text_primary()),
                ])
            })
            .collect()
    }
}

impl Widget for ProductDetailsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.details.is_empty() {
            return;
        }
        Paragraph::new(self.lines()).render(area, buf);
    }
}
