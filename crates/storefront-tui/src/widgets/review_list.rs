//! Submitted reviews, oldest first

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use storefront_core::{Recommend, Review};

use crate::theme::{palette, styles};

pub const EMPTY_MESSAGE: &str = "There are no reviews yet. Be the first!";

pub struct ReviewList<'a> {
    reviews: &'a [Review],
}

impl<'a> ReviewList<'a> {
    pub fn new(reviews: &'a [Review]) -> Self {
        Self { reviews }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        if self.reviews.is_empty() {
            return vec![Line::from(Span::styled(EMPTY_MESSAGE, styles::text_muted()))];
        }

        self.reviews
            .iter()
            .flat_map(|review| {
                let recommend_style = match review.recommend {
                    Recommend::Yes => styles::in_stock(),
                    Recommend::No => styles::text_muted(),
                };
                [
                    Line::from(vec![
                        Span::styled(review.heading(), styles::accent_bold()),
                        Span::raw(" "),
                        Span::styled(
                            format!("recommends: {}", review.recommend),
                            recommend_style,
                        ),
                    ]),
                    Line::from(Span::styled(review.quoted_body(), styles::text_primary())),
                ]
            })
            .collect()
    }
}

impl Widget for ReviewList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Reviews ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use storefront_core::Rating;

    fn review(name: &str, text: &str, rating: u8) -> Review {
        Review {
            name: name.to_string(),
            review: text.to_string(),
            rating: Rating::new(rating).unwrap(),
            recommend: Recommend::Yes,
        }
    }

    #[test]
    fn test_empty_list_invites_first_review() {
        let mut term = TestTerminal::with_size(60, 6);

        term.render_widget(ReviewList::new(&[]), term.area());

        assert!(term.buffer_contains("Reviews"));
        assert!(term.buffer_contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_reviews_render_heading_and_quoted_body_in_order() {
        let reviews = vec![review("Ada", "Warm", 5), review("Grace", "Itchy", 2)];
        let mut term = TestTerminal::with_size(60, 8);

        term.render_widget(ReviewList::new(&reviews), term.area());

        assert!(term.buffer_contains("Ada (5/5)"));
        assert!(term.buffer_contains("\"Warm\""));
        assert!(term.buffer_contains("Grace (2/5)"));
        assert!(term.buffer_contains("\"Itchy\""));
        assert!(!term.buffer_contains(EMPTY_MESSAGE));

        let ada = term.find_line("Ada (5/5)").unwrap();
        let grace = term.find_line("Grace (2/5)").unwrap();
        assert!(ada < grace);
    }
}
