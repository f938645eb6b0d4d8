//! Review form widget
//!
//! Error summary on top, then the four inputs and the submit button. The
//! focused input is highlighted only while the form has keyboard focus.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use storefront_app::{ReviewField, ReviewFormState};
use storefront_core::{Rating, Recommend};

use crate::theme::{palette, styles};

pub struct ReviewFormView<'a> {
    form: &'a ReviewFormState,
    focused: bool,
}

impl<'a> ReviewFormView<'a> {
    pub fn new(form: &'a ReviewFormState) -> Self {
        Self {
            form,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn is_active(&self, field: ReviewField) -> bool {
        self.focused && self.form.focused == field
    }

    fn label(&self, field: ReviewField) -> Span<'static> {
        let style = if self.is_active(field) {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        Span::styled(field.label(), style)
    }

    fn text_input(&self, field: ReviewField, value: Option<&'a str>) -> Line<'a> {
        let mut spans = vec![self.label(field), Span::raw(" ")];
        spans.push(Span::styled(value.unwrap_or(""), styles::text_primary()));
        if self.is_active(field) {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn rating_input(&self) -> Line<'static> {
        let mut spans = vec![self.label(ReviewField::Rating), Span::raw(" ")];
        let current = self.form.rating();
        for option in Rating::options() {
            let style = if Some(option) == current {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            let marker = if Some(option) == current { "●" } else { "○" };
            spans.push(Span::styled(format!("{marker}{option}"), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn recommend_input(&self) -> Vec<Line<'static>> {
        let current = self.form.recommend();
        let option = |value: Recommend, text: &'static str| {
            let selected = current == Some(value);
            let marker = if selected { "(•) " } else { "( ) " };
            let style = if selected {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            Span::styled(format!("{marker}{text}"), style)
        };
        vec![
            Line::from(self.label(ReviewField::Recommend)),
            Line::from(vec![
                Span::raw("  "),
                option(Recommend::Yes, "Yes"),
                Span::raw("  "),
                option(Recommend::No, "No"),
            ]),
        ]
    }

    fn submit_button(&self) -> Line<'static> {
        let style = if self.is_active(ReviewField::Submit) {
            styles::focused_selected()
        } else {
            styles::button()
        };
        Line::from(Span::styled(" Submit ", style))
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if let Some(header) = self.form.error_header() {
            lines.push(Line::from(Span::styled(header, styles::error_bold())));
            for error in self.form.errors() {
                lines.push(Line::from(vec![
                    Span::styled("  • ", styles::error()),
                    Span::styled(error.to_string(), styles::error()),
                ]));
            }
            lines.push(Line::raw(""));
        }

        lines.push(self.text_input(ReviewField::Name, self.form.name()));
        lines.push(self.text_input(ReviewField::Review, self.form.review()));
        lines.push(self.rating_input());
        lines.extend(self.recommend_input());
        lines.push(Line::raw(""));
        lines.push(self.submit_button());
        lines
    }
}

impl Widget for ReviewFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Leave a review ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
