//! Semantic style builders for the product card.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - focused control or selected option
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Stock styles ---
pub fn in_stock() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Struck-through "Out of Stock"
pub fn out_of_stock() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::CROSSED_OUT)
}

// --- Buttons ---
pub fn button() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Grayed-out button that cannot be activated
pub fn button_disabled() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::DIM)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn error_bold() -> Style {
    error().add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn code() -> Style {
    Style::default().fg(palette::CODE_FG)
}

/// Swatch color for a variant color name.
///
/// Names ratatui understands (`green`, `lightblue`, `#336699`) map directly;
/// anything else falls back on the hue it mentions.
pub fn swatch_color(name: &str) -> Color {
    if let Ok(color) = name.parse::<Color>() {
        return color;
    }
    let lower = name.to_ascii_lowercase();
    if lower.contains("blue") {
        Color::Blue
    } else if lower.contains("green") {
        Color::Green
    } else if lower.contains("red") {
        Color::Red
    } else {
        palette::TEXT_SECONDARY
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_out_of_stock_is_struck_through() {
        assert!(out_of_stock().add_modifier.contains(Modifier::CROSSED_OUT));
        assert!(!in_stock().add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_disabled_button_is_dimmed() {
        assert!(button_disabled().add_modifier.contains(Modifier::DIM));
        assert_eq!(button_disabled().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_swatch_color_named_and_fallback() {
        assert_eq!(swatch_color("green"), Color::Green);
        assert_eq!(swatch_color("navy blue"), Color::Blue);
        assert_eq!(swatch_color("plaid"), palette::TEXT_SECONDARY);
    }
}
