use ratatui::style::Color;

use crate::model::ButtonColor;

/// Convert a button theme colour to a terminal background colour
#[must_use]
pub fn convert_button_color(color: ButtonColor) -> Color {
    match color {
        ButtonColor::Alternative => Color::Rgb(128, 128, 128),
        ButtonColor::None => Color::Reset,
        ButtonColor::Red => Color::Rgb(220, 76, 62),
        ButtonColor::Yellow => Color::Rgb(178, 145, 4),
        ButtonColor::Green => Color::Rgb(54, 147, 7),
        ButtonColor::Purple => Color::Rgb(105, 46, 194),
        ButtonColor::Blue => Color::Rgb(65, 128, 255),
        ButtonColor::Light => Color::Rgb(229, 231, 235),
        ButtonColor::Dark => Color::Rgb(31, 41, 55),
        ButtonColor::Primary => Color::Rgb(26, 86, 219),
    }
}

/// Foreground colour readable on top of [`convert_button_color`]
#[must_use]
pub fn button_text_color(color: ButtonColor) -> Color {
    match color {
        ButtonColor::Light | ButtonColor::Yellow => Color::Black,
        ButtonColor::None => Color::Reset,
        _ => Color::White,
    }
}

/// Green for income, red for expenses
#[must_use]
pub fn amount_color(amount: f64) -> Color {
    if amount > 0.0 {
        Color::Green
    } else if amount < 0.0 {
        Color::Red
    } else {
        Color::Gray
    }
}
