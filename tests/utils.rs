use ratatui::style::Color;
use thrifty::model::ButtonColor;
use thrifty::utils::color::{amount_color, button_text_color, convert_button_color};
use thrifty::utils::format::{format_amount, parse_amount};

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(1200.0, "€"), "+1200.00 €");
    assert_eq!(format_amount(-35.5, "$"), "-35.50 $");
}

#[test]
fn test_parse_amount() {
    assert_eq!(parse_amount(" 12.5 "), Some(12.5));
    assert_eq!(parse_amount("-900,25"), Some(-900.25));
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount("inf"), None);
}

#[test]
fn test_amount_color() {
    assert_eq!(amount_color(10.0), Color::Green);
    assert_eq!(amount_color(-10.0), Color::Red);
    assert_eq!(amount_color(0.0), Color::Gray);
}

#[test]
fn test_every_button_color_has_a_background() {
    for color in ButtonColor::ALL {
        let background = convert_button_color(color);
        if color == ButtonColor::None {
            assert_eq!(background, Color::Reset);
        } else {
            assert_ne!(background, Color::Reset);
        }
    }
    assert_eq!(button_text_color(ButtonColor::Light), Color::Black);
    assert_eq!(button_text_color(ButtonColor::Primary), Color::White);
}
