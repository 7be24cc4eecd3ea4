//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_SHORTCUTS;
use crate::ui::app_component::AppState;
use crate::utils::format::format_amount;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text and colour of the status line
    pub fn status_line(state: &AppState, currency_symbol: &str) -> (String, Color) {
        if let Some(error) = &state.error_message {
            (error.clone(), Color::Red)
        } else if let Some(info) = &state.info_message {
            (info.clone(), Color::Green)
        } else if state.loading {
            ("Loading flows...".to_string(), Color::Yellow)
        } else {
            (
                format!("Balance: {} • {}", format_amount(state.total(), currency_symbol), STATUS_SHORTCUTS),
                Color::Gray,
            )
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, currency_symbol: &str) {
        let (text, color) = Self::status_line(state, currency_symbol);
        let status_bar = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));

        f.render_widget(status_bar, area);
    }
}
