//! Toolbar component
//!
//! A row of [`PageButton`]s bound to hot keys. Buttons act through their
//! click handlers only: "New" invokes the registered new-flow handler, the
//! others queue actions on the context.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{ButtonColor, Flow, PageButton};
use crate::ui::core::{Action, AppContext, Component};
use crate::utils::color::{button_text_color, convert_button_color};

const EDIT_BUTTON: &str = "Edit";
const DELETE_BUTTON: &str = "Delete";

pub struct ToolbarComponent {
    buttons: Vec<(char, PageButton)>,
}

impl ToolbarComponent {
    pub fn new(ctx: &AppContext) -> Self {
        let handlers = ctx.handlers.clone();
        let new_button = PageButton::new("New")
            .with_color(ButtonColor::Primary)
            .with_click_handle(move || {
                if !handlers.invoke_new_flow(&Flow::default()) {
                    log::debug!("No new-flow handler registered");
                }
            });

        let buttons = vec![
            ('n', new_button),
            (
                'e',
                Self::action_button(ctx, EDIT_BUTTON, ButtonColor::Blue, Action::EditSelected).with_hidden(true),
            ),
            (
                'd',
                Self::action_button(ctx, DELETE_BUTTON, ButtonColor::Red, Action::DeleteSelected).with_hidden(true),
            ),
            ('?', Self::action_button(ctx, "Help", ButtonColor::Light, Action::ToggleHelp)),
            ('q', Self::action_button(ctx, "Quit", ButtonColor::Dark, Action::Quit)),
        ];

        Self { buttons }
    }

    fn action_button(ctx: &AppContext, name: &str, color: ButtonColor, action: Action) -> PageButton {
        let tx = ctx.action_sender();
        PageButton::new(name).with_color(color).with_click_handle(move || {
            if tx.send(action.clone()).is_err() {
                log::warn!("Action queue closed, button click dropped");
            }
        })
    }

    /// Show Edit and Delete only while a flow is selected
    pub fn set_has_selection(&mut self, has_selection: bool) {
        for (_, button) in &mut self.buttons {
            if button.name == EDIT_BUTTON || button.name == DELETE_BUTTON {
                button.hidden = Some(!has_selection);
            }
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = &PageButton> {
        self.buttons.iter().map(|(_, button)| button)
    }

    pub fn visible_buttons(&self) -> impl Iterator<Item = (char, &PageButton)> {
        self.buttons
            .iter()
            .filter(|(_, button)| !button.is_hidden())
            .map(|(key, button)| (*key, button))
    }

    /// Click the visible button bound to `key`. Returns whether one was found.
    pub fn press(&self, key: char) -> bool {
        match self.visible_buttons().find(|(hotkey, _)| *hotkey == key) {
            Some((_, button)) => {
                button.click();
                true
            }
            None => false,
        }
    }
}

impl Component for ToolbarComponent {
    fn handle_key_events(&mut self, key: KeyEvent, _ctx: &AppContext) -> Action {
        if let KeyCode::Char(c) = key.code {
            self.press(c);
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, _ctx: &AppContext) {
        let mut spans = Vec::new();
        for (key, button) in self.visible_buttons() {
            let color = button.color.unwrap_or(ButtonColor::None);
            spans.push(Span::styled(
                format!(" {} {} ", key, button.name),
                Style::default()
                    .bg(convert_button_color(color))
                    .fg(button_text_color(color)),
            ));
            spans.push(Span::raw(" "));
        }

        let toolbar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("Thrifty"));
        f.render_widget(toolbar, rect);
    }
}
