//! Flow form dialog
//!
//! The dialog owns the create/edit form, so it is the component that
//! registers the new-flow and edit-flow handlers. The handlers do not touch
//! the dialog directly; they queue [`Action::OpenFlowDialog`], which the
//! application routes back here.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{DIALOG_HEIGHT_PERCENT, DIALOG_INSTRUCTIONS, DIALOG_WIDTH_PERCENT, ERROR_INVALID_AMOUNT};
use crate::model::Flow;
use crate::ui::core::{Action, AppContext, Component, DialogMode};
use crate::ui::layout::LayoutManager;
use crate::utils::format::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Name,
    Description,
    Amount,
    Icon,
    Tags,
}

impl DialogField {
    const ORDER: [DialogField; 5] = [
        DialogField::Name,
        DialogField::Description,
        DialogField::Amount,
        DialogField::Icon,
        DialogField::Tags,
    ];

    fn label(self) -> &'static str {
        match self {
            DialogField::Name => "Name",
            DialogField::Description => "Description",
            DialogField::Amount => "Amount",
            DialogField::Icon => "Icon",
            DialogField::Tags => "Tags",
        }
    }

    fn next(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

pub struct FlowDialogComponent {
    mode: Option<DialogMode>,
    flow_id: Option<String>,
    name: String,
    description: String,
    amount: String,
    icon: Option<String>,
    tags: String,
    focus: DialogField,
}

impl FlowDialogComponent {
    pub fn new() -> Self {
        Self {
            mode: None,
            flow_id: None,
            name: String::new(),
            description: String::new(),
            amount: String::new(),
            icon: None,
            tags: String::new(),
            focus: DialogField::Name,
        }
    }

    /// Install this dialog as the owner of both flow intents, replacing any
    /// previously registered handlers.
    pub fn register_handlers(&self, ctx: &AppContext) {
        let tx = ctx.action_sender();
        ctx.handlers.set_new_flow_handler(move |flow: &Flow| {
            let action = Action::OpenFlowDialog {
                mode: DialogMode::New,
                flow: flow.clone(),
            };
            if tx.send(action).is_err() {
                log::warn!("Action queue closed, new-flow request dropped");
            }
        });

        let tx = ctx.action_sender();
        ctx.handlers.set_edit_flow_handler(move |flow: &Flow| {
            let action = Action::OpenFlowDialog {
                mode: DialogMode::Edit,
                flow: flow.clone(),
            };
            if tx.send(action).is_err() {
                log::warn!("Action queue closed, edit-flow request dropped");
            }
        });
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<DialogMode> {
        self.mode
    }

    pub fn focus(&self) -> DialogField {
        self.focus
    }

    /// Icon currently chosen in the form
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Open the form prefilled with `flow`
    pub fn open(&mut self, mode: DialogMode, flow: Flow) {
        self.mode = Some(mode);
        self.flow_id = flow.id;
        self.name = flow.name;
        self.description = flow.description;
        self.amount = if mode == DialogMode::New && flow.amount == 0.0 {
            String::new()
        } else {
            flow.amount.to_string()
        };
        self.icon = flow.icon;
        self.tags = flow.tags.join(", ");
        self.focus = DialogField::Name;
    }

    pub fn close(&mut self) {
        *self = Self::new();
    }

    /// Build the flow described by the form
    pub fn build_flow(&self) -> Result<Flow, String> {
        let amount = parse_amount(&self.amount).ok_or_else(|| ERROR_INVALID_AMOUNT.to_string())?;
        let tags = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect();

        Ok(Flow {
            id: self.flow_id.clone(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            amount,
            icon: self.icon.clone(),
            tags,
        })
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            DialogField::Name => Some(&mut self.name),
            DialogField::Description => Some(&mut self.description),
            DialogField::Amount => Some(&mut self.amount),
            DialogField::Tags => Some(&mut self.tags),
            DialogField::Icon => None,
        }
    }

    /// Step through "no icon" followed by every icon of the library
    fn cycle_icon(&mut self, ctx: &AppContext, forward: bool) {
        let count = ctx.icons.len();
        if count == 0 {
            return;
        }

        // Slot 0 is "no icon", slot i + 1 is library icon i
        let slots = count + 1;
        let current = match self.icon.as_deref() {
            None => 0,
            Some(uri) => ctx.icons.position(uri).map_or(0, |index| index + 1),
        };
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        self.icon = match next {
            0 => None,
            slot => ctx.icons.get(slot - 1).map(|icon| icon.data_uri.clone()),
        };
    }

    fn field_value(&self, field: DialogField, ctx: &AppContext) -> String {
        match field {
            DialogField::Name => self.name.clone(),
            DialogField::Description => self.description.clone(),
            DialogField::Amount => self.amount.clone(),
            DialogField::Tags => self.tags.clone(),
            DialogField::Icon => {
                let label = ctx.icons.label_for(self.icon.as_deref());
                if ctx.icons.is_empty() {
                    label
                } else {
                    format!("◀ {} ▶", label)
                }
            }
        }
    }
}

impl Default for FlowDialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FlowDialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent, ctx: &AppContext) -> Action {
        let Some(mode) = self.mode else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc => Action::CloseDialog,
            KeyCode::Enter => match self.build_flow() {
                Ok(flow) => Action::SaveFlow { mode, flow },
                Err(message) => Action::ShowError(message),
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Left if self.focus == DialogField::Icon => {
                self.cycle_icon(ctx, false);
                Action::None
            }
            KeyCode::Right if self.focus == DialogField::Icon => {
                self.cycle_icon(ctx, true);
                Action::None
            }
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
                Action::None
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.focused_text() {
                    text.push(c);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action, _ctx: &AppContext) -> Action {
        match action {
            Action::OpenFlowDialog { mode, flow } => {
                self.open(mode, flow);
                Action::None
            }
            Action::CloseDialog => {
                self.close();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &AppContext) {
        let Some(mode) = self.mode else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect(DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT_PERCENT, rect);
        f.render_widget(Clear, dialog_area);

        let title = match mode {
            DialogMode::New => "New flow",
            DialogMode::Edit => "Edit flow",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let mut constraints = vec![Constraint::Length(1); DialogField::ORDER.len()];
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);

        for (row, field) in DialogField::ORDER.iter().enumerate() {
            let focused = *field == self.focus;
            let label_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let cursor = if focused && *field != DialogField::Icon { "_" } else { "" };

            let line = Line::from(vec![
                Span::styled(format!("{:<12}", field.label()), label_style),
                Span::raw(self.field_value(*field, ctx)),
                Span::styled(cursor, Style::default().fg(Color::Yellow)),
            ]);
            f.render_widget(Paragraph::new(line), rows[row]);
        }

        let instructions = Paragraph::new(DIALOG_INSTRUCTIONS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(instructions, rows[rows.len() - 1]);
    }
}
