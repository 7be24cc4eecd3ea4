//! Flow list component
//!
//! Presents the stored flows. Editing is not handled here: the list only
//! invokes whatever edit handler is registered in the context.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::constants::EMPTY_LIST_HINT;
use crate::model::Flow;
use crate::ui::core::{Action, AppContext, Component};
use crate::utils::color::amount_color;
use crate::utils::format::format_amount;

#[derive(Default)]
pub struct FlowListComponent {
    flows: Vec<Flow>,
    list_state: ListState,
}

impl FlowListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed flows, keeping the selection in range
    pub fn update_data(&mut self, flows: Vec<Flow>) {
        self.flows = flows;
        let selected = match (self.list_state.selected(), self.flows.len()) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }

    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_flow(&self) -> Option<&Flow> {
        self.list_state.selected().and_then(|index| self.flows.get(index))
    }

    pub fn next(&mut self) {
        if self.flows.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) if index + 1 < self.flows.len() => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous(&mut self) {
        if self.flows.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |index| index.saturating_sub(1));
        self.list_state.select(Some(previous));
    }

    fn edit_selected(&self, ctx: &AppContext) {
        if let Some(flow) = self.selected_flow() {
            if !ctx.handlers.invoke_edit_flow(flow) {
                log::debug!("No edit handler registered");
            }
        }
    }

    fn render_item<'a>(flow: &'a Flow, ctx: &AppContext) -> ListItem<'a> {
        let mut spans = vec![
            Span::styled(
                format!("{:>12} ", format_amount(flow.amount, &ctx.currency_symbol)),
                Style::default().fg(amount_color(flow.amount)),
            ),
            Span::raw(format!("{} ", ctx.icons.label_for(flow.icon.as_deref()))),
            Span::styled(flow.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ];

        if !flow.description.is_empty() {
            spans.push(Span::styled(
                format!("  {}", flow.description),
                Style::default().fg(Color::Gray),
            ));
        }

        if !flow.tags.is_empty() {
            spans.push(Span::styled(
                format!("  #{}", flow.tags.join(" #")),
                Style::default().fg(Color::Cyan),
            ));
        }

        ListItem::new(Line::from(spans))
    }
}

impl Component for FlowListComponent {
    fn handle_key_events(&mut self, key: KeyEvent, ctx: &AppContext) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(),
            KeyCode::Char('k') | KeyCode::Up => self.previous(),
            KeyCode::Home | KeyCode::Char('g') => {
                if !self.flows.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::End | KeyCode::Char('G') => {
                if !self.flows.is_empty() {
                    self.list_state.select(Some(self.flows.len() - 1));
                }
            }
            KeyCode::Enter => self.edit_selected(ctx),
            _ => return Action::None,
        }
        Action::None
    }

    fn update(&mut self, action: Action, ctx: &AppContext) -> Action {
        match action {
            Action::EditSelected => {
                self.edit_selected(ctx);
                Action::None
            }
            Action::DeleteSelected => match self.selected_flow().and_then(|flow| flow.id.clone()) {
                Some(id) => Action::DeleteFlow(id),
                None => Action::None,
            },
            Action::FlowsLoaded(flows) => {
                self.update_data(flows);
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &AppContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Flows ({})", self.flows.len()));

        if self.flows.is_empty() {
            let hint = Paragraph::new(EMPTY_LIST_HINT)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, rect);
            return;
        }

        let items: Vec<ListItem> = self.flows.iter().map(|flow| Self::render_item(flow, ctx)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
