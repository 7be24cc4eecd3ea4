use super::actions::Action;
use super::context::AppContext;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent, ctx: &AppContext) -> Action;

    fn update(&mut self, action: Action, _ctx: &AppContext) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &AppContext);
}
