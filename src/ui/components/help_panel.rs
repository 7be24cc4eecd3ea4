//! Help panel component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::core::AppContext;
use crate::ui::layout::LayoutManager;

const HELP_TEXT: &str = r"
NAVIGATION
----------
j/k, ↑/↓    Select flow
g/G         First/last flow
Enter, e    Edit selected flow

FLOWS
-----
n           New flow
d           Delete selected flow

FORM
----
Tab/↓, ⇧Tab/↑  Next/previous field
←/→            Change icon
Enter          Save
Esc            Cancel

GENERAL
-------
?           Toggle help
q, Ctrl+C   Quit
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel with the most recent events below the key list
    pub fn render(f: &mut Frame, area: Rect, ctx: &AppContext) {
        let help_area = LayoutManager::centered_rect(70, 80, area);
        f.render_widget(Clear, help_area);

        let mut content = HELP_TEXT.to_string();
        let logs = ctx.logger.get_logs();
        if !logs.is_empty() {
            content.push_str("\nRECENT EVENTS\n-------------\n");
            for line in logs.iter().take(5) {
                content.push_str(line);
                content.push('\n');
            }
        }

        let help = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - press any key to close")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        f.render_widget(help, help_area);
    }
}
