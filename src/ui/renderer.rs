//! Terminal setup and the main event loop

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

use crate::config::Config;
use crate::icons::IconLibrary;
use crate::storage::LocalStorage;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{AppContext, EventHandler, EventType};

/// Open storage, build the component tree and run the TUI until quit
pub async fn run_app(config: Config) -> Result<()> {
    let storage = LocalStorage::new(&config.storage)
        .await
        .context("Failed to open database")?;

    let icons = IconLibrary::load(&config.ui.icons_dir).unwrap_or_else(|e| {
        log::warn!("Failed to load icons: {}", e);
        IconLibrary::default()
    });

    let (ctx, action_rx) = AppContext::new(icons, config.ui.currency_symbol.clone());
    let mut app = AppComponent::new(storage, ctx, action_rx);
    app.load_flows().await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_event(EventType::Key(key)).await?;
                needs_render = true;
            }
            EventType::Resize(_, _) => needs_render = true,
            EventType::Tick => {
                // Actions queued outside key handling
                if app.process_queued_actions().await? {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
