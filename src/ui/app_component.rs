use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::constants::{
    ERROR_FLOW_CREATE_FAILED, ERROR_FLOW_DELETE_FAILED, ERROR_FLOW_LOAD_FAILED, ERROR_FLOW_UPDATE_FAILED,
    SUCCESS_FLOW_CREATED, SUCCESS_FLOW_DELETED, SUCCESS_FLOW_UPDATED,
};
use crate::model::Flow;
use crate::storage::LocalStorage;
use crate::ui::components::{FlowDialogComponent, FlowListComponent, HelpPanel, StatusBar, ToolbarComponent};
use crate::ui::core::{Action, AppContext, Component, DialogMode, EventType};
use crate::ui::layout::LayoutManager;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub flows: Vec<Flow>,
    pub loading: bool,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
    pub show_help: bool,
}

impl AppState {
    /// Balance over all flows
    pub fn total(&self) -> f64 {
        self.flows.iter().map(|flow| flow.amount).sum()
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    toolbar: ToolbarComponent,
    flow_list: FlowListComponent,
    dialog: FlowDialogComponent,

    // Application state
    state: AppState,

    // Services
    ctx: AppContext,
    action_rx: mpsc::UnboundedReceiver<Action>,
    storage: LocalStorage,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(storage: LocalStorage, ctx: AppContext, action_rx: mpsc::UnboundedReceiver<Action>) -> Self {
        let dialog = FlowDialogComponent::new();
        dialog.register_handlers(&ctx);
        let toolbar = ToolbarComponent::new(&ctx);

        Self {
            toolbar,
            flow_list: FlowListComponent::new(),
            dialog,
            state: AppState {
                loading: true,
                ..Default::default()
            },
            ctx,
            action_rx,
            storage,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn selected_flow(&self) -> Option<&Flow> {
        self.flow_list.selected_flow()
    }

    /// Reload every flow from storage
    pub async fn load_flows(&mut self) -> anyhow::Result<()> {
        match self.storage.list_flows().await {
            Ok(flows) => self.apply(Action::FlowsLoaded(flows)).await,
            Err(e) => {
                self.report_error(ERROR_FLOW_LOAD_FAILED, &e);
                self.state.loading = false;
                Ok(())
            }
        }
    }

    pub async fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        if let EventType::Key(key) = event {
            self.handle_key(key).await?;
        }
        Ok(())
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        let action = if self.dialog.is_open() {
            self.dialog.handle_key_events(key, &self.ctx)
        } else if self.state.show_help {
            Action::ToggleHelp
        } else {
            self.state.clear_messages();
            match self.flow_list.handle_key_events(key, &self.ctx) {
                Action::None => self.toolbar.handle_key_events(key, &self.ctx),
                action => action,
            }
        };

        self.apply(action).await?;
        self.process_queued_actions().await?;
        Ok(())
    }

    /// Run actions queued by handlers and button callbacks. Returns whether
    /// any action ran.
    pub async fn process_queued_actions(&mut self) -> anyhow::Result<bool> {
        let mut processed = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.apply(action).await?;
            processed = true;
        }
        Ok(processed)
    }

    /// Apply an action and every follow-up action it produces
    async fn apply(&mut self, action: Action) -> anyhow::Result<()> {
        let mut next = action;
        while next != Action::None {
            next = self.handle_app_action(next).await?;
        }
        Ok(())
    }

    async fn handle_app_action(&mut self, action: Action) -> anyhow::Result<Action> {
        let follow_up = match action {
            Action::OpenFlowDialog { .. } | Action::CloseDialog => self.dialog.update(action, &self.ctx),
            Action::EditSelected | Action::DeleteSelected => self.flow_list.update(action, &self.ctx),
            Action::SaveFlow { mode, flow } => self.save_flow(mode, flow).await,
            Action::DeleteFlow(id) => self.delete_flow(&id).await,
            Action::FlowsLoaded(flows) => {
                self.state.loading = false;
                self.state.flows = flows.clone();
                let follow_up = self.flow_list.update(Action::FlowsLoaded(flows), &self.ctx);
                self.toolbar.set_has_selection(self.flow_list.selected_flow().is_some());
                follow_up
            }
            Action::ShowError(message) => {
                self.state.error_message = Some(message);
                Action::None
            }
            Action::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::None => Action::None,
        };
        Ok(follow_up)
    }

    async fn save_flow(&mut self, mode: DialogMode, flow: Flow) -> Action {
        let (result, success, failure) = match (mode, flow.id.clone()) {
            (DialogMode::Edit, Some(id)) => (
                self.storage.update_flow(&id, flow).await,
                SUCCESS_FLOW_UPDATED,
                ERROR_FLOW_UPDATE_FAILED,
            ),
            _ => (
                self.storage.create_flow(flow).await,
                SUCCESS_FLOW_CREATED,
                ERROR_FLOW_CREATE_FAILED,
            ),
        };

        match result {
            Ok(saved) => {
                self.dialog.close();
                self.state.clear_messages();
                self.ctx.logger.log(format!("{}: {}", success, saved.name));
                self.state.info_message = Some(success.to_string());
                self.reload().await
            }
            Err(e) => {
                // The dialog stays open so the input can be corrected
                self.report_error(failure, &e);
                Action::None
            }
        }
    }

    async fn delete_flow(&mut self, id: &str) -> Action {
        match self.storage.delete_flow(id).await {
            Ok(()) => {
                self.ctx.logger.log(format!("{}: {}", SUCCESS_FLOW_DELETED, id));
                self.state.info_message = Some(SUCCESS_FLOW_DELETED.to_string());
                self.reload().await
            }
            Err(e) => {
                self.report_error(ERROR_FLOW_DELETE_FAILED, &e);
                Action::None
            }
        }
    }

    async fn reload(&mut self) -> Action {
        match self.storage.list_flows().await {
            Ok(flows) => Action::FlowsLoaded(flows),
            Err(e) => {
                self.report_error(ERROR_FLOW_LOAD_FAILED, &e);
                Action::None
            }
        }
    }

    fn report_error(&mut self, prefix: &str, error: &dyn std::fmt::Display) {
        let message = format!("{}: {}", prefix, error);
        log::error!("{}", message);
        self.ctx.logger.log(message.clone());
        self.state.error_message = Some(message);
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let chunks = LayoutManager::main_layout(area);

        self.toolbar.render(f, chunks[0], &self.ctx);
        self.flow_list.render(f, chunks[1], &self.ctx);
        StatusBar::render(f, chunks[2], &self.state, &self.ctx.currency_symbol);

        if self.dialog.is_open() {
            self.dialog.render(f, area, &self.ctx);
        } else if self.state.show_help {
            HelpPanel::render(f, area, &self.ctx);
        }
    }
}
