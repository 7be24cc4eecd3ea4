use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use thrifty::icons::IconLibrary;
use thrifty::model::Flow;
use thrifty::storage::LocalStorage;
use thrifty::ui::app_component::AppState;
use thrifty::ui::core::{AppContext, EventType};
use thrifty::ui::AppComponent;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn app_with(flows: &[Flow]) -> AppComponent {
    let storage = LocalStorage::in_memory().await.unwrap();
    for flow in flows {
        storage.create_flow(flow.clone()).await.unwrap();
    }

    let (ctx, rx) = AppContext::new(IconLibrary::default(), "€");
    let mut app = AppComponent::new(storage, ctx, rx);
    app.load_flows().await.unwrap();
    app
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c))).await.unwrap();
    }
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(!state.loading, "Default AppState should not be loading");
    assert!(state.error_message.is_none(), "Default AppState should have no error message");
    assert_eq!(state.total(), 0.0);
}

#[tokio::test]
async fn test_dialog_registers_both_handlers() {
    let app = app_with(&[]).await;
    assert!(app.context().handlers.new_flow_handler().is_some());
    assert!(app.context().handlers.edit_flow_handler().is_some());
    assert!(!app.state().loading);
}

#[tokio::test]
async fn test_create_flow_through_form() {
    let mut app = app_with(&[]).await;

    app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
    assert!(app.is_dialog_open());

    type_text(&mut app, "Rent").await;
    app.handle_key(key(KeyCode::Tab)).await.unwrap();
    app.handle_key(key(KeyCode::Tab)).await.unwrap();
    type_text(&mut app, "-900").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    assert!(!app.is_dialog_open());
    assert_eq!(app.state().flows.len(), 1);
    assert_eq!(app.state().flows[0].name, "Rent");
    assert!(app.state().info_message.is_some());
    assert_eq!(app.selected_flow().unwrap().amount, -900.0);
}

#[tokio::test]
async fn test_rejected_flow_keeps_dialog_open() {
    let mut app = app_with(&[]).await;

    app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
    app.handle_key(key(KeyCode::Tab)).await.unwrap();
    app.handle_key(key(KeyCode::Tab)).await.unwrap();
    type_text(&mut app, "15").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    assert!(app.is_dialog_open());
    let error = app.state().error_message.clone().unwrap();
    assert!(error.contains("Please provide name and amount"));
    assert!(app.state().flows.is_empty());
}

#[tokio::test]
async fn test_edit_selected_flow() {
    let mut app = app_with(&[Flow::new("Rent", "", -900.0)]).await;
    let id = app.selected_flow().unwrap().id.clone();

    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert!(app.is_dialog_open());

    type_text(&mut app, " flat").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    assert!(!app.is_dialog_open());
    let flow = app.selected_flow().unwrap();
    assert_eq!(flow.name, "Rent flat");
    assert_eq!(flow.id, id);
    assert_eq!(app.state().flows.len(), 1);
}

#[tokio::test]
async fn test_escape_discards_changes() {
    let mut app = app_with(&[Flow::new("Rent", "", -900.0)]).await;

    app.handle_key(key(KeyCode::Char('e'))).await.unwrap();
    assert!(app.is_dialog_open());
    type_text(&mut app, "xyz").await;
    app.handle_key(key(KeyCode::Esc)).await.unwrap();

    assert!(!app.is_dialog_open());
    assert_eq!(app.state().flows[0].name, "Rent");
}

#[tokio::test]
async fn test_delete_selected_flow() {
    let mut app = app_with(&[Flow::new("Rent", "", -900.0), Flow::new("Salary", "", 2500.0)]).await;
    assert_eq!(app.selected_flow().unwrap().name, "Salary");

    app.handle_key(key(KeyCode::Char('d'))).await.unwrap();

    assert_eq!(app.state().flows.len(), 1);
    assert_eq!(app.selected_flow().unwrap().name, "Rent");
}

#[tokio::test]
async fn test_help_toggle_and_quit() {
    let mut app = app_with(&[]).await;

    app.handle_key(key(KeyCode::Char('?'))).await.unwrap();
    assert!(app.state().show_help);
    // Any key closes the help panel
    app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
    assert!(!app.state().show_help);
    assert!(!app.should_quit());

    app.handle_event(EventType::Key(key(KeyCode::Char('q')))).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_c_quits_from_dialog() {
    let mut app = app_with(&[]).await;
    app.handle_key(key(KeyCode::Char('n'))).await.unwrap();

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .await
        .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_shows_flows_and_balance() {
    let mut app = app_with(&[Flow::new("Salary", "", 2500.0), Flow::new("Rent", "", -900.0)]).await;

    let text = screen(&mut app);

    assert!(text.contains("Flows (2)"));
    assert!(text.contains("Salary"));
    assert!(text.contains("Rent"));
    assert!(text.contains("+1600.00"));
}

#[tokio::test]
async fn test_render_dialog() {
    let mut app = app_with(&[]).await;
    app.handle_key(key(KeyCode::Char('n'))).await.unwrap();

    let text = screen(&mut app);
    assert!(text.contains("New flow"));
    assert!(text.contains("Description"));
}

#[tokio::test]
async fn test_queued_actions_report_work_done() {
    let mut app = app_with(&[]).await;
    assert!(!app.process_queued_actions().await.unwrap());

    // A handler fired outside key handling
    assert!(app.context().handlers.invoke_new_flow(&Flow::default()));
    assert!(!app.is_dialog_open());

    assert!(app.process_queued_actions().await.unwrap());
    assert!(app.is_dialog_open());
    assert!(!app.process_queued_actions().await.unwrap());
}
