use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;
use thrifty::icons::IconLibrary;
use thrifty::model::Flow;
use thrifty::ui::components::FlowListComponent;
use thrifty::ui::core::{Action, AppContext, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn sample_flows() -> Vec<Flow> {
    vec![
        Flow::new("Salary", "", 2500.0).with_id("s"),
        Flow::new("Rent", "", -900.0).with_id("r"),
        Flow::new("Gym", "", -30.0).with_id("g"),
    ]
}

#[test]
fn test_loading_selects_first_flow() {
    let mut list = FlowListComponent::new();
    assert!(list.selected_flow().is_none());

    list.update_data(sample_flows());
    assert_eq!(list.selected_index(), Some(0));
    assert_eq!(list.flows().len(), 3);
}

#[test]
fn test_navigation_stays_in_bounds() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let mut list = FlowListComponent::new();
    list.update_data(sample_flows());

    list.handle_key_events(key(KeyCode::Char('k')), &ctx);
    assert_eq!(list.selected_index(), Some(0));

    list.handle_key_events(key(KeyCode::Char('G')), &ctx);
    assert_eq!(list.selected_index(), Some(2));
    list.handle_key_events(key(KeyCode::Down), &ctx);
    assert_eq!(list.selected_index(), Some(2));

    list.handle_key_events(key(KeyCode::Char('g')), &ctx);
    list.handle_key_events(key(KeyCode::Char('j')), &ctx);
    assert_eq!(list.selected_flow().unwrap().name, "Rent");
}

#[test]
fn test_shrinking_data_clamps_selection() {
    let mut list = FlowListComponent::new();
    list.update_data(sample_flows());
    list.next();
    list.next();

    list.update_data(sample_flows().into_iter().take(1).collect());
    assert_eq!(list.selected_index(), Some(0));

    list.update_data(Vec::new());
    assert_eq!(list.selected_index(), None);
}

#[test]
fn test_enter_invokes_registered_edit_handler() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let edited = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&edited);
    ctx.handlers
        .set_edit_flow_handler(move |flow| sink.borrow_mut().push(flow.clone()));

    let mut list = FlowListComponent::new();
    list.update_data(sample_flows());
    list.next();
    list.handle_key_events(key(KeyCode::Enter), &ctx);

    assert_eq!(*edited.borrow(), vec![sample_flows()[1].clone()]);
}

#[test]
fn test_enter_without_handler_does_nothing() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let mut list = FlowListComponent::new();
    list.update_data(sample_flows());

    assert_eq!(list.handle_key_events(key(KeyCode::Enter), &ctx), Action::None);
}

#[test]
fn test_delete_selected_resolves_id() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let mut list = FlowListComponent::new();
    assert_eq!(list.update(Action::DeleteSelected, &ctx), Action::None);

    list.update(Action::FlowsLoaded(sample_flows()), &ctx);
    list.next();
    assert_eq!(
        list.update(Action::DeleteSelected, &ctx),
        Action::DeleteFlow("r".to_string())
    );
}

#[test]
fn test_unrelated_actions_pass_through() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let mut list = FlowListComponent::new();
    assert_eq!(list.update(Action::Quit, &ctx), Action::Quit);
}
