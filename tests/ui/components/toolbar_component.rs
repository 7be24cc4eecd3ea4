use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;
use thrifty::icons::IconLibrary;
use thrifty::model::{ButtonColor, Flow};
use thrifty::ui::components::ToolbarComponent;
use thrifty::ui::core::{Action, AppContext, Component};

fn visible_names(toolbar: &ToolbarComponent) -> Vec<String> {
    toolbar
        .visible_buttons()
        .map(|(_, button)| button.name.clone())
        .collect()
}

#[test]
fn test_edit_and_delete_hidden_without_selection() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let mut toolbar = ToolbarComponent::new(&ctx);

    assert_eq!(visible_names(&toolbar), vec!["New", "Help", "Quit"]);
    assert_eq!(toolbar.buttons().count(), 5);

    toolbar.set_has_selection(true);
    assert_eq!(visible_names(&toolbar), vec!["New", "Edit", "Delete", "Help", "Quit"]);
}

#[test]
fn test_new_button_invokes_new_flow_handler() {
    let (ctx, mut rx) = AppContext::new(IconLibrary::default(), "€");
    let requested = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&requested);
    ctx.handlers
        .set_new_flow_handler(move |flow| sink.borrow_mut().push(flow.clone()));

    let mut toolbar = ToolbarComponent::new(&ctx);
    let action = toolbar.handle_key_events(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE), &ctx);

    assert_eq!(action, Action::None);
    assert_eq!(*requested.borrow(), vec![Flow::default()]);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_new_button_uses_handler_registered_later() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let toolbar = ToolbarComponent::new(&ctx);

    // Nothing registered yet
    assert!(toolbar.press('n'));

    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    ctx.handlers.set_new_flow_handler(move |_| *counter.borrow_mut() += 1);
    toolbar.press('n');

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_hidden_buttons_cannot_be_pressed() {
    let (ctx, mut rx) = AppContext::new(IconLibrary::default(), "€");
    let mut toolbar = ToolbarComponent::new(&ctx);

    assert!(!toolbar.press('d'));
    assert!(rx.try_recv().is_err());

    toolbar.set_has_selection(true);
    assert!(toolbar.press('d'));
    assert_eq!(rx.try_recv().unwrap(), Action::DeleteSelected);
}

#[test]
fn test_action_buttons_queue_actions() {
    let (ctx, mut rx) = AppContext::new(IconLibrary::default(), "€");
    let toolbar = ToolbarComponent::new(&ctx);

    toolbar.press('?');
    toolbar.press('q');
    assert!(!toolbar.press('x'));

    assert_eq!(rx.try_recv().unwrap(), Action::ToggleHelp);
    assert_eq!(rx.try_recv().unwrap(), Action::Quit);
}

#[test]
fn test_button_colors() {
    let (ctx, _rx) = AppContext::new(IconLibrary::default(), "€");
    let toolbar = ToolbarComponent::new(&ctx);
    let colors: Vec<Option<ButtonColor>> = toolbar.buttons().map(|button| button.color).collect();

    assert_eq!(
        colors,
        vec![
            Some(ButtonColor::Primary),
            Some(ButtonColor::Blue),
            Some(ButtonColor::Red),
            Some(ButtonColor::Light),
            Some(ButtonColor::Dark),
        ]
    );
}
