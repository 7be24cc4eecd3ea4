//! Handler slots for "new flow" and "edit flow" intents.
//!
//! The component owning the flow form registers a handler in each slot; any
//! other component can then trigger the form by invoking whatever handler is
//! currently registered, without knowing who owns it. The registry is owned
//! by the application context and handed to components explicitly.

use std::rc::Rc;

use crate::model::Flow;
use crate::store::Writable;

/// Callback invoked with the flow a create/edit intent refers to.
pub type FlowHandler = Rc<dyn Fn(&Flow)>;

/// Two independent single-handler slots.
#[derive(Clone, Debug)]
pub struct FlowHandlers {
    pub new_flow: Writable<FlowHandler>,
    pub edit_flow: Writable<FlowHandler>,
}

impl FlowHandlers {
    pub fn new() -> Self {
        Self {
            new_flow: Writable::named("new_flow"),
            edit_flow: Writable::named("edit_flow"),
        }
    }

    /// Replace the new-flow handler.
    pub fn set_new_flow_handler(&self, handler: impl Fn(&Flow) + 'static) {
        self.new_flow.set(Rc::new(handler));
    }

    /// Replace the edit-flow handler.
    pub fn set_edit_flow_handler(&self, handler: impl Fn(&Flow) + 'static) {
        self.edit_flow.set(Rc::new(handler));
    }

    pub fn new_flow_handler(&self) -> Option<FlowHandler> {
        self.new_flow.get()
    }

    pub fn edit_flow_handler(&self) -> Option<FlowHandler> {
        self.edit_flow.get()
    }

    /// Call the current new-flow handler. Returns `false` if none is registered.
    pub fn invoke_new_flow(&self, flow: &Flow) -> bool {
        Self::invoke(&self.new_flow, flow)
    }

    /// Call the current edit-flow handler. Returns `false` if none is registered.
    pub fn invoke_edit_flow(&self, flow: &Flow) -> bool {
        Self::invoke(&self.edit_flow, flow)
    }

    fn invoke(slot: &Writable<FlowHandler>, flow: &Flow) -> bool {
        // The handler is cloned out so it may replace itself while running.
        match slot.get() {
            Some(handler) => {
                handler(flow);
                true
            }
            None => false,
        }
    }
}

impl Default for FlowHandlers {
    fn default() -> Self {
        Self::new()
    }
}
