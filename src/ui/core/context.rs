use tokio::sync::mpsc;

use super::actions::Action;
use crate::{icons::IconLibrary, logger::Logger, registry::FlowHandlers};

/// State shared by all components, passed to them explicitly.
///
/// Handlers registered in [`FlowHandlers`] run synchronously inside whichever
/// component invokes them; to affect another component they queue an
/// [`Action`] through [`AppContext::dispatch`].
pub struct AppContext {
    pub handlers: FlowHandlers,
    pub icons: IconLibrary,
    pub logger: Logger,
    pub currency_symbol: String,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl AppContext {
    pub fn new(icons: IconLibrary, currency_symbol: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let context = Self {
            handlers: FlowHandlers::new(),
            icons,
            logger: Logger::new(),
            currency_symbol: currency_symbol.into(),
            action_tx,
        };
        (context, action_rx)
    }

    /// Sender for queueing actions from handlers and button callbacks
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub fn dispatch(&self, action: Action) {
        if self.action_tx.send(action).is_err() {
            log::warn!("Action queue closed, action dropped");
        }
    }
}
