use crate::model::Flow;

/// Whether the flow form creates a new flow or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    New,
    Edit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Flow form
    OpenFlowDialog { mode: DialogMode, flow: Flow },
    SaveFlow { mode: DialogMode, flow: Flow },
    CloseDialog,

    // List operations
    EditSelected,
    DeleteSelected,
    DeleteFlow(String),
    FlowsLoaded(Vec<Flow>),

    // UI operations
    ShowError(String),
    ToggleHelp,

    // App control
    Quit,
    None,
}
