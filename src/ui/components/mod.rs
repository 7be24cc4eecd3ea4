pub mod flow_dialog_component;
pub mod flow_list_component;
pub mod help_panel;
pub mod status_bar;
pub mod toolbar_component;

pub use flow_dialog_component::{DialogField, FlowDialogComponent};
pub use flow_list_component::FlowListComponent;
pub use help_panel::HelpPanel;
pub use status_bar::StatusBar;
pub use toolbar_component::ToolbarComponent;
