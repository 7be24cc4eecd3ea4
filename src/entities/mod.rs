pub mod flow;
pub mod flow_tag;
pub mod icon;
pub mod tag;

pub use flow::Entity as Flow;
pub use flow_tag::Entity as FlowTag;
pub use icon::Entity as Icon;
pub use tag::Entity as Tag;
