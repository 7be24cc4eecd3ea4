//! Core UI functionality for the Thrifty application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Application context shared by all components
//! - [`event_handler`] - Terminal input polling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe state transitions and user interactions
//! 3. **Context** owns the flow handler registry and other shared services
//! 4. **Events** are read from the terminal through the [`EventHandler`]

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;

pub use actions::{Action, DialogMode};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
