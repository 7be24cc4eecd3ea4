//! Thrifty - a terminal budget planner for recurring flows
//!
//! A flow is a recurring income or expense. Flows are kept in a local SQLite
//! database and managed through a Ratatui interface.
//!
//! # Modules
//!
//! * [`model`] - Flow and page button value types
//! * [`store`] - Single-slot observable cell
//! * [`registry`] - New-flow / edit-flow handler slots
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and data persistence
//! * [`icons`] - SVG icon library
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// SVG icons that can be attached to flows
pub mod icons;

/// Logging setup and in-memory event log
pub mod logger;

/// Flow and button data types
pub mod model;

/// Handler slots for flow create/edit intents
pub mod registry;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer for flows
pub mod storage;

/// Observable single-value store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Colour and formatting helpers
pub mod utils;

pub use model::{ButtonColor, Flow, PageButton};
pub use registry::{FlowHandler, FlowHandlers};
pub use store::{Subscription, Writable};
