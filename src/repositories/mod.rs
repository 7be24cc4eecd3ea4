//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods. Every method is generic over the connection so it
//! can run inside a transaction.

pub mod flow;
pub mod icon;
pub mod tag;

pub use flow::FlowRepository;
pub use icon::IconRepository;
pub use tag::TagRepository;
