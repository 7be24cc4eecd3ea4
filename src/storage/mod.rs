//! Local storage module for persisting flows
//!
//! This module provides database operations using SeaORM for:
//! - Flows
//! - Icons (shared between flows, deduplicated by content)
//! - Tags and flow-tag relationships

pub mod db;
pub mod flows;

pub use db::LocalStorage;

/// Errors reported by [`LocalStorage`]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Please provide name and amount")]
    InvalidFlow,

    #[error("Flow with id {0} does not exist")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
