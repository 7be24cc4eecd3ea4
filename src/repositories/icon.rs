//! Icon repository for database operations.
//!
//! Icons are deduplicated by a SHA-256 hash of their content.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::FlowRepository;
use crate::entities::icon;

/// Repository for icon-related database operations.
pub struct IconRepository;

impl IconRepository {
    /// Hex encoded SHA-256 of the icon content.
    pub fn content_hash(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub async fn get_by_hash<C>(conn: &C, hash: &str) -> Result<Option<icon::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        icon::Entity::find().filter(icon::Column::Hash.eq(hash)).one(conn).await
    }

    /// Return the id of the icon holding `data`, storing it first if needed.
    pub async fn get_or_insert<C>(conn: &C, data: &str) -> Result<String, DbErr>
    where
        C: ConnectionTrait,
    {
        let hash = Self::content_hash(data);
        if let Some(existing) = Self::get_by_hash(conn, &hash).await? {
            return Ok(existing.id);
        }

        let id = Uuid::new_v4().to_string();
        let model = icon::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            data: ActiveValue::Set(data.to_string()),
            hash: ActiveValue::Set(hash),
        };
        icon::Entity::insert(model).exec_without_returning(conn).await?;

        Ok(id)
    }

    /// Delete the icon if no flow references it any more.
    pub async fn delete_if_unused<C>(conn: &C, id: &str) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        if FlowRepository::count_using_icon(conn, id).await? > 0 {
            return Ok(false);
        }

        let result = icon::Entity::delete_by_id(id.to_string()).exec(conn).await?;
        if result.rows_affected > 0 {
            log::debug!("Removed unused icon {}", id);
        }
        Ok(result.rows_affected > 0)
    }
}
