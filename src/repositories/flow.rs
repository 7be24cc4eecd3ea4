//! Flow repository for database operations.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::entities::{flow, icon};

/// Repository for flow-related database operations.
pub struct FlowRepository;

impl FlowRepository {
    /// Get all flows with their icon, largest amount first, then by name.
    pub async fn get_all_with_icons<C>(conn: &C) -> Result<Vec<(flow::Model, Option<icon::Model>)>, DbErr>
    where
        C: ConnectionTrait,
    {
        flow::Entity::find()
            .find_also_related(icon::Entity)
            .order_by_desc(flow::Column::Amount)
            .order_by_asc(flow::Column::Name)
            .all(conn)
            .await
    }

    /// Get a single flow by id.
    pub async fn get_by_id<C>(conn: &C, id: &str) -> Result<Option<flow::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        flow::Entity::find_by_id(id.to_string()).one(conn).await
    }

    /// Number of flows referencing an icon.
    pub async fn count_using_icon<C>(conn: &C, icon_id: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        flow::Entity::find()
            .filter(flow::Column::IconId.eq(icon_id))
            .count(conn)
            .await
    }

    /// Delete a flow row. Returns whether a row was removed.
    pub async fn delete<C>(conn: &C, id: &str) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = flow::Entity::delete_by_id(id.to_string()).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
