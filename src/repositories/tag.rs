//! Tag repository for database operations.

use sea_orm::sea_query::Query;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::entities::{flow_tag, tag};

/// Repository for tag-related database operations.
pub struct TagRepository;

impl TagRepository {
    /// Tag names of every flow, keyed by flow id, sorted alphabetically.
    pub async fn get_all_by_flow<C>(conn: &C) -> Result<HashMap<String, Vec<String>>, DbErr>
    where
        C: ConnectionTrait,
    {
        let names: HashMap<i32, String> = tag::Entity::find()
            .order_by_asc(tag::Column::Tag)
            .all(conn)
            .await?
            .into_iter()
            .map(|t| (t.id, t.tag))
            .collect();

        let mut by_flow: HashMap<String, Vec<String>> = HashMap::new();
        for link in flow_tag::Entity::find().all(conn).await? {
            if let Some(name) = names.get(&link.tag_id) {
                by_flow.entry(link.flow_id).or_default().push(name.clone());
            }
        }

        for tags in by_flow.values_mut() {
            tags.sort();
        }
        Ok(by_flow)
    }

    /// Return the id of a tag, creating it if needed.
    pub async fn get_or_create<C>(conn: &C, name: &str) -> Result<i32, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Some(existing) = tag::Entity::find().filter(tag::Column::Tag.eq(name)).one(conn).await? {
            return Ok(existing.id);
        }

        let model = tag::ActiveModel {
            id: ActiveValue::NotSet,
            tag: ActiveValue::Set(name.to_string()),
        };
        Ok(tag::Entity::insert(model).exec(conn).await?.last_insert_id)
    }

    /// Link a flow to the given tags. Tag names must already be normalized.
    pub async fn attach<C>(conn: &C, flow_id: &str, tags: &[String]) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        for name in tags {
            let tag_id = Self::get_or_create(conn, name).await?;
            let link = flow_tag::ActiveModel {
                flow_id: ActiveValue::Set(flow_id.to_string()),
                tag_id: ActiveValue::Set(tag_id),
            };
            flow_tag::Entity::insert(link).exec_without_returning(conn).await?;
        }
        Ok(())
    }

    /// Remove every tag link of a flow.
    pub async fn detach_all<C>(conn: &C, flow_id: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        flow_tag::Entity::delete_many()
            .filter(flow_tag::Column::FlowId.eq(flow_id))
            .exec(conn)
            .await?;
        Ok(())
    }

    /// Delete tags no flow uses.
    pub async fn delete_orphans<C>(conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let used = Query::select()
            .column(flow_tag::Column::TagId)
            .from(flow_tag::Entity)
            .to_owned();

        let result = tag::Entity::delete_many()
            .filter(tag::Column::Id.not_in_subquery(used))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
