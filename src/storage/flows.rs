use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, TransactionTrait};
use uuid::Uuid;

use super::{LocalStorage, StorageError};
use crate::entities::flow;
use crate::model::Flow;
use crate::repositories::{FlowRepository, IconRepository, TagRepository};

/// A flow is stored only with a name and a non-zero amount.
fn validate(flow: &Flow) -> Result<(), StorageError> {
    if flow.name.trim().is_empty() || flow.amount == 0.0 {
        return Err(StorageError::InvalidFlow);
    }
    Ok(())
}

/// Trim tag names, drop empty ones and duplicates, sort the rest the way
/// they are read back.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized
}

fn icon_data(flow: &Flow) -> Option<&str> {
    flow.icon.as_deref().filter(|data| !data.is_empty())
}

impl LocalStorage {
    /// All flows with icon data and tags, largest amount first, then by name
    pub async fn list_flows(&self) -> Result<Vec<Flow>, StorageError> {
        let rows = FlowRepository::get_all_with_icons(&self.conn).await?;
        let mut tags = TagRepository::get_all_by_flow(&self.conn).await?;

        Ok(rows
            .into_iter()
            .map(|(model, icon)| Flow {
                tags: tags.remove(&model.id).unwrap_or_default(),
                id: Some(model.id),
                name: model.name,
                description: model.description,
                amount: model.amount,
                icon: icon.map(|i| i.data),
            })
            .collect())
    }

    /// Get a single flow by id
    pub async fn get_flow(&self, id: &str) -> Result<Option<Flow>, StorageError> {
        Ok(self
            .list_flows()
            .await?
            .into_iter()
            .find(|flow| flow.id.as_deref() == Some(id)))
    }

    /// Store a new flow under a freshly generated id
    pub async fn create_flow(&self, flow: Flow) -> Result<Flow, StorageError> {
        validate(&flow)?;

        let id = Uuid::new_v4().to_string();
        let tags = normalize_tags(&flow.tags);

        let txn = self.conn.begin().await?;

        let icon_id = match icon_data(&flow) {
            Some(data) => Some(IconRepository::get_or_insert(&txn, data).await?),
            None => None,
        };

        let model = flow::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            name: ActiveValue::Set(flow.name.clone()),
            description: ActiveValue::Set(flow.description.clone()),
            amount: ActiveValue::Set(flow.amount),
            icon_id: ActiveValue::Set(icon_id),
        };
        flow::Entity::insert(model).exec_without_returning(&txn).await?;
        TagRepository::attach(&txn, &id, &tags).await?;

        txn.commit().await?;

        log::info!("Created flow {} ({})", id, flow.name);
        Ok(Flow {
            id: Some(id),
            tags,
            ..flow
        })
    }

    /// Replace the stored content of flow `id`. The id inside `flow` is ignored.
    pub async fn update_flow(&self, id: &str, flow: Flow) -> Result<Flow, StorageError> {
        validate(&flow)?;

        let tags = normalize_tags(&flow.tags);
        let txn = self.conn.begin().await?;

        let existing = FlowRepository::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        let old_icon_id = existing.icon_id.clone();

        let new_icon_id = match icon_data(&flow) {
            Some(data) => Some(IconRepository::get_or_insert(&txn, data).await?),
            None => None,
        };

        let mut active: flow::ActiveModel = existing.into();
        active.name = ActiveValue::Set(flow.name.clone());
        active.description = ActiveValue::Set(flow.description.clone());
        active.amount = ActiveValue::Set(flow.amount);
        active.icon_id = ActiveValue::Set(new_icon_id.clone());
        active.update(&txn).await?;

        if let Some(old) = old_icon_id.filter(|old| Some(old) != new_icon_id.as_ref()) {
            IconRepository::delete_if_unused(&txn, &old).await?;
        }

        TagRepository::detach_all(&txn, id).await?;
        TagRepository::attach(&txn, id, &tags).await?;
        TagRepository::delete_orphans(&txn).await?;

        txn.commit().await?;

        log::info!("Updated flow {} ({})", id, flow.name);
        Ok(Flow {
            id: Some(id.to_string()),
            tags,
            ..flow
        })
    }

    /// Delete flow `id` together with its tag links, unused tags and an unused icon
    pub async fn delete_flow(&self, id: &str) -> Result<(), StorageError> {
        let txn = self.conn.begin().await?;

        let existing = FlowRepository::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;

        TagRepository::detach_all(&txn, id).await?;
        FlowRepository::delete(&txn, id).await?;
        TagRepository::delete_orphans(&txn).await?;
        if let Some(icon_id) = existing.icon_id {
            IconRepository::delete_if_unused(&txn, &icon_id).await?;
        }

        txn.commit().await?;

        log::info!("Deleted flow {}", id);
        Ok(())
    }

    /// Sum of all amounts
    pub async fn total(&self) -> Result<f64, StorageError> {
        let flows = flow::Entity::find().all(&self.conn).await?;
        Ok(flows.iter().map(|f| f.amount).sum())
    }
}
