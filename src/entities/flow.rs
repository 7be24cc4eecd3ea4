use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flows")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub amount: f64,
    pub icon_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::icon::Entity",
        from = "Column::IconId",
        to = "super::icon::Column::Id"
    )]
    Icon,
    #[sea_orm(has_many = "super::flow_tag::Entity")]
    FlowTags,
}

impl Related<super::icon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Icon.def()
    }
}

impl Related<super::flow_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlowTags.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::flow_tag::Relation::Tag.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::flow_tag::Relation::Flow.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
