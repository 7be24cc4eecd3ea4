use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub tag: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::flow_tag::Entity")]
    FlowTags,
}

impl Related<super::flow_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlowTags.def()
    }
}

impl Related<super::flow::Entity> for Entity {
    fn to() -> RelationDef {
        super::flow_tag::Relation::Flow.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::flow_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
