use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cook specialization of an [`super::employee::Model`], keyed by the same RG.
#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cook")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rg: i64,
    pub display_name: Option<String>,
    pub monthly_quota: i32,
    pub initial_term_days: i32,
    pub contract_date: Option<Date>,
}

crate::identity_eq!(Model => rg);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::Rg",
        to = "super::employee::Column::Rg",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Employee,
    #[sea_orm(has_many = "super::restaurant::Entity")]
    Restaurant,
    #[sea_orm(has_many = "super::recipe::Entity")]
    Recipe,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
