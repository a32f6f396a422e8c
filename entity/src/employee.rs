use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A hired person. The RG is assigned outside the system and is shared by
/// the cook, taster and editor records that specialize this employee.
#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rg: i64,
    pub name: String,
    pub admission_date: Date,
    #[sea_orm(column_type = "Decimal(Some((8, 2)))")]
    pub salary: Decimal,
}

crate::identity_eq!(Model => rg);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::cook::Entity")]
    Cook,
    #[sea_orm(has_one = "super::taster::Entity")]
    Taster,
    #[sea_orm(has_one = "super::editor::Entity")]
    Editor,
}

impl Related<super::cook::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cook.def()
    }
}

impl Related<super::taster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taster.def()
    }
}

impl Related<super::editor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Editor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
