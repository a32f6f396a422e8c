use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub cook_rg: i64,
}

crate::identity_eq!(Model => id);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cook::Entity",
        from = "Column::CookRg",
        to = "super::cook::Column::Rg",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Cook,
}

impl Related<super::cook::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cook.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
