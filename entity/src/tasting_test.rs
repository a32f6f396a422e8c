use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A taster's score (0 to 10) for one recipe on a given day.
///
/// The business expects every hired taster to have run at least one test.
/// Nothing enforces it: tasters may exist with no tests at all.
#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasting_test")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tested_on: Date,
    pub score: f64,
    pub taster_rg: i64,
    pub recipe_id: i32,
}

crate::identity_eq!(Model => id);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::taster::Entity",
        from = "Column::TasterRg",
        to = "super::taster::Column::Rg",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Taster,
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recipe,
}

impl Related<super::taster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taster.def()
    }
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
