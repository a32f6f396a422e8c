use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A recipe written by one cook. Its name is unique among that cook's
/// recipes only.
///
/// A recipe owns its ingredient lines, tasting tests and book memberships:
/// the foreign keys pointing at it cascade on delete.
#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub preparation: String,
    pub created_on: Date,
    pub servings: i32,
    pub cook_rg: i64,
    pub category_id: i32,
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
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(has_many = "super::recipe_ingredient::Entity")]
    RecipeIngredient,
    #[sea_orm(has_many = "super::recipe_book::Entity")]
    RecipeBook,
    #[sea_orm(has_many = "super::tasting_test::Entity")]
    TastingTest,
}

impl Related<super::cook::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cook.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::recipe_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeIngredient.def()
    }
}

impl Related<super::recipe_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeBook.def()
    }
}

impl Related<super::tasting_test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TastingTest.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_ingredient::Relation::Ingredient.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_ingredient::Relation::Recipe.def().rev())
    }
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_book::Relation::Book.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_book::Relation::Recipe.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
