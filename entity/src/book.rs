use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A published book, identified by its externally assigned ISBN.
#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub isbn: String,
    #[sea_orm(unique)]
    pub title: String,
    pub editor_rg: i64,
}

crate::identity_eq!(Model => isbn);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::editor::Entity",
        from = "Column::EditorRg",
        to = "super::editor::Column::Rg",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Editor,
    #[sea_orm(has_many = "super::recipe_book::Entity")]
    RecipeBook,
}

impl Related<super::editor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Editor.def()
    }
}

impl Related<super::recipe_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeBook.def()
    }
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_book::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_book::Relation::Book.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
