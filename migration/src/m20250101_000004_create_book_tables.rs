use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_employee_tables::Editor;
use super::m20250101_000003_create_recipe_tables::Recipe;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .col(
                        ColumnDef::new(Book::Isbn)
                            .string_len(20)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Book::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Book::EditorRg).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-book-editor_rg")
                            .from(Book::Table, Book::EditorRg)
                            .to(Editor::Table, Editor::Rg)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uk-book-title")
                    .table(Book::Table)
                    .col(Book::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecipeBook::Table)
                    .col(ColumnDef::new(RecipeBook::Isbn).string_len(20).not_null())
                    .col(ColumnDef::new(RecipeBook::RecipeId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk-recipe_book")
                            .col(RecipeBook::Isbn)
                            .col(RecipeBook::RecipeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_book-isbn")
                            .from(RecipeBook::Table, RecipeBook::Isbn)
                            .to(Book::Table, Book::Isbn)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_book-recipe_id")
                            .from(RecipeBook::Table, RecipeBook::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RecipeBook::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Book {
    Table,
    Isbn,
    Title,
    EditorRg,
}

#[derive(DeriveIden)]
enum RecipeBook {
    Table,
    Isbn,
    RecipeId,
}
