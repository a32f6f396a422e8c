use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_employee_tables::{Cook, Taster};
use super::m20250101_000002_create_catalog_tables::{Category, Ingredient};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .col(
                        ColumnDef::new(Recipe::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recipe::Name).string_len(80).not_null())
                    .col(ColumnDef::new(Recipe::Preparation).text().not_null())
                    .col(ColumnDef::new(Recipe::CreatedOn).date().not_null())
                    .col(ColumnDef::new(Recipe::Servings).integer().not_null())
                    .col(ColumnDef::new(Recipe::CookRg).big_integer().not_null())
                    .col(ColumnDef::new(Recipe::CategoryId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe-cook_rg")
                            .from(Recipe::Table, Recipe::CookRg)
                            .to(Cook::Table, Cook::Rg)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe-category_id")
                            .from(Recipe::Table, Recipe::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // recipe names are only unique per cook
        manager
            .create_index(
                Index::create()
                    .name("uk-recipe-name-cook_rg")
                    .table(Recipe::Table)
                    .col(Recipe::Name)
                    .col(Recipe::CookRg)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecipeIngredient::Table)
                    .col(
                        ColumnDef::new(RecipeIngredient::RecipeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecipeIngredient::IngredientId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RecipeIngredient::Quantity)
                            .decimal_len(10, 3)
                            .not_null(),
                    )
                    .col(ColumnDef::new(RecipeIngredient::Unit).string_len(50))
                    .primary_key(
                        Index::create()
                            .name("pk-recipe_ingredient")
                            .col(RecipeIngredient::RecipeId)
                            .col(RecipeIngredient::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_ingredient-recipe_id")
                            .from(RecipeIngredient::Table, RecipeIngredient::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-recipe_ingredient-ingredient_id")
                            .from(RecipeIngredient::Table, RecipeIngredient::IngredientId)
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .col(
                        ColumnDef::new(Restaurant::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurant::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Restaurant::CookRg).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-restaurant-cook_rg")
                            .from(Restaurant::Table, Restaurant::CookRg)
                            .to(Cook::Table, Cook::Rg)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TastingTest::Table)
                    .col(
                        ColumnDef::new(TastingTest::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TastingTest::TestedOn).date().not_null())
                    .col(ColumnDef::new(TastingTest::Score).double().not_null())
                    .col(
                        ColumnDef::new(TastingTest::TasterRg)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TastingTest::RecipeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tasting_test-taster_rg")
                            .from(TastingTest::Table, TastingTest::TasterRg)
                            .to(Taster::Table, Taster::Rg)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tasting_test-recipe_id")
                            .from(TastingTest::Table, TastingTest::RecipeId)
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
            .drop_table(Table::drop().table(TastingTest::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RecipeIngredient::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Recipe {
    Table,
    Id,
    Name,
    Preparation,
    CreatedOn,
    Servings,
    CookRg,
    CategoryId,
}

#[derive(DeriveIden)]
enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
    Quantity,
    Unit,
}

#[derive(DeriveIden)]
enum Restaurant {
    Table,
    Id,
    Name,
    CookRg,
}

#[derive(DeriveIden)]
enum TastingTest {
    Table,
    Id,
    TestedOn,
    Score,
    TasterRg,
    RecipeId,
}
