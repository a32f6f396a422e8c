//! Composite-key links between recipes and ingredients (with quantity and
//! unit) and between books and recipes (no attributes).
//!
//! A pair is identified by its two keys only; attaching a pair that already
//! exists is a conflict, and detaching a missing pair is not found.

use crate::error::{EntityKind, OrNotFound, ServiceError, ServiceResult};
use crate::validation::{self, Validate};
use entity::prelude::*;
use entity::{book, recipe, recipe_book, recipe_ingredient, tasting_test};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One ingredient of a recipe, as supplied on create/update and returned in
/// recipe details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub ingredient_id: i32,
    pub quantity: Decimal,
    pub unit: Option<String>,
}

impl Validate for IngredientLine {
    fn validate(&self) -> ServiceResult<()> {
        validation::positive("quantity", self.quantity)?;
        validation::fits_decimal("quantity", self.quantity, 10, 3)?;
        validation::optional("unit", self.unit.as_deref(), 50)?;
        Ok(())
    }
}

impl From<recipe_ingredient::Model> for IngredientLine {
    fn from(model: recipe_ingredient::Model) -> Self {
        Self {
            ingredient_id: model.ingredient_id,
            quantity: model.quantity,
            unit: model.unit,
        }
    }
}

pub(crate) async fn find_recipe<C>(db: &C, id: i32) -> ServiceResult<recipe::Model>
where
    C: ConnectionTrait,
{
    Recipe::find_by_id(id)
        .one(db)
        .await?
        .or_not_found(EntityKind::Recipe, id)
}

pub(crate) async fn find_book<C>(db: &C, isbn: &str) -> ServiceResult<book::Model>
where
    C: ConnectionTrait,
{
    Book::find_by_id(isbn.to_owned())
        .one(db)
        .await?
        .or_not_found(EntityKind::Book, isbn)
}

#[instrument(level = "debug", skip(db))]
pub async fn attach_ingredient<C>(
    db: &C,
    recipe_id: i32,
    line: IngredientLine,
) -> ServiceResult<recipe_ingredient::Model>
where
    C: ConnectionTrait,
{
    line.validate()?;
    find_recipe(db, recipe_id).await?;
    Ingredient::find_by_id(line.ingredient_id)
        .one(db)
        .await?
        .or_not_found(EntityKind::Ingredient, line.ingredient_id)?;

    if RecipeIngredient::find_by_id((recipe_id, line.ingredient_id))
        .one(db)
        .await?
        .is_some()
    {
        debug!(recipe_id, ingredient_id = line.ingredient_id, "pair already linked");
        return Err(ServiceError::conflict(format!(
            "ingredient {} is already part of recipe {recipe_id}",
            line.ingredient_id
        )));
    }

    let model = recipe_ingredient::ActiveModel {
        recipe_id: Set(recipe_id),
        ingredient_id: Set(line.ingredient_id),
        quantity: Set(line.quantity),
        unit: Set(line.unit),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Makes `lines` the complete ingredient set of the recipe: every existing
/// link is dropped and each line attached anew.
#[instrument(level = "debug", skip(db, lines), fields(lines = lines.len()))]
pub async fn replace_ingredients<C>(
    db: &C,
    recipe_id: i32,
    lines: Vec<IngredientLine>,
) -> ServiceResult<Vec<recipe_ingredient::Model>>
where
    C: ConnectionTrait,
{
    for line in &lines {
        line.validate()?;
    }
    find_recipe(db, recipe_id).await?;

    let removed = RecipeIngredient::delete_many()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .exec(db)
        .await?
        .rows_affected;
    debug!(recipe_id, removed, "cleared ingredient set");

    let mut attached = Vec::with_capacity(lines.len());
    for line in lines {
        attached.push(attach_ingredient(db, recipe_id, line).await?);
    }
    Ok(attached)
}

#[instrument(level = "debug", skip(db))]
pub async fn detach_ingredient<C>(db: &C, recipe_id: i32, ingredient_id: i32) -> ServiceResult<()>
where
    C: ConnectionTrait,
{
    let res = RecipeIngredient::delete_by_id((recipe_id, ingredient_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(
            EntityKind::RecipeIngredient,
            format!("({recipe_id}, {ingredient_id})"),
        ));
    }
    Ok(())
}

/// The ingredient lines of a recipe, ordered by ingredient id.
pub async fn ingredients_of<C>(db: &C, recipe_id: i32) -> ServiceResult<Vec<IngredientLine>>
where
    C: ConnectionTrait,
{
    find_recipe(db, recipe_id).await?;
    let lines = RecipeIngredient::find()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .order_by_asc(recipe_ingredient::Column::IngredientId)
        .all(db)
        .await?
        .into_iter()
        .map(IngredientLine::from)
        .collect();
    Ok(lines)
}

#[instrument(level = "debug", skip(db))]
pub async fn attach_recipe_to_book<C>(
    db: &C,
    isbn: &str,
    recipe_id: i32,
) -> ServiceResult<recipe_book::Model>
where
    C: ConnectionTrait,
{
    find_book(db, isbn).await?;
    find_recipe(db, recipe_id).await?;

    if RecipeBook::find_by_id((isbn.to_owned(), recipe_id))
        .one(db)
        .await?
        .is_some()
    {
        debug!(isbn, recipe_id, "pair already linked");
        return Err(ServiceError::conflict(format!(
            "recipe {recipe_id} is already in book {isbn}"
        )));
    }

    let model = recipe_book::ActiveModel {
        isbn: Set(isbn.to_owned()),
        recipe_id: Set(recipe_id),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Removes the recipe from the book. The book is resolved first, so an
/// unknown ISBN and a missing pair are reported separately.
#[instrument(level = "debug", skip(db))]
pub async fn detach_recipe_from_book<C>(db: &C, isbn: &str, recipe_id: i32) -> ServiceResult<()>
where
    C: ConnectionTrait,
{
    find_book(db, isbn).await?;
    let res = RecipeBook::delete_by_id((isbn.to_owned(), recipe_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(
            EntityKind::RecipeBook,
            format!("({isbn}, {recipe_id})"),
        ));
    }
    Ok(())
}

/// The recipes collected in a book, ordered by recipe id.
pub async fn recipes_in_book<C>(db: &C, isbn: &str) -> ServiceResult<Vec<recipe::Model>>
where
    C: ConnectionTrait,
{
    find_book(db, isbn).await?;
    let recipes = Recipe::find()
        .inner_join(RecipeBook)
        .filter(recipe_book::Column::Isbn.eq(isbn))
        .order_by_asc(recipe::Column::Id)
        .all(db)
        .await?;
    Ok(recipes)
}

/// Deletes every row a recipe owns: its ingredient lines, its book
/// memberships and its tasting tests.
pub(crate) async fn release_recipe<C>(db: &C, recipe_id: i32) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let ingredients = RecipeIngredient::delete_many()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .exec(db)
        .await?;
    let books = RecipeBook::delete_many()
        .filter(recipe_book::Column::RecipeId.eq(recipe_id))
        .exec(db)
        .await?;
    let tests = TastingTest::delete_many()
        .filter(tasting_test::Column::RecipeId.eq(recipe_id))
        .exec(db)
        .await?;
    Ok(ingredients.rows_affected + books.rows_affected + tests.rows_affected)
}
