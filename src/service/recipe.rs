use crate::association::{self, IngredientLine};
use crate::error::{EntityKind, OrNotFound, ServiceResult};
use crate::guard::{self, NameScope};
use crate::validation::{self, Validate};
use chrono::NaiveDate;
use ::entity::{
    category, recipe,
    prelude::{Category, Cook, Recipe, RecipeIngredient},
};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    pub name: String,
    pub preparation: String,
    pub created_on: NaiveDate,
    pub servings: i32,
    pub cook_rg: i64,
    pub category_id: i32,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Validate for RecipeInput {
    fn validate(&self) -> ServiceResult<()> {
        validation::required("recipe name", &self.name, 80)?;
        validation::not_blank("preparation", &self.preparation)?;
        validation::not_in_future("creation date", self.created_on)?;
        validation::at_least("servings", self.servings, 1)?;
        for line in &self.ingredients {
            line.validate()?;
        }
        Ok(())
    }
}

/// A recipe with the names of its cook and category and its ingredient
/// lines, ordered by ingredient id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub id: i32,
    pub name: String,
    pub preparation: String,
    pub created_on: NaiveDate,
    pub servings: i32,
    pub cook_rg: i64,
    pub cook_name: String,
    pub category_id: i32,
    pub category_name: String,
    pub ingredients: Vec<IngredientLine>,
}

impl RecipeDetails {
    fn new(
        recipe: recipe::Model,
        cook_name: String,
        category_name: String,
        ingredients: Vec<IngredientLine>,
    ) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            preparation: recipe.preparation,
            created_on: recipe.created_on,
            servings: recipe.servings,
            cook_rg: recipe.cook_rg,
            cook_name,
            category_id: recipe.category_id,
            category_name,
            ingredients,
        }
    }
}

async fn details<C>(db: &C, recipe: recipe::Model) -> ServiceResult<RecipeDetails>
where
    C: ConnectionTrait,
{
    let cook_name = super::employee_name(db, recipe.cook_rg).await?;
    let category = find_category(db, recipe.category_id).await?;
    let ingredients = association::ingredients_of(db, recipe.id).await?;
    Ok(RecipeDetails::new(recipe, cook_name, category.name, ingredients))
}

async fn find_category<C>(db: &C, id: i32) -> ServiceResult<category::Model>
where
    C: ConnectionTrait,
{
    Category::find_by_id(id)
        .one(db)
        .await?
        .or_not_found(EntityKind::Category, id)
}

/// Resolves the cook and category a recipe input points at.
async fn resolve_owners<C>(db: &C, input: &RecipeInput) -> ServiceResult<()>
where
    C: ConnectionTrait,
{
    Cook::find_by_id(input.cook_rg)
        .one(db)
        .await?
        .or_not_found(EntityKind::Cook, input.cook_rg)?;
    find_category(db, input.category_id).await?;
    Ok(())
}

pub struct RecipeService;

impl RecipeService {
    /// Creates the recipe with its full ingredient set. The name must be new
    /// among the cook's recipes.
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: RecipeInput) -> ServiceResult<RecipeDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        resolve_owners(&txn, &input).await?;
        let scope = NameScope::Recipe {
            cook_rg: input.cook_rg,
            excluding: None,
        };
        guard::ensure_name_free(&txn, scope, &input.name).await?;

        let recipe = recipe::ActiveModel {
            name: Set(input.name),
            preparation: Set(input.preparation),
            created_on: Set(input.created_on),
            servings: Set(input.servings),
            cook_rg: Set(input.cook_rg),
            category_id: Set(input.category_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        for line in input.ingredients {
            association::attach_ingredient(&txn, recipe.id, line).await?;
        }
        let details = details(&txn, recipe).await?;

        txn.commit().await?;
        info!(
            id = details.id,
            ingredients = details.ingredients.len(),
            "recipe created"
        );
        Ok(details)
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<RecipeDetails>> {
        let txn = db.begin().await?;

        let recipes = Recipe::find()
            .order_by_asc(recipe::Column::Id)
            .all(&txn)
            .await?;
        let lines = recipes.load_many(RecipeIngredient, &txn).await?;
        let cook_names =
            super::employee_names(&txn, recipes.iter().map(|recipe| recipe.cook_rg)).await?;
        let category_ids: BTreeSet<i32> = recipes.iter().map(|recipe| recipe.category_id).collect();
        let category_names: HashMap<i32, String> = Category::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(&txn)
            .await?
            .into_iter()
            .map(|category| (category.id, category.name))
            .collect();

        let details = recipes
            .into_iter()
            .zip(lines)
            .map(|(recipe, lines)| {
                let cook_name = super::name_of(&cook_names, recipe.cook_rg)?;
                let category_name = category_names
                    .get(&recipe.category_id)
                    .cloned()
                    .or_not_found(EntityKind::Category, recipe.category_id)?;
                let mut ingredients: Vec<IngredientLine> =
                    lines.into_iter().map(IngredientLine::from).collect();
                ingredients.sort_by_key(|line| line.ingredient_id);
                Ok(RecipeDetails::new(recipe, cook_name, category_name, ingredients))
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        txn.commit().await?;
        Ok(details)
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> ServiceResult<RecipeDetails> {
        let txn = db.begin().await?;
        let recipe = association::find_recipe(&txn, id).await?;
        let details = details(&txn, recipe).await?;
        txn.commit().await?;
        Ok(details)
    }

    /// Rewrites the recipe. Cook and category are resolved again, the name
    /// is checked against the cook's other recipes, and the ingredient set
    /// is replaced as a whole by `input.ingredients`.
    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, id: i32, input: RecipeInput) -> ServiceResult<RecipeDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = association::find_recipe(&txn, id).await?;
        resolve_owners(&txn, &input).await?;
        let scope = NameScope::Recipe {
            cook_rg: input.cook_rg,
            excluding: Some(id),
        };
        guard::ensure_name_free(&txn, scope, &input.name).await?;

        let mut recipe: recipe::ActiveModel = existing.into();
        recipe.name = Set(input.name);
        recipe.preparation = Set(input.preparation);
        recipe.created_on = Set(input.created_on);
        recipe.servings = Set(input.servings);
        recipe.cook_rg = Set(input.cook_rg);
        recipe.category_id = Set(input.category_id);
        let recipe = recipe.update(&txn).await?;
        association::replace_ingredients(&txn, id, input.ingredients).await?;
        let details = details(&txn, recipe).await?;

        txn.commit().await?;
        info!(id, ingredients = details.ingredients.len(), "recipe updated");
        Ok(details)
    }

    /// Deletes the recipe together with its ingredient lines, book
    /// memberships and tasting tests.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> ServiceResult<()> {
        let txn = db.begin().await?;

        association::find_recipe(&txn, id).await?;
        let released = association::release_recipe(&txn, id).await?;
        Recipe::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, released, "recipe deleted");
        Ok(())
    }

    pub async fn ingredients(db: &DbConn, id: i32) -> ServiceResult<Vec<IngredientLine>> {
        let txn = db.begin().await?;
        let lines = association::ingredients_of(&txn, id).await?;
        txn.commit().await?;
        Ok(lines)
    }

    #[instrument(skip(db))]
    pub async fn add_ingredient(
        db: &DbConn,
        id: i32,
        line: IngredientLine,
    ) -> ServiceResult<RecipeDetails> {
        let txn = db.begin().await?;

        association::attach_ingredient(&txn, id, line).await?;
        let recipe = association::find_recipe(&txn, id).await?;
        let details = details(&txn, recipe).await?;

        txn.commit().await?;
        info!(id, "ingredient added to recipe");
        Ok(details)
    }

    #[instrument(skip(db))]
    pub async fn remove_ingredient(
        db: &DbConn,
        id: i32,
        ingredient_id: i32,
    ) -> ServiceResult<RecipeDetails> {
        let txn = db.begin().await?;

        let recipe = association::find_recipe(&txn, id).await?;
        association::detach_ingredient(&txn, id, ingredient_id).await?;
        let details = details(&txn, recipe).await?;

        txn.commit().await?;
        info!(id, ingredient_id, "ingredient removed from recipe");
        Ok(details)
    }
}
