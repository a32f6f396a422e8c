use crate::error::{EntityKind, OrNotFound, ServiceResult};
use crate::guard::{self, NameScope, Parent};
use crate::validation::{self, Validate};
use ::entity::{ingredient, prelude::Ingredient};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    pub description: String,
}

impl Validate for IngredientInput {
    fn validate(&self) -> ServiceResult<()> {
        validation::required("ingredient name", &self.name, 80)?;
        validation::required("ingredient description", &self.description, 200)?;
        Ok(())
    }
}

pub struct IngredientService;

impl IngredientService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: IngredientInput) -> ServiceResult<ingredient::Model> {
        input.validate()?;
        let txn = db.begin().await?;

        guard::ensure_name_free(&txn, NameScope::Ingredient { excluding: None }, &input.name)
            .await?;
        let ingredient = ingredient::ActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(id = ingredient.id, "ingredient created");
        Ok(ingredient)
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<ingredient::Model>> {
        Ok(Ingredient::find()
            .order_by_asc(ingredient::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> ServiceResult<ingredient::Model> {
        Ingredient::find_by_id(id)
            .one(db)
            .await?
            .or_not_found(EntityKind::Ingredient, id)
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &DbConn,
        id: i32,
        input: IngredientInput,
    ) -> ServiceResult<ingredient::Model> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = Ingredient::find_by_id(id)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Ingredient, id)?;
        let scope = NameScope::Ingredient {
            excluding: Some(id),
        };
        guard::ensure_name_free(&txn, scope, &input.name).await?;

        let mut ingredient: ingredient::ActiveModel = existing.into();
        ingredient.name = Set(input.name);
        ingredient.description = Set(input.description);
        let ingredient = ingredient.update(&txn).await?;

        txn.commit().await?;
        info!(id, "ingredient updated");
        Ok(ingredient)
    }

    /// Refused while any recipe still lists the ingredient.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> ServiceResult<()> {
        let txn = db.begin().await?;

        Ingredient::find_by_id(id)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Ingredient, id)?;
        guard::ensure_no_dependents(&txn, Parent::Ingredient(id)).await?;
        Ingredient::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, "ingredient deleted");
        Ok(())
    }
}
