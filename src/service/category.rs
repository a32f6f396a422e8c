use crate::error::{EntityKind, OrNotFound, ServiceResult};
use crate::guard::{self, NameScope, Parent};
use crate::validation::{self, Validate};
use ::entity::{category, prelude::Category};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
}

impl Validate for CategoryInput {
    fn validate(&self) -> ServiceResult<()> {
        validation::required("category name", &self.name, 80)
    }
}

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: CategoryInput) -> ServiceResult<category::Model> {
        input.validate()?;
        let txn = db.begin().await?;

        guard::ensure_name_free(&txn, NameScope::Category { excluding: None }, &input.name)
            .await?;
        let category = category::ActiveModel {
            name: Set(input.name),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(id = category.id, "category created");
        Ok(category)
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<category::Model>> {
        Ok(Category::find()
            .order_by_asc(category::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> ServiceResult<category::Model> {
        Category::find_by_id(id)
            .one(db)
            .await?
            .or_not_found(EntityKind::Category, id)
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &DbConn,
        id: i32,
        input: CategoryInput,
    ) -> ServiceResult<category::Model> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = Category::find_by_id(id)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Category, id)?;
        let scope = NameScope::Category {
            excluding: Some(id),
        };
        guard::ensure_name_free(&txn, scope, &input.name).await?;

        let mut category: category::ActiveModel = existing.into();
        category.name = Set(input.name);
        let category = category.update(&txn).await?;

        txn.commit().await?;
        info!(id, "category updated");
        Ok(category)
    }

    /// Refused while any recipe is filed under the category.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> ServiceResult<()> {
        let txn = db.begin().await?;

        Category::find_by_id(id)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Category, id)?;
        guard::ensure_no_dependents(&txn, Parent::Category(id)).await?;
        Category::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        info!(id, "category deleted");
        Ok(())
    }
}
