//! Preconditions checked before a write: name uniqueness and delete guards.
//!
//! The unique indexes and foreign keys of the schema remain the
//! authoritative check; these predicates give the caller a precise
//! rejection before the store would refuse the statement.

use crate::error::{EntityKind, ServiceError, ServiceResult};
use crate::identity::{self, RoleKind};
use entity::prelude::*;
use entity::{
    book, category, ingredient, recipe, recipe_book, recipe_ingredient, restaurant, tasting_test,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryTrait};
use std::fmt;
use tracing::debug;

/// A uniqueness rule, with the record under update excluded from the check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameScope<'a> {
    Category { excluding: Option<i32> },
    Ingredient { excluding: Option<i32> },
    BookTitle { excluding: Option<&'a str> },
    /// Recipe names are unique per cook only.
    Recipe { cook_rg: i64, excluding: Option<i32> },
}

impl NameScope<'_> {
    fn describe(&self) -> &'static str {
        match self {
            Self::Category { .. } => "category name",
            Self::Ingredient { .. } => "ingredient name",
            Self::BookTitle { .. } => "book title",
            Self::Recipe { .. } => "recipe name",
        }
    }
}

pub async fn is_name_taken<C>(db: &C, scope: NameScope<'_>, name: &str) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let taken = match scope {
        NameScope::Category { excluding } => Category::find()
            .filter(category::Column::Name.eq(name))
            .apply_if(excluding, |q, id| q.filter(category::Column::Id.ne(id)))
            .one(db)
            .await?
            .is_some(),
        NameScope::Ingredient { excluding } => Ingredient::find()
            .filter(ingredient::Column::Name.eq(name))
            .apply_if(excluding, |q, id| q.filter(ingredient::Column::Id.ne(id)))
            .one(db)
            .await?
            .is_some(),
        NameScope::BookTitle { excluding } => Book::find()
            .filter(book::Column::Title.eq(name))
            .apply_if(excluding, |q, isbn| q.filter(book::Column::Isbn.ne(isbn)))
            .one(db)
            .await?
            .is_some(),
        NameScope::Recipe { cook_rg, excluding } => Recipe::find()
            .filter(recipe::Column::Name.eq(name))
            .filter(recipe::Column::CookRg.eq(cook_rg))
            .apply_if(excluding, |q, id| q.filter(recipe::Column::Id.ne(id)))
            .one(db)
            .await?
            .is_some(),
    };
    Ok(taken)
}

/// Fails with `Conflict` when `name` is already used within `scope`.
pub async fn ensure_name_free<C>(db: &C, scope: NameScope<'_>, name: &str) -> ServiceResult<()>
where
    C: ConnectionTrait,
{
    if is_name_taken(db, scope, name).await? {
        let what = scope.describe();
        debug!(?scope, name, "{what} already taken");
        return Err(ServiceError::conflict(match scope {
            NameScope::Recipe { cook_rg, .. } => {
                format!("cook {cook_rg} already has a recipe named {name:?}")
            }
            _ => format!("{what} {name:?} is already taken"),
        }));
    }
    Ok(())
}

/// A record whose deletion is refused while dependent rows reference it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent<'a> {
    Employee(i64),
    Category(i32),
    Cook(i64),
    Taster(i64),
    Editor(i64),
    Ingredient(i32),
    Book(&'a str),
}

impl Parent<'_> {
    pub fn entity(&self) -> EntityKind {
        match self {
            Self::Employee(_) => EntityKind::Employee,
            Self::Category(_) => EntityKind::Category,
            Self::Cook(_) => EntityKind::Cook,
            Self::Taster(_) => EntityKind::Taster,
            Self::Editor(_) => EntityKind::Editor,
            Self::Ingredient(_) => EntityKind::Ingredient,
            Self::Book(_) => EntityKind::Book,
        }
    }
}

impl fmt::Display for Parent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity = self.entity();
        match self {
            Self::Employee(rg) | Self::Cook(rg) | Self::Taster(rg) | Self::Editor(rg) => {
                write!(f, "{entity} {rg}")
            }
            Self::Category(id) | Self::Ingredient(id) => write!(f, "{entity} {id}"),
            Self::Book(isbn) => write!(f, "{entity} {isbn}"),
        }
    }
}

/// The kinds of live child rows that still reference `parent`.
pub async fn dependents<C>(db: &C, parent: Parent<'_>) -> Result<Vec<EntityKind>, DbErr>
where
    C: ConnectionTrait,
{
    let mut found = Vec::new();
    match parent {
        Parent::Employee(rg) => {
            found.extend(identity::roles_of(db, rg).await?.into_iter().map(RoleKind::entity));
        }
        Parent::Category(id) => {
            if Recipe::find()
                .filter(recipe::Column::CategoryId.eq(id))
                .one(db)
                .await?
                .is_some()
            {
                found.push(EntityKind::Recipe);
            }
        }
        Parent::Cook(rg) => {
            if Restaurant::find()
                .filter(restaurant::Column::CookRg.eq(rg))
                .one(db)
                .await?
                .is_some()
            {
                found.push(EntityKind::Restaurant);
            }
            if Recipe::find()
                .filter(recipe::Column::CookRg.eq(rg))
                .one(db)
                .await?
                .is_some()
            {
                found.push(EntityKind::Recipe);
            }
        }
        Parent::Taster(rg) => {
            if TastingTest::find()
                .filter(tasting_test::Column::TasterRg.eq(rg))
                .one(db)
                .await?
                .is_some()
            {
                found.push(EntityKind::TastingTest);
            }
        }
        Parent::Editor(rg) => {
            if Book::find()
                .filter(book::Column::EditorRg.eq(rg))
                .one(db)
                .await?
                .is_some()
            {
                found.push(EntityKind::Book);
            }
        }
        Parent::Ingredient(id) => {
            if RecipeIngredient::find()
                .filter(recipe_ingredient::Column::IngredientId.eq(id))
                .one(db)
                .await?
                .is_some()
            {
                found.push(EntityKind::RecipeIngredient);
            }
        }
        Parent::Book(isbn) => {
            if RecipeBook::find()
                .filter(recipe_book::Column::Isbn.eq(isbn))
                .one(db)
                .await?
                .is_some()
            {
                found.push(EntityKind::RecipeBook);
            }
        }
    }
    Ok(found)
}

pub async fn has_dependents<C>(db: &C, parent: Parent<'_>) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    Ok(!dependents(db, parent).await?.is_empty())
}

/// Fails with `Conflict` while any child row still references `parent`.
pub async fn ensure_no_dependents<C>(db: &C, parent: Parent<'_>) -> ServiceResult<()>
where
    C: ConnectionTrait,
{
    let found = dependents(db, parent).await?;
    if found.is_empty() {
        return Ok(());
    }

    let names = found
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    debug!(%parent, dependents = %names, "delete refused");
    Err(ServiceError::conflict(format!(
        "{parent} cannot be deleted while it has dependent rows: {names}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sea_orm::{DbBackend, MockDatabase, Transaction};

    #[tokio::test]
    async fn name_check_excludes_the_record_under_update() -> Result<(), DbErr> {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<category::Model>::new()])
            .into_connection();

        let taken = is_name_taken(&db, NameScope::Category { excluding: Some(3) }, "Desserts").await?;
        assert!(!taken);

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DbBackend::Postgres,
                r#"SELECT "category"."id", "category"."name" FROM "category" WHERE "category"."name" = $1 AND "category"."id" <> $2 LIMIT $3"#,
                ["Desserts".into(), 3i32.into(), 1u64.into()]
            )]
        );
        Ok(())
    }

    #[tokio::test]
    async fn recipe_names_are_scoped_to_the_cook() -> Result<(), DbErr> {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([[recipe::Model {
                id: 1,
                name: "Cake".to_owned(),
                preparation: "Mix and bake.".to_owned(),
                created_on: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                servings: 8,
                cook_rg: 7,
                category_id: 1,
            }]])
            .into_connection();

        let scope = NameScope::Recipe {
            cook_rg: 7,
            excluding: None,
        };
        let err = ensure_name_free(&db, scope, "Cake").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "conflict: cook 7 already has a recipe named \"Cake\""
        );

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DbBackend::Postgres,
                r#"SELECT "recipe"."id", "recipe"."name", "recipe"."preparation", "recipe"."created_on", "recipe"."servings", "recipe"."cook_rg", "recipe"."category_id" FROM "recipe" WHERE "recipe"."name" = $1 AND "recipe"."cook_rg" = $2 LIMIT $3"#,
                ["Cake".into(), 7i64.into(), 1u64.into()]
            )]
        );
        Ok(())
    }

    #[tokio::test]
    async fn cook_with_restaurants_cannot_be_deleted() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([[restaurant::Model {
                id: 4,
                name: "Casa Ana".to_owned(),
                cook_rg: 1,
            }]])
            .append_query_results([Vec::<recipe::Model>::new()])
            .into_connection();

        let err = ensure_no_dependents(&db, Parent::Cook(1)).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(
            err.to_string(),
            "conflict: cook 1 cannot be deleted while it has dependent rows: restaurant"
        );
    }

    #[tokio::test]
    async fn book_without_recipes_may_be_deleted() -> Result<(), DbErr> {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<recipe_book::Model>::new()])
            .into_connection();

        assert!(!has_dependents(&db, Parent::Book("978-85-0000-000-1")).await?);
        Ok(())
    }
}
