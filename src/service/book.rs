use crate::association;
use crate::error::{EntityKind, OrNotFound, ServiceError, ServiceResult};
use crate::guard::{self, NameScope, Parent};
use crate::identity;
use crate::validation::{self, Validate};
use ::entity::{
    book, recipe,
    prelude::{Book, Editor, Recipe, RecipeBook},
};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    pub isbn: String,
    pub title: String,
    pub editor_rg: i64,
}

impl Validate for BookInput {
    fn validate(&self) -> ServiceResult<()> {
        validation::required("isbn", &self.isbn, 20)?;
        validation::required("book title", &self.title, 100)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: i32,
    pub name: String,
}

impl From<recipe::Model> for RecipeSummary {
    fn from(recipe: recipe::Model) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
        }
    }
}

/// A book with its editor's name and the recipes it collects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub isbn: String,
    pub title: String,
    pub editor_rg: i64,
    pub editor_name: String,
    pub recipes: Vec<RecipeSummary>,
}

impl BookDetails {
    fn new(book: book::Model, editor_name: String, mut recipes: Vec<recipe::Model>) -> Self {
        recipes.sort_by_key(|recipe| recipe.id);
        Self {
            isbn: book.isbn,
            title: book.title,
            editor_rg: book.editor_rg,
            editor_name,
            recipes: recipes.into_iter().map(RecipeSummary::from).collect(),
        }
    }
}

async fn details<C>(db: &C, book: book::Model) -> ServiceResult<BookDetails>
where
    C: ConnectionTrait,
{
    let editor_name = super::employee_name(db, book.editor_rg).await?;
    let recipes = association::recipes_in_book(db, &book.isbn).await?;
    Ok(BookDetails::new(book, editor_name, recipes))
}

async fn ensure_editor<C>(db: &C, rg: i64) -> ServiceResult<()>
where
    C: ConnectionTrait,
{
    Editor::find_by_id(rg)
        .one(db)
        .await?
        .or_not_found(EntityKind::Editor, rg)?;
    Ok(())
}

pub struct BookService;

impl BookService {
    /// Registers a book under its ISBN. Both the ISBN and the title must be
    /// new.
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: BookInput) -> ServiceResult<BookDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        if Book::find_by_id(input.isbn.clone()).one(&txn).await?.is_some() {
            debug!(isbn = %input.isbn, "isbn already in use");
            return Err(ServiceError::conflict(format!(
                "book {} already exists",
                input.isbn
            )));
        }
        guard::ensure_name_free(&txn, NameScope::BookTitle { excluding: None }, &input.title)
            .await?;
        ensure_editor(&txn, input.editor_rg).await?;

        let book = book::ActiveModel {
            isbn: Set(input.isbn),
            title: Set(input.title),
            editor_rg: Set(input.editor_rg),
        }
        .insert(&txn)
        .await?;
        let details = details(&txn, book).await?;

        txn.commit().await?;
        info!(isbn = %details.isbn, "book created");
        Ok(details)
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<BookDetails>> {
        let txn = db.begin().await?;

        let books = Book::find()
            .order_by_asc(book::Column::Isbn)
            .all(&txn)
            .await?;
        let recipes = books
            .load_many_to_many(Recipe, RecipeBook, &txn)
            .await?;
        let names = super::employee_names(&txn, books.iter().map(|book| book.editor_rg)).await?;

        let details = books
            .into_iter()
            .zip(recipes)
            .map(|(book, recipes)| {
                let editor_name = super::name_of(&names, book.editor_rg)?;
                Ok(BookDetails::new(book, editor_name, recipes))
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        txn.commit().await?;
        Ok(details)
    }

    pub async fn get_by_id(db: &DbConn, isbn: &str) -> ServiceResult<BookDetails> {
        let txn = db.begin().await?;
        let book = association::find_book(&txn, isbn).await?;
        let details = details(&txn, book).await?;
        txn.commit().await?;
        Ok(details)
    }

    /// Changes title and editor. The ISBN in `input` must be the one
    /// addressed.
    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, isbn: &str, input: BookInput) -> ServiceResult<BookDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = association::find_book(&txn, isbn).await?;
        identity::ensure_same_identity(EntityKind::Book, isbn, input.isbn.as_str())?;
        let scope = NameScope::BookTitle {
            excluding: Some(isbn),
        };
        guard::ensure_name_free(&txn, scope, &input.title).await?;
        ensure_editor(&txn, input.editor_rg).await?;

        let mut book: book::ActiveModel = existing.into();
        book.title = Set(input.title);
        book.editor_rg = Set(input.editor_rg);
        let book = book.update(&txn).await?;
        let details = details(&txn, book).await?;

        txn.commit().await?;
        info!(isbn, "book updated");
        Ok(details)
    }

    /// Refused while the book still collects any recipe.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, isbn: &str) -> ServiceResult<()> {
        let txn = db.begin().await?;

        association::find_book(&txn, isbn).await?;
        guard::ensure_no_dependents(&txn, Parent::Book(isbn)).await?;
        Book::delete_by_id(isbn.to_owned()).exec(&txn).await?;

        txn.commit().await?;
        info!(isbn, "book deleted");
        Ok(())
    }

    /// Adds the recipe to the book and returns the refreshed book.
    #[instrument(skip(db))]
    pub async fn add_recipe(db: &DbConn, isbn: &str, recipe_id: i32) -> ServiceResult<BookDetails> {
        let txn = db.begin().await?;

        association::attach_recipe_to_book(&txn, isbn, recipe_id).await?;
        let book = association::find_book(&txn, isbn).await?;
        let details = details(&txn, book).await?;

        txn.commit().await?;
        info!(isbn, recipe_id, "recipe added to book");
        Ok(details)
    }

    /// Removes the recipe from the book and returns the refreshed book.
    #[instrument(skip(db))]
    pub async fn remove_recipe(
        db: &DbConn,
        isbn: &str,
        recipe_id: i32,
    ) -> ServiceResult<BookDetails> {
        let txn = db.begin().await?;

        association::detach_recipe_from_book(&txn, isbn, recipe_id).await?;
        let book = association::find_book(&txn, isbn).await?;
        let details = details(&txn, book).await?;

        txn.commit().await?;
        info!(isbn, recipe_id, "recipe removed from book");
        Ok(details)
    }

    pub async fn recipes(db: &DbConn, isbn: &str) -> ServiceResult<Vec<recipe::Model>> {
        let txn = db.begin().await?;
        let recipes = association::recipes_in_book(&txn, isbn).await?;
        txn.commit().await?;
        Ok(recipes)
    }
}
