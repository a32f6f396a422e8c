#![allow(unused_imports, dead_code)]

pub mod common;

pub use common::{seed, TestContext};
use pretty_assertions::assert_eq;
use recipe_core::service::*;

#[tokio::test]
async fn category_names_are_unique() {
    let ctx = TestContext::new("category_names_are_unique").await;
    let desserts = seed::category(&ctx.db, "Desserts").await;
    let soups = seed::category(&ctx.db, "Soups").await;

    let err = CategoryService::create(
        &ctx.db,
        CategoryInput {
            name: "Desserts".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "conflict: category name \"Desserts\" is already taken");

    let err = CategoryService::update(
        &ctx.db,
        soups,
        CategoryInput {
            name: "Desserts".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_conflict(), "{err}");

    // renaming to its own name is not a clash
    let unchanged = CategoryService::update(
        &ctx.db,
        desserts,
        CategoryInput {
            name: "Desserts".to_owned(),
        },
    )
    .await
    .unwrap();
    assert_eq!(unchanged.id, desserts);

    let names: Vec<_> = CategoryService::list(&ctx.db)
        .await
        .unwrap()
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(names, vec!["Desserts", "Soups"]);
}

#[tokio::test]
async fn ingredient_names_are_unique() {
    let ctx = TestContext::new("ingredient_names_are_unique").await;
    seed::ingredient(&ctx.db, "Sugar").await;
    let flour = seed::ingredient(&ctx.db, "Flour").await;

    let err = IngredientService::create(
        &ctx.db,
        IngredientInput {
            name: "Sugar".to_owned(),
            description: "Brown sugar".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_conflict(), "{err}");

    let err = IngredientService::update(
        &ctx.db,
        flour,
        IngredientInput {
            name: "Sugar".to_owned(),
            description: "Wheat flour".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_conflict(), "{err}");

    let flour = IngredientService::update(
        &ctx.db,
        flour,
        IngredientInput {
            name: "Flour".to_owned(),
            description: "Wheat flour, type 00".to_owned(),
        },
    )
    .await
    .unwrap();
    assert_eq!(flour.description, "Wheat flour, type 00");
}

#[tokio::test]
async fn recipe_names_are_unique_per_cook() {
    let ctx = TestContext::new("recipe_names_are_unique_per_cook").await;
    let kitchen = seed::kitchen(&ctx.db).await;
    seed::cook(&ctx.db, 2, "Bruno").await;

    let err = RecipeService::create(
        &ctx.db,
        seed::recipe_input("Cake", kitchen.cook_rg, kitchen.category_id, vec![]),
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "conflict: cook 1 already has a recipe named \"Cake\""
    );

    // another cook may reuse the name
    let other = RecipeService::create(
        &ctx.db,
        seed::recipe_input("Cake", 2, kitchen.category_id, vec![]),
    )
    .await
    .unwrap();
    assert_eq!(other.cook_name, "Bruno");

    // moving it to the first cook clashes, keeping the name does not
    let err = RecipeService::update(
        &ctx.db,
        other.id,
        seed::recipe_input("Cake", kitchen.cook_rg, kitchen.category_id, vec![]),
    )
    .await
    .unwrap_err();
    assert!(err.is_conflict(), "{err}");

    let mut input = seed::recipe_input("Cake", 2, kitchen.category_id, vec![]);
    input.servings = 12;
    let other = RecipeService::update(&ctx.db, other.id, input).await.unwrap();
    assert_eq!(other.servings, 12);
}

#[tokio::test]
async fn book_isbn_and_title_are_unique() {
    let ctx = TestContext::new("book_isbn_and_title_are_unique").await;
    seed::editor(&ctx.db, 4, "Duda").await;
    seed::book(&ctx.db, "111", "Sweet Things", 4).await;
    seed::book(&ctx.db, "222", "Soups of the World", 4).await;

    let err = BookService::create(
        &ctx.db,
        BookInput {
            isbn: "111".to_owned(),
            title: "Another Title".to_owned(),
            editor_rg: 4,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "conflict: book 111 already exists");

    let err = BookService::create(
        &ctx.db,
        BookInput {
            isbn: "333".to_owned(),
            title: "Sweet Things".to_owned(),
            editor_rg: 4,
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_conflict(), "{err}");

    let err = BookService::update(
        &ctx.db,
        "222",
        BookInput {
            isbn: "222".to_owned(),
            title: "Sweet Things".to_owned(),
            editor_rg: 4,
        },
    )
    .await
    .unwrap_err();
    assert!(err.is_conflict(), "{err}");

    let book = BookService::update(
        &ctx.db,
        "111",
        BookInput {
            isbn: "111".to_owned(),
            title: "Sweet Things".to_owned(),
            editor_rg: 4,
        },
    )
    .await
    .unwrap();
    assert_eq!(book.title, "Sweet Things");

    let err = BookService::update(
        &ctx.db,
        "111",
        BookInput {
            isbn: "999".to_owned(),
            title: "Sweet Things".to_owned(),
            editor_rg: 4,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: book identity 999 does not match 111"
    );
}

#[tokio::test]
async fn book_needs_an_existing_editor() {
    let ctx = TestContext::new("book_needs_an_existing_editor").await;
    seed::hire(&ctx.db, 4, "Duda").await;

    let err = BookService::create(
        &ctx.db,
        BookInput {
            isbn: "111".to_owned(),
            title: "Sweet Things".to_owned(),
            editor_rg: 4,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "editor not found: 4");
    assert!(BookService::list(&ctx.db).await.unwrap().is_empty());
}
