#![allow(unused_imports, dead_code)]

pub mod common;

pub use common::{seed, TestContext};
use pretty_assertions::assert_eq;
use recipe_core::service::*;
use rust_decimal_macros::dec;

#[tokio::test]
async fn category_in_use_cannot_be_deleted() {
    let ctx = TestContext::new("category_in_use_cannot_be_deleted").await;
    let kitchen = seed::kitchen(&ctx.db).await;

    let err = CategoryService::delete(&ctx.db, kitchen.category_id)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "conflict: category {} cannot be deleted while it has dependent rows: recipe",
            kitchen.category_id
        )
    );

    RecipeService::delete(&ctx.db, kitchen.recipe.id).await.unwrap();
    CategoryService::delete(&ctx.db, kitchen.category_id)
        .await
        .unwrap();
    assert!(CategoryService::get_by_id(&ctx.db, kitchen.category_id)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn ingredient_in_use_cannot_be_deleted() {
    let ctx = TestContext::new("ingredient_in_use_cannot_be_deleted").await;
    let kitchen = seed::kitchen(&ctx.db).await;

    let err = IngredientService::delete(&ctx.db, kitchen.sugar)
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "{err}");

    RecipeService::remove_ingredient(&ctx.db, kitchen.recipe.id, kitchen.sugar)
        .await
        .unwrap();
    IngredientService::delete(&ctx.db, kitchen.sugar).await.unwrap();
    assert_eq!(IngredientService::list(&ctx.db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn cook_with_recipes_or_restaurants_cannot_be_deleted() {
    let ctx = TestContext::new("cook_with_recipes_or_restaurants_cannot_be_deleted").await;
    let kitchen = seed::kitchen(&ctx.db).await;
    let restaurant = RestaurantService::create(
        &ctx.db,
        RestaurantInput {
            name: "Casa Ana".to_owned(),
            cook_rg: kitchen.cook_rg,
        },
    )
    .await
    .unwrap();

    let err = CookService::delete(&ctx.db, kitchen.cook_rg)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "conflict: cook 1 cannot be deleted while it has dependent rows: restaurant, recipe"
    );

    RestaurantService::delete(&ctx.db, restaurant.id).await.unwrap();
    let err = CookService::delete(&ctx.db, kitchen.cook_rg)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "conflict: cook 1 cannot be deleted while it has dependent rows: recipe"
    );

    RecipeService::delete(&ctx.db, kitchen.recipe.id).await.unwrap();
    CookService::delete(&ctx.db, kitchen.cook_rg).await.unwrap();
    assert!(CookService::list(&ctx.db).await.unwrap().is_empty());
    // the employee outlives the role
    assert_eq!(
        EmployeeService::get_by_id(&ctx.db, kitchen.cook_rg)
            .await
            .unwrap()
            .name,
        "Ana"
    );
}

#[tokio::test]
async fn taster_with_tests_cannot_be_deleted() {
    let ctx = TestContext::new("taster_with_tests_cannot_be_deleted").await;
    let kitchen = seed::kitchen(&ctx.db).await;
    seed::taster(&ctx.db, 3, "Carla").await;
    let test = TastingTestService::create(
        &ctx.db,
        TastingTestInput {
            tested_on: seed::date(2024, 4, 2),
            score: 8.5,
            taster_rg: 3,
            recipe_id: kitchen.recipe.id,
        },
    )
    .await
    .unwrap();

    let err = TasterService::delete(&ctx.db, 3).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "conflict: taster 3 cannot be deleted while it has dependent rows: tasting_test"
    );

    TastingTestService::delete(&ctx.db, test.id).await.unwrap();
    TasterService::delete(&ctx.db, 3).await.unwrap();
}

#[tokio::test]
async fn editor_with_books_cannot_be_deleted() {
    let ctx = TestContext::new("editor_with_books_cannot_be_deleted").await;
    seed::editor(&ctx.db, 4, "Duda").await;
    seed::book(&ctx.db, "111", "Sweet Things", 4).await;

    let err = EditorService::delete(&ctx.db, 4).await.unwrap_err();
    assert!(err.is_conflict(), "{err}");

    BookService::delete(&ctx.db, "111").await.unwrap();
    EditorService::delete(&ctx.db, 4).await.unwrap();
}

#[tokio::test]
async fn book_with_recipes_cannot_be_deleted() {
    let ctx = TestContext::new("book_with_recipes_cannot_be_deleted").await;
    let kitchen = seed::kitchen(&ctx.db).await;
    seed::editor(&ctx.db, 4, "Duda").await;
    seed::book(&ctx.db, "111", "Sweet Things", 4).await;
    BookService::add_recipe(&ctx.db, "111", kitchen.recipe.id)
        .await
        .unwrap();

    let err = BookService::delete(&ctx.db, "111").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "conflict: book 111 cannot be deleted while it has dependent rows: recipe_book"
    );

    BookService::remove_recipe(&ctx.db, "111", kitchen.recipe.id)
        .await
        .unwrap();
    BookService::delete(&ctx.db, "111").await.unwrap();
    assert!(BookService::get_by_id(&ctx.db, "111")
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn deleting_a_recipe_releases_what_it_owns() {
    let ctx = TestContext::new("deleting_a_recipe_releases_what_it_owns").await;
    let kitchen = seed::kitchen(&ctx.db).await;
    seed::taster(&ctx.db, 3, "Carla").await;
    seed::editor(&ctx.db, 4, "Duda").await;
    seed::book(&ctx.db, "111", "Sweet Things", 4).await;
    BookService::add_recipe(&ctx.db, "111", kitchen.recipe.id)
        .await
        .unwrap();
    TastingTestService::create(
        &ctx.db,
        TastingTestInput {
            tested_on: seed::date(2024, 4, 2),
            score: 9.0,
            taster_rg: 3,
            recipe_id: kitchen.recipe.id,
        },
    )
    .await
    .unwrap();

    RecipeService::delete(&ctx.db, kitchen.recipe.id).await.unwrap();

    assert!(RecipeService::get_by_id(&ctx.db, kitchen.recipe.id)
        .await
        .unwrap_err()
        .is_not_found());
    assert!(BookService::get_by_id(&ctx.db, "111")
        .await
        .unwrap()
        .recipes
        .is_empty());
    assert!(TastingTestService::list(&ctx.db).await.unwrap().is_empty());
    // nothing references the ingredients any more
    IngredientService::delete(&ctx.db, kitchen.sugar).await.unwrap();
    IngredientService::delete(&ctx.db, kitchen.flour).await.unwrap();
}

#[tokio::test]
async fn deleting_unknown_rows_is_not_found() {
    let ctx = TestContext::new("deleting_unknown_rows_is_not_found").await;

    assert_eq!(
        RecipeService::delete(&ctx.db, 7).await.unwrap_err().to_string(),
        "recipe not found: 7"
    );
    assert!(CategoryService::delete(&ctx.db, 7).await.unwrap_err().is_not_found());
    assert!(RestaurantService::delete(&ctx.db, 7).await.unwrap_err().is_not_found());
    assert!(TastingTestService::delete(&ctx.db, 7).await.unwrap_err().is_not_found());
    assert!(BookService::delete(&ctx.db, "7").await.unwrap_err().is_not_found());
    assert!(EmployeeService::delete(&ctx.db, 7).await.unwrap_err().is_not_found());
}
