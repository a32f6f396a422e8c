use chrono::NaiveDate;
use recipe_core::association::IngredientLine;
use recipe_core::identity::{ContractAttributes, CookAttributes};
use recipe_core::service::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub fn employee_input(rg: i64, name: &str) -> EmployeeInput {
    EmployeeInput {
        rg,
        name: name.to_owned(),
        admission_date: date(2020, 1, 1),
        salary: dec!(3000),
    }
}

pub fn cook_input(rg: i64) -> CookInput {
    CookInput {
        rg,
        attributes: CookAttributes {
            display_name: None,
            monthly_quota: 5,
            initial_term_days: 10,
            contract_date: None,
        },
    }
}

pub fn line(ingredient_id: i32, quantity: Decimal, unit: &str) -> IngredientLine {
    IngredientLine {
        ingredient_id,
        quantity,
        unit: Some(unit.to_owned()),
    }
}

pub fn recipe_input(
    name: &str,
    cook_rg: i64,
    category_id: i32,
    ingredients: Vec<IngredientLine>,
) -> RecipeInput {
    RecipeInput {
        name: name.to_owned(),
        preparation: "Mix everything and bake for forty minutes.".to_owned(),
        created_on: date(2024, 3, 10),
        servings: 8,
        cook_rg,
        category_id,
        ingredients,
    }
}

pub async fn hire(db: &DatabaseConnection, rg: i64, name: &str) {
    EmployeeService::create(db, employee_input(rg, name))
        .await
        .expect("employee is created");
}

pub async fn cook(db: &DatabaseConnection, rg: i64, name: &str) -> CookDetails {
    hire(db, rg, name).await;
    CookService::create(db, cook_input(rg))
        .await
        .expect("cook is created")
}

pub async fn taster(db: &DatabaseConnection, rg: i64, name: &str) -> TasterDetails {
    hire(db, rg, name).await;
    TasterService::create(
        db,
        TasterInput {
            rg,
            attributes: ContractAttributes {
                contract_date: Some(date(2021, 6, 1)),
            },
        },
    )
    .await
    .expect("taster is created")
}

pub async fn editor(db: &DatabaseConnection, rg: i64, name: &str) -> EditorDetails {
    hire(db, rg, name).await;
    EditorService::create(
        db,
        EditorInput {
            rg,
            attributes: ContractAttributes::default(),
        },
    )
    .await
    .expect("editor is created")
}

pub async fn category(db: &DatabaseConnection, name: &str) -> i32 {
    CategoryService::create(
        db,
        CategoryInput {
            name: name.to_owned(),
        },
    )
    .await
    .expect("category is created")
    .id
}

pub async fn ingredient(db: &DatabaseConnection, name: &str) -> i32 {
    IngredientService::create(
        db,
        IngredientInput {
            name: name.to_owned(),
            description: format!("{name} from the pantry"),
        },
    )
    .await
    .expect("ingredient is created")
    .id
}

pub async fn book(db: &DatabaseConnection, isbn: &str, title: &str, editor_rg: i64) -> BookDetails {
    BookService::create(
        db,
        BookInput {
            isbn: isbn.to_owned(),
            title: title.to_owned(),
            editor_rg,
        },
    )
    .await
    .expect("book is created")
}

/// A cook, a category, two ingredients and one recipe using both.
pub struct Kitchen {
    pub cook_rg: i64,
    pub category_id: i32,
    pub sugar: i32,
    pub flour: i32,
    pub recipe: RecipeDetails,
}

pub async fn kitchen(db: &DatabaseConnection) -> Kitchen {
    let cook_rg = cook(db, 1, "Ana").await.rg;
    let category_id = category(db, "Desserts").await;
    let sugar = ingredient(db, "Sugar").await;
    let flour = ingredient(db, "Flour").await;
    let recipe = RecipeService::create(
        db,
        recipe_input(
            "Cake",
            cook_rg,
            category_id,
            vec![line(sugar, dec!(2), "cups"), line(flour, dec!(3.5), "cups")],
        ),
    )
    .await
    .expect("recipe is created");

    Kitchen {
        cook_rg,
        category_id,
        sugar,
        flour,
        recipe,
    }
}
