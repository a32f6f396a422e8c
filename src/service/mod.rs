//! One unit-struct service per entity. Every operation takes the shared
//! connection, checks its input, and runs inside its own transaction.

mod book;
mod category;
mod cook;
mod editor;
mod employee;
mod ingredient;
mod recipe;
mod restaurant;
mod taster;

pub use book::{BookDetails, BookInput, BookService, RecipeSummary};
pub use category::{CategoryInput, CategoryService};
pub use cook::{CookDetails, CookInput, CookService};
pub use editor::{EditorDetails, EditorInput, EditorService};
pub use employee::{EmployeeInput, EmployeeService};
pub use ingredient::{IngredientInput, IngredientService};
pub use recipe::{RecipeDetails, RecipeInput, RecipeService};
pub use restaurant::{RestaurantDetails, RestaurantInput, RestaurantService};
pub use taster::{TasterDetails, TasterInput, TasterService};
pub use tasting_test::{TastingTestDetails, TastingTestInput, TastingTestService};

use crate::error::{EntityKind, OrNotFound, ServiceResult};
use ::entity::prelude::Employee;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use std::collections::{BTreeSet, HashMap};

/// Names of the employees `rgs`, keyed by RG.
pub(crate) async fn employee_names<C, I>(db: &C, rgs: I) -> ServiceResult<HashMap<i64, String>>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = i64>,
{
    let rgs: BTreeSet<i64> = rgs.into_iter().collect();
    if rgs.is_empty() {
        return Ok(HashMap::new());
    }
    Ok(Employee::find()
        .filter(::entity::employee::Column::Rg.is_in(rgs))
        .all(db)
        .await?
        .into_iter()
        .map(|employee| (employee.rg, employee.name))
        .collect())
}

pub(crate) async fn employee_name<C>(db: &C, rg: i64) -> ServiceResult<String>
where
    C: ConnectionTrait,
{
    let employee = Employee::find_by_id(rg)
        .one(db)
        .await?
        .or_not_found(EntityKind::Employee, rg)?;
    Ok(employee.name)
}

pub(crate) fn name_of(names: &HashMap<i64, String>, rg: i64) -> ServiceResult<String> {
    names
        .get(&rg)
        .cloned()
        .or_not_found(EntityKind::Employee, rg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use sea_orm::{DbBackend, DbErr, MockDatabase, Transaction};

    #[tokio::test]
    async fn names_are_loaded_for_referenced_rgs_only() -> Result<(), DbErr> {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([[::entity::employee::Model {
                rg: 1,
                name: "Ana".to_owned(),
                admission_date: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                salary: dec!(3000),
            }]])
            .into_connection();

        let names = employee_names(&db, [3, 1, 3]).await.unwrap();
        assert_eq!(name_of(&names, 1).unwrap(), "Ana");
        assert!(name_of(&names, 3).unwrap_err().is_not_found());

        // nothing referenced, nothing queried
        assert!(employee_names(&db, Vec::new()).await.unwrap().is_empty());

        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DbBackend::Postgres,
                r#"SELECT "employee"."rg", "employee"."name", "employee"."admission_date", "employee"."salary" FROM "employee" WHERE "employee"."rg" IN ($1, $2)"#,
                [1i64.into(), 3i64.into()]
            )]
        );
        Ok(())
    }
}
