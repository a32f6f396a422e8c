use crate::error::{EntityKind, OrNotFound, ServiceError, ServiceResult};
use crate::guard::{self, Parent};
use crate::identity::{self, RoleKind};
use crate::validation::{self, Validate};
use chrono::NaiveDate;
use ::entity::{employee, prelude::Employee};
use rust_decimal::Decimal;
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub rg: i64,
    pub name: String,
    pub admission_date: NaiveDate,
    pub salary: Decimal,
}

impl Validate for EmployeeInput {
    fn validate(&self) -> ServiceResult<()> {
        validation::required("employee name", &self.name, 50)?;
        validation::not_in_future("admission date", self.admission_date)?;
        validation::positive("salary", self.salary)?;
        validation::fits_decimal("salary", self.salary, 8, 2)?;
        Ok(())
    }
}

pub struct EmployeeService;

impl EmployeeService {
    /// Hires an employee under its externally assigned RG.
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: EmployeeInput) -> ServiceResult<employee::Model> {
        input.validate()?;
        let txn = db.begin().await?;

        if Employee::find_by_id(input.rg).one(&txn).await?.is_some() {
            debug!(rg = input.rg, "rg already in use");
            return Err(ServiceError::conflict(format!(
                "employee {} already exists",
                input.rg
            )));
        }

        let employee = employee::ActiveModel {
            rg: Set(input.rg),
            name: Set(input.name),
            admission_date: Set(input.admission_date),
            salary: Set(input.salary),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!(rg = employee.rg, "employee created");
        Ok(employee)
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<employee::Model>> {
        Ok(Employee::find()
            .order_by_asc(employee::Column::Rg)
            .all(db)
            .await?)
    }

    pub async fn get_by_id(db: &DbConn, rg: i64) -> ServiceResult<employee::Model> {
        identity::find_employee(db, rg).await
    }

    /// The roles the employee currently holds.
    pub async fn roles(db: &DbConn, rg: i64) -> ServiceResult<Vec<RoleKind>> {
        let txn = db.begin().await?;
        identity::find_employee(&txn, rg).await?;
        let roles = identity::roles_of(&txn, rg).await?;
        txn.commit().await?;
        Ok(roles)
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &DbConn,
        rg: i64,
        input: EmployeeInput,
    ) -> ServiceResult<employee::Model> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = Employee::find_by_id(rg)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Employee, rg)?;
        identity::ensure_same_identity(EntityKind::Employee, &rg, &input.rg)?;

        let mut employee: employee::ActiveModel = existing.into();
        employee.name = Set(input.name);
        employee.admission_date = Set(input.admission_date);
        employee.salary = Set(input.salary);
        let employee = employee.update(&txn).await?;

        txn.commit().await?;
        info!(rg, "employee updated");
        Ok(employee)
    }

    /// Removes the employee. Refused while a cook, taster or editor record
    /// still shares its RG.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, rg: i64) -> ServiceResult<()> {
        let txn = db.begin().await?;

        identity::find_employee(&txn, rg).await?;
        guard::ensure_no_dependents(&txn, Parent::Employee(rg)).await?;
        Employee::delete_by_id(rg).exec(&txn).await?;

        txn.commit().await?;
        info!(rg, "employee deleted");
        Ok(())
    }
}
