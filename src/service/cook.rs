use crate::error::{EntityKind, OrNotFound, ServiceResult};
use crate::guard::{self, Parent};
use crate::identity::{self, CookAttributes, RoleAttributes};
use crate::validation::Validate;
use chrono::NaiveDate;
use ::entity::{
    cook, employee,
    prelude::{Cook, Employee},
};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookInput {
    pub rg: i64,
    #[serde(flatten)]
    pub attributes: CookAttributes,
}

impl Validate for CookInput {
    fn validate(&self) -> ServiceResult<()> {
        self.attributes.validate()
    }
}

/// A cook together with the name of the employee behind it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookDetails {
    pub rg: i64,
    pub name: String,
    pub display_name: Option<String>,
    pub monthly_quota: i32,
    pub initial_term_days: i32,
    pub contract_date: Option<NaiveDate>,
}

impl CookDetails {
    fn new(cook: cook::Model, employee: Option<employee::Model>) -> ServiceResult<Self> {
        let employee = employee.or_not_found(EntityKind::Employee, cook.rg)?;
        Ok(Self {
            rg: cook.rg,
            name: employee.name,
            display_name: cook.display_name,
            monthly_quota: cook.monthly_quota,
            initial_term_days: cook.initial_term_days,
            contract_date: cook.contract_date,
        })
    }
}

pub struct CookService;

impl CookService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: CookInput) -> ServiceResult<CookDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let (employee, record) =
            identity::create_role(&txn, input.rg, RoleAttributes::Cook(input.attributes)).await?;
        let cook = record.into_cook().or_not_found(EntityKind::Cook, input.rg)?;

        txn.commit().await?;
        info!(rg = cook.rg, "cook created");
        CookDetails::new(cook, Some(employee))
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<CookDetails>> {
        Cook::find()
            .find_also_related(Employee)
            .order_by_asc(cook::Column::Rg)
            .all(db)
            .await?
            .into_iter()
            .map(|(cook, employee)| CookDetails::new(cook, employee))
            .collect()
    }

    pub async fn get_by_id(db: &DbConn, rg: i64) -> ServiceResult<CookDetails> {
        let (cook, employee) = Cook::find_by_id(rg)
            .find_also_related(Employee)
            .one(db)
            .await?
            .or_not_found(EntityKind::Cook, rg)?;
        CookDetails::new(cook, employee)
    }

    /// Updates the cook's own attributes; the backing employee is untouched.
    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, rg: i64, input: CookInput) -> ServiceResult<CookDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = Cook::find_by_id(rg)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Cook, rg)?;
        identity::ensure_same_identity(EntityKind::Cook, &rg, &input.rg)?;

        let attributes = input.attributes;
        let mut cook: cook::ActiveModel = existing.into();
        cook.display_name = Set(attributes.display_name);
        cook.monthly_quota = Set(attributes.monthly_quota);
        cook.initial_term_days = Set(attributes.initial_term_days);
        cook.contract_date = Set(attributes.contract_date);
        let cook = cook.update(&txn).await?;
        let employee = identity::find_employee(&txn, rg).await?;

        txn.commit().await?;
        info!(rg, "cook updated");
        CookDetails::new(cook, Some(employee))
    }

    /// Refused while the cook runs a restaurant or owns a recipe. The
    /// employee record stays.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, rg: i64) -> ServiceResult<()> {
        let txn = db.begin().await?;

        Cook::find_by_id(rg)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Cook, rg)?;
        guard::ensure_no_dependents(&txn, Parent::Cook(rg)).await?;
        Cook::delete_by_id(rg).exec(&txn).await?;

        txn.commit().await?;
        info!(rg, "cook deleted");
        Ok(())
    }
}
