use crate::error::{EntityKind, OrNotFound, ServiceResult};
use crate::guard::{self, Parent};
use crate::identity::{self, ContractAttributes, RoleAttributes};
use crate::validation::Validate;
use chrono::NaiveDate;
use ::entity::{
    employee,
    prelude::{Employee, Taster},
    taster,
};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasterInput {
    pub rg: i64,
    #[serde(flatten)]
    pub attributes: ContractAttributes,
}

impl Validate for TasterInput {
    fn validate(&self) -> ServiceResult<()> {
        self.attributes.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasterDetails {
    pub rg: i64,
    pub name: String,
    pub contract_date: Option<NaiveDate>,
}

impl TasterDetails {
    fn new(taster: taster::Model, employee: Option<employee::Model>) -> ServiceResult<Self> {
        let employee = employee.or_not_found(EntityKind::Employee, taster.rg)?;
        Ok(Self {
            rg: taster.rg,
            name: employee.name,
            contract_date: taster.contract_date,
        })
    }
}

pub struct TasterService;

impl TasterService {
    /// Hires the employee `input.rg` as a taster. A new taster need not have
    /// run any tasting test yet.
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: TasterInput) -> ServiceResult<TasterDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let (employee, record) =
            identity::create_role(&txn, input.rg, RoleAttributes::Taster(input.attributes))
                .await?;
        let taster = record
            .into_taster()
            .or_not_found(EntityKind::Taster, input.rg)?;

        txn.commit().await?;
        info!(rg = taster.rg, "taster created");
        TasterDetails::new(taster, Some(employee))
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<TasterDetails>> {
        Taster::find()
            .find_also_related(Employee)
            .order_by_asc(taster::Column::Rg)
            .all(db)
            .await?
            .into_iter()
            .map(|(taster, employee)| TasterDetails::new(taster, employee))
            .collect()
    }

    pub async fn get_by_id(db: &DbConn, rg: i64) -> ServiceResult<TasterDetails> {
        let (taster, employee) = Taster::find_by_id(rg)
            .find_also_related(Employee)
            .one(db)
            .await?
            .or_not_found(EntityKind::Taster, rg)?;
        TasterDetails::new(taster, employee)
    }

    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, rg: i64, input: TasterInput) -> ServiceResult<TasterDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = Taster::find_by_id(rg)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Taster, rg)?;
        identity::ensure_same_identity(EntityKind::Taster, &rg, &input.rg)?;

        let mut taster: taster::ActiveModel = existing.into();
        taster.contract_date = Set(input.attributes.contract_date);
        let taster = taster.update(&txn).await?;
        let employee = identity::find_employee(&txn, rg).await?;

        txn.commit().await?;
        info!(rg, "taster updated");
        TasterDetails::new(taster, Some(employee))
    }

    /// Refused while the taster has tasting tests on record.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, rg: i64) -> ServiceResult<()> {
        let txn = db.begin().await?;

        Taster::find_by_id(rg)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Taster, rg)?;
        guard::ensure_no_dependents(&txn, Parent::Taster(rg)).await?;
        Taster::delete_by_id(rg).exec(&txn).await?;

        txn.commit().await?;
        info!(rg, "taster deleted");
        Ok(())
    }
}
