//! Role specialization over the shared employee identity.
//!
//! A cook, taster or editor record is keyed by the RG of the employee it
//! specializes. The role and the employee stay two separately addressable
//! rows joined 1:1 by that key: the employee has to exist first, and
//! removing a role never touches the employee.

use crate::error::{EntityKind, OrNotFound, ServiceError, ServiceResult};
use crate::validation::{self, Validate};
use chrono::NaiveDate;
use entity::prelude::*;
use entity::{cook, editor, employee, taster};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, instrument};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RoleKind {
    Cook,
    Taster,
    Editor,
}

impl RoleKind {
    pub fn entity(self) -> EntityKind {
        match self {
            Self::Cook => EntityKind::Cook,
            Self::Taster => EntityKind::Taster,
            Self::Editor => EntityKind::Editor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookAttributes {
    pub display_name: Option<String>,
    pub monthly_quota: i32,
    pub initial_term_days: i32,
    pub contract_date: Option<NaiveDate>,
}

/// Attributes shared by tasters and editors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAttributes {
    pub contract_date: Option<NaiveDate>,
}

impl Validate for CookAttributes {
    fn validate(&self) -> ServiceResult<()> {
        validation::optional("display name", self.display_name.as_deref(), 80)?;
        validation::at_least("monthly quota", self.monthly_quota, 1)?;
        validation::within("initial term", self.initial_term_days, 0, 45)?;
        Ok(())
    }
}

impl Validate for ContractAttributes {
    fn validate(&self) -> ServiceResult<()> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleAttributes {
    Cook(CookAttributes),
    Taster(ContractAttributes),
    Editor(ContractAttributes),
}

impl RoleAttributes {
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Cook(_) => RoleKind::Cook,
            Self::Taster(_) => RoleKind::Taster,
            Self::Editor(_) => RoleKind::Editor,
        }
    }
}

impl Validate for RoleAttributes {
    fn validate(&self) -> ServiceResult<()> {
        match self {
            Self::Cook(attributes) => attributes.validate(),
            Self::Taster(attributes) | Self::Editor(attributes) => attributes.validate(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleRecord {
    Cook(cook::Model),
    Taster(taster::Model),
    Editor(editor::Model),
}

impl RoleRecord {
    pub fn kind(&self) -> RoleKind {
        match self {
            Self::Cook(_) => RoleKind::Cook,
            Self::Taster(_) => RoleKind::Taster,
            Self::Editor(_) => RoleKind::Editor,
        }
    }

    pub fn rg(&self) -> i64 {
        match self {
            Self::Cook(model) => model.rg,
            Self::Taster(model) => model.rg,
            Self::Editor(model) => model.rg,
        }
    }

    pub fn into_cook(self) -> Option<cook::Model> {
        match self {
            Self::Cook(model) => Some(model),
            _ => None,
        }
    }

    pub fn into_taster(self) -> Option<taster::Model> {
        match self {
            Self::Taster(model) => Some(model),
            _ => None,
        }
    }

    pub fn into_editor(self) -> Option<editor::Model> {
        match self {
            Self::Editor(model) => Some(model),
            _ => None,
        }
    }
}

pub async fn find_employee<C>(db: &C, rg: i64) -> ServiceResult<employee::Model>
where
    C: ConnectionTrait,
{
    Employee::find_by_id(rg)
        .one(db)
        .await?
        .or_not_found(EntityKind::Employee, rg)
}

pub async fn role_exists<C>(db: &C, kind: RoleKind, rg: i64) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let count = match kind {
        RoleKind::Cook => Cook::find_by_id(rg).count(db).await?,
        RoleKind::Taster => Taster::find_by_id(rg).count(db).await?,
        RoleKind::Editor => Editor::find_by_id(rg).count(db).await?,
    };
    Ok(count > 0)
}

/// Roles currently backed by the employee `rg`.
pub async fn roles_of<C>(db: &C, rg: i64) -> Result<Vec<RoleKind>, DbErr>
where
    C: ConnectionTrait,
{
    let mut roles = Vec::new();
    for kind in [RoleKind::Cook, RoleKind::Taster, RoleKind::Editor] {
        if role_exists(db, kind, rg).await? {
            roles.push(kind);
        }
    }
    Ok(roles)
}

/// Specializes the employee `rg` into the role described by `attributes`.
///
/// Fails with `NotFound` when no such employee exists and with `Conflict`
/// when the employee already holds that role. Returns the backing employee
/// together with the new role row.
#[instrument(skip(db, attributes), fields(kind = %attributes.kind()))]
pub async fn create_role<C>(
    db: &C,
    rg: i64,
    attributes: RoleAttributes,
) -> ServiceResult<(employee::Model, RoleRecord)>
where
    C: ConnectionTrait,
{
    attributes.validate()?;
    let employee = find_employee(db, rg).await?;

    let kind = attributes.kind();
    if role_exists(db, kind, rg).await? {
        debug!(rg, %kind, "role already assigned");
        return Err(ServiceError::conflict(format!(
            "employee {rg} is already a {kind}"
        )));
    }

    let record = match attributes {
        RoleAttributes::Cook(attributes) => RoleRecord::Cook(
            cook::ActiveModel {
                rg: Set(rg),
                display_name: Set(attributes.display_name),
                monthly_quota: Set(attributes.monthly_quota),
                initial_term_days: Set(attributes.initial_term_days),
                contract_date: Set(attributes.contract_date),
            }
            .insert(db)
            .await?,
        ),
        RoleAttributes::Taster(attributes) => RoleRecord::Taster(
            taster::ActiveModel {
                rg: Set(rg),
                contract_date: Set(attributes.contract_date),
            }
            .insert(db)
            .await?,
        ),
        RoleAttributes::Editor(attributes) => RoleRecord::Editor(
            editor::ActiveModel {
                rg: Set(rg),
                contract_date: Set(attributes.contract_date),
            }
            .insert(db)
            .await?,
        ),
    };

    Ok((employee, record))
}

/// Rejects an update whose body names a different identity than the one
/// addressed.
pub fn ensure_same_identity<K>(entity: EntityKind, addressed: &K, supplied: &K) -> ServiceResult<()>
where
    K: PartialEq + Display + ?Sized,
{
    if addressed != supplied {
        debug!(%entity, %addressed, %supplied, "identity mismatch");
        return Err(ServiceError::invalid_argument(format!(
            "{entity} identity {supplied} does not match {addressed}"
        )));
    }
    Ok(())
}
