use crate::error::{EntityKind, OrNotFound, ServiceResult};
use crate::guard::{self, Parent};
use crate::identity::{self, ContractAttributes, RoleAttributes};
use crate::validation::Validate;
use chrono::NaiveDate;
use ::entity::{
    editor, employee,
    prelude::{Editor, Employee},
};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorInput {
    pub rg: i64,
    #[serde(flatten)]
    pub attributes: ContractAttributes,
}

impl Validate for EditorInput {
    fn validate(&self) -> ServiceResult<()> {
        self.attributes.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorDetails {
    pub rg: i64,
    pub name: String,
    pub contract_date: Option<NaiveDate>,
}

impl EditorDetails {
    fn new(editor: editor::Model, employee: Option<employee::Model>) -> ServiceResult<Self> {
        let employee = employee.or_not_found(EntityKind::Employee, editor.rg)?;
        Ok(Self {
            rg: editor.rg,
            name: employee.name,
            contract_date: editor.contract_date,
        })
    }
}

pub struct EditorService;

impl EditorService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, input: EditorInput) -> ServiceResult<EditorDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let (employee, record) =
            identity::create_role(&txn, input.rg, RoleAttributes::Editor(input.attributes))
                .await?;
        let editor = record
            .into_editor()
            .or_not_found(EntityKind::Editor, input.rg)?;

        txn.commit().await?;
        info!(rg = editor.rg, "editor created");
        EditorDetails::new(editor, Some(employee))
    }

    pub async fn list(db: &DbConn) -> ServiceResult<Vec<EditorDetails>> {
        Editor::find()
            .find_also_related(Employee)
            .order_by_asc(editor::Column::Rg)
            .all(db)
            .await?
            .into_iter()
            .map(|(editor, employee)| EditorDetails::new(editor, employee))
            .collect()
    }

    pub async fn get_by_id(db: &DbConn, rg: i64) -> ServiceResult<EditorDetails> {
        let (editor, employee) = Editor::find_by_id(rg)
            .find_also_related(Employee)
            .one(db)
            .await?
            .or_not_found(EntityKind::Editor, rg)?;
        EditorDetails::new(editor, employee)
    }

    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, rg: i64, input: EditorInput) -> ServiceResult<EditorDetails> {
        input.validate()?;
        let txn = db.begin().await?;

        let existing = Editor::find_by_id(rg)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Editor, rg)?;
        identity::ensure_same_identity(EntityKind::Editor, &rg, &input.rg)?;

        let mut editor: editor::ActiveModel = existing.into();
        editor.contract_date = Set(input.attributes.contract_date);
        let editor = editor.update(&txn).await?;
        let employee = identity::find_employee(&txn, rg).await?;

        txn.commit().await?;
        info!(rg, "editor updated");
        EditorDetails::new(editor, Some(employee))
    }

    /// Refused while the editor is responsible for any book.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, rg: i64) -> ServiceResult<()> {
        let txn = db.begin().await?;

        Editor::find_by_id(rg)
            .one(&txn)
            .await?
            .or_not_found(EntityKind::Editor, rg)?;
        guard::ensure_no_dependents(&txn, Parent::Editor(rg)).await?;
        Editor::delete_by_id(rg).exec(&txn).await?;

        txn.commit().await?;
        info!(rg, "editor deleted");
        Ok(())
    }
}
