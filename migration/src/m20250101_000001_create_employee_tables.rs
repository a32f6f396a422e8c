use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .col(
                        ColumnDef::new(Employee::Rg)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employee::Name).string_len(50).not_null())
                    .col(ColumnDef::new(Employee::AdmissionDate).date().not_null())
                    .col(ColumnDef::new(Employee::Salary).decimal_len(8, 2).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cook::Table)
                    .col(
                        ColumnDef::new(Cook::Rg)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cook::DisplayName).string_len(80))
                    .col(ColumnDef::new(Cook::MonthlyQuota).integer().not_null())
                    .col(ColumnDef::new(Cook::InitialTermDays).integer().not_null())
                    .col(ColumnDef::new(Cook::ContractDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-cook-rg")
                            .from(Cook::Table, Cook::Rg)
                            .to(Employee::Table, Employee::Rg)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(role_table(
                Taster::Table,
                Taster::Rg,
                Taster::ContractDate,
                "fk-taster-rg",
            ))
            .await?;

        manager
            .create_table(role_table(
                Editor::Table,
                Editor::Rg,
                Editor::ContractDate,
                "fk-editor-rg",
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Editor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Taster::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cook::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

/// A role table whose only attribute besides the shared RG is the contract date.
fn role_table<I>(table: I, rg: I, contract_date: I, fk_name: &str) -> TableCreateStatement
where
    I: Iden + Copy + 'static,
{
    Table::create()
        .table(table)
        .col(ColumnDef::new(rg).big_integer().not_null().primary_key())
        .col(ColumnDef::new(contract_date).date())
        .foreign_key(
            ForeignKey::create()
                .name(fk_name)
                .from(table, rg)
                .to(Employee::Table, Employee::Rg)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub(crate) enum Employee {
    Table,
    Rg,
    Name,
    AdmissionDate,
    Salary,
}

#[derive(DeriveIden)]
pub(crate) enum Cook {
    Table,
    Rg,
    DisplayName,
    MonthlyQuota,
    InitialTermDays,
    ContractDate,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum Taster {
    Table,
    Rg,
    ContractDate,
}

#[derive(DeriveIden, Clone, Copy)]
pub(crate) enum Editor {
    Table,
    Rg,
    ContractDate,
}
