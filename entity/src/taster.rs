use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "taster")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rg: i64,
    pub contract_date: Option<Date>,
}

crate::identity_eq!(Model => rg);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::Rg",
        to = "super::employee::Column::Rg",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Employee,
    #[sea_orm(has_many = "super::tasting_test::Entity")]
    TastingTest,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::tasting_test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TastingTest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
