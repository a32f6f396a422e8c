pub mod seed;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

pub struct TestContext {
    pub name: String,
    pub db: DatabaseConnection,
}

impl TestContext {
    /// A fresh in-memory store with the full schema applied.
    pub async fn new(name: &str) -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite should open");
        Migrator::up(&db, None)
            .await
            .expect("migrations should apply to an empty store");

        Self {
            name: name.to_owned(),
            db,
        }
    }
}
