//! Connects to the configured store, brings the schema up to date and
//! reports how many rows each table holds.

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use recipe_core::config::Config;
use recipe_core::entity::prelude::*;
use recipe_core::sea_orm::{EntityTrait, PaginatorTrait};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    let db = config
        .connect()
        .await
        .context("database connection failed")?;
    Migrator::up(&db, None)
        .await
        .context("applying migrations failed")?;
    info!("schema is up to date");

    let tables = [
        ("employee", Employee::find().count(&db).await?),
        ("cook", Cook::find().count(&db).await?),
        ("taster", Taster::find().count(&db).await?),
        ("editor", Editor::find().count(&db).await?),
        ("category", Category::find().count(&db).await?),
        ("ingredient", Ingredient::find().count(&db).await?),
        ("recipe", Recipe::find().count(&db).await?),
        ("recipe_ingredient", RecipeIngredient::find().count(&db).await?),
        ("book", Book::find().count(&db).await?),
        ("recipe_book", RecipeBook::find().count(&db).await?),
        ("restaurant", Restaurant::find().count(&db).await?),
        ("tasting_test", TastingTest::find().count(&db).await?),
    ];
    for (table, rows) in tables {
        info!(table, rows, "table size");
    }

    db.close().await?;
    Ok(())
}
