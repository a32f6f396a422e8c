//! Referential-integrity core for a recipe publishing house.
//!
//! Employees are hired once and specialized into cooks, tasters and editors
//! that share the employee's RG. Cooks write recipes made of ingredients,
//! editors publish books collecting recipes, tasters score recipes, and cooks
//! run restaurants.
//!
//! Every public operation lives on one of the unit-struct services in
//! [`service`] and runs inside a single database transaction: it either
//! commits as a whole or leaves the store untouched.
//!
//! ```no_run
//! use recipe_core::{config::Config, service::EmployeeService};
//! use migration::{Migrator, MigratorTrait};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let db = config.connect().await?;
//! Migrator::up(&db, None).await?;
//!
//! for employee in EmployeeService::list(&db).await? {
//!     println!("{} {}", employee.rg, employee.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod association;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod service;
pub mod validation;

pub use error::{EntityKind, ServiceError, ServiceResult};

pub use entity;
pub use sea_orm;
