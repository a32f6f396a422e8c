//! SeaORM entities of the recipe publishing store.
//!
//! Every `Model` compares by primary identity only: two models loaded at
//! different times (or partially updated) are equal when they denote the
//! same row.

/// Implements `PartialEq`, `Eq` and `Hash` over the listed key fields.
macro_rules! identity_eq {
    ($model:ty => $($key:ident),+) => {
        impl PartialEq for $model {
            fn eq(&self, other: &Self) -> bool {
                $(self.$key == other.$key)&&+
            }
        }

        impl Eq for $model {}

        impl std::hash::Hash for $model {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(self.$key.hash(state);)+
            }
        }
    };
}

pub(crate) use identity_eq;

pub mod prelude;

pub mod book;
pub mod category;
pub mod cook;
pub mod editor;
pub mod employee;
pub mod ingredient;
pub mod recipe;
pub mod recipe_book;
pub mod recipe_ingredient;
pub mod restaurant;
pub mod taster;
pub mod tasting_test;

pub use sea_orm;
