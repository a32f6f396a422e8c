use sea_orm::{DbErr, SqlErr};
use std::fmt::Display;

/// The kinds of record the service addresses, as named in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Employee,
    Cook,
    Taster,
    Editor,
    Category,
    Ingredient,
    Book,
    Recipe,
    Restaurant,
    TastingTest,
    RecipeIngredient,
    RecipeBook,
}

/// An error from an unsuccessful service operation
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The referenced identity (id, RG or ISBN) does not exist
    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },
    /// A uniqueness rule, a duplicate association or a delete guard refused the operation
    #[error("conflict: {0}")]
    Conflict(String),
    /// The request contradicts itself, e.g. an update body naming another identity
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Any other failure of the store; nothing was committed
    #[error("store failure: {0}")]
    Db(DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: EntityKind, key: impl Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict(reason.into())
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Constraint violations reported by the store are the authoritative form of
/// the uniqueness and delete guards, so they surface as [`ServiceError::Conflict`].
impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => Self::Conflict(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => Self::Conflict(message),
            _ => Self::Db(err),
        }
    }
}

/// Turns a missing lookup result into [`ServiceError::NotFound`].
pub trait OrNotFound<T> {
    fn or_not_found(self, entity: EntityKind, key: impl Display) -> ServiceResult<T>;
}

impl<T> OrNotFound<T> for Option<T> {
    fn or_not_found(self, entity: EntityKind, key: impl Display) -> ServiceResult<T> {
        self.ok_or_else(|| ServiceError::not_found(entity, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn not_found_names_the_entity_and_key() {
        let err = ServiceError::not_found(EntityKind::TastingTest, 7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "tasting_test not found: 7");
    }

    #[test]
    fn plain_store_errors_stay_internal() {
        let err: ServiceError = DbErr::Custom("connection reset".to_owned()).into();
        assert!(matches!(err, ServiceError::Db(_)));
        assert!(!err.is_conflict());
    }

    #[test]
    fn missing_option_becomes_not_found() {
        let found: Option<i32> = None;
        let err = found.or_not_found(EntityKind::Book, "978-0").unwrap_err();
        assert_eq!(err.to_string(), "book not found: 978-0");
        assert_eq!(Some(3).or_not_found(EntityKind::Recipe, 3).unwrap(), 3);
    }
}
