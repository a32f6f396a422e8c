//! Field checks on façade inputs, applied before any store access.

use crate::error::{ServiceError, ServiceResult};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> ServiceResult<()>;
}

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) fn not_blank(field: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::invalid_argument(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn required(field: &str, value: &str, max_chars: usize) -> ServiceResult<()> {
    not_blank(field, value)?;
    max_len(field, value, max_chars)
}

pub(crate) fn max_len(field: &str, value: &str, max_chars: usize) -> ServiceResult<()> {
    if value.chars().count() > max_chars {
        return Err(ServiceError::invalid_argument(format!(
            "{field} must not exceed {max_chars} characters"
        )));
    }
    Ok(())
}

pub(crate) fn optional(field: &str, value: Option<&str>, max_chars: usize) -> ServiceResult<()> {
    value.map_or(Ok(()), |v| max_len(field, v, max_chars))
}

pub(crate) fn not_in_future(field: &str, date: NaiveDate) -> ServiceResult<()> {
    if date > today() {
        return Err(ServiceError::invalid_argument(format!(
            "{field} must not be in the future"
        )));
    }
    Ok(())
}

pub(crate) fn positive(field: &str, value: Decimal) -> ServiceResult<()> {
    if value <= Decimal::ZERO {
        return Err(ServiceError::invalid_argument(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(())
}

/// Rejects a value that a `DECIMAL(precision, scale)` column could not hold
/// exactly. Trailing zeros do not count towards the scale.
pub(crate) fn fits_decimal(
    field: &str,
    value: Decimal,
    precision: u32,
    scale: u32,
) -> ServiceResult<()> {
    let integer_limit = Decimal::from(10u64.pow(precision.saturating_sub(scale)));
    if value.normalize().scale() > scale || value.abs().trunc() >= integer_limit {
        return Err(ServiceError::invalid_argument(format!(
            "{field} must fit {} integer digits and {scale} decimal places, got {value}",
            precision.saturating_sub(scale)
        )));
    }
    Ok(())
}

pub(crate) fn within<T>(field: &str, value: T, min: T, max: T) -> ServiceResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    // written so that NaN scores are rejected too
    if !(value >= min && value <= max) {
        return Err(ServiceError::invalid_argument(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn at_least(field: &str, value: i32, min: i32) -> ServiceResult<()> {
    if value < min {
        return Err(ServiceError::invalid_argument(format!(
            "{field} must be at least {min}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal_macros::dec;

    #[test]
    fn blank_and_oversized_text() {
        assert!(required("name", "Cake", 80).is_ok());
        assert!(required("name", "   ", 80).unwrap_err().is_invalid_argument());
        assert!(required("name", &"x".repeat(81), 80).is_err());
        // limits count characters, not bytes
        assert!(required("name", &"ç".repeat(80), 80).is_ok());
        assert!(optional("unit", None, 50).is_ok());
        assert!(optional("unit", Some(&"u".repeat(51)), 50).is_err());
    }

    #[test]
    fn dates_may_not_be_in_the_future() {
        assert!(not_in_future("admission date", today()).is_ok());
        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        let err = not_in_future("admission date", tomorrow).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: admission date must not be in the future"
        );
    }

    #[test]
    fn numeric_bounds() {
        assert!(positive("quantity", dec!(0.5)).is_ok());
        assert!(positive("quantity", dec!(0)).is_err());
        assert!(positive("salary", dec!(-1)).is_err());

        assert!(fits_decimal("salary", dec!(999999.99), 8, 2).is_ok());
        assert!(fits_decimal("salary", dec!(3000.500), 8, 2).is_ok());
        assert!(fits_decimal("salary", dec!(1000000), 8, 2).is_err());
        assert!(fits_decimal("salary", dec!(-1000000), 8, 2).is_err());
        let err = fits_decimal("quantity", dec!(0.0005), 10, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: quantity must fit 7 integer digits and 3 decimal places, got 0.0005"
        );

        assert!(within("score", 10.0, 0.0, 10.0).is_ok());
        assert!(within("score", 10.5, 0.0, 10.0).is_err());
        assert!(within("score", f64::NAN, 0.0, 10.0).is_err());
        assert!(within("initial term", 46, 0, 45).is_err());

        assert!(at_least("servings", 1, 1).is_ok());
        assert!(at_least("servings", 0, 1).is_err());
    }
}
