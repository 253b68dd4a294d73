//! Business-rule checks run before any write reaches a store.
//!
//! Everything here is pure: lookups the rules depend on (does the email
//! exist, is the pair already liked) are performed by the caller and passed
//! in, so the same rules apply to every store implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult, User, MAX_PRICE};
use crate::shared::{ConflictError, ValidationError};

/// Minimum password length, applied to every registration path.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Prices are stored with cent precision.
pub const PRICE_SCALE: u32 = 2;

pub fn validate_price(price: Decimal) -> Result<(), ValidationError> {
    if price < Decimal::ZERO || price > MAX_PRICE {
        return Err(ValidationError::OutOfRange(price));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::InvalidPrecision(price));
    }
    Ok(())
}

/// Price and date rules for a vacation write.
///
/// The past-date rule only applies to new vacations: editing a vacation
/// that already started must stay possible.
pub fn validate_vacation_write(
    price: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_new: bool,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    validate_price(price)?;
    if end_date < start_date {
        return Err(ValidationError::InvalidDateOrder {
            start: start_date,
            end: end_date,
        });
    }
    if is_new && start_date < today {
        return Err(ValidationError::PastDate {
            start: start_date,
            today,
        });
    }
    Ok(())
}

/// Text fields of a vacation write. `image_filename` is `None` on edits,
/// where a blank filename keeps the stored image instead of failing.
pub fn validate_vacation_fields(
    description: &str,
    image_filename: Option<&str>,
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(invalid_field("description", "must not be empty"));
    }
    if let Some(filename) = image_filename {
        if filename.trim().is_empty() {
            return Err(invalid_field("image_filename", "must not be empty"));
        }
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::WeakCredential {
            min_length: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// `existing` is the user currently holding `email`, if any.
pub fn validate_registration(
    email: &str,
    password: &str,
    existing: Option<&User>,
) -> DomainResult<()> {
    validate_password(password)?;
    if existing.is_some() {
        return Err(ConflictError::DuplicateEmail(email.to_string()).into());
    }
    Ok(())
}

pub fn validate_name(field: &str, value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len == 0 || len > 50 {
        return Err(invalid_field(field, "must be 1-50 characters"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeDirection {
    Like,
    Unlike,
}

/// Unliking never reports a missing vacation: with no vacation there is
/// no like either, so the caller sees `NotLiked`.
pub fn validate_like(
    user_id: i32,
    vacation_id: i32,
    direction: LikeDirection,
    vacation_exists: bool,
    already_liked: bool,
) -> DomainResult<()> {
    match direction {
        LikeDirection::Like => {
            if !vacation_exists {
                return Err(DomainError::not_found("Vacation", vacation_id));
            }
            if already_liked {
                return Err(ConflictError::AlreadyLiked {
                    user_id,
                    vacation_id,
                }
                .into());
            }
        }
        LikeDirection::Unlike => {
            if !already_liked {
                return Err(DomainError::NotLiked {
                    user_id,
                    vacation_id,
                });
            }
        }
    }
    Ok(())
}

/// Flattens `validator` derive output into the first failing field,
/// ordered by field name so the reported error is stable.
pub fn first_field_error(errors: &validator::ValidationErrors) -> ValidationError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                invalid_field(&field.to_string(), &message)
            })
        })
        .unwrap_or_else(|| invalid_field("input", "validation failed"))
}

fn invalid_field(field: &str, message: &str) -> ValidationError {
    ValidationError::InvalidField {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 6, 1)
    }

    #[test]
    fn price_bounds_are_inclusive() {
        for cents in [0_i64, 1, 50_000, 999_999, 1_000_000] {
            let price = Decimal::new(cents, 2);
            assert!(validate_price(price).is_ok(), "{price} should be accepted");
        }
        for price in [Decimal::new(-1, 2), Decimal::new(1_000_001, 2), Decimal::from(20_000)] {
            assert_eq!(
                validate_price(price),
                Err(ValidationError::OutOfRange(price))
            );
        }
    }

    #[test]
    fn sub_cent_prices_are_rejected() {
        let price = Decimal::new(10_005, 3);
        assert_eq!(
            validate_price(price),
            Err(ValidationError::InvalidPrecision(price))
        );
        // trailing zeros are not extra precision
        assert!(validate_price(Decimal::new(10_000, 3)).is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = validate_vacation_write(
            Decimal::from(100),
            date(2025, 7, 10),
            date(2025, 7, 9),
            false,
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateOrder { .. }));

        // single-day vacation is fine
        assert!(validate_vacation_write(
            Decimal::from(100),
            date(2025, 7, 10),
            date(2025, 7, 10),
            true,
            today(),
        )
        .is_ok());
    }

    #[test]
    fn past_start_only_rejected_for_new_vacations() {
        let start = date(2025, 5, 1);
        let end = date(2025, 5, 5);
        assert_eq!(
            validate_vacation_write(Decimal::from(100), start, end, true, today()),
            Err(ValidationError::PastDate {
                start,
                today: today()
            })
        );
        assert!(validate_vacation_write(Decimal::from(100), start, end, false, today()).is_ok());
        // starting today is not in the past
        assert!(validate_vacation_write(Decimal::from(100), today(), end.max(today()), true, today()).is_ok());
    }

    #[test]
    fn price_is_checked_before_dates() {
        let err = validate_vacation_write(
            Decimal::from(-5),
            date(2025, 7, 10),
            date(2025, 7, 1),
            true,
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange(_)));
    }

    #[test]
    fn vacation_text_fields() {
        assert!(validate_vacation_fields("Beach", Some("beach.jpg")).is_ok());
        assert!(validate_vacation_fields("Beach", None).is_ok());
        assert!(validate_vacation_fields("  ", Some("beach.jpg")).is_err());
        assert!(validate_vacation_fields("Beach", Some("")).is_err());
        assert!(validate_vacation_fields("Beach", Some(" \t")).is_err());
    }

    #[test]
    fn password_length_threshold() {
        assert!(validate_password("1234567").is_err());
        assert!(validate_password("12345678").is_ok());
        // counted in characters, not bytes
        assert!(validate_password("ééééééé").is_err());
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let existing = User {
            id: 1,
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@x.com".into(),
            password_hash: "hash".into(),
            role_id: 2,
            is_staff: false,
        };
        let err = validate_registration("a@x.com", "password1", Some(&existing)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(validate_registration("b@x.com", "password1", None).is_ok());
        let weak = validate_registration("b@x.com", "short", None).unwrap_err();
        assert_eq!(weak.kind(), ErrorKind::Validation);
    }

    #[test]
    fn like_rules_by_direction() {
        assert!(validate_like(1, 2, LikeDirection::Like, true, false).is_ok());
        assert_eq!(
            validate_like(1, 2, LikeDirection::Like, false, false).unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            validate_like(1, 2, LikeDirection::Like, true, true).unwrap_err(),
            DomainError::Conflict(ConflictError::AlreadyLiked {
                user_id: 1,
                vacation_id: 2
            })
        );
        assert!(validate_like(1, 2, LikeDirection::Unlike, true, true).is_ok());
        assert_eq!(
            validate_like(1, 2, LikeDirection::Unlike, false, false).unwrap_err(),
            DomainError::NotLiked {
                user_id: 1,
                vacation_id: 2
            }
        );
    }

    #[test]
    fn names_are_bounded() {
        assert!(validate_name("name", "France").is_ok());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", &"x".repeat(51)).is_err());
    }
}
