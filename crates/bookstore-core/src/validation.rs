//! # Validation Module
//!
//! Form-field validation and normalization for the bookstore.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTML form (required attributes, input types)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trim, reject blank required fields                                │
//! │  ├── Blank optional fields → None (stored as NULL)                     │
//! │  └── Parse ids, quantities, money, dates, ISBNs                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / PRIMARY KEY constraints                                │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{normalize_optional, parse_quantity};
//!
//! assert_eq!(normalize_optional(Some("   ")), None);
//! assert_eq!(parse_quantity("3").unwrap(), 3);
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_AMOUNT_CENTS, MAX_ITEM_QUANTITY, MAX_TEXT_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Date format used by `<input type="date">` and by the database.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// String Validators
// =============================================================================

/// Trims `raw` and maps blank input to `None`.
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::normalize_optional;
///
/// assert_eq!(normalize_optional(None), None);
/// assert_eq!(normalize_optional(Some("")), None);
/// assert_eq!(normalize_optional(Some(" Penguin ")), Some("Penguin".to_string()));
/// ```
pub fn normalize_optional(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Validates a required free-text field (names, title, author, genre).
///
/// ## Rules
/// - Trimmed value must not be empty
/// - At most `MAX_TEXT_LEN` characters
pub fn required_text(field: &str, raw: &str) -> ValidationResult<String> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(value.to_string())
}

/// Validates an optional free-text field; blank becomes `None`.
pub fn optional_text(field: &str, raw: Option<&str>) -> ValidationResult<Option<String>> {
    match normalize_optional(raw) {
        Some(value) => required_text(field, &value).map(Some),
        None => Ok(None),
    }
}

/// Validates an ISBN (the Book natural key).
///
/// ## Rules
/// - Hyphens and spaces are ignored when checking the shape
/// - 13 digits, or 10 characters where the last may be `X`
/// - Returns the compact form (no separators, uppercase `X`), which is the
///   stored key, so every spelling of one ISBN names the same book
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_isbn;
///
/// assert_eq!(validate_isbn("978-0-13-235088-4").unwrap(), "9780132350884");
/// assert_eq!(validate_isbn("0-306-40615-x").unwrap(), "030640615X");
/// assert!(validate_isbn("12345").is_err());
/// ```
pub fn validate_isbn(raw: &str) -> ValidationResult<String> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::required("ISBN"));
    }

    let compact: Vec<char> = value
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let valid = match compact.len() {
        13 => compact.iter().all(|c| c.is_ascii_digit()),
        10 => {
            compact[..9].iter().all(|c| c.is_ascii_digit())
                && (compact[9].is_ascii_digit() || compact[9] == 'X')
        }
        _ => false,
    };

    if !valid {
        return Err(ValidationError::invalid(
            "ISBN",
            "must be 10 or 13 digits (ISBN-10 may end in X)",
        ));
    }

    Ok(compact.into_iter().collect())
}

/// Validates an email address.
///
/// ## Rules
/// - Exactly one `@`
/// - Non-empty local and domain parts
/// - No whitespace
pub fn validate_email(raw: &str) -> ValidationResult<String> {
    let value = required_text("email", raw)?;

    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let well_formed = parts.next().is_none()
        && !local.is_empty()
        && !domain.is_empty()
        && !value.chars().any(char::is_whitespace);

    if !well_formed {
        return Err(ValidationError::invalid("email", "must look like name@example.com"));
    }

    Ok(value)
}

/// Validates a phone number.
///
/// ## Rules
/// - Only digits, spaces and `+ - ( ) .`
/// - Between 7 and 15 digits
pub fn validate_phone(raw: &str) -> ValidationResult<String> {
    let value = required_text("phoneNumber", raw)?;

    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'))
    {
        return Err(ValidationError::invalid(
            "phoneNumber",
            "must contain only digits, spaces and + - ( ) .",
        ));
    }

    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(ValidationError::invalid("phoneNumber", "must have 7 to 15 digits"));
    }

    Ok(value)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a required positive integer identifier.
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<i64> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    let id: i64 = value
        .parse()
        .map_err(|_| ValidationError::invalid(field, "must be a whole number"))?;

    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(id)
}

/// Parses an optional identifier (e.g. the nullable coupon on an order).
///
/// Blank input means "no reference" and becomes `None`.
pub fn parse_optional_id(field: &str, raw: Option<&str>) -> ValidationResult<Option<i64>> {
    match normalize_optional(raw) {
        Some(value) => parse_id(field, &value).map(Some),
        None => Ok(None),
    }
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses and validates a quantity submitted as text.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::required("quantity"));
    }

    let qty: i64 = value
        .parse()
        .map_err(|_| ValidationError::invalid("quantity", "must be a whole number"))?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Parses a non-negative money amount no larger than `MAX_AMOUNT_CENTS`.
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::parse_money;
///
/// assert_eq!(parse_money("cost", "19.99").unwrap().cents(), 1999);
/// assert!(parse_money("cost", "free").is_err());
/// ```
pub fn parse_money(field: &str, raw: &str) -> ValidationResult<Money> {
    if raw.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    let amount = Money::parse(raw).ok_or_else(|| {
        ValidationError::invalid(field, "must be a non-negative amount like 12.50")
    })?;

    if amount.cents() > MAX_AMOUNT_CENTS {
        return Err(ValidationError::invalid(
            field,
            format!("must be at most {}", Money::from_cents(MAX_AMOUNT_CENTS)),
        ));
    }

    Ok(amount)
}

/// Parses an optional money amount; blank becomes `None`.
pub fn parse_optional_money(field: &str, raw: Option<&str>) -> ValidationResult<Option<Money>> {
    match normalize_optional(raw) {
        Some(value) => parse_money(field, &value).map(Some),
        None => Ok(None),
    }
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a required `YYYY-MM-DD` date.
pub fn parse_date(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid(field, "must be a date like 2026-01-31"))
}

/// Parses an optional `YYYY-MM-DD` date; blank becomes `None`.
pub fn parse_optional_date(field: &str, raw: Option<&str>) -> ValidationResult<Option<NaiveDate>> {
    match normalize_optional(raw) {
        Some(value) => parse_date(field, &value).map(Some),
        None => Ok(None),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("")), None);
        assert_eq!(normalize_optional(Some(" \t ")), None);
        assert_eq!(normalize_optional(Some(" x ")), Some("x".to_string()));
    }

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("title", "  Dune ").unwrap(), "Dune");
        assert_eq!(
            required_text("title", "   "),
            Err(ValidationError::required("title"))
        );
        assert!(required_text("title", &"a".repeat(MAX_TEXT_LEN + 1)).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("publisher", Some("")).unwrap(), None);
        assert_eq!(optional_text("publisher", None).unwrap(), None);
        assert_eq!(
            optional_text("publisher", Some("Ace ")).unwrap(),
            Some("Ace".to_string())
        );
    }

    #[test]
    fn test_validate_isbn() {
        assert_eq!(validate_isbn(" 9780441013593 ").unwrap(), "9780441013593");
        assert_eq!(validate_isbn("978-0-441-01359-3").unwrap(), "9780441013593");
        assert_eq!(validate_isbn("978 0441013593").unwrap(), "9780441013593");
        assert!(validate_isbn("0441013597").is_ok());
        assert_eq!(validate_isbn("0-8044-2957-x").unwrap(), "080442957X");

        assert!(validate_isbn("").is_err());
        assert!(validate_isbn("97804410135").is_err());
        assert!(validate_isbn("X804429570").is_err());
        assert!(validate_isbn("978044101359A").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("ada@localhost").is_ok());
        assert!(validate_email("ada@").is_err());
        assert!(validate_email("ada").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@@example.com").is_err());
        assert!(validate_email("ada lovelace@example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("555-0100").is_ok());
        assert!(validate_phone("+1 (503) 555-0100").is_ok());
        assert!(validate_phone("555").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("memberID", " 42 ").unwrap(), 42);
        assert!(parse_id("memberID", "").is_err());
        assert!(parse_id("memberID", "0").is_err());
        assert!(parse_id("memberID", "abc").is_err());
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id("couponID", Some("")).unwrap(), None);
        assert_eq!(parse_optional_id("couponID", None).unwrap(), None);
        assert_eq!(parse_optional_id("couponID", Some("7")).unwrap(), Some(7));
        assert!(parse_optional_id("couponID", Some("seven")).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2").unwrap(), 2);
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("2.5").is_err());
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("cost", "0").unwrap(), Money::zero());
        assert_eq!(parse_money("cost", "$5.25").unwrap().cents(), 525);
        assert_eq!(parse_money("cost", ""), Err(ValidationError::required("cost")));
        assert!(parse_money("cost", "-5").is_err());
        assert_eq!(parse_money("cost", "1000000").unwrap().cents(), MAX_AMOUNT_CENTS);
        assert!(parse_money("cost", "1000000.01").is_err());
        assert!(parse_money("cost", "90000000000000000").is_err());
        assert_eq!(parse_optional_money("totalPrice", Some(" ")).unwrap(), None);
    }

    #[test]
    fn test_parse_dates() {
        let date = parse_date("expirationDate", "2026-12-31").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());

        assert!(parse_date("expirationDate", "12/31/2026").is_err());
        assert!(parse_date("expirationDate", "2026-02-30").is_err());
        assert_eq!(parse_optional_date("publishedDate", Some("")).unwrap(), None);
    }
}
