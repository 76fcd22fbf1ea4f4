//! # Domain Types
//!
//! Entity types for the bookstore and the validated inputs used to create
//! and update them.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────┐        ┌──────────────┐        ┌──────────────┐      │
//! │  │    Member    │ 1    * │    Order     │ *    1 │    Coupon    │      │
//! │  │  memberID    │◄───────│  memberID    │- - - ->│  couponID    │      │
//! │  │  lastName .. │        │  couponID ∅  │        │  discount    │      │
//! │  └──────────────┘        │  totalPrice  │        └──────────────┘      │
//! │                          └──────┬───────┘                               │
//! │                                 │ 1                                      │
//! │                                 │ *                                      │
//! │                          ┌──────▼───────┐        ┌──────────────┐      │
//! │                          │  LineItem    │ *    1 │     Book     │      │
//! │                          │ (BooksAnd-   │───────►│  ISBN        │      │
//! │                          │   Orders)    │        │  cost        │      │
//! │                          └──────────────┘        └──────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Input Types
//! `New*` / `*Update` types can only be built through their constructors,
//! which take raw form text and run the [`crate::validation`] rules. A value
//! of one of these types is therefore always clean: trimmed, with blank
//! optional fields already turned into `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{
    optional_text, parse_date, parse_id, parse_money, parse_optional_date, parse_optional_id,
    parse_optional_money, parse_quantity, required_text, validate_email, validate_isbn,
    validate_phone, ValidationResult,
};

// =============================================================================
// Member
// =============================================================================

/// A bookstore member (customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Member {
    pub member_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
}

impl Member {
    /// "First Last", as shown in listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated fields for creating or fully replacing a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
}

impl NewMember {
    /// Validates raw form text.
    pub fn new(first_name: &str, last_name: &str, phone_number: &str, email: &str) -> ValidationResult<Self> {
        Ok(NewMember {
            first_name: required_text("firstName", first_name)?,
            last_name: required_text("lastName", last_name)?,
            phone_number: validate_phone(phone_number)?,
            email: validate_email(email)?,
        })
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog, keyed by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Natural key.
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub genre: String,
    /// Unit cost in cents.
    pub cost_cents: i64,
}

impl Book {
    /// Returns the unit cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }
}

/// Validated fields for creating or fully replacing a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub genre: String,
    pub cost: Money,
}

/// Raw book form text, before validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookFields<'a> {
    pub isbn: &'a str,
    pub title: &'a str,
    pub author: &'a str,
    pub publisher: Option<&'a str>,
    pub published_date: Option<&'a str>,
    pub genre: &'a str,
    pub cost: &'a str,
}

impl NewBook {
    /// Validates raw form text. Blank publisher / publication date become `None`.
    pub fn new(fields: BookFields<'_>) -> ValidationResult<Self> {
        Ok(NewBook {
            isbn: validate_isbn(fields.isbn)?,
            title: required_text("title", fields.title)?,
            author: required_text("author", fields.author)?,
            publisher: optional_text("publisher", fields.publisher)?,
            published_date: parse_optional_date("publishedDate", fields.published_date)?,
            genre: required_text("genre", fields.genre)?,
            cost: parse_money("cost", fields.cost)?,
        })
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A discount coupon that may be applied to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Coupon {
    pub coupon_id: i64,
    /// Flat discount in cents.
    pub coupon_discount_cents: i64,
    pub expiration_date: NaiveDate,
}

impl Coupon {
    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.coupon_discount_cents)
    }

    /// Whether the coupon has expired as of `today` (the expiration day itself is still valid).
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiration_date
    }
}

/// Validated fields for creating a coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub discount: Money,
    pub expiration_date: NaiveDate,
}

impl NewCoupon {
    pub fn new(discount: &str, expiration_date: &str) -> ValidationResult<Self> {
        Ok(NewCoupon {
            discount: parse_money("couponDiscount", discount)?,
            expiration_date: parse_date("expirationDate", expiration_date)?,
        })
    }
}

/// Partial coupon update: only the expiration date may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponUpdate {
    pub expiration_date: NaiveDate,
}

impl CouponUpdate {
    pub fn new(expiration_date: &str) -> ValidationResult<Self> {
        Ok(CouponUpdate {
            expiration_date: parse_date("expirationDate", expiration_date)?,
        })
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub order_id: i64,
    pub member_id: i64,
    pub coupon_id: Option<i64>,
    pub total_price_cents: i64,
}

impl Order {
    /// Returns the total as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

/// An order row joined with its member's name and line-item count, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderSummary {
    pub order_id: i64,
    pub member_id: i64,
    pub member_name: String,
    pub coupon_id: Option<i64>,
    pub total_price_cents: i64,
    pub item_count: i64,
}

impl OrderSummary {
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }
}

/// Validated fields for creating an order without line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub member_id: i64,
    pub coupon_id: Option<i64>,
    pub total_price: Money,
}

impl NewOrder {
    /// `coupon_id` is optional: blank means the order has no coupon.
    pub fn new(member_id: &str, coupon_id: Option<&str>, total_price: &str) -> ValidationResult<Self> {
        Ok(NewOrder {
            member_id: parse_id("memberID", member_id)?,
            coupon_id: parse_optional_id("couponID", coupon_id)?,
            total_price: parse_money("totalPrice", total_price)?,
        })
    }
}

/// Partial order update: coupon and total price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderUpdate {
    pub coupon_id: Option<i64>,
    pub total_price: Money,
}

impl OrderUpdate {
    pub fn new(coupon_id: Option<&str>, total_price: &str) -> ValidationResult<Self> {
        Ok(OrderUpdate {
            coupon_id: parse_optional_id("couponID", coupon_id)?,
            total_price: parse_money("totalPrice", total_price)?,
        })
    }
}

/// Validated input for creating an order together with its first line item.
///
/// When `total_price` is `None` the total is computed from the book cost,
/// the quantity and the coupon discount (see [`crate::pricing::order_total`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderWithItem {
    pub member_id: i64,
    pub coupon_id: Option<i64>,
    pub isbn: String,
    pub quantity: i64,
    pub total_price: Option<Money>,
}

impl NewOrderWithItem {
    pub fn new(
        member_id: &str,
        coupon_id: Option<&str>,
        isbn: &str,
        quantity: &str,
        total_price: Option<&str>,
    ) -> ValidationResult<Self> {
        Ok(NewOrderWithItem {
            member_id: parse_id("memberID", member_id)?,
            coupon_id: parse_optional_id("couponID", coupon_id)?,
            isbn: validate_isbn(isbn)?,
            quantity: parse_quantity(quantity)?,
            total_price: parse_optional_money("totalPrice", total_price)?,
        })
    }
}

/// Identifiers produced by creating an order with its first line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub order_id: i64,
    pub line_item_id: i64,
}

// =============================================================================
// Line Item
// =============================================================================

/// One book and quantity within an order (a `BooksAndOrders` row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LineItem {
    pub line_item_id: i64,
    pub order_id: i64,
    pub isbn: String,
    pub quantity: i64,
}

/// A line item joined with its order and book, for the line-item listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LineItemDetail {
    pub line_item_id: i64,
    pub order_id: i64,
    pub member_name: String,
    pub isbn: String,
    pub title: String,
    pub quantity: i64,
    pub unit_cost_cents: i64,
    pub order_total_cents: i64,
}

impl LineItemDetail {
    /// Unit cost × quantity, or `None` if the product overflows.
    pub fn line_total(&self) -> Option<Money> {
        Money::from_cents(self.unit_cost_cents).checked_multiply(self.quantity)
    }

    pub fn order_total(&self) -> Money {
        Money::from_cents(self.order_total_cents)
    }
}

/// Validated input for appending a line item to an existing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub order_id: i64,
    pub isbn: String,
    pub quantity: i64,
}

impl NewLineItem {
    pub fn new(order_id: &str, isbn: &str, quantity: &str) -> ValidationResult<Self> {
        Ok(NewLineItem {
            order_id: parse_id("orderID", order_id)?,
            isbn: validate_isbn(isbn)?,
            quantity: parse_quantity(quantity)?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_new_member_trims_fields() {
        let member = NewMember::new(" Ada ", "Lovelace", "555-0100", "ada@example.com").unwrap();
        assert_eq!(member.first_name, "Ada");
        assert_eq!(member.last_name, "Lovelace");
    }

    #[test]
    fn test_new_member_requires_last_name() {
        let err = NewMember::new("Ada", " ", "555-0100", "ada@example.com").unwrap_err();
        assert_eq!(err, ValidationError::required("lastName"));
    }

    #[test]
    fn test_new_book_normalizes_optional_fields() {
        let book = NewBook::new(BookFields {
            isbn: "9780441013593",
            title: "Dune",
            author: "Frank Herbert",
            publisher: Some("  "),
            published_date: Some(""),
            genre: "Science Fiction",
            cost: "9.99",
        })
        .unwrap();

        assert_eq!(book.publisher, None);
        assert_eq!(book.published_date, None);
        assert_eq!(book.cost.cents(), 999);
    }

    #[test]
    fn test_new_book_keeps_present_optional_fields() {
        let book = NewBook::new(BookFields {
            isbn: "9780441013593",
            title: "Dune",
            author: "Frank Herbert",
            publisher: Some("Ace"),
            published_date: Some("1990-09-01"),
            genre: "Science Fiction",
            cost: "9.99",
        })
        .unwrap();

        assert_eq!(book.publisher.as_deref(), Some("Ace"));
        assert_eq!(book.published_date, NaiveDate::from_ymd_opt(1990, 9, 1));
    }

    #[test]
    fn test_new_order_with_item_optional_fields() {
        let input = NewOrderWithItem::new("1", Some(""), "9780441013593", "2", Some("")).unwrap();
        assert_eq!(input.coupon_id, None);
        assert_eq!(input.total_price, None);

        let input = NewOrderWithItem::new("1", Some("3"), "9780441013593", "2", Some("20.00")).unwrap();
        assert_eq!(input.coupon_id, Some(3));
        assert_eq!(input.total_price, Some(Money::from_cents(2000)));
    }

    #[test]
    fn test_new_line_item_rejects_zero_quantity() {
        assert!(NewLineItem::new("1", "9780441013593", "0").is_err());
    }

    #[test]
    fn test_coupon_expiry() {
        let coupon = Coupon {
            coupon_id: 1,
            coupon_discount_cents: 500,
            expiration_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
        };
        assert!(!coupon.is_expired(NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()));
        assert!(coupon.is_expired(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()));
        assert_eq!(coupon.discount().cents(), 500);
    }

    #[test]
    fn test_line_item_total() {
        let item = LineItemDetail {
            line_item_id: 1,
            order_id: 1,
            member_name: "Ada Lovelace".to_string(),
            isbn: "9780441013593".to_string(),
            title: "Dune".to_string(),
            quantity: 3,
            unit_cost_cents: 999,
            order_total_cents: 2997,
        };
        assert_eq!(item.line_total(), Some(Money::from_cents(2997)));
        assert_eq!(item.order_total().to_string(), "$29.97");
    }

    #[test]
    fn test_line_item_total_overflow_is_none() {
        let item = LineItemDetail {
            line_item_id: 1,
            order_id: 1,
            member_name: "Ada Lovelace".to_string(),
            isbn: "9780441013593".to_string(),
            title: "Dune".to_string(),
            quantity: 2,
            unit_cost_cents: i64::MAX / 2 + 1,
            order_total_cents: 100,
        };
        assert_eq!(item.line_total(), None);
    }

    #[test]
    fn test_book_cost_above_limit_is_rejected() {
        let result = NewBook::new(BookFields {
            isbn: "9780441013593",
            title: "Dune",
            author: "Frank Herbert",
            genre: "Science Fiction",
            cost: "90000000000000000",
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
