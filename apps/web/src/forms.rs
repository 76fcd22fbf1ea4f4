//! Form bodies submitted by the management pages.
//!
//! Field names match the `name` attributes rendered by [`crate::views`].
//! Every field is optional at the decoding stage; a missing required field
//! surfaces as a 400 from the domain validators rather than an extractor
//! rejection.

use bookstore_core::validation::ValidationResult;
use bookstore_core::{
    BookFields, CouponUpdate, NewBook, NewCoupon, NewLineItem, NewMember, NewOrder,
    NewOrderWithItem, OrderUpdate,
};
use serde::Deserialize;

/// Text of a submitted field, or `""` when absent.
fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

// =============================================================================
// Members
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateMemberForm {
    #[serde(rename = "fNameInput")]
    pub first_name: Option<String>,
    #[serde(rename = "lNameInput")]
    pub last_name: Option<String>,
    #[serde(rename = "phoneInput")]
    pub phone: Option<String>,
    #[serde(rename = "emailInput")]
    pub email: Option<String>,
}

impl CreateMemberForm {
    pub fn validate(&self) -> ValidationResult<NewMember> {
        NewMember::new(
            text(&self.first_name),
            text(&self.last_name),
            text(&self.phone),
            text(&self.email),
        )
    }
}

/// Used by both `POST /members/update` and `PUT /members/{id}`; the path
/// id takes precedence over `update_member_id`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMemberForm {
    pub update_member_id: Option<String>,
    #[serde(rename = "update_member_firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "update_member_lastName")]
    pub last_name: Option<String>,
    #[serde(rename = "update_member_phoneNumber")]
    pub phone: Option<String>,
    #[serde(rename = "update_member_email")]
    pub email: Option<String>,
}

impl UpdateMemberForm {
    pub fn member_id(&self) -> ValidationResult<i64> {
        bookstore_core::validation::parse_id("memberID", text(&self.update_member_id))
    }

    pub fn validate(&self) -> ValidationResult<NewMember> {
        NewMember::new(
            text(&self.first_name),
            text(&self.last_name),
            text(&self.phone),
            text(&self.email),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteMemberForm {
    pub delete_member_id: Option<String>,
}

impl DeleteMemberForm {
    pub fn member_id(&self) -> ValidationResult<i64> {
        bookstore_core::validation::parse_id("memberID", text(&self.delete_member_id))
    }
}

// =============================================================================
// Books
// =============================================================================

/// Create and update share the same fields; on update the ISBN selects the row.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(rename = "isbnInput")]
    pub isbn: Option<String>,
    #[serde(rename = "titleInput")]
    pub title: Option<String>,
    #[serde(rename = "authorInput")]
    pub author: Option<String>,
    #[serde(rename = "publisherInput")]
    pub publisher: Option<String>,
    #[serde(rename = "publishedDateInput")]
    pub published_date: Option<String>,
    #[serde(rename = "genreInput")]
    pub genre: Option<String>,
    #[serde(rename = "costInput")]
    pub cost: Option<String>,
}

impl BookForm {
    pub fn validate(&self) -> ValidationResult<NewBook> {
        self.validate_with_isbn(text(&self.isbn))
    }

    /// Validates with the ISBN taken from elsewhere (the `PUT` path).
    pub fn validate_with_isbn(&self, isbn: &str) -> ValidationResult<NewBook> {
        NewBook::new(BookFields {
            isbn,
            title: text(&self.title),
            author: text(&self.author),
            publisher: self.publisher.as_deref(),
            published_date: self.published_date.as_deref(),
            genre: text(&self.genre),
            cost: text(&self.cost),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteBookForm {
    #[serde(rename = "isbnInput")]
    pub isbn: Option<String>,
}

impl DeleteBookForm {
    pub fn isbn(&self) -> ValidationResult<String> {
        bookstore_core::validation::validate_isbn(text(&self.isbn))
    }
}

// =============================================================================
// Coupons
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateCouponForm {
    #[serde(rename = "couponDiscountInput")]
    pub discount: Option<String>,
    #[serde(rename = "expirationDateInput")]
    pub expiration_date: Option<String>,
}

impl CreateCouponForm {
    pub fn validate(&self) -> ValidationResult<NewCoupon> {
        NewCoupon::new(text(&self.discount), text(&self.expiration_date))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCouponForm {
    #[serde(rename = "couponIDInput")]
    pub coupon_id: Option<String>,
    #[serde(rename = "expirationDateInput")]
    pub expiration_date: Option<String>,
}

impl UpdateCouponForm {
    pub fn coupon_id(&self) -> ValidationResult<i64> {
        bookstore_core::validation::parse_id("couponID", text(&self.coupon_id))
    }

    pub fn validate(&self) -> ValidationResult<CouponUpdate> {
        CouponUpdate::new(text(&self.expiration_date))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteCouponForm {
    pub delete_coupon_id: Option<String>,
}

impl DeleteCouponForm {
    pub fn coupon_id(&self) -> ValidationResult<i64> {
        bookstore_core::validation::parse_id("couponID", text(&self.delete_coupon_id))
    }
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderForm {
    #[serde(rename = "memberIDInput")]
    pub member_id: Option<String>,
    #[serde(rename = "couponIDInput")]
    pub coupon_id: Option<String>,
    #[serde(rename = "totalPriceInput")]
    pub total_price: Option<String>,
}

impl CreateOrderForm {
    pub fn validate(&self) -> ValidationResult<NewOrder> {
        NewOrder::new(
            text(&self.member_id),
            self.coupon_id.as_deref(),
            text(&self.total_price),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrderForm {
    #[serde(rename = "orderIDInput")]
    pub order_id: Option<String>,
    #[serde(rename = "couponIDInput")]
    pub coupon_id: Option<String>,
    #[serde(rename = "totalPriceInput")]
    pub total_price: Option<String>,
}

impl UpdateOrderForm {
    pub fn order_id(&self) -> ValidationResult<i64> {
        bookstore_core::validation::parse_id("orderID", text(&self.order_id))
    }

    pub fn validate(&self) -> ValidationResult<OrderUpdate> {
        OrderUpdate::new(self.coupon_id.as_deref(), text(&self.total_price))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteOrderForm {
    pub delete_order_id: Option<String>,
}

impl DeleteOrderForm {
    pub fn order_id(&self) -> ValidationResult<i64> {
        bookstore_core::validation::parse_id("orderID", text(&self.delete_order_id))
    }
}

// =============================================================================
// Line items (BooksAndOrders)
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct NewOrderWithItemForm {
    #[serde(rename = "memberIDInput")]
    pub member_id: Option<String>,
    #[serde(rename = "couponIDInput")]
    pub coupon_id: Option<String>,
    #[serde(rename = "isbnInput")]
    pub isbn: Option<String>,
    #[serde(rename = "quantityInput")]
    pub quantity: Option<String>,
    #[serde(rename = "totalPriceInput")]
    pub total_price: Option<String>,
}

impl NewOrderWithItemForm {
    pub fn validate(&self) -> ValidationResult<NewOrderWithItem> {
        NewOrderWithItem::new(
            text(&self.member_id),
            self.coupon_id.as_deref(),
            text(&self.isbn),
            text(&self.quantity),
            self.total_price.as_deref(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ExistingOrderItemForm {
    #[serde(rename = "orderIDInput")]
    pub order_id: Option<String>,
    #[serde(rename = "isbnInput")]
    pub isbn: Option<String>,
    #[serde(rename = "quantityInput")]
    pub quantity: Option<String>,
}

impl ExistingOrderItemForm {
    pub fn validate(&self) -> ValidationResult<NewLineItem> {
        NewLineItem::new(text(&self.order_id), text(&self.isbn), text(&self.quantity))
    }
}
