//! Route table.
//!
//! POST form handlers answer with `303 See Other` back to their listing page.
//! The `PUT` and `DELETE` variants take the key from the path and answer with
//! JSON or `204 No Content`.

mod books;
mod coupons;
mod home;
mod line_items;
mod members;
mod orders;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        // Members
        .route("/members", get(members::list).post(members::create))
        .route("/members/update", post(members::update_form))
        .route("/members/delete", post(members::delete_form))
        .route("/members/{id}", put(members::update).delete(members::delete))
        // Books
        .route("/books", get(books::list).post(books::create))
        .route("/books/update", post(books::update_form))
        .route("/books/delete", post(books::delete_form))
        .route("/books/{isbn}", put(books::update).delete(books::delete))
        // Coupons
        .route("/coupons", get(coupons::list))
        .route("/add-coupon-form", post(coupons::create))
        .route("/coupons/update", post(coupons::update_form))
        .route("/coupons/delete", post(coupons::delete_form))
        .route("/coupons/{id}", put(coupons::update).delete(coupons::delete))
        // Orders
        .route("/orders", get(orders::list))
        .route("/add-order-form", post(orders::create))
        .route("/orders/update", post(orders::update_form))
        .route("/orders/delete", post(orders::delete_form))
        .route("/orders/{id}", put(orders::update).delete(orders::delete))
        // Line items
        .route("/booksAndOrders", get(line_items::list))
        .route("/booksAndOrders/new-order", post(line_items::new_order))
        .route("/booksAndOrders/existing-order", post(line_items::existing_order))
        .route("/booksAndOrders/{id}", delete(line_items::delete))
}
