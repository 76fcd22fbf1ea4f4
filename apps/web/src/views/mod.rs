//! # HTML Views
//!
//! Server-rendered pages built with `maud`.
//!
//! ```text
//! layout(title, body)
//!   ├── nav: Home | Members | Books | Coupons | Orders | Books & Orders
//!   └── body
//!        ├── listing table
//!        └── create / update / delete forms (POST, 303 back to the page)
//! ```
//!
//! Form field names here are the contract with [`crate::forms`].

mod books;
mod coupons;
mod line_items;
mod members;
mod orders;

pub use books::books_page;
pub use coupons::coupons_page;
pub use line_items::{line_items_page, LineItemsPage};
pub use members::members_page;
pub use orders::orders_page;

use bookstore_core::{Book, Coupon, Member};
use chrono::NaiveDate;
use maud::{html, Markup, DOCTYPE};

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/members", "Members"),
    ("/books", "Books"),
    ("/coupons", "Coupons"),
    ("/orders", "Orders"),
    ("/booksAndOrders", "Books & Orders"),
];

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 2rem; }
nav a { margin-right: 1rem; }
table { border-collapse: collapse; margin-bottom: 2rem; }
th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }
form { margin-bottom: 1.5rem; padding: 0.8rem; border: 1px solid #ddd; max-width: 34rem; }
label { display: block; margin: 0.3rem 0; }
"#;

/// Sends `DELETE /booksAndOrders/{id}` for buttons that carry a line item id.
const DELETE_SCRIPT: &str = r#"
document.addEventListener('click', async (event) => {
  const id = event.target.dataset.deleteLineItem;
  if (!id) return;
  const response = await fetch('/booksAndOrders/' + id, { method: 'DELETE' });
  if (response.status === 204) { window.location.reload(); }
  else { alert(await response.text()); }
});
"#;

/// Wraps page content in the shared document shell.
pub fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Bookstore | " (title) }
                style { (maud::PreEscaped(STYLE)) }
            }
            body {
                nav {
                    @for (href, label) in NAV {
                        a href=(href) { (label) }
                    }
                }
                h1 { (title) }
                (body)
                script { (maud::PreEscaped(DELETE_SCRIPT)) }
            }
        }
    }
}

/// Landing page.
pub fn home_page() -> Markup {
    layout(
        "Home",
        html! {
            p { "Manage the store's members, catalog, coupons and orders." }
            ul {
                @for (href, label) in NAV.iter().skip(1) {
                    li { a href=(href) { (label) } }
                }
            }
        },
    )
}

// =============================================================================
// Shared fragments
// =============================================================================

pub(crate) fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

pub(crate) fn member_select(name: &str, members: &[Member]) -> Markup {
    html! {
        select name=(name) required {
            option value="" { "Select a member" }
            @for member in members {
                option value=(member.member_id) {
                    (member.member_id) ": " (member.full_name())
                }
            }
        }
    }
}

/// Coupon picker; the blank option submits "no coupon".
pub(crate) fn coupon_select(name: &str, coupons: &[Coupon]) -> Markup {
    html! {
        select name=(name) {
            option value="" { "No coupon" }
            @for coupon in coupons {
                option value=(coupon.coupon_id) {
                    "#" (coupon.coupon_id) " (" (coupon.discount().to_string()) " off, expires "
                    (coupon.expiration_date.to_string()) ")"
                }
            }
        }
    }
}

pub(crate) fn book_select(name: &str, books: &[Book]) -> Markup {
    html! {
        select name=(name) required {
            option value="" { "Select a book" }
            @for book in books {
                option value=(book.isbn) { (book.title) " (" (book.isbn) ")" }
            }
        }
    }
}
