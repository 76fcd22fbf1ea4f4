use bookstore_core::{Book, Coupon, LineItemDetail, Member, OrderSummary};
use maud::{html, Markup};

use super::{book_select, coupon_select, layout, member_select};

/// Everything the `/booksAndOrders` page renders, fetched concurrently.
pub struct LineItemsPage {
    pub items: Vec<LineItemDetail>,
    pub orders: Vec<OrderSummary>,
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub coupons: Vec<Coupon>,
}

/// `GET /booksAndOrders`
pub fn line_items_page(page: &LineItemsPage) -> Markup {
    layout(
        "Books & Orders",
        html! {
            table {
                thead {
                    tr {
                        th { "ID" } th { "Order" } th { "Member" } th { "ISBN" } th { "Title" }
                        th { "Qty" } th { "Line Total" } th { "Order Total" } th {}
                    }
                }
                tbody {
                    @for item in &page.items {
                        tr {
                            td { (item.line_item_id) }
                            td { "#" (item.order_id) }
                            td { (item.member_name) }
                            td { (item.isbn) }
                            td { (item.title) }
                            td { (item.quantity) }
                            td {
                                @match item.line_total() {
                                    Some(total) => (total.to_string()),
                                    None => "n/a",
                                }
                            }
                            td { (item.order_total().to_string()) }
                            td {
                                button type="button" data-delete-line-item=(item.line_item_id) { "Delete" }
                            }
                        }
                    }
                }
            }

            h2 { "New Order" }
            form method="post" action="/booksAndOrders/new-order" {
                label { "Member " (member_select("memberIDInput", &page.members)) }
                label { "Coupon " (coupon_select("couponIDInput", &page.coupons)) }
                label { "Book " (book_select("isbnInput", &page.books)) }
                label { "Quantity " input type="number" name="quantityInput" min="1" max="999" value="1" required; }
                label {
                    "Total (blank to compute) "
                    input type="text" name="totalPriceInput" inputmode="decimal";
                }
                button type="submit" { "Create Order" }
            }

            h2 { "Add Book to Existing Order" }
            form method="post" action="/booksAndOrders/existing-order" {
                label {
                    "Order "
                    select name="orderIDInput" required {
                        option value="" { "Select an order" }
                        @for order in &page.orders {
                            option value=(order.order_id) { "#" (order.order_id) " (" (order.member_name) ")" }
                        }
                    }
                }
                label { "Book " (book_select("isbnInput", &page.books)) }
                label { "Quantity " input type="number" name="quantityInput" min="1" max="999" value="1" required; }
                button type="submit" { "Add to Order" }
            }
        },
    )
}
