use bookstore_core::{Coupon, Member, OrderSummary};
use maud::{html, Markup};

use super::{coupon_select, layout, member_select};

/// `GET /orders`. `coupons` are the ones offered in the pickers.
pub fn orders_page(orders: &[OrderSummary], members: &[Member], coupons: &[Coupon]) -> Markup {
    let order_select = |name: &str| {
        html! {
            select name=(name) required {
                option value="" { "Select an order" }
                @for order in orders {
                    option value=(order.order_id) { "#" (order.order_id) " (" (order.member_name) ")" }
                }
            }
        }
    };

    layout(
        "Orders",
        html! {
            table {
                thead {
                    tr { th { "ID" } th { "Member" } th { "Coupon" } th { "Items" } th { "Total" } }
                }
                tbody {
                    @for order in orders {
                        tr {
                            td { (order.order_id) }
                            td { (order.member_name) }
                            td {
                                @if let Some(coupon_id) = order.coupon_id { "#" (coupon_id) }
                            }
                            td { (order.item_count) }
                            td { (order.total_price().to_string()) }
                        }
                    }
                }
            }

            h2 { "Add Order" }
            form method="post" action="/add-order-form" {
                label { "Member " (member_select("memberIDInput", members)) }
                label { "Coupon " (coupon_select("couponIDInput", coupons)) }
                label { "Total " input type="text" name="totalPriceInput" inputmode="decimal" required; }
                button type="submit" { "Add" }
            }

            h2 { "Update Order" }
            form method="post" action="/orders/update" {
                label { "Order " (order_select("orderIDInput")) }
                label { "Coupon " (coupon_select("couponIDInput", coupons)) }
                label { "Total " input type="text" name="totalPriceInput" inputmode="decimal" required; }
                button type="submit" { "Update" }
            }

            h2 { "Delete Order" }
            form method="post" action="/orders/delete" {
                label { "Order " (order_select("delete_order_id")) }
                button type="submit" { "Delete" }
            }
        },
    )
}
