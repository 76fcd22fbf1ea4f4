use bookstore_core::Coupon;
use maud::{html, Markup};

use super::layout;

/// `GET /coupons`
pub fn coupons_page(coupons: &[Coupon]) -> Markup {
    let select = |name: &str| {
        html! {
            select name=(name) required {
                option value="" { "Select a coupon" }
                @for coupon in coupons {
                    option value=(coupon.coupon_id) { "#" (coupon.coupon_id) }
                }
            }
        }
    };

    layout(
        "Coupons",
        html! {
            table {
                thead {
                    tr { th { "ID" } th { "Discount" } th { "Expires" } }
                }
                tbody {
                    @for coupon in coupons {
                        tr {
                            td { (coupon.coupon_id) }
                            td { (coupon.discount().to_string()) }
                            td { (coupon.expiration_date.to_string()) }
                        }
                    }
                }
            }

            h2 { "Add Coupon" }
            form method="post" action="/add-coupon-form" {
                label { "Discount " input type="text" name="couponDiscountInput" inputmode="decimal" placeholder="5.00" required; }
                label { "Expires " input type="date" name="expirationDateInput" required; }
                button type="submit" { "Add" }
            }

            h2 { "Update Coupon Expiration" }
            form method="post" action="/coupons/update" {
                label { "Coupon " (select("couponIDInput")) }
                label { "Expires " input type="date" name="expirationDateInput" required; }
                button type="submit" { "Update" }
            }

            h2 { "Delete Coupon" }
            form method="post" action="/coupons/delete" {
                label { "Coupon " (select("delete_coupon_id")) }
                button type="submit" { "Delete" }
            }
        },
    )
}
