use bookstore_core::Member;
use maud::{html, Markup};

use super::{layout, member_select};

/// `GET /members`: listing plus add / update / delete forms.
pub fn members_page(members: &[Member]) -> Markup {
    layout(
        "Members",
        html! {
            table {
                thead {
                    tr { th { "ID" } th { "First Name" } th { "Last Name" } th { "Phone" } th { "Email" } }
                }
                tbody {
                    @for member in members {
                        tr {
                            td { (member.member_id) }
                            td { (member.first_name) }
                            td { (member.last_name) }
                            td { (member.phone_number) }
                            td { (member.email) }
                        }
                    }
                }
            }

            h2 { "Add Member" }
            form method="post" action="/members" {
                label { "First name " input type="text" name="fNameInput" required; }
                label { "Last name " input type="text" name="lNameInput" required; }
                label { "Phone " input type="tel" name="phoneInput" required; }
                label { "Email " input type="email" name="emailInput" required; }
                button type="submit" { "Add" }
            }

            h2 { "Update Member" }
            form method="post" action="/members/update" {
                label { "Member " (member_select("update_member_id", members)) }
                label { "First name " input type="text" name="update_member_firstName" required; }
                label { "Last name " input type="text" name="update_member_lastName" required; }
                label { "Phone " input type="tel" name="update_member_phoneNumber" required; }
                label { "Email " input type="email" name="update_member_email" required; }
                button type="submit" { "Update" }
            }

            h2 { "Delete Member" }
            form method="post" action="/members/delete" {
                label { "Member " (member_select("delete_member_id", members)) }
                button type="submit" { "Delete" }
            }
        },
    )
}
