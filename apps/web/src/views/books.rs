use bookstore_core::Book;
use maud::{html, Markup};

use super::{book_select, date_text, layout};

/// `GET /books`
pub fn books_page(books: &[Book]) -> Markup {
    layout(
        "Books",
        html! {
            table {
                thead {
                    tr {
                        th { "ISBN" } th { "Title" } th { "Author" } th { "Publisher" }
                        th { "Published" } th { "Genre" } th { "Cost" }
                    }
                }
                tbody {
                    @for book in books {
                        tr {
                            td { (book.isbn) }
                            td { (book.title) }
                            td { (book.author) }
                            td { (book.publisher.as_deref().unwrap_or("")) }
                            td { (date_text(book.published_date)) }
                            td { (book.genre) }
                            td { (book.cost().to_string()) }
                        }
                    }
                }
            }

            h2 { "Add Book" }
            form method="post" action="/books" {
                label { "ISBN " input type="text" name="isbnInput" required; }
                (book_fields())
                button type="submit" { "Add" }
            }

            h2 { "Update Book" }
            form method="post" action="/books/update" {
                label { "Book " (book_select("isbnInput", books)) }
                (book_fields())
                button type="submit" { "Update" }
            }

            h2 { "Delete Book" }
            form method="post" action="/books/delete" {
                label { "Book " (book_select("isbnInput", books)) }
                button type="submit" { "Delete" }
            }
        },
    )
}

/// Inputs shared by the add and update forms.
fn book_fields() -> Markup {
    html! {
        label { "Title " input type="text" name="titleInput" required; }
        label { "Author " input type="text" name="authorInput" required; }
        label { "Publisher " input type="text" name="publisherInput"; }
        label { "Published " input type="date" name="publishedDateInput"; }
        label { "Genre " input type="text" name="genreInput" required; }
        label { "Cost " input type="text" name="costInput" inputmode="decimal" placeholder="12.50" required; }
    }
}
