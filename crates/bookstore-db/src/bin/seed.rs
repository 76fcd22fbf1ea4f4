//! # Seed Data Generator
//!
//! Populates the database with sample members, books, coupons and one order
//! for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p bookstore-db --bin seed
//!
//! # Specify database path
//! cargo run -p bookstore-db --bin seed -- --db ./data/bookstore.db
//! ```

use bookstore_core::{BookFields, NewBook, NewCoupon, NewMember, NewOrderWithItem};
use bookstore_db::{Database, DbConfig};
use std::env;

/// (first name, last name, phone, email)
const MEMBERS: &[(&str, &str, &str, &str)] = &[
    ("Ada", "Lovelace", "555-0100", "ada@example.com"),
    ("Alan", "Turing", "555-0101", "alan@example.com"),
    ("Grace", "Hopper", "555-0102", "grace@example.com"),
    ("Edsger", "Dijkstra", "555-0103", "edsger@example.com"),
];

/// (ISBN, title, author, publisher, published date, genre, cost)
const BOOKS: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    ("9780441013593", "Dune", "Frank Herbert", "Ace", "1990-09-01", "Science Fiction", "9.99"),
    ("9780553293357", "Foundation", "Isaac Asimov", "Bantam", "1991-10-01", "Science Fiction", "8.99"),
    ("9780316769488", "The Catcher in the Rye", "J. D. Salinger", "Little, Brown", "", "Fiction", "7.50"),
    ("9780062316097", "Sapiens", "Yuval Noah Harari", "Harper", "2015-02-10", "History", "14.99"),
    ("0306406152", "Calculus Made Easy", "Silvanus P. Thompson", "", "", "Mathematics", "12.00"),
];

/// (discount, expiration date)
const COUPONS: &[(&str, &str)] = &[("2.00", "2026-12-31"), ("5.00", "2027-06-30")];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = "./bookstore.db".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bookstore Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./bookstore.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Bookstore Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.members().count().await? + db.books().count().await?;
    if existing > 0 {
        println!("⚠ Database already has data");
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut member_ids = Vec::with_capacity(MEMBERS.len());
    for &(first, last, phone, email) in MEMBERS {
        let member = NewMember::new(first, last, phone, email)?;
        member_ids.push(db.members().create(&member).await?);
    }
    println!("✓ Created {} members", member_ids.len());

    for &(isbn, title, author, publisher, published, genre, cost) in BOOKS {
        let book = NewBook::new(BookFields {
            isbn,
            title,
            author,
            publisher: Some(publisher),
            published_date: Some(published),
            genre,
            cost,
        })?;
        db.books().create(&book).await?;
    }
    println!("✓ Created {} books", BOOKS.len());

    let mut coupon_ids = Vec::with_capacity(COUPONS.len());
    for &(discount, expires) in COUPONS {
        coupon_ids.push(db.coupons().create(&NewCoupon::new(discount, expires)?).await?);
    }
    println!("✓ Created {} coupons", coupon_ids.len());

    if let (Some(member_id), Some(coupon_id)) = (member_ids.first(), coupon_ids.first()) {
        let order = NewOrderWithItem::new(
            &member_id.to_string(),
            Some(coupon_id.to_string().as_str()),
            BOOKS[0].0,
            "2",
            None,
        )?;
        let created = db.assembly().create_order_with_item(&order).await?;
        println!(
            "✓ Created order {} with line item {}",
            created.order_id, created.line_item_id
        );
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
