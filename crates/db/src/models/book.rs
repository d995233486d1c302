//! Book entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use bookstore_core::types::{DbId, Timestamp};

/// A row from the `books` table.
///
/// `price` travels over JSON as a number and is stored as `NUMERIC(10, 2)`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Book {
    pub id: DbId,
    pub bookname: String,
    /// Serialized as `ISBN`. The storefront has historically rendered this
    /// value under an "Author" label, so it may hold an author name rather
    /// than an ISBN. The name is kept for wire compatibility.
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    pub bookname: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// DTO for updating an existing book. All fields are optional.
///
/// Unknown keys (such as an `id` echoed back by a client) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookname: Option<String>,
    #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Book> for UpdateBook {
    /// Full replacement patch carrying every editable field of `book`.
    fn from(book: &Book) -> Self {
        Self {
            bookname: Some(book.bookname.clone()),
            isbn: Some(book.isbn.clone()),
            price: Some(book.price),
            image_url: book.image_url.clone(),
        }
    }
}
