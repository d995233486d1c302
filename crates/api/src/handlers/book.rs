//! Handlers for the `/books` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use bookstore_core::book::{validate_bookname, validate_image_url, validate_isbn, validate_price};
use bookstore_core::error::CoreError;
use bookstore_core::types::DbId;
use bookstore_db::models::book::{Book, CreateBook, UpdateBook};
use bookstore_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Book";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

fn validate_create(input: &CreateBook) -> Result<(), CoreError> {
    validate_bookname(&input.bookname)?;
    validate_isbn(&input.isbn)?;
    validate_price(input.price)?;
    validate_image_url(input.image_url.as_deref())
}

fn validate_update(input: &UpdateBook) -> Result<(), CoreError> {
    if let Some(bookname) = &input.bookname {
        validate_bookname(bookname)?;
    }
    if let Some(isbn) = &input.isbn {
        validate_isbn(isbn)?;
    }
    if let Some(price) = input.price {
        validate_price(price)?;
    }
    validate_image_url(input.image_url.as_deref())
}

/// POST /books
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateBook>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let Json(input) = payload?;
    validate_create(&input)?;

    let book = BookRepo::create(&state.pool, &input).await?;
    tracing::info!(book_id = book.id, bookname = %book.bookname, "Book created");
    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /books
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Book>> {
    let Path(id) = path?;
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(book))
}

/// PUT /books/{id}
///
/// Applies only the supplied fields and returns the row as stored.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateBook>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    validate_update(&input)?;

    let book = BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(book_id = id, "Book updated");
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    if BookRepo::delete(&state.pool, id).await? {
        tracing::info!(book_id = id, "Book deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
