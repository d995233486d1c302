//! Actions accepted by [`BookStore::dispatch`](crate::BookStore::dispatch).

use bookstore_core::types::DbId;
use bookstore_db::models::book::Book;

/// Lifecycle of a single remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    /// The request was sent.
    Issued,
    /// The service answered successfully with this payload.
    Succeeded(T),
    /// The request failed with this message.
    Failed(String),
}

/// Every state change the store knows about.
///
/// The first four variants track remote calls; the rest are local-only and
/// never touch the network.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchBooks(Phase<Vec<Book>>),
    AddBook(Phase<Book>),
    UpdateBook(Phase<Book>),
    /// Carries the id that was deleted on success.
    DeleteBook(Phase<DbId>),

    ToggleFavorite(DbId),
    AddToCart(Book),
    RemoveFromCart(DbId),
    IncreaseQuantity(DbId),
    DecreaseQuantity(DbId),
    ClearCart,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::FetchBooks(_) => "fetch_books",
            Action::AddBook(_) => "add_book",
            Action::UpdateBook(_) => "update_book",
            Action::DeleteBook(_) => "delete_book",
            Action::ToggleFavorite(_) => "toggle_favorite",
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveFromCart(_) => "remove_from_cart",
            Action::IncreaseQuantity(_) => "increase_quantity",
            Action::DecreaseQuantity(_) => "decrease_quantity",
            Action::ClearCart => "clear_cart",
        }
    }
}
