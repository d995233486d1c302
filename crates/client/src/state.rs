//! The client-side state tree and its reducer.

use bookstore_core::types::DbId;
use bookstore_db::models::book::Book;
use rust_decimal::Decimal;

use crate::action::{Action, Phase};
use crate::cart::Cart;
use crate::favorites::Favorites;

/// Which remote call a [`RemoteStatus`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    Fetch,
    Add,
    Update,
    Delete,
}

/// Outcome of the most recent remote call.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    Pending(RemoteOp),
    Succeeded(RemoteOp),
    Failed { op: RemoteOp, message: String },
}

impl RemoteStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteStatus::Pending(_))
    }

    /// Failure message of the last call, if it failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteStatus::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Everything the storefront views read from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookState {
    /// Mirror of the service's books, in the order the service listed them.
    pub books: Vec<Book>,
    pub status: RemoteStatus,
    pub favorites: Favorites,
    pub cart: Cart,
}

impl BookState {
    /// Apply `action` to the state.
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::FetchBooks(phase) => {
                self.apply_phase(RemoteOp::Fetch, phase, |state, books| {
                    state.books = books.clone();
                })
            }
            Action::AddBook(phase) => self.apply_phase(RemoteOp::Add, phase, |state, book| {
                state.books.push(book.clone());
            }),
            Action::UpdateBook(phase) => {
                self.apply_phase(RemoteOp::Update, phase, |state, book| {
                    if let Some(existing) = state.books.iter_mut().find(|b| b.id == book.id) {
                        *existing = book.clone();
                    }
                })
            }
            Action::DeleteBook(phase) => {
                self.apply_phase(RemoteOp::Delete, phase, |state, id| {
                    // A deleted book must not linger in the cart or favorites.
                    state.books.retain(|b| b.id != *id);
                    state.cart.remove(*id);
                    state.favorites.remove(*id);
                })
            }

            Action::ToggleFavorite(id) => {
                self.favorites.toggle(*id);
            }
            Action::AddToCart(book) => self.cart.add(book.clone()),
            Action::RemoveFromCart(id) => self.cart.remove(*id),
            Action::IncreaseQuantity(id) => self.cart.increase(*id),
            Action::DecreaseQuantity(id) => self.cart.decrease(*id),
            Action::ClearCart => self.cart.clear(),
        }
    }

    fn apply_phase<T>(
        &mut self,
        op: RemoteOp,
        phase: &Phase<T>,
        merge: impl FnOnce(&mut Self, &T),
    ) {
        match phase {
            Phase::Issued => self.status = RemoteStatus::Pending(op),
            Phase::Succeeded(payload) => {
                merge(self, payload);
                self.status = RemoteStatus::Succeeded(op);
            }
            Phase::Failed(message) => {
                self.status = RemoteStatus::Failed {
                    op,
                    message: message.clone(),
                };
            }
        }
    }

    pub fn book(&self, id: DbId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn is_favorite(&self, id: DbId) -> bool {
        self.favorites.contains(id)
    }

    /// Books currently marked as favorite, in catalog order.
    pub fn favorite_books(&self) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| self.favorites.contains(b.id))
            .collect()
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }
}
