//! The storefront store: state tree, reducer entry point and action log.

use bookstore_core::types::DbId;
use bookstore_db::models::book::{Book, CreateBook, UpdateBook};

use crate::action::{Action, Phase};
use crate::api::CatalogApi;
use crate::error::ClientError;
use crate::state::BookState;

/// Owns the client state for one application instance.
///
/// Remote operations run in three phases (issued, then succeeded or failed),
/// each recorded as a dispatched [`Action`]. Failures are stored in the
/// state and returned to the caller; nothing is retried.
pub struct BookStore<A> {
    api: A,
    state: BookState,
    log: Vec<Action>,
}

impl<A: CatalogApi> BookStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: BookState::default(),
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &BookState {
        &self.state
    }

    /// Every action dispatched so far, oldest first.
    pub fn actions(&self) -> &[Action] {
        &self.log
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Apply `action` and append it to the log.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "Dispatching action");
        self.state.reduce(&action);
        self.log.push(action);
    }

    /// Replace the local book list with the service's.
    pub async fn fetch_books(&mut self) -> Result<(), ClientError> {
        self.dispatch(Action::FetchBooks(Phase::Issued));
        match self.api.list_books().await {
            Ok(books) => {
                self.dispatch(Action::FetchBooks(Phase::Succeeded(books)));
                Ok(())
            }
            Err(err) => {
                self.fail(Action::FetchBooks(Phase::Failed(err.to_string())), &err);
                Err(err)
            }
        }
    }

    /// Create a book on the service and append the stored record locally.
    pub async fn add_book(&mut self, input: &CreateBook) -> Result<Book, ClientError> {
        self.dispatch(Action::AddBook(Phase::Issued));
        match self.api.create_book(input).await {
            Ok(book) => {
                self.dispatch(Action::AddBook(Phase::Succeeded(book.clone())));
                Ok(book)
            }
            Err(err) => {
                self.fail(Action::AddBook(Phase::Failed(err.to_string())), &err);
                Err(err)
            }
        }
    }

    /// Update a book on the service and replace the local copy with the
    /// record the service returned.
    pub async fn update_book(
        &mut self,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Book, ClientError> {
        self.dispatch(Action::UpdateBook(Phase::Issued));
        match self.api.update_book(id, input).await {
            Ok(book) => {
                self.dispatch(Action::UpdateBook(Phase::Succeeded(book.clone())));
                Ok(book)
            }
            Err(err) => {
                self.fail(Action::UpdateBook(Phase::Failed(err.to_string())), &err);
                Err(err)
            }
        }
    }

    /// Delete a book on the service, then drop it from the book list, the
    /// cart and the favorites.
    pub async fn delete_book(&mut self, id: DbId) -> Result<(), ClientError> {
        self.dispatch(Action::DeleteBook(Phase::Issued));
        match self.api.delete_book(id).await {
            Ok(()) => {
                self.dispatch(Action::DeleteBook(Phase::Succeeded(id)));
                Ok(())
            }
            Err(err) => {
                self.fail(Action::DeleteBook(Phase::Failed(err.to_string())), &err);
                Err(err)
            }
        }
    }

    pub fn toggle_favorite(&mut self, id: DbId) {
        self.dispatch(Action::ToggleFavorite(id));
    }

    pub fn add_to_cart(&mut self, book: Book) {
        self.dispatch(Action::AddToCart(book));
    }

    pub fn remove_from_cart(&mut self, id: DbId) {
        self.dispatch(Action::RemoveFromCart(id));
    }

    pub fn increase_quantity(&mut self, id: DbId) {
        self.dispatch(Action::IncreaseQuantity(id));
    }

    pub fn decrease_quantity(&mut self, id: DbId) {
        self.dispatch(Action::DecreaseQuantity(id));
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(Action::ClearCart);
    }

    fn fail(&mut self, action: Action, err: &ClientError) {
        tracing::warn!(action = action.name(), error = %err, "Catalog request failed");
        self.dispatch(action);
    }
}
