//! Storefront state container for the bookstore catalog.
//!
//! [`BookStore`] owns the client-side state tree: a mirror of the server's
//! books, the status of the last remote operation, the favorites set and the
//! shopping cart. Every change goes through [`BookStore::dispatch`], which
//! applies the reducer and appends the action to an in-memory log.
//!
//! Only book data is synchronised with the catalog service (through a
//! [`CatalogApi`] implementation such as [`CatalogClient`]). Cart and
//! favorites live for the lifetime of the store and are never persisted.

pub mod action;
pub mod api;
pub mod cart;
pub mod error;
pub mod favorites;
pub mod state;
pub mod store;

pub use action::{Action, Phase};
pub use api::{CatalogApi, CatalogClient};
pub use cart::{Cart, CartItem};
pub use error::ClientError;
pub use favorites::Favorites;
pub use state::{BookState, RemoteOp, RemoteStatus};
pub use store::BookStore;
