//! End-to-end tests: `CatalogClient` + `BookStore` against the real API
//! router served on an ephemeral port.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::PgPool;

use bookstore_api::config::{DatabaseConfig, ServerConfig};
use bookstore_api::router::build_app_router;
use bookstore_api::state::AppState;
use bookstore_client::{BookStore, CatalogApi, CatalogClient, ClientError};
use bookstore_db::models::book::{CreateBook, UpdateBook};

async fn spawn_server(pool: PgPool) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            password: String::new(),
            name: "bookstore_test".to_string(),
        },
    };
    let app = build_app_router(AppState { pool }, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn dune() -> CreateBook {
    CreateBook {
        bookname: "Dune".to_string(),
        isbn: "12345".to_string(),
        price: Decimal::from_str("9.99").unwrap(),
        image_url: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_list_delete_scenario(pool: PgPool) {
    let client = CatalogClient::new(spawn_server(pool).await);

    let created = client.create_book(&dune()).await.unwrap();
    assert_eq!(created.bookname, "Dune");
    assert_eq!(created.price, Decimal::from_str("9.99").unwrap());

    let fetched = client.get_book(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let books = client.list_books().await.unwrap();
    assert_eq!(books, vec![created.clone()]);

    client.delete_book(created.id).await.unwrap();
    assert!(client.list_books().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn not_found_surfaces_server_message(pool: PgPool) {
    let client = CatalogClient::new(spawn_server(pool).await);

    let err = client
        .update_book(777, &UpdateBook::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Catalog API error (404): Book with id 777 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn validation_failure_is_reported_as_api_error(pool: PgPool) {
    let client = CatalogClient::new(spawn_server(pool).await);

    let input = CreateBook {
        price: Decimal::from_str("-3").unwrap(),
        ..dune()
    };
    let err = client.create_book(&input).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("negative"), "unexpected message: {message}");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_clears_server_cart_and_favorites(pool: PgPool) {
    let base_url = spawn_server(pool.clone()).await;
    let mut store = BookStore::new(CatalogClient::new(base_url));

    let book = store.add_book(&dune()).await.unwrap();
    store.add_to_cart(book.clone());
    store.toggle_favorite(book.id);

    store.delete_book(book.id).await.unwrap();

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books WHERE id = $1")
        .bind(book.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    assert!(!store.state().cart.contains(book.id));
    assert!(!store.state().is_favorite(book.id));
    assert!(store.state().books.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn full_replacement_update_from_local_copy(pool: PgPool) {
    let mut store = BookStore::new(CatalogClient::new(spawn_server(pool).await));
    store.add_book(&dune()).await.unwrap();
    store.fetch_books().await.unwrap();

    let mut edited = store.state().books[0].clone();
    edited.bookname = "Dune Messiah".to_string();
    edited.price = Decimal::from_str("10.99").unwrap();

    let updated = store
        .update_book(edited.id, &UpdateBook::from(&edited))
        .await
        .unwrap();

    assert_eq!(updated.bookname, "Dune Messiah");
    assert_eq!(updated.price, Decimal::from_str("10.99").unwrap());
    assert_eq!(store.state().books, vec![updated]);
}
