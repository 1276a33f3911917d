//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let http = MockApi::new().with_sign_in().build();
//! let mut app = started_app(&http, &InMemorySessionStorage::new()).await;
//! ```

pub mod mocks;

pub use mocks::*;

use gobarber::api::ApiClient;
use gobarber::app::App;
use gobarber::auth::Session;
use gobarber::models::User;
use std::sync::Arc;

/// Base URL every test client talks to.
pub const API_URL: &str = "http://api.test";

pub fn test_user() -> User {
    User {
        id: "user-1".to_string(),
        name: "Ana Lima".to_string(),
        email: "ana@example.com".to_string(),
        avatar_url: None,
    }
}

#[allow(dead_code)]
pub fn test_session() -> Session {
    Session::new(test_user(), "persisted-token")
}

/// An app over the given mocks, not started yet.
pub fn test_app(http: &MockHttpClient, storage: &InMemorySessionStorage) -> App {
    let api = ApiClient::new(API_URL, Arc::new(http.clone()));
    App::new(api, Arc::new(storage.clone()))
}

/// An app over the given mocks with its session restored.
pub async fn started_app(http: &MockHttpClient, storage: &InMemorySessionStorage) -> App {
    let mut app = test_app(http, storage);
    app.start().await;
    app
}
