//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `gobarber::adapters::mock` and adds a builder
//! for the API responses a scenario needs.

pub use gobarber::adapters::mock::{InMemorySessionStorage, MockHttpClient, MockResponse};
pub use gobarber::traits::{HttpError, Response};

use serde_json::{json, Value};

use super::{test_user, API_URL};

/// Configures a [`MockHttpClient`] endpoint by endpoint.
pub struct MockApi {
    client: MockHttpClient,
}

impl MockApi {
    /// Every unmatched URL answers `200 []`, so screens can mount.
    pub fn new() -> Self {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::json(200, json!([])));
        Self { client }
    }

    /// Configures a JSON response for `path` (relative to the API root).
    pub fn with_json(self, path: &str, status: u16, body: Value) -> Self {
        self.client
            .set_response(&format!("{}/{}", API_URL, path), MockResponse::json(status, body));
        self
    }

    /// Configures a transport error for `path`.
    #[allow(dead_code)]
    pub fn with_error(self, path: &str, error: HttpError) -> Self {
        self.client
            .set_response(&format!("{}/{}", API_URL, path), MockResponse::Error(error));
        self
    }

    /// `POST /sessions` accepts and returns the test user.
    pub fn with_sign_in(self) -> Self {
        self.with_json("sessions", 200, json!({"user": test_user(), "token": "test-token"}))
    }

    #[allow(dead_code)]
    pub fn with_providers(self) -> Self {
        self.with_json(
            "providers",
            200,
            json!([
                {"id": "provider-1", "name": "Carla Souza", "avatarURL": "http://localhost:3333/files/carla.jpg"},
                {"id": "provider-2", "name": "Davi Lima"}
            ]),
        )
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}
