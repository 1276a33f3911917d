//! Booking API client.
//!
//! One [`ApiClient`] is configured at startup with the base URL and shared by
//! every screen. It attaches the current bearer token to each request and
//! never retries: a call resolves with the decoded body or fails with a
//! [`NetworkError`](crate::error::NetworkError).

pub mod client;
pub mod types;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use types::{NewUser, PasswordChange, ProfileUpdate, SessionResponse, SignInRequest};
