//! Session store: the one piece of state shared by every screen.
//!
//! Every mutation is written to [`SessionStorage`] before it becomes visible
//! in memory, so a failed write leaves the previous state intact and a
//! successful one survives a restart.

use std::sync::Arc;
use tracing::{info, warn};

use super::session::Session;
use crate::api::ApiClient;
use crate::error::{AuthError, BookingError, BookingResult, NetworkError};
use crate::models::{User, UserPatch};
use crate::traits::SessionStorage;

/// Holds the signed-in identity and keeps the API client's bearer token in
/// step with it.
pub struct SessionStore {
    api: ApiClient,
    storage: Arc<dyn SessionStorage>,
    session: Option<Session>,
    loading: bool,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.session.as_ref().map(|s| &s.user.id))
            .field("loading", &self.loading)
            .finish()
    }
}

impl SessionStore {
    /// A store that has not been restored yet. [`is_loading`](Self::is_loading)
    /// stays true until [`restore`](Self::restore) completes.
    pub fn new(api: ApiClient, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            api,
            storage,
            session: None,
            loading: true,
        }
    }

    /// Load a previously persisted session.
    ///
    /// A storage failure is treated as "signed out" and only logged.
    pub async fn restore(&mut self) {
        self.loading = true;
        match self.storage.load().await {
            Ok(Some(session)) => {
                info!("Restored session for {}", session.user.email);
                self.commit(Some(session));
            }
            Ok(None) => self.commit(None),
            Err(e) => {
                warn!("Could not restore session, starting signed out: {}", e);
                self.commit(None);
            }
        }
        self.loading = false;
    }

    /// Exchange credentials for a session and persist it.
    ///
    /// A 4xx answer becomes [`AuthError::InvalidCredentials`]; anything else
    /// surfaces as the underlying network error. On failure the current
    /// session is unchanged.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> BookingResult<()> {
        let response = self
            .api
            .authenticate(email, password)
            .await
            .map_err(|err| -> BookingError {
                if !err.is_client_status() {
                    return err.into();
                }
                match err {
                    NetworkError::HttpStatus { message, .. } => {
                        AuthError::InvalidCredentials { message }.into()
                    }
                    other => other.into(),
                }
            })?;

        let session = Session::new(response.user, response.token);
        self.storage.save(&session).await?;
        info!("Signed in as {}", session.user.email);
        self.commit(Some(session));
        Ok(())
    }

    /// Forget the session. Always succeeds; a storage failure is logged.
    pub async fn sign_out(&mut self) {
        if let Err(e) = self.storage.clear().await {
            warn!("Failed to clear persisted session: {}", e);
        }
        if let Some(session) = &self.session {
            info!("Signed out {}", session.user.email);
        }
        self.commit(None);
    }

    /// Merge `patch` into the current user and persist the result.
    pub async fn update_user(&mut self, patch: UserPatch) -> BookingResult<()> {
        let mut updated = self
            .session
            .clone()
            .ok_or(AuthError::NotAuthenticated)?;
        updated.user.apply(patch);
        self.storage.save(&updated).await?;
        self.session = Some(updated);
        Ok(())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The client every screen calls the API through.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn commit(&mut self, session: Option<Session>) {
        self.api
            .set_auth_token(session.as_ref().map(|s| s.token.clone()));
        self.session = session;
    }
}
