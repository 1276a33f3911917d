//! Sign-in screen.

use crate::auth::SessionStore;
use crate::error::BookingResult;
use crate::form::{Form, Rule, Schema};
use crate::navigation::Route;

use super::{form_failure, Alert, Outcome};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

fn schema() -> Schema {
    Schema::new()
        .field(
            EMAIL,
            [
                Rule::required("Email is required"),
                Rule::email("Enter a valid email"),
            ],
        )
        .field(PASSWORD, [Rule::required("Password is required")])
}

fn error_alert() -> Alert {
    Alert::with_message(
        "Authentication error",
        "Could not sign in. Check your details and try again.",
    )
}

#[derive(Debug, Clone)]
pub struct SignInScreen {
    form: Form,
}

impl Default for SignInScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInScreen {
    pub fn new() -> Self {
        Self {
            form: Form::with_fields([EMAIL, PASSWORD]),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Validate the form and sign in.
    ///
    /// On success the session store holds the new user; the app swaps to the
    /// signed-in stack on its own.
    pub async fn submit(&mut self, session: &mut SessionStore) -> Outcome {
        match self.try_submit(session).await {
            Ok(()) => Outcome::none(),
            Err(err) => form_failure(&mut self.form, err, error_alert()),
        }
    }

    async fn try_submit(&mut self, session: &mut SessionStore) -> BookingResult<()> {
        self.form.submit(&schema())?;
        session
            .sign_in(self.form.value(EMAIL), self.form.value(PASSWORD))
            .await
    }

    pub fn create_account(&self) -> Outcome {
        Outcome::push(Route::SignUp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStorage, MockHttpClient, MockResponse};
    use crate::api::ApiClient;
    use crate::navigation::NavAction;
    use serde_json::json;
    use std::sync::Arc;

    fn store(http: &MockHttpClient) -> SessionStore {
        let api = ApiClient::new("http://api.test", Arc::new(http.clone()));
        SessionStore::new(api, Arc::new(InMemorySessionStorage::new()))
    }

    #[tokio::test]
    async fn test_empty_form_reports_every_field() {
        let http = MockHttpClient::new();
        let mut session = store(&http);
        let mut screen = SignInScreen::new();

        let outcome = screen.submit(&mut session).await;

        assert_eq!(outcome, Outcome::none());
        assert_eq!(screen.form().error(EMAIL), Some("Email is required"));
        assert_eq!(screen.form().error(PASSWORD), Some("Password is required"));
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_credentials_alert() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/sessions",
            MockResponse::json(401, json!({"message": "Incorrect email/password combination."})),
        );
        let mut session = store(&http);
        let mut screen = SignInScreen::new();
        screen.form_mut().set_value(EMAIL, "ana@example.com");
        screen.form_mut().set_value(PASSWORD, "wrong");

        let outcome = screen.submit(&mut session).await;

        assert_eq!(outcome.alert, Some(error_alert()));
        assert!(!screen.form().has_errors());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_create_account_pushes_sign_up() {
        let screen = SignInScreen::new();
        assert_eq!(
            screen.create_account().navigation,
            Some(NavAction::Push(Route::SignUp))
        );
    }
}
