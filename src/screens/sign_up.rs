//! Sign-up screen.

use crate::api::{ApiClient, NewUser};
use crate::error::BookingResult;
use crate::form::{Form, Rule, Schema};

use super::{form_failure, Alert, Outcome};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

fn schema() -> Schema {
    Schema::new()
        .field(NAME, [Rule::required("Name is required")])
        .field(
            EMAIL,
            [
                Rule::required("Email is required"),
                Rule::email("Enter a valid email"),
            ],
        )
        .field(
            PASSWORD,
            [Rule::min_length(MIN_PASSWORD_LEN, "At least 6 characters")],
        )
}

#[derive(Debug, Clone)]
pub struct SignUpScreen {
    form: Form,
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self {
            form: Form::with_fields([NAME, EMAIL, PASSWORD]),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Validate and register the account, then return to sign-in.
    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        match self.try_submit(api).await {
            Ok(()) => Outcome::back().with_alert(Alert::with_message(
                "Account created",
                "You can now sign in",
            )),
            Err(err) => form_failure(
                &mut self.form,
                err,
                Alert::with_message(
                    "Sign-up error",
                    "Could not create your account. Try again.",
                ),
            ),
        }
    }

    async fn try_submit(&mut self, api: &ApiClient) -> BookingResult<()> {
        self.form.submit(&schema())?;
        let user = NewUser {
            name: self.form.value(NAME).to_string(),
            email: self.form.value(EMAIL).to_string(),
            password: self.form.value(PASSWORD).to_string(),
        };
        api.register_user(&user).await?;
        Ok(())
    }

    pub fn back_to_sign_in(&self) -> Outcome {
        Outcome::back()
    }
}
