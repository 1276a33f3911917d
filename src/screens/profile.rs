//! Profile screen: edit name, email, password and avatar.

use bytes::Bytes;
use tracing::{info, warn};

use crate::api::{PasswordChange, ProfileUpdate};
use crate::auth::SessionStore;
use crate::error::{AuthError, BookingResult};
use crate::form::{Form, Rule, Schema};
use crate::models::{User, UserPatch};
use crate::traits::MultipartFile;

use super::{failure, form_failure, Alert, Outcome};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const OLD_PASSWORD: &str = "old_password";
pub const PASSWORD: &str = "password";
pub const PASSWORD_CONFIRMATION: &str = "password_confirmation";

/// Multipart field the avatar is uploaded under.
pub const AVATAR_FIELD: &str = "avatar";

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
        .field(OLD_PASSWORD, Vec::<Rule>::new())
        .field(PASSWORD, [Rule::required_if(OLD_PASSWORD, "Required field")])
        .field(
            PASSWORD_CONFIRMATION,
            [
                Rule::required_if(OLD_PASSWORD, "Required field"),
                Rule::matches(PASSWORD, "Confirmation does not match"),
            ],
        )
}

/// Result of the platform image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarPick {
    /// The user closed the picker.
    Cancelled,
    /// The picker reported an error.
    Failed(String),
    /// A JPEG photo.
    Photo(Bytes),
}

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    form: Form,
    avatar_url: Option<String>,
}

impl ProfileScreen {
    /// Form prefilled with the user's name and email.
    pub fn new(user: Option<&User>) -> Self {
        let mut form = Form::with_fields([NAME, EMAIL, OLD_PASSWORD, PASSWORD, PASSWORD_CONFIRMATION]);
        if let Some(user) = user {
            form.set_initial_data([(NAME, user.name.as_str()), (EMAIL, user.email.as_str())]);
        }
        Self {
            form,
            avatar_url: user.and_then(|u| u.avatar_url.clone()),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Validate, send the update and merge the returned user into the
    /// session.
    pub async fn submit(&mut self, session: &mut SessionStore) -> Outcome {
        match self.try_submit(session).await {
            Ok(()) => Outcome::back().with_alert(Alert::new("Profile updated")),
            Err(err) => form_failure(&mut self.form, err, Alert::new("Could not update your profile")),
        }
    }

    async fn try_submit(&mut self, session: &mut SessionStore) -> BookingResult<()> {
        self.form.submit(&schema())?;

        let update = self.update();
        let user = session.api().update_profile(&update).await?;
        info!("Profile of {} updated", user.email);
        session.update_user(UserPatch::from(user)).await
    }

    fn update(&self) -> ProfileUpdate {
        let old_password = self.form.value(OLD_PASSWORD);
        let password_change = (!old_password.is_empty()).then(|| PasswordChange {
            old_password: old_password.to_string(),
            password: self.form.value(PASSWORD).to_string(),
            password_confirmation: self.form.value(PASSWORD_CONFIRMATION).to_string(),
        });
        ProfileUpdate {
            name: self.form.value(NAME).to_string(),
            email: self.form.value(EMAIL).to_string(),
            password_change,
        }
    }

    /// Upload a freshly picked avatar.
    pub async fn update_avatar(&mut self, session: &mut SessionStore, pick: AvatarPick) -> Outcome {
        let bytes = match pick {
            AvatarPick::Cancelled => return Outcome::none(),
            AvatarPick::Failed(reason) => {
                warn!("Image picker failed: {}", reason);
                return Outcome::alert(Alert::new("Could not update your avatar"));
            }
            AvatarPick::Photo(bytes) => bytes,
        };

        match Self::upload(session, bytes).await {
            Ok(avatar_url) => {
                self.avatar_url = avatar_url;
                Outcome::none()
            }
            Err(err) => failure(err, Alert::new("Could not update avatar")),
        }
    }

    async fn upload(session: &mut SessionStore, bytes: Bytes) -> BookingResult<Option<String>> {
        let user_id = session
            .user()
            .map(|u| u.id.clone())
            .ok_or(AuthError::NotAuthenticated)?;
        let file = MultipartFile {
            field: AVATAR_FIELD.to_string(),
            file_name: format!("{}.jpg", user_id),
            content_type: "image/jpeg".to_string(),
            bytes,
        };

        let user = session.api().update_avatar(file).await?;
        let avatar_url = user.avatar_url.clone();
        session.update_user(UserPatch::from(user)).await?;
        Ok(avatar_url)
    }

    pub fn go_back(&self) -> Outcome {
        Outcome::back()
    }
}
