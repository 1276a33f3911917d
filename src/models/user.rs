//! Signed-in user identity as returned by the booking API.

use serde::{Deserialize, Serialize};

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Public URL of the avatar image, if one was uploaded.
    #[serde(
        default,
        rename = "avatarURL",
        alias = "avatar_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}

/// Partial update merged into the current [`User`].
///
/// `None` leaves the field untouched. The avatar is doubly optional so a
/// patch can distinguish "keep" from "remove".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<Option<String>>,
}

impl UserPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = Some(avatar_url);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.avatar_url.is_none()
    }
}

impl From<User> for UserPatch {
    /// Every field of a server-returned user replaces the local one.
    fn from(user: User) -> Self {
        Self {
            name: Some(user.name),
            email: Some(user.email),
            avatar_url: Some(user.avatar_url),
        }
    }
}

impl User {
    /// Merge a patch into this user. The id never changes.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(avatar_url) = patch.avatar_url {
            self.avatar_url = avatar_url;
        }
    }
}
