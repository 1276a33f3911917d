//! Request and response bodies of the booking API.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /sessions`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub user: User,
    pub token: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Password change fields of `PUT /profile`; only sent together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Body of `PUT /profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub password_change: Option<PasswordChange>,
}

/// Profile and avatar endpoints answer either `{ "user": {...} }` or the
/// bare user object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum UserEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl From<UserEnvelope> for User {
    fn from(envelope: UserEnvelope) -> Self {
        match envelope {
            UserEnvelope::Wrapped { user } | UserEnvelope::Bare(user) => user,
        }
    }
}

/// Error body of the API: `{ "status": "error", "message": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_without_password() {
        let body = ProfileUpdate {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_change: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"name": "Ana", "email": "ana@example.com"})
        );
    }

    #[test]
    fn test_profile_update_with_password_is_flattened() {
        let body = ProfileUpdate {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_change: Some(PasswordChange {
                old_password: "old".to_string(),
                password: "new-secret".to_string(),
                password_confirmation: "new-secret".to_string(),
            }),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "oldPassword": "old",
                "password": "new-secret",
                "passwordConfirmation": "new-secret"
            })
        );
    }

    #[test]
    fn test_user_envelope_accepts_both_shapes() {
        let wrapped: UserEnvelope = serde_json::from_str(
            r#"{"user":{"id":"u-1","name":"Ana","email":"ana@example.com"}}"#,
        )
        .unwrap();
        let bare: UserEnvelope =
            serde_json::from_str(r#"{"id":"u-1","name":"Ana","email":"ana@example.com"}"#).unwrap();

        assert_eq!(User::from(wrapped), User::from(bare));
    }
}
