use serde::{Deserialize, Serialize};

/// A bookable service professional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        rename = "avatarURL",
        alias = "avatar_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}
