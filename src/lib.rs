pub mod non_api_structs;

use serde::{Deserialize, Serialize};

/// Base of the fallback avatar service, keyed by user id.
pub const AVATAR_PLACEHOLDER_BASE: &str = "https://i.pravatar.cc/150?u=";

#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Debug, Serialize, Deserialize, Default)]
pub struct Url(pub String);

impl Url {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Debug, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<UserId> for UserId {
    fn as_ref(&self) -> &UserId {
        self
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Eq, PartialEq, Hash, Clone, Debug, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FriendRequestId(pub String);

/// A user profile as served by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub full_name: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub native_language: String,
    #[serde(default)]
    pub learning_language: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    /// Profile picture, or the placeholder keyed by id when none is set.
    pub fn avatar_url(&self) -> Url {
        match non_empty(&self.profile_pic) {
            Some(pic) => Url(pic.to_string()),
            None => Url(String::from(AVATAR_PLACEHOLDER_BASE) + self.id.as_str()),
        }
    }
    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }
    pub fn bio(&self) -> Option<&str> {
        non_empty(&self.bio)
    }
}

// The backend stores unset profile text as "".
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Populated side of a friend request.
#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub native_language: Option<String>,
    #[serde(default)]
    pub learning_language: Option<String>,
}

/// Either end of a friend request: a bare id or a populated summary.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum UserRef {
    Id(UserId),
    Populated(UserSummary),
}

impl UserRef {
    pub fn id(&self) -> &UserId {
        match self {
            UserRef::Id(id) => id,
            UserRef::Populated(summary) => &summary.id,
        }
    }
}

impl Default for UserRef {
    fn default() -> Self {
        UserRef::Id(UserId::default())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    #[default]
    Pending,
    Accepted,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, Eq, PartialEq)]
pub struct FriendRequest {
    #[serde(rename = "_id", default)]
    pub id: FriendRequestId,
    #[serde(default)]
    pub sender: UserRef,
    pub recipient: UserRef,
    #[serde(default)]
    pub status: FriendRequestStatus,
}
