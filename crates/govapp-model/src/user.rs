//! Session user types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the signed-in user.
///
/// Citizens see the public service catalog; government staff get the
/// back-office views. The store never checks which one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Member of the public (default for new accounts).
    #[default]
    Citizen,
    /// Government staff member.
    Government,
}

impl UserType {
    /// Serialized identifier (`"citizen"` / `"government"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Government => "government",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::Government => "Government staff",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "citizen" => Ok(Self::Citizen),
            "government" => Ok(Self::Government),
            _ => Err(format!("Unknown user type: {s}")),
        }
    }
}

/// The signed-in user.
///
/// Replaced wholesale on login; only `user_type` is ever changed in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Contact phone number.
    #[serde(default)]
    pub phone: String,

    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// National ID card number, when the account has been verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,

    /// Citizen or government staff.
    #[serde(default)]
    pub user_type: UserType,
}

impl User {
    /// Create a citizen user with no avatar or ID card.
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            avatar: None,
            id_card: None,
            user_type: UserType::Citizen,
        }
    }

    /// Builder method to set the role.
    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    /// Builder method to set the avatar URL.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Builder method to set the ID card number.
    pub fn with_id_card(mut self, id_card: impl Into<String>) -> Self {
        self.id_card = Some(id_card.into());
        self
    }

    /// Whether this user is government staff.
    pub fn is_government(&self) -> bool {
        self.user_type == UserType::Government
    }
}
