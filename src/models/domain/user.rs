use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub role: UserRole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Faculty,
    Admin,
    Student,
    Ta,
    User,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    /// Faculty and admins may publish and edit quizzes.
    pub fn can_edit(self) -> bool {
        matches!(self, UserRole::Faculty | UserRole::Admin)
    }

    pub fn is_student(self) -> bool {
        self == UserRole::Student
    }

    /// Reads a role name case-insensitively, using the same names as the
    /// wire format.
    pub fn parse(value: &str) -> Self {
        let name = Value::String(value.trim().to_ascii_uppercase());
        serde_json::from_value(name).unwrap_or(UserRole::Unknown)
    }
}

impl User {
    pub fn new(id: &str, username: &str, role: UserRole) -> Self {
        User {
            id: id.to_string(),
            username: username.to_string(),
            first_name: None,
            last_name: None,
            role,
        }
    }
}
