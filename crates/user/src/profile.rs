use canteen_shared::Role;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl UserProfile {
    /// Emails are unique keys, compared trimmed and case-insensitively.
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
