use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a registered user in the system.
///
/// Users are kept for completeness of the data model; no authentication is
/// performed against the stored credential.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

// Keeps the credential out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Payload for creating a new user.
#[derive(Clone, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl UserCreate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_never_leaves_the_record() {
        let user = User { id: 1, username: "admin".into(), password: "hunter2".into() };

        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":1,"username":"admin"}"#);
        assert!(!format!("{user:?}").contains("hunter2"));
        assert!(!format!("{:?}", UserCreate::new("admin", "hunter2")).contains("hunter2"));
    }
}
