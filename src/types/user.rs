use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Id;

/// The user record returned by `/auth/me`, `/auth/login` and `/auth/signup`.
///
/// Fields the client doesn't know about are kept in `extra`, so a cached
/// record written back to the session store loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    pub name: String,

    pub email: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Name used for greetings, `"User"` when the server sent an empty one.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "User"
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let raw = json!({
            "id": 7,
            "name": "Alex",
            "email": "alex@example.com",
            "created_at": "2024-05-01T10:00:00Z",
        });
        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.extra.get("created_at"), raw.get("created_at"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_user_requires_email() {
        let result = serde_json::from_value::<User>(json!({"name": "Alex"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(User::new("", "a@b.c").display_name(), "User");
        assert_eq!(User::new("Alex", "a@b.c").display_name(), "Alex");
    }
}
