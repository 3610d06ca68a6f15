use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Avatar letter: first character of the name, uppercased.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Body returned by both `/auth/login` and `/auth/register`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_ignores_extra_user_fields() {
        let body = r#"{
            "token": "abc.def",
            "user": {
                "id": "u1",
                "name": "asha",
                "email": "asha@example.com",
                "role": "user",
                "created_at": "2024-05-01T10:00:00Z"
            }
        }"#;
        let parsed: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.token, "abc.def");
        assert_eq!(parsed.user.name, "asha");
    }

    #[test]
    fn test_initial() {
        let user = User {
            id: "u1".into(),
            name: "éloise".into(),
            email: "e@example.com".into(),
        };
        assert_eq!(user.initial(), "É");

        let nameless = User { name: String::new(), ..user };
        assert_eq!(nameless.initial(), "");
    }
}
