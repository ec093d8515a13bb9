//! Identity Payloads

use serde::{Deserialize, Serialize};

/// `GET /auth/profile` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub role: String,
}

impl Profile {
    /// First letter of the username, uppercased, for the navbar avatar
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// `POST /auth/login` body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginGrant {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}
