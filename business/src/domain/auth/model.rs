use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub login_time: DateTime<Utc>,
}

impl User {
    /// Synthesizes the session user for a successful login. The display
    /// name is the local part of the email address.
    pub fn from_login(email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: format!("user-{}", now.timestamp_millis()),
            email: email.to_string(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            login_time: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        email: String,
        name: String,
        login_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            login_time,
        }
    }
}

/// The single accepted credential pair. Authentication is simulated,
/// there is no hashing, token, or expiry.
#[derive(Debug, Clone)]
pub struct DemoCredentials {
    pub email: String,
    pub password: String,
}

impl Default for DemoCredentials {
    fn default() -> Self {
        Self {
            email: "demo@megamart.com".to_string(),
            password: "demo123".to_string(),
        }
    }
}

impl DemoCredentials {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
