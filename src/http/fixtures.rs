//! Canned payloads served by the mock routes.

use serde::{Deserialize, Serialize};

/// Sample user returned by `GET /api/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Build the fixture user. A fresh value per call; nothing is shared between requests.
pub fn sample_user() -> User {
    User {
        id: 0,
        name: "Alice".to_string(),
        email: "alice@email.com".to_string(),
    }
}
