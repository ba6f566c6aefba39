use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                // unique user ID
    pub email: String,          // login identifier
    #[serde(skip_serializing)]
    pub password_hash: String,  // Argon2 hash, not exposed in JSON
    pub is_verified: bool,      // email confirmed
    pub avatar: Option<String>, // avatar URL, if set
}
