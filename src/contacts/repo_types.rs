use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

/// Contact record in the database. Always owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: Date,
    pub additional_info: Option<String>,
    pub owner_id: i64,
}
