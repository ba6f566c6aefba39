use sqlx::PgPool;
use time::Date;

use crate::contacts::dto::ContactPayload;
use crate::contacts::repo_types::Contact;
use crate::contacts::services::{birthday_keys, like_pattern};
use crate::error::RepoError;

// Every query filters by owner_id so one user can never see or touch
// another user's contacts.

pub async fn get(db: &PgPool, owner_id: i64, contact_id: i64) -> Result<Option<Contact>, RepoError> {
    let contact = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, email, phone, birthday, additional_info, owner_id
        FROM contacts
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(contact_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await?;
    Ok(contact)
}

pub async fn list(
    db: &PgPool,
    owner_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<Contact>, RepoError> {
    let rows = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, email, phone, birthday, additional_info, owner_id
        FROM contacts
        WHERE owner_id = $1
        ORDER BY id
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(owner_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    owner_id: i64,
    payload: &ContactPayload,
) -> Result<Contact, RepoError> {
    let contact = sqlx::query_as::<_, Contact>(
        r#"
        INSERT INTO contacts (first_name, last_name, email, phone, birthday, additional_info, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, first_name, last_name, email, phone, birthday, additional_info, owner_id
        "#,
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(payload.birthday)
    .bind(&payload.additional_info)
    .bind(owner_id)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_insert)?;
    Ok(contact)
}

/// Full-field overwrite. Every stored field is replaced by the payload.
pub async fn update(
    db: &PgPool,
    owner_id: i64,
    contact_id: i64,
    payload: &ContactPayload,
) -> Result<Contact, RepoError> {
    let contact = sqlx::query_as::<_, Contact>(
        r#"
        UPDATE contacts
        SET first_name = $1, last_name = $2, email = $3, phone = $4,
            birthday = $5, additional_info = $6
        WHERE id = $7 AND owner_id = $8
        RETURNING id, first_name, last_name, email, phone, birthday, additional_info, owner_id
        "#,
    )
    .bind(&payload.first_name)
    .bind(&payload.last_name)
    .bind(&payload.email)
    .bind(&payload.phone)
    .bind(payload.birthday)
    .bind(&payload.additional_info)
    .bind(contact_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_insert)?;
    contact.ok_or(RepoError::NotFound)
}

/// Delete a contact and return the removed row.
pub async fn delete(db: &PgPool, owner_id: i64, contact_id: i64) -> Result<Contact, RepoError> {
    let contact = sqlx::query_as::<_, Contact>(
        r#"
        DELETE FROM contacts
        WHERE id = $1 AND owner_id = $2
        RETURNING id, first_name, last_name, email, phone, birthday, additional_info, owner_id
        "#,
    )
    .bind(contact_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await?;
    contact.ok_or(RepoError::NotFound)
}

/// Case-insensitive substring match on first name, last name or email.
pub async fn search(db: &PgPool, owner_id: i64, query: &str) -> Result<Vec<Contact>, RepoError> {
    let pattern = like_pattern(query);
    let rows = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, email, phone, birthday, additional_info, owner_id
        FROM contacts
        WHERE owner_id = $1
          AND (first_name ILIKE $2 OR last_name ILIKE $2 OR email ILIKE $2)
        ORDER BY id
        "#,
    )
    .bind(owner_id)
    .bind(pattern)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Contacts whose birthday (month and day, year ignored) falls within the
/// inclusive 7-day window starting at `from`.
pub async fn upcoming_birthdays(
    db: &PgPool,
    owner_id: i64,
    from: Date,
) -> Result<Vec<Contact>, RepoError> {
    let keys = birthday_keys(from, 7);
    let rows = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, first_name, last_name, email, phone, birthday, additional_info, owner_id
        FROM contacts
        WHERE owner_id = $1
          AND to_char(birthday, 'MM-DD') = ANY($2)
        ORDER BY id
        "#,
    )
    .bind(owner_id)
    .bind(keys)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
