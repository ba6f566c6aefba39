use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::services::AuthUser,
    contacts::dto::{ContactPayload, Pagination, SearchParams},
    contacts::repo,
    contacts::repo_types::Contact,
    error::RepoError,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/search", get(search_contacts))
        .route("/contacts/birthdays", get(upcoming_birthdays))
        .route("/contacts/:id", get(get_contact))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", post(create_contact))
        .route("/contacts/:id", put(update_contact).delete(delete_contact))
}

fn repo_error(e: RepoError) -> (StatusCode, String) {
    match e {
        RepoError::Conflict => (StatusCode::CONFLICT, "Email already in use".into()),
        RepoError::NotFound => (StatusCode::NOT_FOUND, "Contact not found".into()),
        other => {
            error!(error = %other, "contact query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

#[instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Contact>>, (StatusCode, String)> {
    let (limit, offset) = p.clamped();
    let contacts = repo::list(&state.db, user_id, limit, offset)
        .await
        .map_err(repo_error)?;
    Ok(Json(contacts))
}

#[instrument(skip(state))]
pub async fn get_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, (StatusCode, String)> {
    let contact = repo::get(&state.db, user_id, id)
        .await
        .map_err(repo_error)?
        .ok_or((StatusCode::NOT_FOUND, "Contact not found".to_string()))?;
    Ok(Json(contact))
}

#[instrument(skip(state))]
pub async fn search_contacts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Contact>>, (StatusCode, String)> {
    let contacts = repo::search(&state.db, user_id, &params.q)
        .await
        .map_err(repo_error)?;
    Ok(Json(contacts))
}

#[instrument(skip(state))]
pub async fn upcoming_birthdays(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Contact>>, (StatusCode, String)> {
    let today = OffsetDateTime::now_utc().date();
    let contacts = repo::upcoming_birthdays(&state.db, user_id, today)
        .await
        .map_err(repo_error)?;
    Ok(Json(contacts))
}

#[instrument(skip(state, payload))]
pub async fn create_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ContactPayload>,
) -> Result<(StatusCode, Json<Contact>), (StatusCode, String)> {
    let contact = match repo::create(&state.db, user_id, &payload).await {
        Ok(c) => c,
        Err(RepoError::Conflict) => {
            warn!(email = %payload.email, "contact email already in use");
            return Err((StatusCode::CONFLICT, "Email already in use".into()));
        }
        Err(e) => return Err(repo_error(e)),
    };
    info!(user_id = %user_id, contact_id = %contact.id, "contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

#[instrument(skip(state, payload))]
pub async fn update_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, (StatusCode, String)> {
    let contact = repo::update(&state.db, user_id, id, &payload)
        .await
        .map_err(repo_error)?;
    info!(user_id = %user_id, contact_id = %contact.id, "contact updated");
    Ok(Json(contact))
}

#[instrument(skip(state))]
pub async fn delete_contact(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, (StatusCode, String)> {
    let contact = repo::delete(&state.db, user_id, id)
        .await
        .map_err(repo_error)?;
    info!(user_id = %user_id, contact_id = %contact.id, "contact deleted");
    Ok(Json(contact))
}
