//! Handlers for the villain card API.
//!
//! Write endpoints read URL-encoded form bodies, the way the browser pages
//! submit them, and answer with [`OutcomeResponse`]. A key repeated in the
//! body keeps its first value.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::{Form, FormRejection};
use indexmap::IndexMap;
use serde::Deserialize;
use sqlx::SqlitePool;
use villain_core::error::CoreError;
use villain_core::messages;
use villain_core::validation::{validate_submission, NewVillain, VillainSubmission};
use villain_db::models::villain::Villain;
use villain_db::repositories::{StoreNameLookup, VillainRepo};

use crate::error::AppResult;
use crate::response::OutcomeResponse;
use crate::state::AppState;

/// Form body for `POST /api/villains/add`.
///
/// Every field collects all submitted values; only the first is used.
#[derive(Debug, Default, Deserialize)]
pub struct AddVillainForm {
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub url: Vec<String>,
}

impl From<AddVillainForm> for VillainSubmission {
    fn from(form: AddVillainForm) -> Self {
        VillainSubmission {
            name: first(form.name),
            description: first(form.description),
            interests: first(form.interests),
            url: first(form.url),
        }
    }
}

/// Form body for `POST /api/villains/delete`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteVillainForm {
    #[serde(default)]
    pub name: Vec<String>,
}

/// Endpoint directory served at `/api/`, in display order.
const ENDPOINTS: [(&str, &str); 3] = [
    (
        "/api/villains/",
        "GET - Retrieves all villain data from the database",
    ),
    (
        "/api/villains/delete",
        "POST - Removes an existing villain from the database",
    ),
    (
        "/api/villains/add",
        "POST - Adds a new villain to the database",
    ),
];

fn first(values: Vec<String>) -> Option<String> {
    values.into_iter().next()
}

/// Undecodable bodies are treated as empty forms.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable form body, treating as empty");
            T::default()
        }
    }
}

/// Insert an already validated villain.
///
/// A unique-constraint hit means another request stored the same name after
/// validation ran; it is reported as the duplicate-name error.
pub async fn store_villain(
    pool: &SqlitePool,
    new_villain: &NewVillain,
) -> AppResult<OutcomeResponse> {
    match VillainRepo::create(pool, new_villain).await {
        Ok(villain) => {
            tracing::info!(id = villain.id, name = %villain.name, "Villain added");
            Ok(OutcomeResponse::success())
        }
        Err(err) if villain_db::is_unique_violation(&err) => {
            tracing::warn!(name = %new_villain.name, "Duplicate villain rejected by store");
            Err(CoreError::Conflict(messages::NAME_TAKEN.to_string()).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /api/villains/
///
/// Every villain card in insertion order.
pub async fn list_villains(State(state): State<AppState>) -> AppResult<Json<Vec<Villain>>> {
    let villains = VillainRepo::list_all(&state.pool).await?;
    Ok(Json(villains))
}

/// POST /api/villains/add
///
/// Validate the submitted card and store it.
pub async fn add_villain(
    State(state): State<AppState>,
    form: Result<Form<AddVillainForm>, FormRejection>,
) -> AppResult<Json<OutcomeResponse>> {
    let submission = VillainSubmission::from(form_or_default(form));

    let new_villain =
        validate_submission(submission, &StoreNameLookup::new(&state.pool)).await?;

    Ok(Json(store_villain(&state.pool, &new_villain).await?))
}

/// POST /api/villains/delete
///
/// Remove the villain with the exact submitted name.
pub async fn delete_villain(
    State(state): State<AppState>,
    form: Result<Form<DeleteVillainForm>, FormRejection>,
) -> AppResult<Json<OutcomeResponse>> {
    let name = first(form_or_default(form).name).unwrap_or_default();

    let deleted = VillainRepo::delete_by_name(&state.pool, &name).await?;
    if !deleted {
        return Err(CoreError::NotFound(messages::NAME_NOT_FOUND.to_string()).into());
    }

    tracing::info!(name = %name, "Villain deleted");
    Ok(Json(OutcomeResponse::success()))
}

/// GET /api/
///
/// Static map of API paths to a short method + purpose line.
pub async fn list_endpoints() -> Json<IndexMap<&'static str, &'static str>> {
    Json(ENDPOINTS.into_iter().collect())
}
