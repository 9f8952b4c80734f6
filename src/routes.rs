use std::collections::HashMap;

use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;
use crate::student::StudentSubmission;
use crate::view;

/// Assemble the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/edit/{id}", get(edit))
        .route("/add_or_update", post(add_or_update))
        .route("/delete/{id}", get(delete))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse a typed `{id}` path segment.
///
/// Non-integer (or negative) input is a 404, matching typed-route
/// behavior: the path simply doesn't exist.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::InvalidPath(format!("no route for id '{raw}'")))
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let students = state.store.list_all().await?;
    Ok(Html(view::render(&students, None)))
}

/// Render the listing with one record pre-filled into the edit form.
///
/// An id that doesn't exist renders the empty add form — absence is
/// indistinguishable from not editing at all.
async fn edit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&raw_id)?;
    let students = state.store.list_all().await?;
    let editing = state.store.get_by_id(id).await?;
    Ok(Html(view::render(&students, editing.as_ref())))
}

/// The create-vs-update dispatch: an `id` field submitted non-empty
/// selects update, anything else selects create. Existence of the id
/// is never checked — updating a just-deleted record redirects
/// successfully and mutates nothing.
async fn add_or_update(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let sub = StudentSubmission::from_form(&fields)?;
    match sub.id {
        Some(id) => {
            let found = state
                .store
                .update(id, &sub.name, &sub.email, &sub.phone, sub.mark)
                .await?;
            if found {
                tracing::info!(id, "updated student");
            } else {
                tracing::debug!(id, "update targeted a missing id; nothing changed");
            }
        }
        None => {
            let id = state
                .store
                .create(&sub.name, &sub.email, &sub.phone, sub.mark)
                .await?;
            tracing::info!(id, "created student");
        }
    }
    Ok(Redirect::to("/"))
}

async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&raw_id)?;
    let found = state.store.delete(id).await?;
    if found {
        tracing::info!(id, "deleted student");
    }
    Ok(Redirect::to("/"))
}

async fn health() -> &'static str {
    "OK"
}
