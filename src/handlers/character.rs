use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{debug, instrument};

use crate::error::AppResult;
use crate::models::{AppState, Character};

/// Returns the full character document.
///
/// GET /character/{name}
///
/// `name` may be any case-insensitive part of the stored name; when several
/// characters match, the earliest stored one is returned.
///
/// # Returns
///
/// - `200 OK` with the character as JSON
/// - `404 Not Found` - Unknown character
#[instrument(
    skip_all,
    fields(
        name = %name,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> AppResult<Json<Character>> {
    let character = state.find_character(&name).await?;
    debug!(id = %character.id, "Character found");
    Ok(Json(character))
}
