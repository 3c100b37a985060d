use std::sync::Arc;

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::AppState;
use crate::services::hit_points::{Resolution, set_temp_hp};

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddTemporaryHpRequest {
    #[validate(length(min = 1))]
    pub character_name: String,
    #[serde(rename = "tempHP")]
    #[validate(range(min = 0))]
    pub temp_hp: i32,
}

/// Grants temporary hit points, keeping whichever of the current and the
/// new value is higher.
///
/// POST /addTemporaryHP AddTemporaryHpRequest
///
/// # Returns
///
/// - `200 OK` with a narrative, also when the current value is kept
/// - `400 Bad Request` - Empty name or negative amount
/// - `404 Not Found` - Unknown character
#[instrument(
    skip_all,
    fields(
        character_name = %payload.character_name,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn add_temporary_hp(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AddTemporaryHpRequest>,
) -> AppResult<String> {
    debug!("Processing temporary HP request");

    if payload.validate().is_err() {
        warn!("Invalid temporary HP request");
        return Err(AppError::BadRequest("Invalid input"));
    }

    let outcome = state
        .update_character(&payload.character_name, |character| {
            set_temp_hp(character, payload.temp_hp)
        })
        .await?;

    info!(replaced = outcome.mutated(), "Temporary HP request handled");
    Ok(outcome.to_string())
}
