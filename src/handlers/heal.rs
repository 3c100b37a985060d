use std::sync::Arc;

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::AppState;
use crate::services::hit_points::apply_heal;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealRequest {
    #[validate(length(min = 1))]
    pub character_name: String,
    #[validate(range(min = 0))]
    pub healing_amount: i32,
}

/// Heals a character. Hit points are not capped.
///
/// POST /heal HealRequest
///
/// # Returns
///
/// - `200 OK` with a narrative such as `Briv healed for 5 HP. Current HP: 30`
/// - `400 Bad Request` - Empty name or negative amount
/// - `404 Not Found` - Unknown character
#[instrument(
    skip_all,
    fields(
        character_name = %payload.character_name,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn heal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HealRequest>,
) -> AppResult<String> {
    debug!("Processing heal request");

    if payload.validate().is_err() {
        warn!("Invalid heal request");
        return Err(AppError::BadRequest("Invalid input"));
    }

    let outcome = state
        .update_character(&payload.character_name, |character| {
            apply_heal(character, payload.healing_amount)
        })
        .await?;

    info!(hit_points = outcome.hit_points, "Character healed");
    Ok(outcome.to_string())
}
