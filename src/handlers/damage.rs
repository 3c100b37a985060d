//! # Damage Handler
//!
//! `POST /dealDamage` applies typed damage to a character, honouring its
//! resistances, immunities and temporary hit points.

use std::sync::Arc;

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::AppState;
use crate::services::hit_points::apply_damage;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DealDamageRequest {
    #[validate(length(min = 1))]
    pub character_name: String,
    #[validate(length(min = 1))]
    pub damage_type: String,
    #[validate(range(min = 0))]
    pub damage: i32,
}

/// Deals damage to a character.
///
/// POST /dealDamage DealDamageRequest
///
/// # Returns
///
/// - `200 OK` with a narrative such as `Briv took 4 fire damage. Current HP: 21`
/// - `400 Bad Request` - Empty name or damage type, or negative damage
/// - `404 Not Found` - No character name contains `characterName`
/// - `500 Internal Server Error` - Store failure
#[instrument(
    skip_all,
    fields(
        character_name = %payload.character_name,
        damage_type = %payload.damage_type,
        request_id = %uuid::Uuid::new_v4()
    )
)]
pub async fn deal_damage(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DealDamageRequest>,
) -> AppResult<String> {
    debug!("Processing damage request");

    if payload.validate().is_err() {
        warn!("Invalid damage request");
        return Err(AppError::BadRequest("Invalid input"));
    }

    let outcome = state
        .update_character(&payload.character_name, |character| {
            apply_damage(character, &payload.damage_type, payload.damage)
        })
        .await?;

    info!(%outcome, "Damage applied");
    Ok(outcome.to_string())
}
