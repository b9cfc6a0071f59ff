use axum::{Json, extract::State};
use canteen_user::{PreferenceInput, UserPreference};
use serde::Serialize;

use super::{ApiJson, AppState};
use crate::{auth::AuthUser, error::AppError};

#[derive(Serialize)]
pub struct PreferenceResponse {
    pub preference: UserPreference,
}

/// GET /api/preferences
///
/// Stores and returns the default preference on first access.
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn show(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Json<PreferenceResponse> {
    let preference = state.store.preference_or_init(&user.id).await;

    Json(PreferenceResponse { preference })
}

/// PUT /api/preferences
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(input): ApiJson<PreferenceInput>,
) -> Result<Json<PreferenceResponse>, AppError> {
    let preference = state.store.upsert_preference(&user.id, input).await?;

    Ok(Json(PreferenceResponse { preference }))
}
