use axum::{Json, extract::State};
use canteen_attendance::{MealSelection, SelectionInput};
use serde::Serialize;

use super::{ApiJson, AppState};
use crate::{auth::AuthUser, error::AppError};

#[derive(Serialize)]
pub struct SelectionsResponse {
    pub selections: Vec<MealSelection>,
}

#[derive(Serialize)]
pub struct SelectionResponse {
    pub selection: MealSelection,
}

/// GET /api/selections
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Json<SelectionsResponse> {
    let selections = state.store.list_selections_for_user(&user.id).await;

    Json(SelectionsResponse { selections })
}

/// POST /api/selections
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn save(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(input): ApiJson<SelectionInput>,
) -> Result<Json<SelectionResponse>, AppError> {
    let (date, toggle) = input.into_toggle()?;
    let selection = state.store.save_meal_toggle(&user.id, date, toggle).await;

    Ok(Json(SelectionResponse { selection }))
}
