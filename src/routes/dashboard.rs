use axum::{Json, extract::State};
use canteen_shared::{DEFAULT_OVERVIEW_DAYS, today};
use canteen_store::Dashboard;

use super::{AppState, WindowQuery};
use crate::{auth::AuthUser, error::AppError};

/// GET /api/dashboard?days=N
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn show(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    query: WindowQuery,
) -> Result<Json<Dashboard>, AppError> {
    let dashboard = state
        .store
        .dashboard_from(&user.id, today(), query.days_or(DEFAULT_OVERVIEW_DAYS))
        .await?;

    Ok(Json(dashboard))
}
