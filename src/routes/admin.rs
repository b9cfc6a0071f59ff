use axum::{Json, extract::State};
use canteen_attendance::Overview;
use canteen_shared::{DEFAULT_OVERVIEW_DAYS, today};

use super::{AppState, WindowQuery};
use crate::{auth::AdminUser, error::AppError};

/// GET /api/admin/overview?days=N
#[tracing::instrument(skip_all, fields(admin_id = %admin.id))]
pub async fn overview(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    query: WindowQuery,
) -> Result<Json<Overview>, AppError> {
    let overview = state
        .store
        .overview_from(today(), query.days_or(DEFAULT_OVERVIEW_DAYS))
        .await?;

    Ok(Json(overview))
}
