use axum::{Json, extract::State};
use canteen_menu::MenuDay;
use canteen_shared::DEFAULT_MENU_DAYS;
use serde::Serialize;

use super::{AppState, WindowQuery};
use crate::error::AppError;

#[derive(Serialize)]
pub struct MenuResponse {
    pub menu: Vec<MenuDay>,
}

/// GET /api/menu?days=N
#[tracing::instrument(skip_all)]
pub async fn list(
    State(state): State<AppState>,
    query: WindowQuery,
) -> Result<Json<MenuResponse>, AppError> {
    let menu = state.store.list_menu(query.days_or(DEFAULT_MENU_DAYS))?;

    Ok(Json(MenuResponse { menu }))
}
