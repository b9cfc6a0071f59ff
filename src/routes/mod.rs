use std::convert::Infallible;

use axum::{
    Router,
    extract::{FromRequest, FromRequestParts, Query},
    http::request::Parts,
    routing::{get, post},
};
use canteen_store::Store;

use crate::error::AppError;

mod admin;
mod auth;
mod dashboard;
mod health;
mod menu;
mod preferences;
mod selections;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Store,
}

/// JSON body whose rejections render as validation errors.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `?days=N`. Missing, malformed or out-of-range values fall back to the
/// route's default window. When `days` is repeated the last value counts.
#[derive(Default)]
pub struct WindowQuery {
    pub days: Option<String>,
}

impl WindowQuery {
    pub fn days_or(&self, default: u32) -> u32 {
        canteen_shared::resolve_window(self.days.as_deref(), default)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for WindowQuery {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let days = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default()
            .into_iter()
            .rev()
            .find_map(|(key, value)| (key == "days").then_some(value));

        Ok(WindowQuery { days })
    }
}

pub fn router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/menu", get(menu::list))
        .route("/selections", get(selections::list).post(selections::save))
        .route(
            "/preferences",
            get(preferences::show).put(preferences::update),
        )
        .route("/dashboard", get(dashboard::show))
        .route("/admin/overview", get(admin::overview))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/session", get(auth::session));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .with_state(app_state)
}
