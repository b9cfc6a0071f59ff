use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use canteen_user::UserProfile;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use super::{ApiJson, AppState};
use crate::{
    auth::{AuthUser, build_cookie, removal_cookie},
    error::AppError,
};

#[derive(Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: UserProfile,
}

/// POST /api/auth/login
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(input): ApiJson<LoginInput>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let input = LoginInput {
        email: input.email.trim().to_owned(),
        ..input
    };
    input.validate()?;

    let Some(user) = state.store.user_by_email(&input.email).await else {
        tracing::info!("login attempt for unknown email");
        return Err(canteen_shared::Error::Unauthorized.into());
    };

    if !canteen_user::verify_password(&input.password, &user.password_hash)? {
        tracing::info!(user_id = %user.id, "login attempt with wrong password");
        return Err(canteen_shared::Error::Unauthorized.into());
    }

    let cookie = build_cookie(&state.config.jwt, &user)?;
    tracing::info!(user_id = %user.id, role = %user.role, "user signed in");

    Ok((jar.add(cookie), Json(SessionResponse { user })))
}

/// POST /api/auth/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    (jar.remove(removal_cookie()), Json(json!({ "success": true })))
}

/// GET /api/auth/session
pub async fn session(AuthUser(user): AuthUser) -> Json<SessionResponse> {
    Json(SessionResponse { user })
}
