use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    extract::{
        CookieJar,
        cookie::{Cookie, SameSite},
    },
    headers::{Authorization, HeaderMapExt, authorization::Bearer},
};
use canteen_shared::Role;
use canteen_user::UserProfile;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::JwtConfig, error::AppError, routes::AppState};

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub aud: String,
    pub exp: u64,
    pub iat: u64,
    pub iss: String,
    /// User id
    pub sub: String,
    pub role: Role,
    pub name: String,
    pub department: String,
}

pub fn generate_token(config: &JwtConfig, user: &UserProfile) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.expiration_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub: user.id.to_owned(),
        role: user.role,
        name: user.name.to_owned(),
        department: user.department.to_owned(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn validate_token(config: &JwtConfig, token: &str) -> anyhow::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

pub fn build_cookie<'a>(config: &JwtConfig, user: &UserProfile) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, user)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

pub fn removal_cookie<'a>() -> Cookie<'a> {
    Cookie::build(AUTH_COOKIE_NAME).path("/").build()
}

/// Bearer header first, then the session cookie.
fn request_token(parts: &Parts) -> Option<String> {
    if let Some(bearer) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_owned());
    }

    CookieJar::from_headers(&parts.headers)
        .get(AUTH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_owned())
}

/// The signed-in user, resolved from a valid token whose subject still
/// exists in the store.
pub struct AuthUser(pub UserProfile);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = request_token(parts) else {
            return Err(canteen_shared::Error::Unauthorized.into());
        };

        let claims = validate_token(&state.config.jwt, &token).map_err(|e| {
            tracing::debug!(error = %e, "rejected session token");
            AppError(canteen_shared::Error::Unauthorized)
        })?;

        let Some(user) = state.store.user(&claims.sub).await else {
            tracing::warn!(user_id = %claims.sub, "token subject is not a known user");
            return Err(canteen_shared::Error::Unauthorized.into());
        };

        Ok(AuthUser(user))
    }
}

/// A signed-in administrator. Anything else, including a missing session,
/// is refused with `403 Forbidden`.
pub struct AdminUser(pub UserProfile);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let forbidden = || AppError(canteen_shared::Error::Forbidden);

        let AuthUser(user) = AuthUser::from_request_parts(parts, state)
            .await
            .map_err(|_| forbidden())?;

        if !user.role.is_admin() {
            tracing::warn!(user_id = %user.id, "non-admin requested an admin resource");
            return Err(forbidden());
        }

        Ok(AdminUser(user))
    }
}
