#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use canteen::{
    AppState,
    config::{Config, JwtConfig, ObservabilityConfig, SeedConfig, ServerConfig},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const EMPLOYEE_EMAIL: &str = "asha.menon@karmicsolutions.com";
pub const ADMIN_EMAIL: &str = "karan.patel@karmicsolutions.com";
pub const PASSWORD: &str = "password123";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 1,
            issuer: "karmic-canteen".to_string(),
            audience: "karmic-canteen-web".to_string(),
        },
        observability: ObservabilityConfig::default(),
        seed: SeedConfig {
            demo_password: PASSWORD.to_string(),
        },
    }
}

pub fn setup_app() -> anyhow::Result<Router> {
    let config = test_config();
    let store = canteen::server::seed_store(&config)?;

    Ok(canteen::router(AppState { config, store }))
}

/// Sends `request` and decodes the body as JSON (`Null` when empty).
pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, body))
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Signs in and returns the `name=value` pair to send back as a Cookie header.
pub async fn login(app: &Router, email: &str) -> anyhow::Result<String> {
    let request = json_request(
        Method::POST,
        "/api/auth/login",
        None,
        json!({ "email": email, "password": PASSWORD }),
    );
    let response = app.clone().oneshot(request).await?;
    anyhow::ensure!(
        response.status() == StatusCode::OK,
        "login failed with {}",
        response.status()
    );

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .ok_or_else(|| anyhow::anyhow!("login did not set a cookie"))?
        .to_str()?;

    Ok(set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .to_owned())
}
