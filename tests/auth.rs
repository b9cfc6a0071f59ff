use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

mod helpers;

use helpers::{EMPLOYEE_EMAIL, PASSWORD, get, json_request, send};

#[tokio::test]
async fn test_login_sets_http_only_cookie() -> anyhow::Result<()> {
    let app = helpers::setup_app()?;

    let request = json_request(
        Method::POST,
        "/api/auth/login",
        None,
        json!({ "email": "Asha.Menon@KarmicSolutions.com", "password": PASSWORD }),
    );
    let response = app.clone().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()?;
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("HttpOnly"));

    let (_, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": EMPLOYEE_EMAIL, "password": PASSWORD }),
        ),
    )
    .await?;
    assert_eq!(body["user"]["id"], "u-asha");
    assert_eq!(body["user"]["role"], "employee");
    assert!(body["user"].get("passwordHash").is_none());

    Ok(())
}

#[tokio::test]
async fn test_login_failure() -> anyhow::Result<()> {
    let app = helpers::setup_app()?;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": EMPLOYEE_EMAIL, "password": "wrong-password" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": "nobody@karmicsolutions.com", "password": PASSWORD }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": "not-an-email", "password": "" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "ValidationFailed");
    assert!(body["details"]["email"].is_string());
    assert!(body["details"]["password"].is_string());

    Ok(())
}

#[tokio::test]
async fn test_login_ignores_padding_around_email() -> anyhow::Result<()> {
    let app = helpers::setup_app()?;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": "  asha.menon@karmicsolutions.com ", "password": PASSWORD }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "u-asha");

    Ok(())
}

#[tokio::test]
async fn test_session_from_cookie_or_bearer() -> anyhow::Result<()> {
    let app = helpers::setup_app()?;
    let cookie = helpers::login(&app, EMPLOYEE_EMAIL).await?;

    let (status, body) = send(&app, get("/api/auth/session", Some(&cookie))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], EMPLOYEE_EMAIL);

    let token = cookie.trim_start_matches("auth_token=");
    let request = Request::builder()
        .uri("/api/auth/session")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(axum::body::Body::empty())?;
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "u-asha");

    Ok(())
}

#[tokio::test]
async fn test_session_requires_a_valid_token() -> anyhow::Result<()> {
    let app = helpers::setup_app()?;

    let (status, _) = send(&app, get("/api/auth/session", None)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get("/api/auth/session", Some("auth_token=garbage"))).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_logout_expires_cookie() -> anyhow::Result<()> {
    let app = helpers::setup_app()?;
    let cookie = helpers::login(&app, EMPLOYEE_EMAIL).await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/logout")
        .header(header::COOKIE, &cookie)
        .body(axum::body::Body::empty())?;
    let response = app.clone().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()?;
    assert!(set_cookie.starts_with("auth_token="));
    assert!(set_cookie.contains("Max-Age=0"));

    Ok(())
}
