use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use mockito::{Mock, Server, ServerGuard};
use trainium::{
    model::{api::ErrorDto, user::UserDto},
    server::controller::auth::get_user,
};

use super::*;
use crate::util::test_state_with_provider;

const SESSION_COOKIE: &str = "session=abc123";

fn session_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static(SESSION_COOKIE));
    headers
}

fn ada() -> UserDto {
    UserDto {
        id: "user_1".to_string(),
        name: "Ada".to_string(),
        image_url: Some("https://img.trainium.test/ada.png".to_string()),
    }
}

/// Create a mock provider session endpoint that only answers the forwarded session cookie
async fn mock_session_endpoint(
    server: &mut ServerGuard,
    status: usize,
    body: String,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/session")
        .match_header("cookie", SESSION_COOKIE)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(expected_requests)
        .create_async()
        .await
}

#[tokio::test]
/// Expect 200 success with the provider's user when the session cookie is valid
async fn returns_user_for_active_session() {
    let mut server = Server::new_async().await;
    let mock =
        mock_session_endpoint(&mut server, 200, serde_json::to_string(&ada()).unwrap(), 1).await;

    let result = get_user(State(test_state_with_provider(&server.url())), session_headers()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let user: UserDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(user, ada());

    mock.assert_async().await;
}

#[tokio::test]
/// Expect 401 unauthorized without contacting the provider when no cookie is sent
async fn returns_unauthorized_without_cookie() {
    let mut server = Server::new_async().await;
    let mock = mock_session_endpoint(&mut server, 200, "{}".to_string(), 0).await;

    let result = get_user(State(test_state_with_provider(&server.url())), HeaderMap::new()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert!(!error.error.is_empty());

    mock.assert_async().await;
}

#[tokio::test]
/// Expect 401 unauthorized when the provider rejects the session
async fn returns_unauthorized_for_rejected_session() {
    let mut server = Server::new_async().await;
    let mock = mock_session_endpoint(&mut server, 401, "{}".to_string(), 1).await;

    let result = get_user(State(test_state_with_provider(&server.url())), session_headers()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    mock.assert_async().await;
}

#[tokio::test]
/// Expect 502 bad gateway when the provider fails the session check
async fn returns_bad_gateway_for_provider_failure() {
    let mut server = Server::new_async().await;
    let mock = mock_session_endpoint(&mut server, 500, "{}".to_string(), 1).await;

    let result = get_user(State(test_state_with_provider(&server.url())), session_headers()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    mock.assert_async().await;
}

#[tokio::test]
/// Expect 502 bad gateway when the provider answers with a body that is not a user
async fn returns_bad_gateway_for_unreadable_user() {
    let mut server = Server::new_async().await;
    let mock = mock_session_endpoint(&mut server, 200, "not json".to_string(), 1).await;

    let result = get_user(State(test_state_with_provider(&server.url())), session_headers()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    mock.assert_async().await;
}
