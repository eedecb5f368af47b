use trainium::server::controller::auth::logout;

use super::*;

#[tokio::test]
/// Expect 307 temporary redirect to the provider's sign-out page
async fn redirects_to_provider_sign_out() {
    let result = logout(State(test_state()), no_redirect()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(location(&resp).starts_with(&format!("{}/sign-out?", TEST_PROVIDER_URL)));
}

#[tokio::test]
/// Expect 400 bad request with a JSON error body for an invalid redirect
async fn invalid_redirect_returns_error_body() {
    let result = logout(State(test_state()), redirect_to("profile")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: trainium::model::api::ErrorDto = serde_json::from_slice(&body).unwrap();
    assert!(!error.error.is_empty());
}
