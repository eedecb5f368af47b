use trainium::server::controller::auth::signup;

use super::*;

#[tokio::test]
/// Expect 307 temporary redirect to the provider's sign-up page
async fn redirects_to_provider_sign_up() {
    let result = signup(State(test_state()), no_redirect()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(location(&resp).starts_with(&format!("{}/sign-up?", TEST_PROVIDER_URL)));
}
