use thiserror::Error;

#[cfg(feature = "web")]
use crate::model::user::UserDto;

/// Failure to learn the visitor's session state from the provider
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to send request: {0}")]
    Request(String),
    #[error("Failed to parse user data: {0}")]
    Parse(String),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

/// Retrieve the signed-in user from the provider
///
/// Returns `Ok(None)` when the provider reports no active session.
#[cfg(feature = "web")]
pub async fn get_user() -> Result<Option<UserDto>, FetchError> {
    use reqwasm::http::{Request, RequestCredentials};

    use crate::client::config::USER_ENDPOINT;

    let response = Request::get(USER_ENDPOINT)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    match response.status() {
        200 => {
            let user = response
                .json::<UserDto>()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))?;
            Ok(Some(user))
        }
        401 | 404 => Ok(None),
        status => {
            use crate::model::api::ErrorDto;

            let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
                error_dto.error
            } else {
                response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string())
            };

            Err(FetchError::Status { status, message })
        }
    }
}
