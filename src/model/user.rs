use serde::{Deserialize, Serialize};

/// The signed-in visitor as reported by the authentication provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}
