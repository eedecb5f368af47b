use crate::model::{auth::AuthFlag, user::UserDto};

/// Session state shared across the client through context
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Set once the provider has answered, successfully or not
    pub fetched: bool,
}

impl UserState {
    /// The visitor's auth state, `None` while the provider has not answered yet
    pub fn auth_flag(&self) -> Option<AuthFlag> {
        if !self.fetched {
            return None;
        }

        Some(AuthFlag::from_signed_in(self.user.is_some()))
    }
}
