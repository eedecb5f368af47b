//! Authentication state as seen by the UI.
//!
//! The authentication provider owns sessions entirely; the UI only ever observes whether the
//! current visitor is signed in and embeds the provider's trigger controls.

use serde::{Deserialize, Serialize};

/// Whether the current visitor has an active session with the authentication provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthFlag {
    SignedIn,
    SignedOut,
}

impl AuthFlag {
    pub fn from_signed_in(signed_in: bool) -> Self {
        if signed_in {
            Self::SignedIn
        } else {
            Self::SignedOut
        }
    }

    pub fn is_signed_in(self) -> bool {
        matches!(self, Self::SignedIn)
    }
}

/// A control that hands the visitor over to the authentication provider.
///
/// The UI has no knowledge of the flow behind a trigger, it only links to the provider
/// endpoint configured for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthTrigger {
    SignIn,
    SignUp,
    SignOut,
}

impl AuthTrigger {
    pub fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::SignOut => "Sign Out",
        }
    }
}

/// The single trigger shown on the landing view for a given auth state.
pub fn landing_trigger(flag: AuthFlag) -> AuthTrigger {
    match flag {
        AuthFlag::SignedIn => AuthTrigger::SignOut,
        AuthFlag::SignedOut => AuthTrigger::SignIn,
    }
}
