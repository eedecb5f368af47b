//! Destinations and account actions shown in the navigation bar.
//!
//! The desktop bar and the mobile panel render the same tables, so both layouts always offer
//! the same destinations and branch on the auth state the same way.

use crate::{
    client::router::Route,
    model::auth::{AuthFlag, AuthTrigger},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Generate,
    Profile,
}

/// A destination in the navigation bar
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

/// An entry of the account cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Call to action linking to the program generator
    GetStarted,
    /// Account avatar with access to the profile and sign-out
    UserButton,
    /// Hand-off to the authentication provider
    Trigger(AuthTrigger),
}

impl NavAction {
    /// Whether activating this action inside the mobile panel navigates away
    pub fn closes_menu(self) -> bool {
        matches!(self, Self::GetStarted)
    }

    /// The account avatar sits next to the mobile toggle instead of inside the panel
    pub fn in_mobile_panel(self) -> bool {
        !matches!(self, Self::UserButton)
    }
}

/// Destinations available for the given auth state
pub fn nav_links(flag: AuthFlag) -> Vec<NavLink> {
    match flag {
        AuthFlag::SignedIn => vec![
            NavLink {
                label: "Home",
                route: Route::Home {},
                icon: NavIcon::Home,
            },
            NavLink {
                label: "Generate",
                route: Route::GenerateProgram {},
                icon: NavIcon::Generate,
            },
            NavLink {
                label: "Profile",
                route: Route::Profile {},
                icon: NavIcon::Profile,
            },
        ],
        AuthFlag::SignedOut => Vec::new(),
    }
}

/// Account actions available for the given auth state
pub fn nav_actions(flag: AuthFlag) -> &'static [NavAction] {
    match flag {
        AuthFlag::SignedIn => &[NavAction::GetStarted, NavAction::UserButton],
        AuthFlag::SignedOut => &[
            NavAction::Trigger(AuthTrigger::SignIn),
            NavAction::Trigger(AuthTrigger::SignUp),
        ],
    }
}
