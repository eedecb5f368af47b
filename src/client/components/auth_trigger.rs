use dioxus::prelude::*;

use crate::{client::config::trigger_href, model::auth::AuthTrigger};

/// Opaque hand-off to the authentication provider
#[component]
pub fn AuthTriggerButton(trigger: AuthTrigger, class: Option<&'static str>) -> Element {
    let class: &str = if let Some(class) = class {
        class
    } else {
        match trigger {
            AuthTrigger::SignUp => "btn btn-primary",
            AuthTrigger::SignIn | AuthTrigger::SignOut => "btn btn-outline btn-primary",
        }
    };

    let label = trigger.label();

    rsx!(
        a { href: trigger_href(trigger), class: "{class}",
            "{label}"
        }
    )
}
