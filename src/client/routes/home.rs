use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{AuthTriggerButton, Page};
use crate::client::store::user::UserState;
use crate::model::auth::landing_trigger;

/// Sign-in or sign-out trigger for the current visitor
///
/// Renders nothing until the provider has reported whether a session exists.
#[component]
pub fn LandingTrigger() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let Some(flag) = user_store.read().auth_flag() else {
        return rsx!();
    };

    rsx!(
        AuthTriggerButton { trigger: landing_trigger(flag) }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "trainium.ai" }
        Meta {
            name: "description",
            content: "Personalised fitness programs generated for you."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                h1 { class: "text-2xl font-bold",
                    "Home Page"
                }
                LandingTrigger { }
            }
        }
    )
}
