use dioxus::prelude::*;

use crate::{
    client::{components::AuthTriggerButton, router::Route, store::user::UserState},
    model::auth::AuthTrigger,
};

/// Account avatar opening a menu with the profile and sign-out
#[component]
pub fn UserButton() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let user = user_store.read();
    let Some(user) = user.user.as_ref() else {
        return rsx!();
    };

    let initial = user
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    rsx!(
        div { class: "dropdown dropdown-end",
            div {
                tabindex: 0,
                role: "button",
                class: "btn btn-ghost btn-circle avatar",
                aria_label: "Account",
                if let Some(image_url) = user.image_url.as_ref() {
                    div { class: "w-8 rounded-full",
                        img {
                            src: "{image_url}",
                            alt: "{user.name}",
                        }
                    }
                } else {
                    div { class: "w-8 rounded-full bg-primary text-primary-content flex items-center justify-center",
                        span { "{initial}" }
                    }
                }
            }
            ul {
                tabindex: 0,
                class: "dropdown-content menu bg-base-200 rounded-box z-10 mt-3 w-52 p-2 shadow",
                li { class: "menu-title", "{user.name}" }
                li {
                    Link { to: Route::Profile {}, "Profile" }
                }
                li {
                    AuthTriggerButton {
                        trigger: AuthTrigger::SignOut,
                        class: "btn btn-ghost btn-sm justify-start"
                    }
                }
            }
        }
    )
}
