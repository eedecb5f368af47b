use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{AuthTriggerButton, Page},
        store::user::UserState,
    },
    model::auth::AuthTrigger,
};

#[component]
pub fn Profile() -> Element {
    let user_store = use_context::<Signal<UserState>>();

    let user = user_store.read();
    let fetched = user.fetched;
    let user_data = user.user.as_ref();

    rsx!(
        Title { "Profile | trainium.ai" }
        Page { class: "flex flex-col items-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body items-center",
                    h2 { class: "card-title",
                        "Profile"
                    }
                    if let Some(user) = user_data {
                        if let Some(image_url) = user.image_url.as_ref() {
                            div { class: "avatar",
                                div { class: "w-24 rounded-full",
                                    img {
                                        src: "{image_url}",
                                        alt: "{user.name}",
                                    }
                                }
                            }
                        }
                        p { class: "text-lg font-semibold mt-2",
                            "{user.name}"
                        }
                    } else if fetched {
                        p { "Sign in to see your profile." }
                        AuthTriggerButton { trigger: AuthTrigger::SignIn }
                    } else {
                        div { class: "skeleton h-24 w-24 rounded-full" }
                        div { class: "skeleton h-6 w-40 mt-2" }
                    }
                }
            }
        }
    )
}
