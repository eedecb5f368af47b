use dioxus::prelude::*;

use crate::client::{router::Route, store::user::UserState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let user_store = use_context_provider(|| Signal::new(UserState::default()));

    #[cfg(feature = "web")]
    use_effect(move || {
        use dioxus_logger::tracing;

        use crate::client::util::get_user::get_user;

        let mut user_store = user_store;
        spawn(async move {
            let user = match get_user().await {
                Ok(user) => user,
                Err(e) => {
                    tracing::error!("Failed to fetch session user: {}", e);
                    None
                }
            };

            tracing::debug!(signed_in = user.is_some(), "Fetched session state");

            let mut state = user_store.write();
            state.user = user;
            state.fetched = true;
        });
    });

    #[cfg(not(feature = "web"))]
    let _ = user_store;

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
