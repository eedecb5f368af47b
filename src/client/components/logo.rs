use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBolt;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn TrainiumLogo() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            class: "flex items-center gap-2",
            div { class: "p-1 bg-primary/10 rounded text-primary",
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaBolt
                }
            }
            span { class: "text-xl font-bold font-mono",
                "trainium"
                span { class: "text-primary", ".ai" }
            }
        }
    )
}
