use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn GenerateProgram() -> Element {
    rsx!(
        Title { "Generate Program | trainium.ai" }
        Page { class: "flex flex-col items-center",
            h1 { class: "text-2xl font-bold",
                "Generate Program"
            }
        }
    )
}
