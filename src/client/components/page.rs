use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        main {
            class: "min-h-screen pt-[72px] p-4 {class}",
            {children}
        }
    )
}
