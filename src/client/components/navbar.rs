use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaDumbbell, FaHouse, FaUser, FaXmark};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

use crate::{
    client::{
        components::{AuthTriggerButton, TrainiumLogo, UserButton},
        hooks::use_outside_dismiss,
        menu::{MenuEvent, MenuState},
        nav::{nav_actions, nav_links, NavAction, NavIcon},
        store::user::UserState,
    },
    model::auth::AuthFlag,
};

const MENU_PANEL_ID: &str = "mobile-menu-panel";
const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";

fn apply_menu_event(mut menu: Signal<MenuState>, event: MenuEvent) {
    let next = menu.peek().transition(event);
    menu.set(next);
}

#[component]
fn NavLinkIcon(icon: NavIcon, size: u32) -> Element {
    match icon {
        NavIcon::Home => rsx!(Icon { width: size, height: size, icon: FaHouse }),
        NavIcon::Generate => rsx!(Icon { width: size, height: size, icon: FaDumbbell }),
        NavIcon::Profile => rsx!(Icon { width: size, height: size, icon: FaUser }),
    }
}

/// Account action, closing `menu` on navigation when rendered in the mobile panel
#[component]
fn NavActionItem(action: NavAction, menu: Signal<MenuState>, in_panel: bool) -> Element {
    let closes_menu = in_panel && action.closes_menu();

    match action {
        NavAction::GetStarted => rsx!(
            Link {
                to: Route::GenerateProgram {},
                class: "btn btn-outline btn-primary",
                onclick: move |_| {
                    if closes_menu {
                        apply_menu_event(menu, MenuEvent::LinkActivated);
                    }
                },
                "Get Started"
            }
        ),
        NavAction::UserButton => rsx!(UserButton {}),
        NavAction::Trigger(trigger) => rsx!(AuthTriggerButton { trigger }),
    }
}

#[component]
fn DesktopNav(flag: AuthFlag, menu: Signal<MenuState>) -> Element {
    rsx! {
        for link in nav_links(flag) {
            Link {
                key: "{link.label}",
                to: link.route.clone(),
                class: "flex items-center gap-1.5 text-sm hover:text-primary transition-colors",
                NavLinkIcon { icon: link.icon, size: 16 }
                span { "{link.label}" }
            }
        }
        for action in nav_actions(flag).iter().copied() {
            NavActionItem { key: "{action:?}", action, menu, in_panel: false }
        }
    }
}

/// Contents of the open mobile panel, every link closes the menu
#[component]
fn MobileMenuItems(flag: AuthFlag, menu: Signal<MenuState>) -> Element {
    rsx! {
        for link in nav_links(flag) {
            Link {
                key: "{link.label}",
                to: link.route.clone(),
                class: "flex items-center gap-2 p-2 hover:bg-primary/10 rounded transition-colors",
                onclick: move |_| apply_menu_event(menu, MenuEvent::LinkActivated),
                NavLinkIcon { icon: link.icon, size: 18 }
                span { "{link.label}" }
            }
        }
        div {
            class: "flex flex-col gap-3 p-2",
            for action in nav_actions(flag).iter().copied().filter(|action| action.in_mobile_panel()) {
                NavActionItem { key: "{action:?}", action, menu, in_panel: true }
            }
        }
    }
}

/// Transparent layer under the navbar while the menu is open
///
/// Pressing anywhere on it counts as an outside interaction. Used by renderers without a
/// browser document to attach listeners to.
#[component]
fn MenuBackdrop(menu: Signal<MenuState>) -> Element {
    if !menu().is_open() {
        return rsx!();
    }

    rsx!(
        div {
            class: "fixed inset-0 z-40 md:hidden",
            aria_hidden: "true",
            onmousedown: move |_| apply_menu_event(menu, MenuEvent::OutsidePointer),
            ontouchstart: move |_| apply_menu_event(menu, MenuEvent::OutsidePointer),
        }
    )
}

#[component]
pub fn Navbar() -> Element {
    let user_store = use_context::<Signal<UserState>>();
    let menu = use_signal(MenuState::default);

    use_outside_dismiss(menu, &[MENU_PANEL_ID, MENU_TOGGLE_ID]);

    let auth_flag = user_store.read().auth_flag();
    let menu_open = menu().is_open();

    rsx! {
        if !cfg!(feature = "web") {
            MenuBackdrop { menu }
        }

        header {
            class: "fixed top-0 left-0 right-0 z-50 bg-base-100/60 backdrop-blur-md border-b border-base-300 py-3",
            div {
                class: "container mx-auto flex items-center justify-between",
                TrainiumLogo {}

                nav {
                    class: "hidden md:flex items-center gap-5",
                    if let Some(flag) = auth_flag {
                        DesktopNav { flag, menu }
                    }
                }

                div {
                    class: "md:hidden flex items-center gap-2",
                    if auth_flag.is_some_and(AuthFlag::is_signed_in) {
                        UserButton {}
                    }
                    button {
                        id: MENU_TOGGLE_ID,
                        class: "btn btn-ghost btn-square",
                        aria_label: "Toggle menu",
                        onclick: move |_| apply_menu_event(menu, MenuEvent::Toggle),
                        if menu_open {
                            Icon { width: 20, height: 20, icon: FaXmark }
                        } else {
                            Icon { width: 20, height: 20, icon: FaBars }
                        }
                    }
                }
            }

            if menu_open {
                div {
                    id: MENU_PANEL_ID,
                    class: "md:hidden absolute top-full left-0 right-0 bg-base-100 border-b border-base-300 shadow-lg",
                    div {
                        class: "container mx-auto py-4 flex flex-col gap-4",
                        if let Some(flag) = auth_flag {
                            MobileMenuItems { flag, menu }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests;
