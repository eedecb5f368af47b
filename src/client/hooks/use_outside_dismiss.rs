use dioxus::prelude::*;

use crate::client::menu::MenuState;

/// Close `menu` when the visitor interacts outside the elements with the given ids
///
/// Document listeners are attached only while the menu is open and removed when it closes
/// or the calling component is dropped.
#[cfg(feature = "web")]
pub fn use_outside_dismiss(menu: Signal<MenuState>, region_ids: &'static [&'static str]) {
    use std::{cell::RefCell, rc::Rc};

    use dioxus_logger::tracing;

    use crate::client::{
        dismiss::{document::DocumentHost, DismissSlot, OutsideDismiss, Region},
        menu::MenuEvent,
    };

    let slot = use_hook(|| Rc::new(RefCell::new(DismissSlot::<DocumentHost>::new())));

    {
        let slot = Rc::clone(&slot);
        use_effect(move || {
            let open = menu().is_open();

            slot.borrow_mut().sync(open, move || {
                let Some(host) = DocumentHost::current() else {
                    tracing::warn!("No document available, menu will not close on outside clicks");
                    return None;
                };

                let regions: Vec<Box<dyn Region<web_sys::Node>>> = region_ids
                    .iter()
                    .map(|&id| Box::new(host.region(id)) as Box<dyn Region<web_sys::Node>>)
                    .collect();

                Some(OutsideDismiss::acquire(host, regions, move || {
                    let mut menu = menu;
                    let next = menu.peek().transition(MenuEvent::OutsidePointer);
                    menu.set(next);
                }))
            });
        });
    }

    use_drop(move || slot.borrow_mut().clear());
}

/// Without a browser document there is nothing to listen on, the navbar renders a backdrop that
/// applies the outside interaction instead
#[cfg(not(feature = "web"))]
pub fn use_outside_dismiss(menu: Signal<MenuState>, region_ids: &'static [&'static str]) {
    let _ = (menu, region_ids);
}
