
use std::{collections::BTreeSet, rc::Rc};

use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;

use crate::{client::store::user::UserState, model::user::UserDto};

pub fn signed_in() -> UserState {
    UserState {
        user: Some(UserDto {
            id: "user_1".to_string(),
            name: "Ada".to_string(),
            image_url: None,
        }),
        fetched: true,
    }
}

pub fn signed_out() -> UserState {
    UserState {
        user: None,
        fetched: true,
    }
}

/// Render `root` to HTML with `state` as its props and an in-memory history at `/`
pub fn render(root: fn(UserState) -> Element, state: UserState) -> String {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path("/"));

    let mut dom = VirtualDom::new_with_props(root, state).with_root_context(history);
    dom.rebuild_in_place();

    dioxus_ssr::render(&dom)
}

/// Every `href` in the rendered HTML
pub fn hrefs(html: &str) -> BTreeSet<&str> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}
