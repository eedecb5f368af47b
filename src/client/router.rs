use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{GenerateProgram, Home, NotFound, Profile},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/generate-program")]
    GenerateProgram {},

    #[route("/profile")]
    Profile {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
