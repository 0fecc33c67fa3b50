//! App shell layout wrapping every routed page

use dioxus::prelude::*;

use crate::components::{AddResourceModal, BottomNav};
use crate::routes::Route;
use crate::state::AddModalState;

/// Layout component: page outlet plus the chrome shared by all routes
/// (bottom navigation and the add-resource modal).
#[component]
pub fn Shell() -> Element {
    use_context_provider(AddModalState::new);

    rsx! {
        div {
            class: "bg-slate-950 min-h-screen text-white font-sans overflow-x-hidden",

            Outlet::<Route> {}

            BottomNav {}
            AddResourceModal {}
        }
    }
}
