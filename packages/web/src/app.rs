//! Root application component

use dioxus::prelude::*;

use crate::components::AppErrorBoundary;
use crate::resources::ResourcesProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // The boundary is the only crash path: anything a page throws
        // renders as the fallback screen instead of a blank app.
        AppErrorBoundary {
            ResourcesProvider {
                Router::<Route> {}
            }
        }
    }
}
