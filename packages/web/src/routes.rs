//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::Shell;
use crate::pages::{Home, Search};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},

        #[route("/search")]
        Search {},
}
