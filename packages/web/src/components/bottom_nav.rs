//! Bottom navigation bar

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::use_add_modal;

/// Fixed bottom bar: Home and Search destinations plus the add action.
#[component]
pub fn BottomNav() -> Element {
    let add_modal = use_add_modal();

    rsx! {
        nav {
            class: "fixed bottom-0 left-0 right-0 z-40 bg-slate-900/80 backdrop-blur-xl border-t border-white/10 pb-[env(safe-area-inset-bottom)] pt-2 px-6 shadow-[0_-4px_20px_rgba(0,0,0,0.3)]",
            div {
                class: "flex justify-between items-center max-w-md mx-auto h-16",

                NavTab { to: Route::Home {}, label: "Home", icon: "\u{1F3E0}" }

                // Center add button
                button {
                    class: "flex flex-col items-center justify-center w-16 h-full text-slate-400 hover:text-white transition-colors group",
                    onclick: move |_| add_modal.open(),
                    div {
                        class: "bg-gradient-to-tr from-deep-violet-500 to-electric-blue-500 p-3 rounded-full shadow-lg shadow-deep-violet-500/30 transform group-hover:scale-110 transition-transform -mt-6 border-4 border-slate-900",
                        span { class: "text-white text-xl font-bold", "+" }
                    }
                    span {
                        class: "text-[10px] mt-1 font-medium opacity-0 group-hover:opacity-100 transition-opacity absolute bottom-1",
                        "Add"
                    }
                }

                NavTab { to: Route::Search {}, label: "Search", icon: "\u{1F50D}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavTabProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn NavTab(props: NavTabProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "flex flex-col items-center justify-center w-16 h-full transition-all duration-300 relative text-electric-blue-500"
            } else {
                "flex flex-col items-center justify-center w-16 h-full transition-all duration-300 relative text-slate-400 hover:text-slate-200"
            },
            div {
                class: if is_active {
                    "absolute -top-2 left-1/2 -translate-x-1/2 w-8 h-1 bg-electric-blue-500 rounded-b-full transition-all duration-300 opacity-100 scale-100"
                } else {
                    "absolute -top-2 left-1/2 -translate-x-1/2 w-8 h-1 bg-electric-blue-500 rounded-b-full transition-all duration-300 opacity-0 scale-0"
                },
            }
            span { class: "text-xl", "{props.icon}" }
            span { class: "text-[10px] mt-1 font-medium", "{props.label}" }
        }
    }
}
