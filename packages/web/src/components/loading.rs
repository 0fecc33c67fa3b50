//! Loading components

use dioxus::prelude::*;

/// Bouncing-dot loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-2",
            div { class: "w-3 h-3 bg-electric-blue-400 rounded-full animate-bounce" }
            div { class: "w-3 h-3 bg-electric-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-3 h-3 bg-electric-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}

/// Smaller inline variant for buttons.
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-1",
            div { class: "w-2 h-2 bg-white/70 rounded-full animate-bounce" }
            div { class: "w-2 h-2 bg-white/70 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-2 h-2 bg-white/70 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
