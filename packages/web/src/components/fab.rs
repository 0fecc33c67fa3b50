//! Floating action button

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FabProps {
    pub on_click: EventHandler<MouseEvent>,
}

/// Floating add button, fixed above the bottom bar.
#[component]
pub fn Fab(props: FabProps) -> Element {
    rsx! {
        button {
            class: "bg-gradient-to-tr from-deep-violet-600 to-electric-blue-500 text-white p-4 rounded-full shadow-lg shadow-deep-violet-500/40 fixed bottom-24 right-6 z-50 md:right-10 flex items-center justify-center backdrop-blur-sm border-2 border-white/20 hover:scale-110 transition-transform",
            onclick: move |e| props.on_click.call(e),
            svg {
                class: "w-7 h-7",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "3",
                    d: "M12 4v16m8-8H4"
                }
            }
        }
    }
}
