//! Category filter chips

use dioxus::prelude::*;

use crate::state::CategoryFilter;

#[derive(Props, Clone, PartialEq)]
pub struct CategoryChipsProps {
    pub active_filter: Signal<CategoryFilter>,
}

/// Horizontally scrollable chip row. Selection is purely client-side.
#[component]
pub fn CategoryChips(props: CategoryChipsProps) -> Element {
    let mut active_filter = props.active_filter;

    rsx! {
        div {
            class: "flex gap-3 overflow-x-auto no-scrollbar py-2 pb-4 px-6 snap-x mask-fade-right",
            for filter in CategoryFilter::variants() {
                {
                    let filter = *filter;
                    let is_active = active_filter() == filter;
                    rsx! {
                        button {
                            key: "{filter.label()}",
                            class: if is_active {
                                "flex-none px-5 py-2.5 rounded-full text-sm font-medium transition-all duration-300 snap-center border border-transparent whitespace-nowrap backdrop-blur-sm bg-gradient-to-r from-deep-violet-600 to-electric-blue-600 text-white shadow-lg shadow-electric-blue-500/25"
                            } else {
                                "flex-none px-5 py-2.5 rounded-full text-sm font-medium transition-all duration-300 snap-center whitespace-nowrap backdrop-blur-sm bg-slate-800/40 text-slate-400 hover:bg-slate-700/50 hover:text-white border border-white/5"
                            },
                            onclick: move |_| active_filter.set(filter),
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}
