//! Home page component

use dioxus::prelude::*;

use crate::components::{CategoryChips, Fab, LoadingSpinner, ResourceGrid};
use crate::data::is_store_configured;
use crate::resources::use_resources;
use crate::state::{use_add_modal, CategoryFilter};

/// Home page - the masonry board of saved resources with category filtering
#[component]
pub fn Home() -> Element {
    let resources = use_resources();
    let configured = use_server_future(is_store_configured)?;

    let active_filter = use_signal(|| CategoryFilter::All);
    let add_modal = use_add_modal();

    // Derive the filtered collection; order comes from the cache (newest
    // first) and is preserved.
    let snapshot_signal = resources.snapshot;
    let filtered = use_memo(move || {
        let snapshot = snapshot_signal.read();
        snapshot
            .data
            .clone()
            .unwrap_or_default()
            .into_iter()
            .filter(|resource| active_filter().matches(resource))
            .collect::<Vec<_>>()
    });

    let snapshot = resources.snapshot.read().clone();
    let store_ready = matches!(configured.value().read().as_ref(), Some(Ok(true)));

    rsx! {
        div {
            class: "pt-24 pb-24 min-h-screen bg-slate-950",

            // Fixed header
            header {
                class: "fixed top-0 left-0 right-0 z-30 px-6 py-4 bg-slate-950/80 backdrop-blur-xl border-b border-white/5 flex justify-between items-center",
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "bg-gradient-to-tr from-deep-violet-600 to-electric-blue-600 p-2 rounded-xl shadow-lg shadow-electric-blue-500/20 text-xl",
                        "\u{1F431}"
                    }
                    div {
                        h1 {
                            class: "text-xl font-bold bg-gradient-to-r from-white to-slate-400 bg-clip-text text-transparent",
                            "Minion"
                        }
                        p {
                            class: "text-[10px] text-slate-500 font-medium uppercase tracking-wider",
                            "Resource Manager"
                        }
                    }
                }
                div {
                    class: "w-8 h-8 rounded-full bg-slate-800 border border-white/10 flex items-center justify-center text-xs font-bold text-slate-400",
                    "A"
                }
            }

            // Category chips
            div {
                class: "fixed top-[72px] left-0 right-0 z-20 bg-slate-950/95 backdrop-blur-xl pb-2 border-b border-white/5 shadow-2xl shadow-slate-950/50",
                CategoryChips { active_filter }
            }

            // Spacer for fixed headers
            div { class: "h-12" }

            // Content area
            if snapshot.is_loading {
                div {
                    class: "flex flex-col items-center justify-center min-h-[50vh] text-slate-500",
                    LoadingSpinner {}
                    p { class: "mt-4", "Loading resources..." }
                }
            } else if let Some(error) = snapshot.error {
                div {
                    class: "flex flex-col items-center justify-center min-h-[50vh] text-red-400 px-6 text-center",
                    p { class: "text-lg", "Error loading resources" }
                    p { class: "text-xs text-red-500/70 mt-1", "{error}" }
                }
            } else if !store_ready {
                div {
                    class: "flex flex-col items-center justify-center min-h-[50vh] text-slate-500 px-6 text-center",
                    p { "Supabase not configured." }
                    p {
                        class: "text-xs mt-2",
                        "Please add your SUPABASE_URL and SUPABASE_ANON_KEY to .env"
                    }
                }
            } else {
                ResourceGrid { resources: filtered() }
            }

            // FAB - only shown on Home
            Fab { on_click: move |_| add_modal.open() }
        }
    }
}
