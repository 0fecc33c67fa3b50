//! Search page component

use dioxus::prelude::*;

/// Canned entries shown under the search box.
const RECENT_SEARCHES: [&str; 4] = [
    "React Patterns",
    "Lo-Fi Music",
    "Job Applications",
    "Design Systems",
];

/// Search page - input and recent searches.
///
/// The query is not executed against the store.
// TODO: wire the input to a filtered `resources` query once search is
// worth more than the chips below.
#[component]
pub fn Search() -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        div {
            class: "pt-20 px-6 text-white min-h-screen pb-24 bg-slate-950",

            h1 {
                class: "text-3xl font-bold bg-gradient-to-r from-deep-violet-400 to-electric-blue-400 bg-clip-text text-transparent mb-8",
                "Search"
            }

            // Search box
            div {
                class: "relative mb-8 group",
                div {
                    class: "absolute -inset-1 bg-gradient-to-r from-deep-violet-600 to-electric-blue-600 rounded-2xl opacity-20 group-focus-within:opacity-50 transition duration-500 blur-lg",
                }
                div {
                    class: "relative bg-slate-900 rounded-2xl flex items-center p-1 border border-white/10 group-focus-within:border-white/30 transition-colors",
                    span { class: "ml-4 text-slate-400", "\u{1F50D}" }
                    input {
                        r#type: "text",
                        placeholder: "Find resources...",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                        class: "w-full bg-transparent px-4 py-3 outline-none text-white placeholder-slate-500"
                    }
                    button {
                        class: "p-3 rounded-xl bg-slate-800 hover:bg-slate-700 text-slate-400 hover:text-white transition-colors",
                        "\u{2192}"
                    }
                }
            }

            // Recent searches
            div {
                class: "space-y-6",
                h3 {
                    class: "text-sm font-medium text-slate-500 uppercase tracking-widest pl-2",
                    "Recent Searches"
                }
                div {
                    class: "flex flex-wrap gap-2",
                    for item in RECENT_SEARCHES {
                        button {
                            key: "{item}",
                            class: "px-4 py-2 rounded-full bg-slate-800/50 hover:bg-slate-800 text-slate-300 text-sm border border-white/5 transition-colors",
                            onclick: move |_| query.set(item.to_string()),
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}
