//! Resource card component

use dioxus::prelude::*;

use crate::data::delete_resource;
use crate::resources::use_resources;
use crate::types::{Category, Resource, ResourceKind};

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub resource: Resource,
}

/// One card in the masonry grid. Notes are tinted and expandable; links
/// and images render their URL. Expansion state is local to the card and
/// resets whenever the grid remounts it.
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let resource = props.resource.clone();
    let resources = use_resources();
    let mut is_expanded = use_signal(|| false);

    let is_note = resource.kind == ResourceKind::Note;
    let styles = card_styles(resource.kind, resource.category);
    let apply_date = resource.last_apply_date.as_deref().map(format_date);

    let id = resource.id;
    let handle_delete = move |e: MouseEvent| {
        e.stop_propagation();
        if !confirm_delete() {
            return;
        }
        let resources = resources.clone();
        spawn(async move {
            match delete_resource(id).await {
                // The card disappears on the refetch, not before.
                Ok(()) => resources.invalidate(),
                Err(e) => alert_failure(&format!("Failed to delete resource: {e}")),
            }
        });
    };

    rsx! {
        div {
            class: "break-inside-avoid mb-3 group relative overflow-hidden rounded-xl border backdrop-blur-md shadow-sm hover:shadow-md transition-all duration-300 {styles.container}",
            onclick: move |_| {
                if is_note {
                    let expanded = is_expanded();
                    is_expanded.set(!expanded);
                }
            },

            div {
                class: "p-4",

                // Header: category badge, kind icon, actions
                div {
                    class: "flex justify-between items-start mb-2",
                    div {
                        class: "flex items-center gap-2",
                        span {
                            class: "text-xs font-bold uppercase tracking-wider px-2 py-0.5 rounded-full {styles.badge}",
                            "{resource.category.label()}"
                        }
                        span { class: "text-xs opacity-60", "{resource.kind.icon()}" }
                    }
                    div {
                        class: "flex items-center gap-1",
                        button {
                            class: "p-1.5 rounded-full transition-colors hover:bg-black/20 {styles.delete_button}",
                            onclick: handle_delete,
                            svg {
                                class: "w-3.5 h-3.5",
                                fill: "none",
                                stroke: "currentColor",
                                view_box: "0 0 24 24",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    stroke_width: "2",
                                    d: "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"
                                }
                            }
                        }
                        if is_note {
                            span {
                                class: if is_expanded() {
                                    "text-white/70 ml-1 rotate-180 transition-transform"
                                } else {
                                    "text-white/70 ml-1 transition-transform"
                                },
                                "\u{25BE}"
                            }
                        }
                    }
                }

                // Title
                h3 {
                    class: if is_note {
                        "font-bold leading-tight text-lg text-white"
                    } else {
                        "font-semibold leading-tight text-white/90 text-base"
                    },
                    "{resource.title}"
                }

                // Jobs apply date
                if resource.category == Category::Jobs {
                    if let Some(apply_date) = apply_date {
                        div {
                            class: "mt-2 flex items-center gap-2 text-xs",
                            span { class: "uppercase font-bold text-white/70", "Last Applied:" }
                            span {
                                class: if is_note { "font-mono text-white/90" } else { "font-mono text-electric-blue-400" },
                                "{apply_date}"
                            }
                        }
                    }
                }

                // Kind-specific body
                div {
                    class: "mt-2",
                    match resource.kind {
                        ResourceKind::Note => rsx! {
                            if is_expanded() {
                                div {
                                    p {
                                        class: "text-white/80 text-sm leading-relaxed mt-2 pb-1",
                                        "{resource.content}"
                                    }
                                    if looks_like_link(&resource.content) {
                                        a {
                                            href: "{resource.content}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            onclick: move |e| e.stop_propagation(),
                                            class: "inline-flex items-center gap-1 mt-2 px-3 py-1.5 bg-white/20 hover:bg-white/30 rounded-lg text-xs font-bold text-white transition-colors",
                                            "Open Link \u{2197}"
                                        }
                                    }
                                }
                            }
                        },
                        ResourceKind::Link => rsx! {
                            a {
                                href: "{resource.content}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "flex items-center gap-2 text-sm text-electric-blue-400 hover:text-electric-blue-300 hover:underline truncate",
                                span { class: "truncate opacity-80", "{strip_scheme(&resource.content)}" }
                                span { "\u{2197}" }
                            }
                        },
                        ResourceKind::Image => rsx! {
                            if !resource.content.is_empty() {
                                a {
                                    href: "{resource.content}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "text-sm text-electric-blue-400 hover:underline flex items-center gap-1 mt-2 font-medium",
                                    "\u{1F5BC} Image resource"
                                }
                            } else {
                                span {
                                    class: "text-sm text-slate-500 flex items-center gap-1 mt-2",
                                    "\u{1F5BC} Image resource"
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}

// Helper struct for styling
struct CardStyles {
    container: &'static str,
    badge: &'static str,
    delete_button: &'static str,
}

/// Visual dispatch over kind and category, enumerated in one place.
fn card_styles(kind: ResourceKind, category: Category) -> CardStyles {
    match (kind, category) {
        (ResourceKind::Note, _) => CardStyles {
            container: "bg-gradient-to-br from-indigo-600 to-violet-700 border-white/10 hover:shadow-violet-500/20 cursor-pointer",
            badge: "bg-white/20 text-white",
            delete_button: "text-white/70 hover:text-red-200",
        },
        (_, Category::Jobs) => CardStyles {
            container: "bg-slate-900/60 border-white/5 hover:border-electric-blue-500/30",
            badge: "bg-blue-500/20 text-electric-blue-300",
            delete_button: "text-slate-500 hover:text-red-400",
        },
        _ => CardStyles {
            container: "bg-slate-900/60 border-white/5 hover:border-electric-blue-500/30",
            badge: "bg-purple-500/20 text-purple-300",
            delete_button: "text-slate-500 hover:text-red-400",
        },
    }
}

fn looks_like_link(content: &str) -> bool {
    content.starts_with("http") || content.starts_with("www")
}

fn strip_scheme(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string()
}

/// Render a stored `YYYY-MM-DD` date for display; anything unparsable is
/// shown as stored.
fn format_date(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// Synchronous, blocking confirmation before a delete is issued.
fn confirm_delete() -> bool {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("Are you sure you want to delete this resource?")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(feature = "web"))]
    {
        true
    }
}

fn alert_failure(message: &str) {
    tracing::error!(%message, "delete failed");
    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com/x"), "example.com/x");
        assert_eq!(strip_scheme("http://example.com"), "example.com");
        assert_eq!(strip_scheme("example.com"), "example.com");
    }

    #[test]
    fn test_format_date_renders_stored_dates() {
        assert_eq!(format_date("2024-11-20"), "11/20/2024");
        assert_eq!(format_date("2024-01-05"), "1/5/2024");
        // Unparsable input falls back to the raw value.
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_looks_like_link() {
        assert!(looks_like_link("https://example.com"));
        assert!(looks_like_link("www.example.com"));
        assert!(!looks_like_link("plain note text"));
    }
}
