//! Top-level fault boundary
//!
//! Catches anything a child throws during rendering and swaps in a
//! fallback screen. Reloading is always enough to recover; nothing is
//! allowed to propagate past this component.

use dioxus::prelude::*;

/// Supervising wrapper around the whole app tree.
#[component]
pub fn AppErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                let messages: Vec<String> =
                    errors.errors().iter().map(|e| e.to_string()).collect();
                for message in &messages {
                    tracing::error!(%message, "unhandled render error");
                }
                rsx! { CrashScreen { messages } }
            },
            {children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CrashScreenProps {
    messages: Vec<String>,
}

#[component]
fn CrashScreen(props: CrashScreenProps) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-slate-950 flex flex-col items-center justify-center p-6 text-center text-white",
            div {
                class: "bg-red-500/10 p-4 rounded-full mb-4 text-4xl",
                "\u{26A0}"
            }
            h1 { class: "text-2xl font-bold mb-2", "Something went wrong" }
            p {
                class: "text-slate-400 mb-6 max-w-md",
                "The application encountered an unexpected error."
            }
            div {
                class: "bg-slate-900 border border-white/10 rounded-lg p-4 text-left max-w-lg w-full overflow-auto max-h-60 mb-6",
                for message in props.messages.iter() {
                    p { class: "text-red-400 font-mono text-xs mb-2", "{message}" }
                }
            }
            button {
                class: "px-6 py-3 bg-white text-slate-950 rounded-xl font-bold hover:bg-slate-200 transition-colors",
                onclick: move |_| reload_page(),
                "Reload Application"
            }
        }
    }
}

fn reload_page() {
    #[cfg(feature = "web")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
