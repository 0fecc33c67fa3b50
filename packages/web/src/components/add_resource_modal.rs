//! Add-resource modal
//!
//! Thin shell over the form state machine in `crate::form`: every user
//! gesture becomes a `FormAction`, and the machine's commands drive the
//! insert/invalidate/close sequence.

use dioxus::prelude::*;

use crate::components::LoadingDots;
use crate::data::insert_resource;
use crate::form::{FormAction, FormCommand, ModalStep, ResourceForm};
use crate::resources::use_resources;
use crate::state::use_add_modal;
use crate::types::{Category, ResourceKind};

/// Delay before transient state resets after closing, so the exit
/// animation finishes on what the user last saw.
#[cfg(feature = "web")]
const CLOSE_RESET_MS: u32 = 300;

/// Two-step add-resource flow: pick a kind, fill the fields, save.
#[component]
pub fn AddResourceModal() -> Element {
    let modal = use_add_modal();
    let resources = use_resources();
    let mut form = use_signal(ResourceForm::default);

    let is_open = (modal.is_open)();
    if !is_open {
        return rsx! {};
    }

    // Closes from any step; transient state resets once the exit
    // animation has run.
    let close_modal = move || {
        modal.close();
        spawn(async move {
            #[cfg(feature = "web")]
            gloo_timers::future::TimeoutFuture::new(CLOSE_RESET_MS).await;
            form.write().apply(FormAction::Reset);
        });
    };

    let handle_submit = move |_| {
        let command = form.write().apply(FormAction::Submit);
        let Some(FormCommand::Insert(new_resource)) = command else {
            return;
        };

        let resources = resources.clone();
        spawn(async move {
            match insert_resource(new_resource).await {
                Ok(()) => {
                    // Insert happened-before this refetch; close comes last.
                    resources.invalidate();
                    if let Some(FormCommand::Close) =
                        form.write().apply(FormAction::SubmitSucceeded)
                    {
                        close_modal();
                    }
                }
                Err(e) => {
                    form.write().apply(FormAction::SubmitFailed(e.to_string()));
                }
            }
        });
    };

    let current = form.read().clone();
    let step = current.step();
    let fields = current.fields().clone();
    let heading = match (step, current.kind()) {
        (ModalStep::Select, _) | (_, None) => "Add New Resource".to_string(),
        (_, Some(kind)) => format!("New {}", kind.label()),
    };

    rsx! {
        div {
            class: "fixed inset-0 z-[60] flex items-end sm:items-center justify-center",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    close_modal();
                }
            },

            // Backdrop
            div {
                class: "absolute inset-0 bg-slate-950/80 backdrop-blur-sm",
                onclick: move |_| close_modal(),
            }

            // Modal panel
            div {
                class: "relative w-full max-w-md bg-slate-900 border-t border-white/10 rounded-t-3xl sm:rounded-2xl p-6 pt-2 shadow-2xl max-h-[90vh] overflow-y-auto",

                // Drag handle
                div { class: "mx-auto w-12 h-1.5 bg-slate-700 rounded-full mb-6 mt-2 sm:hidden" }

                // Header
                div {
                    class: "flex justify-between items-center mb-6",
                    div {
                        class: "flex items-center gap-3",
                        if step != ModalStep::Select {
                            button {
                                class: "p-1 rounded-full hover:bg-slate-800 text-slate-400 hover:text-white",
                                onclick: move |_| { form.write().apply(FormAction::Back); },
                                "\u{2190}"
                            }
                        }
                        h2 {
                            class: "text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-white to-slate-400",
                            "{heading}"
                        }
                    }
                    button {
                        class: "p-2 hover:bg-slate-800 rounded-full text-slate-400 hover:text-white transition-colors",
                        onclick: move |_| close_modal(),
                        "\u{2715}"
                    }
                }

                // Error banner
                if let Some(error) = current.error() {
                    div {
                        class: "mb-4 p-3 bg-red-500/10 border border-red-500/20 rounded-lg text-red-400 text-sm",
                        "{error}"
                    }
                }

                if step == ModalStep::Select {
                    // Step 1: choose a kind
                    div {
                        class: "grid grid-cols-1 gap-4 mb-2",
                        for kind in ResourceKind::variants() {
                            {
                                let kind = *kind;
                                rsx! {
                                    button {
                                        key: "{kind.label()}",
                                        class: "flex items-center gap-4 p-4 rounded-xl bg-slate-800/50 hover:bg-slate-800 border border-white/5 hover:border-electric-blue-500/30 transition-all group",
                                        onclick: move |_| { form.write().apply(FormAction::ChooseKind(kind)); },
                                        div {
                                            class: "p-3 rounded-lg bg-gradient-to-br {kind_gradient(kind)} shadow-lg text-white text-2xl group-hover:scale-110 transition-transform",
                                            "{kind.icon()}"
                                        }
                                        span {
                                            class: "font-medium text-lg text-slate-200 group-hover:text-white transition-colors",
                                            "{kind.picker_label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    // Step 2: fill fields and save
                    form {
                        class: "space-y-4",
                        onsubmit: handle_submit,

                        // Title
                        div {
                            label {
                                class: "block text-sm font-semibold text-slate-400 uppercase tracking-wider mb-1",
                                if fields.category == Category::Jobs { "Heading / Role" } else { "Title" }
                            }
                            input {
                                r#type: "text",
                                required: true,
                                placeholder: if fields.category == Category::Jobs {
                                    "e.g. Senior React Developer"
                                } else {
                                    "e.g. Project Ideas"
                                },
                                value: "{fields.title}",
                                oninput: move |e| { form.write().apply(FormAction::SetTitle(e.value())); },
                                class: "w-full bg-slate-800 border border-white/10 rounded-xl px-4 py-3 text-white focus:outline-none focus:border-electric-blue-500 focus:ring-1 focus:ring-electric-blue-500 transition-all placeholder:text-slate-600"
                            }
                        }

                        // Category
                        div {
                            label {
                                class: "block text-sm font-semibold text-slate-400 uppercase tracking-wider mb-1",
                                "Category"
                            }
                            select {
                                value: "{fields.category.label()}",
                                onchange: move |e| {
                                    if let Some(category) = Category::from_label(&e.value()) {
                                        form.write().apply(FormAction::SetCategory(category));
                                    }
                                },
                                class: "w-full bg-slate-800 border border-white/10 rounded-xl px-4 py-3 text-white appearance-none focus:outline-none focus:border-electric-blue-500 focus:ring-1 focus:ring-electric-blue-500 transition-all cursor-pointer",
                                for category in Category::variants() {
                                    option {
                                        key: "{category.label()}",
                                        value: "{category.label()}",
                                        selected: fields.category == *category,
                                        class: "bg-slate-900 text-white",
                                        "{category.label()}"
                                    }
                                }
                            }
                        }

                        // Jobs-only apply date
                        if fields.category == Category::Jobs {
                            div {
                                label {
                                    class: "block text-sm font-semibold text-electric-blue-400 uppercase tracking-wider mb-1",
                                    "Last Apply Date"
                                }
                                input {
                                    r#type: "date",
                                    value: "{fields.last_apply_date}",
                                    oninput: move |e| { form.write().apply(FormAction::SetLastApplyDate(e.value())); },
                                    class: "w-full bg-slate-800 border border-electric-blue-500/30 rounded-xl px-4 py-3 text-white focus:outline-none focus:border-electric-blue-500 focus:ring-1 focus:ring-electric-blue-500 transition-all"
                                }
                            }
                        }

                        // Kind-specific content
                        match current.kind() {
                            Some(ResourceKind::Note) => rsx! {
                                div {
                                    label {
                                        class: "block text-sm font-semibold text-slate-400 uppercase tracking-wider mb-1",
                                        "Content"
                                    }
                                    textarea {
                                        rows: "4",
                                        placeholder: "Type your note here...",
                                        value: "{fields.content}",
                                        oninput: move |e| { form.write().apply(FormAction::SetContent(e.value())); },
                                        class: "w-full bg-slate-800 border border-white/10 rounded-xl px-4 py-3 text-white focus:outline-none focus:border-electric-blue-500 focus:ring-1 focus:ring-electric-blue-500 transition-all placeholder:text-slate-600 resize-none"
                                    }
                                }
                            },
                            Some(ResourceKind::Link) => rsx! {
                                div {
                                    label {
                                        class: "block text-sm font-semibold text-slate-400 uppercase tracking-wider mb-1",
                                        "URL"
                                    }
                                    input {
                                        r#type: "url",
                                        placeholder: "https://example.com",
                                        value: "{fields.content}",
                                        oninput: move |e| { form.write().apply(FormAction::SetContent(e.value())); },
                                        class: "w-full bg-slate-800 border border-white/10 rounded-xl px-4 py-3 text-white focus:outline-none focus:border-electric-blue-500 focus:ring-1 focus:ring-electric-blue-500 transition-all placeholder:text-slate-600"
                                    }
                                }
                            },
                            Some(ResourceKind::Image) => rsx! {
                                div {
                                    class: "border-2 border-dashed border-slate-700 hover:border-slate-500 rounded-xl p-8 flex flex-col items-center justify-center text-center transition-colors cursor-pointer bg-slate-800/20",
                                    span { class: "text-slate-500 mb-2 text-3xl", "\u{2601}" }
                                    p { class: "text-sm text-slate-400 font-medium", "Click to upload image" }
                                    p {
                                        class: "text-xs text-slate-600 mt-1",
                                        "(Image upload not fully implemented without Storage bucket)"
                                    }
                                }
                            },
                            None => rsx! {},
                        }

                        // Submit
                        button {
                            r#type: "submit",
                            disabled: current.is_submitting(),
                            class: "w-full bg-gradient-to-r from-deep-violet-600 to-electric-blue-600 hover:from-deep-violet-500 hover:to-electric-blue-500 text-white font-bold py-4 rounded-xl shadow-lg shadow-electric-blue-500/20 transition-all flex items-center justify-center gap-2 mt-4 disabled:opacity-60",
                            if current.is_submitting() {
                                LoadingDots {}
                            } else {
                                "Save Resource"
                            }
                        }
                    }
                }

                p {
                    class: "text-center text-xs text-slate-500 mt-6",
                    "Files will be saved to your private dashboard."
                }
            }
        }
    }
}

fn kind_gradient(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Image => "from-purple-500 to-indigo-500",
        ResourceKind::Link => "from-blue-500 to-cyan-500",
        ResourceKind::Note => "from-yellow-500 to-orange-500",
    }
}
