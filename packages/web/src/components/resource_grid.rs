//! Masonry grid of resource cards

use dioxus::prelude::*;

use crate::components::ResourceCard;
use crate::types::Resource;

#[derive(Props, Clone, PartialEq)]
pub struct ResourceGridProps {
    pub resources: Vec<Resource>,
}

/// CSS-columns masonry layout; cards keep the order the cache returned.
#[component]
pub fn ResourceGrid(props: ResourceGridProps) -> Element {
    if props.resources.is_empty() {
        return rsx! {
            div {
                class: "flex flex-col items-center justify-center min-h-[50vh] text-slate-500",
                p { "No resources found." }
            }
        };
    }

    rsx! {
        div {
            class: "columns-2 md:columns-3 lg:columns-4 gap-4 px-4 pb-32 space-y-4",
            for resource in props.resources.iter() {
                ResourceCard { key: "{resource.id}", resource: resource.clone() }
            }
        }
    }
}
