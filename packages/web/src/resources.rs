//! Resource collection context: the app's single query-cache instance.
//!
//! One process-wide cache under the `resources` key, created by the
//! provider and handed to the tree through context. Views read snapshots
//! reactively; mutations call `invalidate()` after the write lands.

use std::rc::Rc;

use dioxus::prelude::*;
use futures::FutureExt;

use crate::cache::{QueryCache, QuerySnapshot};
use crate::data::{list_resources, RESOURCES_QUERY_KEY};
use crate::types::Resource;

#[derive(Clone)]
pub struct ResourcesContext {
    /// Reactive mirror of the cache snapshot; reading it subscribes the
    /// component to collection changes.
    pub snapshot: Signal<QuerySnapshot<Vec<Resource>>>,
    cache: QueryCache<Vec<Resource>>,
}

impl ResourcesContext {
    /// Mark the collection stale and refetch in the background.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }
}

/// Provider component that owns the cache for the whole app.
#[component]
pub fn ResourcesProvider(children: Element) -> Element {
    let snapshot = use_signal(QuerySnapshot::<Vec<Resource>>::default);

    let cache = use_hook(|| {
        let cache = QueryCache::new(
            RESOURCES_QUERY_KEY,
            Rc::new(|| {
                async move { list_resources().await.map_err(|e| e.to_string()) }.boxed_local()
            }),
            Rc::new(|fut| {
                spawn(fut);
            }),
        );

        let mirror = snapshot;
        cache.subscribe(move |snap| {
            let mut mirror = mirror;
            mirror.set(snap.clone());
        });
        cache
    });

    use_context_provider(|| ResourcesContext {
        snapshot,
        cache: cache.clone(),
    });

    // First fetch happens client-side once the app mounts.
    let loader = cache.clone();
    use_effect(move || loader.load());

    children
}

/// Hook to access the resource collection context.
pub fn use_resources() -> ResourcesContext {
    use_context::<ResourcesContext>()
}
