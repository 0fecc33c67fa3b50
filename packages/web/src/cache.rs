//! Client-side query cache for remote collections.
//!
//! One explicit cache object per key, owned by a provider component: no
//! hidden singletons. The cache holds the latest fetched value, exposes
//! `{data, is_loading, error}` snapshots to subscribers, and refetches on
//! `invalidate()`.
//!
//! Fetches are serialized: while one is in flight, any number of
//! invalidations collapse into a single queued follow-up fetch, so
//! duplicate requests never fan out and the last completed fetch is also
//! the last issued one.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

/// Point-in-time view of a cached query.
///
/// `is_loading` is true only while no data has ever resolved; refetches
/// after the first success happen in the background (stale data stays
/// visible until replaced).
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for QuerySnapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

type Fetcher<T> = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<T, String>>>;
type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;
type Subscriber<T> = Rc<dyn Fn(&QuerySnapshot<T>)>;

struct CacheInner<T> {
    snapshot: QuerySnapshot<T>,
    subscribers: Vec<Subscriber<T>>,
    loaded: bool,
    in_flight: bool,
    queued: bool,
}

/// Cache for a single query key.
///
/// The fetcher and spawner are injected so the cache runs the same under
/// the UI event loop and under a plain test executor.
pub struct QueryCache<T> {
    key: &'static str,
    inner: Rc<RefCell<CacheInner<T>>>,
    fetcher: Fetcher<T>,
    spawner: Spawner,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            inner: Rc::clone(&self.inner),
            fetcher: Rc::clone(&self.fetcher),
            spawner: Rc::clone(&self.spawner),
        }
    }
}

impl<T: Clone + 'static> QueryCache<T> {
    pub fn new(key: &'static str, fetcher: Fetcher<T>, spawner: Spawner) -> Self {
        Self {
            key,
            inner: Rc::new(RefCell::new(CacheInner {
                snapshot: QuerySnapshot::default(),
                subscribers: Vec::new(),
                loaded: false,
                in_flight: false,
                queued: false,
            })),
            fetcher,
            spawner,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn snapshot(&self) -> QuerySnapshot<T> {
        self.inner.borrow().snapshot.clone()
    }

    /// Register a callback invoked on every snapshot change.
    pub fn subscribe(&self, subscriber: impl Fn(&QuerySnapshot<T>) + 'static) {
        self.inner.borrow_mut().subscribers.push(Rc::new(subscriber));
    }

    /// Kick off the first fetch. Idempotent, so a re-running effect cannot
    /// duplicate the initial load.
    pub fn load(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.loaded {
                return;
            }
            inner.loaded = true;
        }
        self.start_fetch();
    }

    /// Mark the cached value stale and trigger a refetch.
    ///
    /// Never blocks. If a fetch is already in flight, at most one extra
    /// fetch is queued behind it, no matter how many invalidations arrive.
    pub fn invalidate(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.loaded = true;
            if inner.in_flight {
                inner.queued = true;
                return;
            }
        }
        self.start_fetch();
    }

    fn start_fetch(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight = true;
            inner.snapshot.is_loading = inner.snapshot.data.is_none();
        }
        self.notify();

        let cache = self.clone();
        (self.spawner)(Box::pin(async move {
            cache.run_fetches().await;
        }));
    }

    async fn run_fetches(&self) {
        loop {
            let result = (self.fetcher)().await;

            let run_again = {
                let mut inner = self.inner.borrow_mut();
                match result {
                    Ok(data) => {
                        inner.snapshot.data = Some(data);
                        inner.snapshot.error = None;
                    }
                    Err(message) => {
                        inner.snapshot.error = Some(message);
                    }
                }
                inner.snapshot.is_loading = false;
                if inner.queued {
                    inner.queued = false;
                    // Still nothing cached: the follow-up fetch is another
                    // first load from the UI's point of view.
                    inner.snapshot.is_loading = inner.snapshot.data.is_none();
                    true
                } else {
                    inner.in_flight = false;
                    false
                }
            };
            self.notify();

            if !run_again {
                break;
            }
        }
    }

    fn notify(&self) {
        // Collect outside the borrow so a subscriber can read the cache.
        let (snapshot, subscribers) = {
            let inner = self.inner.borrow();
            (inner.snapshot.clone(), inner.subscribers.clone())
        };
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;

    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    /// Test fetcher whose completions are driven by hand.
    struct Remote {
        pending: Rc<RefCell<VecDeque<oneshot::Sender<Result<Vec<i64>, String>>>>>,
        calls: Rc<Cell<usize>>,
    }

    impl Remote {
        fn new() -> Self {
            Self {
                pending: Rc::new(RefCell::new(VecDeque::new())),
                calls: Rc::new(Cell::new(0)),
            }
        }

        fn fetcher(&self) -> Fetcher<Vec<i64>> {
            let pending = Rc::clone(&self.pending);
            let calls = Rc::clone(&self.calls);
            Rc::new(move || {
                calls.set(calls.get() + 1);
                let (sender, receiver) = oneshot::channel();
                pending.borrow_mut().push_back(sender);
                Box::pin(async move { receiver.await.expect("fetch dropped") })
            })
        }

        fn resolve(&self, result: Result<Vec<i64>, String>) {
            let sender = self
                .pending
                .borrow_mut()
                .pop_front()
                .expect("no fetch in flight");
            sender.send(result).expect("cache dropped");
        }

        fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    fn cache_under(pool: &LocalPool, remote: &Remote) -> QueryCache<Vec<i64>> {
        let spawner = pool.spawner();
        QueryCache::new(
            "resources",
            remote.fetcher(),
            Rc::new(move |fut| {
                spawner.spawn_local(fut).expect("spawn failed");
            }),
        )
    }

    #[test]
    fn test_first_load_reports_loading_then_data() {
        let mut pool = LocalPool::new();
        let remote = Remote::new();
        let cache = cache_under(&pool, &remote);

        cache.load();
        assert!(cache.snapshot().is_loading);
        assert_eq!(cache.snapshot().data, None);

        pool.run_until_stalled();
        remote.resolve(Ok(vec![3, 2, 1]));
        pool.run_until_stalled();

        let snapshot = cache.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.data, Some(vec![3, 2, 1]));
        assert_eq!(snapshot.error, None);
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut pool = LocalPool::new();
        let remote = Remote::new();
        let cache = cache_under(&pool, &remote);

        cache.load();
        cache.load();
        pool.run_until_stalled();

        assert_eq!(remote.calls(), 1);
        assert_eq!(cache.key(), "resources");
    }

    #[test]
    fn test_invalidate_refetches_in_background() {
        let mut pool = LocalPool::new();
        let remote = Remote::new();
        let cache = cache_under(&pool, &remote);

        cache.load();
        pool.run_until_stalled();
        remote.resolve(Ok(vec![1]));
        pool.run_until_stalled();

        cache.invalidate();
        // Data stays visible and is_loading stays false while refetching.
        let snapshot = cache.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.data, Some(vec![1]));

        pool.run_until_stalled();
        remote.resolve(Ok(vec![2, 1]));
        pool.run_until_stalled();
        assert_eq!(cache.snapshot().data, Some(vec![2, 1]));
        assert_eq!(remote.calls(), 2);
    }

    #[test]
    fn test_concurrent_invalidations_collapse_to_one_queued_fetch() {
        let mut pool = LocalPool::new();
        let remote = Remote::new();
        let cache = cache_under(&pool, &remote);

        cache.load();
        pool.run_until_stalled();
        assert_eq!(remote.calls(), 1);

        // Three invalidations while the first fetch is in flight.
        cache.invalidate();
        cache.invalidate();
        cache.invalidate();
        pool.run_until_stalled();
        assert_eq!(remote.calls(), 1, "queued fetch must wait for the first");

        remote.resolve(Ok(vec![1]));
        pool.run_until_stalled();
        assert_eq!(remote.calls(), 2, "exactly one follow-up fetch");

        remote.resolve(Ok(vec![2]));
        pool.run_until_stalled();
        assert_eq!(remote.calls(), 2);
        assert_eq!(cache.snapshot().data, Some(vec![2]));
    }

    #[test]
    fn test_fetch_error_is_surfaced_and_cleared_on_success() {
        let mut pool = LocalPool::new();
        let remote = Remote::new();
        let cache = cache_under(&pool, &remote);

        cache.load();
        pool.run_until_stalled();
        remote.resolve(Err("connection refused".to_string()));
        pool.run_until_stalled();

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.error.as_deref(), Some("connection refused"));
        assert!(!snapshot.is_loading);

        cache.invalidate();
        pool.run_until_stalled();
        remote.resolve(Ok(vec![9]));
        pool.run_until_stalled();

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.error, None);
        assert_eq!(snapshot.data, Some(vec![9]));
    }

    #[test]
    fn test_refetch_error_keeps_stale_data() {
        let mut pool = LocalPool::new();
        let remote = Remote::new();
        let cache = cache_under(&pool, &remote);

        cache.load();
        pool.run_until_stalled();
        remote.resolve(Ok(vec![5]));
        pool.run_until_stalled();

        cache.invalidate();
        pool.run_until_stalled();
        remote.resolve(Err("store down".to_string()));
        pool.run_until_stalled();

        let snapshot = cache.snapshot();
        assert_eq!(snapshot.data, Some(vec![5]));
        assert_eq!(snapshot.error.as_deref(), Some("store down"));
    }

    #[test]
    fn test_subscribers_see_every_change() {
        let mut pool = LocalPool::new();
        let remote = Remote::new();
        let cache = cache_under(&pool, &remote);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        cache.subscribe(move |snapshot| {
            sink.borrow_mut()
                .push((snapshot.is_loading, snapshot.data.clone()));
        });

        cache.load();
        pool.run_until_stalled();
        remote.resolve(Ok(vec![1]));
        pool.run_until_stalled();

        let seen = seen.borrow();
        assert_eq!(seen.first(), Some(&(true, None)));
        assert_eq!(seen.last(), Some(&(false, Some(vec![1]))));
    }
}
