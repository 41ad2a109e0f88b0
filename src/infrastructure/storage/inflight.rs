// Process-local de-duplication of concurrent remote translation calls.
use crate::domain::model::Resolution;
use dashmap::DashMap;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::future::Future;
use std::sync::Arc;

/// Registry of pending remote resolutions, keyed by
/// `TranslationRequest::dedupe_key`.
///
/// Concurrent callers for the identical tuple share one outstanding
/// call instead of dispatching duplicates. Entries are removed
/// unconditionally once the call settles, so the map only ever holds
/// in-flight work. Process-local: separate processes may still issue
/// duplicate calls, which is acceptable since every upsert is
/// independently keyed.
pub struct InflightRegistry {
    pending: Arc<DashMap<String, Shared<BoxFuture<'static, Resolution>>>>,
}

impl InflightRegistry {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(DashMap::new()),
        }
    }

    /// Attach to the pending resolution for `key`, or register and run
    /// `dispatch` if none is in flight. `dispatch` is only polled when
    /// this caller is the one that registered it.
    pub async fn run_or_join<F>(&self, key: String, dispatch: F) -> Resolution
    where
        F: Future<Output = Resolution> + Send + 'static,
    {
        use dashmap::mapref::entry::Entry;

        let shared = match self.pending.entry(key.clone()) {
            Entry::Occupied(existing) => existing.get().clone(),
            Entry::Vacant(slot) => {
                let pending = Arc::clone(&self.pending);
                let fut = async move {
                    let resolution = dispatch.await;
                    pending.remove(&key);
                    resolution
                }
                .boxed()
                .shared();
                slot.insert(fut.clone());
                fut
            }
        };

        shared.await
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for InflightRegistry {
    fn default() -> Self {
        Self::new()
    }
}
