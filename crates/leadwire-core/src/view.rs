// ── Reactive view-state primitives ──
//
// Last-fetch-wins storage for the slices that rendering reads. A slice is
// only ever replaced wholesale with a complete payload, so consumers can
// never observe a mixture of two backend snapshots for the same resource.
// Mutations are broadcast to subscribers via `watch` channels.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// An ordered collection slice owned by exactly one component.
///
/// Readers get cheap `Arc` snapshots; writers replace the whole slice.
/// Every replacement bumps a version counter, which tests and consumers
/// can use to detect whether a refresh actually landed.
pub(crate) struct ViewSlice<T: Send + Sync + 'static> {
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
    version: watch::Sender<u64>,
}

impl<T: Send + Sync + 'static> ViewSlice<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (version, _) = watch::channel(0u64);
        Self { snapshot, version }
    }

    /// Replace the slice with a complete new payload (last fetch wins).
    pub(crate) fn replace(&self, items: Vec<T>) {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(items));
        self.version.send_modify(|v| *v += 1);
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub(crate) fn subscribe(&self) -> SliceStream<T> {
        SliceStream::new(self.snapshot.subscribe())
    }

    /// Number of replacements applied so far.
    pub(crate) fn version(&self) -> u64 {
        *self.version.borrow()
    }
}

/// A single-value view cell (stats, automation status).
///
/// `None` until the first confirmed fetch lands.
pub(crate) struct ValueCell<T: Send + Sync + 'static> {
    value: watch::Sender<Option<Arc<T>>>,
}

impl<T: Send + Sync + 'static> ValueCell<T> {
    pub(crate) fn new() -> Self {
        let (value, _) = watch::channel(None);
        Self { value }
    }

    pub(crate) fn replace(&self, value: T) {
        self.value.send_replace(Some(Arc::new(value)));
    }

    pub(crate) fn get(&self) -> Option<Arc<T>> {
        self.value.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.value.subscribe()
    }
}

/// A subscription to one view slice.
///
/// Provides point-in-time snapshot access plus reactive change
/// notification via [`changed`](Self::changed) or conversion to a
/// `Stream`.
pub struct SliceStream<T: Send + Sync + 'static> {
    current: Arc<Vec<Arc<T>>>,
    receiver: watch::Receiver<Arc<Vec<Arc<T>>>>,
}

impl<T: Send + Sync + 'static> SliceStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Arc<Vec<Arc<T>>>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at subscription (or last `changed()`) time.
    pub fn current(&self) -> &Arc<Vec<Arc<T>>> {
        &self.current
    }

    /// The latest snapshot (may have moved on since `current`).
    pub fn latest(&self) -> Arc<Vec<Arc<T>>> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next replacement, returning the new snapshot.
    /// Returns `None` if the owning component has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<Vec<Arc<T>>>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> SliceWatchStream<T> {
        SliceWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct SliceWatchStream<T: Send + Sync + 'static> {
    inner: WatchStream<Arc<Vec<Arc<T>>>>,
}

impl<T: Send + Sync + 'static> Stream for SliceWatchStream<T> {
    type Item = Arc<Vec<Arc<T>>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin; Arc<Vec<Arc<T>>> is always Unpin.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_is_wholesale() {
        let slice: ViewSlice<u32> = ViewSlice::new();
        slice.replace(vec![1, 2, 3]);
        slice.replace(vec![9]);

        let snap = slice.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(*snap[0], 9);
        assert_eq!(slice.version(), 2);
    }

    #[tokio::test]
    async fn subscribers_see_replacements() {
        let slice: ViewSlice<&str> = ViewSlice::new();
        let mut stream = slice.subscribe();
        assert!(stream.current().is_empty());

        slice.replace(vec!["a", "b"]);
        let snap = stream.changed().await.expect("sender alive");
        assert_eq!(snap.len(), 2);
    }

    #[tokio::test]
    async fn stream_adapter_yields_replacements() {
        use tokio_stream::StreamExt;

        let slice: ViewSlice<u32> = ViewSlice::new();
        let mut stream = slice.subscribe().into_stream();

        // WatchStream yields the current snapshot first.
        let initial = stream.next().await.expect("initial snapshot");
        assert!(initial.is_empty());

        slice.replace(vec![4]);
        let next = stream.next().await.expect("replacement");
        assert_eq!(*next[0], 4);
    }

    #[test]
    fn value_cell_starts_empty() {
        let cell: ValueCell<u32> = ValueCell::new();
        assert!(cell.get().is_none());
        cell.replace(5);
        assert_eq!(*cell.get().expect("value set"), 5);
    }
}
