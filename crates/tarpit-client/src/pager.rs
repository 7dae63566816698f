//! Pagination driver for list views.
//!
//! One [`SegmentPager`] drives one resource listing. Views call
//! [`load`](SegmentPager::load) or [`navigate`](SegmentPager::navigate) when
//! the operator moves around, and consume results from the [`PageFeed`].
//! Rapid navigation is safe: starting a new load aborts the in-flight fetch,
//! and a fetch that was already past cancellation is dropped before it can
//! overwrite a newer page.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::task::{Context, Poll};

use futures::Stream;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::{ApiClient, ApiOutcome};
use crate::error::Result;
use crate::routes::{self, ResourceKind, ResourceSegment};

/// What a page load produced.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent<T> {
    /// The window loaded.
    Loaded {
        segment: ResourceSegment,
        items: Vec<T>,
    },
    /// The backend rejected the credential. The session is already demoted
    /// when this arrives.
    Denied { segment: ResourceSegment },
    /// The load failed, with a displayable message.
    Failed {
        segment: ResourceSegment,
        message: String,
    },
}

/// Consumer side of a [`SegmentPager`].
pub struct PageFeed<T> {
    receiver: async_channel::Receiver<PageEvent<T>>,
}

impl<T> PageFeed<T> {
    pub async fn next(&mut self) -> Option<PageEvent<T>> {
        self.receiver.recv().await.ok()
    }
}

impl<T> Stream for PageFeed<T> {
    type Item = PageEvent<T>;
    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = unsafe { self.get_unchecked_mut() };
        let mut fut = this.receiver.recv();
        unsafe { Pin::new_unchecked(&mut fut) }
            .poll(cx)
            .map(|res| res.ok())
    }
}

/// Drives paginated fetches for one resource kind.
pub struct SegmentPager<T> {
    client: ApiClient,
    kind: ResourceKind,
    query: Mutex<String>,
    current: Mutex<ResourceSegment>,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
    sender: async_channel::Sender<PageEvent<T>>,
}

impl<T> SegmentPager<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Creates a pager and the feed its events arrive on. Must be called
    /// within a tokio runtime; loads are spawned as tasks.
    pub fn new(client: ApiClient, kind: ResourceKind) -> (Self, PageFeed<T>) {
        let (sender, receiver) = async_channel::bounded(16);
        (
            SegmentPager {
                client,
                kind,
                query: Mutex::new(String::new()),
                current: Mutex::new(ResourceSegment::first_page(kind)),
                generation: Arc::new(AtomicU64::new(0)),
                in_flight: Mutex::new(None),
                sender,
            },
            PageFeed { receiver },
        )
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Sets the search expression used by subsequent loads and resets the
    /// window to the first page.
    pub fn set_query(&self, query: impl Into<String>) {
        *lock(&self.query) = query.into();
        *lock(&self.current) = ResourceSegment::first_page(self.kind);
    }

    pub fn query(&self) -> String {
        lock(&self.query).clone()
    }

    /// The window most recently asked for.
    pub fn current(&self) -> ResourceSegment {
        *lock(&self.current)
    }

    /// Starts loading a window; rejects invalid window values.
    pub fn load(&self, offset: i64, limit: i64) -> Result<ResourceSegment> {
        let segment = ResourceSegment::new(self.kind, offset, limit)?;
        self.fetch(segment);
        Ok(segment)
    }

    /// Starts loading the first page with the standard page size.
    pub fn load_first(&self) -> ResourceSegment {
        let segment = ResourceSegment::first_page(self.kind);
        self.fetch(segment);
        segment
    }

    /// Starts loading the window after the current one.
    pub fn next_page(&self) -> ResourceSegment {
        let current = self.current();
        let segment = ResourceSegment {
            offset: current.offset + current.limit,
            ..current
        };
        self.fetch(segment);
        segment
    }

    /// Starts loading the window before the current one, stopping at the
    /// start of the list.
    pub fn prev_page(&self) -> ResourceSegment {
        let current = self.current();
        let segment = ResourceSegment {
            offset: (current.offset - current.limit).max(0),
            ..current
        };
        self.fetch(segment);
        segment
    }

    /// Starts loading the window a console path addresses. A path that is
    /// malformed or belongs to another resource falls back to the first
    /// page instead of failing, so a stale link never strands the view.
    pub fn navigate(&self, path: &str) -> ResourceSegment {
        let segment = match routes::parse_segment(path) {
            Ok(Some(segment)) if segment.kind == self.kind => segment,
            Ok(Some(segment)) => {
                warn!(path, addressed = %segment.kind, view = %self.kind,
                    "path addresses another resource, loading defaults");
                ResourceSegment::first_page(self.kind)
            }
            Ok(None) => ResourceSegment::first_page(self.kind),
            Err(e) => {
                warn!(path, "ignoring bad paging window: {e}");
                ResourceSegment::first_page(self.kind)
            }
        };
        self.fetch(segment);
        segment
    }

    fn fetch(&self, segment: ResourceSegment) {
        *lock(&self.current) = segment;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let client = self.client.clone();
        let sender = self.sender.clone();
        let query = self.query();

        let handle = tokio::spawn(async move {
            let outcome = client
                .segment::<T>(segment.kind, &query, segment.offset, segment.limit)
                .await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!(segment = %segment.path(), "dropping stale page");
                return;
            }
            let event = match outcome {
                Ok(ApiOutcome::Success(items)) => PageEvent::Loaded { segment, items },
                Ok(ApiOutcome::Unauthorized) => PageEvent::Denied { segment },
                Ok(ApiOutcome::BackendFailure(message))
                | Ok(ApiOutcome::TransportFailure(message)) => {
                    PageEvent::Failed { segment, message }
                }
                Err(e) => PageEvent::Failed {
                    segment,
                    message: e.to_string(),
                },
            };
            let _ = sender.send(event).await;
        });
        if let Some(previous) = lock(&self.in_flight).replace(handle) {
            previous.abort();
        }
    }
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::session::SessionService;
    use crate::traits::MemoryCredentialStore;
    use crate::types::Content;

    fn offline_client() -> ApiClient {
        let session = Arc::new(SessionService::new(Arc::new(MemoryCredentialStore::new())));
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:1/api")
            .with_timeout_ms(2000);
        ApiClient::with_config(config, session).expect("client should build")
    }

    #[tokio::test]
    async fn test_unreachable_backend_becomes_failed_event() {
        let (pager, mut feed) = SegmentPager::<Content>::new(offline_client(), ResourceKind::Content);
        let segment = pager.load(0, 24).expect("window is valid");

        match feed.next().await {
            Some(PageEvent::Failed {
                segment: failed, ..
            }) => assert_eq!(failed, segment),
            other => panic!("expected a failed page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rapid_loads_emit_only_the_newest_window() {
        let (pager, mut feed) = SegmentPager::<Content>::new(offline_client(), ResourceKind::Content);
        pager.load(0, 24).expect("window is valid");
        pager.load(24, 24).expect("window is valid");
        let newest = pager.load(48, 24).expect("window is valid");

        match feed.next().await {
            Some(PageEvent::Failed { segment, .. }) => assert_eq!(segment, newest),
            other => panic!("expected a failed page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_navigate_falls_back_on_bad_paths() {
        let (pager, _feed) = SegmentPager::<Content>::new(offline_client(), ResourceKind::Content);

        let first = ResourceSegment::first_page(ResourceKind::Content);
        assert_eq!(pager.navigate("/content/abc/24"), first);
        assert_eq!(pager.navigate("/content/-5/24"), first);
        assert_eq!(pager.navigate("/nonsense"), first);
        assert_eq!(pager.navigate("/rules/8/16"), first);

        let moved = pager.navigate("/content/48/24");
        assert_eq!(moved.offset, 48);
        assert_eq!(moved.limit, 24);
    }

    #[tokio::test]
    async fn test_query_snapshot() {
        let (pager, _feed) = SegmentPager::<Content>::new(offline_client(), ResourceKind::Content);
        assert_eq!(pager.query(), "");
        pager.set_query("port:8080");
        assert_eq!(pager.query(), "port:8080");
    }

    #[tokio::test]
    async fn test_paging_moves_the_window() {
        let (pager, _feed) = SegmentPager::<Content>::new(offline_client(), ResourceKind::Content);
        assert_eq!(
            pager.current(),
            ResourceSegment::first_page(ResourceKind::Content)
        );

        assert_eq!(pager.next_page().offset, 24);
        assert_eq!(pager.next_page().offset, 48);
        assert_eq!(pager.prev_page().offset, 24);
        assert_eq!(pager.prev_page().offset, 0);
        // The list start is a hard stop.
        assert_eq!(pager.prev_page().offset, 0);
    }

    #[tokio::test]
    async fn test_query_change_resets_to_the_first_page() {
        let (pager, _feed) = SegmentPager::<Content>::new(offline_client(), ResourceKind::Content);
        pager.load(96, 24).expect("window is valid");
        assert_eq!(pager.current().offset, 96);

        pager.set_query("port:8080");
        assert_eq!(pager.current().offset, 0);
        assert_eq!(pager.next_page().offset, 24);
    }
}
