//! Media source boundary.
//!
//! A source delivers the collection as full, already-ordered snapshots;
//! every change notification replaces the previous list wholesale. Dropping
//! the subscription stream is the unsubscribe; the gallery never retries a
//! failed source on its own.

use std::sync::Mutex;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use vitrine_model::{sort_newest_first, MediaItem, SourceEvent};

/// An ordered media collection with change notification.
pub trait MediaSource: Send + Sync {
    /// Subscribe to snapshots. The stream yields a fresh complete snapshot on
    /// every change and `SourceEvent::Error` when the source fails.
    fn subscribe(&self) -> BoxStream<'static, SourceEvent>;
}

/// A source with a fixed, immediately-delivered snapshot. Used by the demo
/// shell and by tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    items: Vec<MediaItem>,
}

impl StaticSource {
    pub fn new(mut items: Vec<MediaItem>) -> Self {
        sort_newest_first(&mut items);
        Self { items }
    }
}

impl MediaSource for StaticSource {
    fn subscribe(&self) -> BoxStream<'static, SourceEvent> {
        let snapshot = SourceEvent::Snapshot(self.items.clone());
        stream::once(async move { snapshot }).boxed()
    }
}

/// A push-driven source for embedders that own the data lifecycle.
///
/// The receiving half is claimed by the first `subscribe` call; later calls
/// observe an already-ended stream, which matches how the subscription
/// runtime deduplicates by id.
pub struct ChannelSource {
    rx: Mutex<Option<mpsc::UnboundedReceiver<SourceEvent>>>,
}

/// Push handle paired with a [`ChannelSource`].
#[derive(Debug, Clone)]
pub struct SourceHandle {
    tx: mpsc::UnboundedSender<SourceEvent>,
}

impl ChannelSource {
    pub fn new() -> (Self, SourceHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                rx: Mutex::new(Some(rx)),
            },
            SourceHandle { tx },
        )
    }
}

impl MediaSource for ChannelSource {
    fn subscribe(&self) -> BoxStream<'static, SourceEvent> {
        let rx = self.rx.lock().ok().and_then(|mut slot| slot.take());
        match rx {
            Some(rx) => UnboundedReceiverStream::new(rx).boxed(),
            None => stream::empty().boxed(),
        }
    }
}

impl SourceHandle {
    /// Push a complete replacement snapshot.
    pub fn push_snapshot(&self, mut items: Vec<MediaItem>) {
        sort_newest_first(&mut items);
        let _ = self.tx.send(SourceEvent::Snapshot(items));
    }

    /// Surface a source failure to the consumer.
    pub fn push_error(&self, message: impl Into<String>) {
        let _ = self.tx.send(SourceEvent::Error(message.into()));
    }
}

/// A source backed by a JSON endpoint, polled at a fixed cadence.
///
/// Each poll emits a fresh snapshot; request failures are surfaced as
/// `SourceEvent::Error` and polling continues; backoff and retry policy
/// live server-side, not here.
#[derive(Debug, Clone)]
pub struct RestSource {
    endpoint: String,
    poll_interval: Duration,
}

impl RestSource {
    pub fn new(endpoint: impl Into<String>, poll_interval: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            poll_interval,
        }
    }
}

impl MediaSource for RestSource {
    fn subscribe(&self) -> BoxStream<'static, SourceEvent> {
        let endpoint = self.endpoint.clone();
        let poll_interval = self.poll_interval;
        async_stream::stream! {
            loop {
                match fetch_snapshot(&endpoint).await {
                    Ok(items) => yield SourceEvent::Snapshot(items),
                    Err(err) => {
                        log::error!("media feed poll failed: {err}");
                        yield SourceEvent::Error(err.to_string());
                    }
                }
                tokio::time::sleep(poll_interval).await;
            }
        }
        .boxed()
    }
}

async fn fetch_snapshot(endpoint: &str) -> Result<Vec<MediaItem>, anyhow::Error> {
    let response = reqwest::get(endpoint).await?.error_for_status()?;
    let mut items: Vec<MediaItem> = response.json().await?;
    sort_newest_first(&mut items);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_model::MediaItemId;

    fn item(id: &str) -> MediaItem {
        MediaItem::new(MediaItemId::from(id), format!("https://cdn/{id}.jpg"))
    }

    #[tokio::test]
    async fn static_source_emits_one_snapshot_then_ends() {
        let source = StaticSource::new(vec![item("a"), item("b")]);
        let events: Vec<SourceEvent> = source.subscribe().collect().await;
        assert_eq!(events.len(), 1);
        match &events[0] {
            SourceEvent::Snapshot(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn channel_source_delivers_pushes_in_order() {
        let (source, handle) = ChannelSource::new();
        let mut events = source.subscribe();

        handle.push_snapshot(vec![item("a")]);
        handle.push_error("store unavailable");

        match events.next().await {
            Some(SourceEvent::Snapshot(items)) => assert_eq!(items.len(), 1),
            other => panic!("unexpected event: {other:?}"),
        }
        match events.next().await {
            Some(SourceEvent::Error(msg)) => assert_eq!(msg, "store unavailable"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn channel_source_second_subscription_is_empty() {
        let (source, _handle) = ChannelSource::new();
        let first = source.subscribe();
        drop(first);
        let events: Vec<SourceEvent> = source.subscribe().collect().await;
        assert!(events.is_empty());
    }

    #[test]
    fn feed_snapshots_decode_from_json() {
        let body = r#"[
            {
                "id": "doc-2",
                "url": "https://cdn/2.jpg",
                "title": "Second",
                "created_at": "2026-08-01T10:00:00Z",
                "updated_at": "2026-08-01T10:00:00Z"
            },
            {
                "id": "doc-1",
                "url": "https://cdn/1.jpg",
                "created_at": "2026-07-01T10:00:00Z",
                "updated_at": "2026-07-02T09:30:00Z"
            }
        ]"#;
        let mut items: Vec<MediaItem> = serde_json::from_str(body).expect("decode");
        sort_newest_first(&mut items);
        assert_eq!(items[0].id.as_str(), "doc-2");
        assert_eq!(items[0].title.as_deref(), Some("Second"));
        assert_eq!(items[1].description, None);
    }
}
