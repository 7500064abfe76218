use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::favorites::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    FavoriteAdded,
    FavoriteRemoved,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            EventKind::FavoriteAdded => "Favorite Added",
            EventKind::FavoriteRemoved => "Favorite Removed",
        }
    }
}

/// Payload handed to an [`EventSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteEvent {
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(rename = "itemId")]
    pub item_id: String,
    #[serde(rename = "itemTitle")]
    pub item_title: String,
}

/// Receiver for domain events. Implementations must not block.
pub trait EventSink: Send + Sync {
    fn record(&self, kind: EventKind, event: &FavoriteEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _kind: EventKind, _event: &FavoriteEvent) {}
}

/// Emits each event as a structured log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, kind: EventKind, event: &FavoriteEvent) {
        info!(event = kind.name(), category = event.category.key(), item_id = %event.item_id, item_title = %event.item_title, "domain event");
    }
}

/// Install the global fmt subscriber, honoring `RUST_LOG` (default `hallowtales=info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hallowtales=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
