//! Read-only view of the circle feed the frame pages through.
//!
//! Fetching, signing, and expiring photos belong to the backend client;
//! this module only orders what it hands over and answers index queries.

pub mod circles;

use serde::{Deserialize, Serialize};

/// One photo shared into one or more of the viewer's circles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Backend photo id.
    pub photo_id: String,
    /// Renderable reference (a signed URL; treated as opaque).
    pub image_url: String,
    /// Optional caption written by the sender.
    #[serde(default)]
    pub caption: Option<String>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at_ms: i64,
    /// Circles the photo was shared into, without duplicates.
    #[serde(default)]
    pub circle_ids: Vec<String>,
    /// Backend user id of the sender.
    pub sender_id: String,
    /// Name shown for the sender.
    pub sender_username: String,
}

/// Name shown for a sender: the trimmed username, or `User-` followed by
/// the first six characters of their id.
#[must_use]
pub fn display_name(username: Option<&str>, sender_id: &str) -> String {
    match username.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => {
            let prefix: String = sender_id.chars().take(6).collect();
            format!("User-{prefix}")
        }
    }
}

/// Feed items ordered newest first, indexed `0..N`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    items: Vec<FeedItem>,
}

impl Feed {
    /// Build a feed, ordering items newest first. Items with equal
    /// timestamps keep their relative order.
    #[must_use]
    pub fn new(mut items: Vec<FeedItem>) -> Self {
        items.sort_by(|a, b| b.created_at_ms.cmp(&a.created_at_ms));
        Self { items }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the feed has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FeedItem> {
        self.items.get(index)
    }

    /// Image reference of the item at `index`.
    #[must_use]
    pub fn image_url(&self, index: usize) -> Option<&str> {
        self.get(index).map(|item| item.image_url.as_str())
    }

    /// Whether `index` addresses an item.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Clamp `index` to the last valid position. An empty feed leaves the
    /// index untouched.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        if self.items.is_empty() {
            index
        } else {
            index.min(self.items.len() - 1)
        }
    }

    /// All items in feed order.
    #[must_use]
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }
}

#[cfg(test)]
pub(crate) fn test_item(photo_id: &str, created_at_ms: i64) -> FeedItem {
    FeedItem {
        photo_id: photo_id.to_owned(),
        image_url: format!("https://img.test/{photo_id}.jpg"),
        caption: None,
        created_at_ms,
        circle_ids: vec!["c1".to_owned()],
        sender_id: "a1b2c3d4e5".to_owned(),
        sender_username: "mo".to_owned(),
    }
}
