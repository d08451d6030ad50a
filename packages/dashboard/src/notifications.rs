//! Notification feed shown next to the dashboard.
//!
//! Notifications are grouped into categories and tracked as read or unread
//! in memory. Marking them read is not persisted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DashboardError;

/// Notification feed, as JSON.
pub const NOTIFICATIONS_JSON: &str = include_str!("../data/notifications.json");

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Human-readable age, e.g. "10 minutes ago".
    pub time: String,
    pub read: bool,
}

/// A named group of notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCategory {
    pub id: String,
    pub name: String,
    /// Hex colour of the category header.
    pub color: String,
    pub notifications: Vec<Notification>,
}

/// All notification categories, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationFeed {
    categories: Vec<NotificationCategory>,
}

impl NotificationFeed {
    /// Parses a feed from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Notifications`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a feed from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Io`] or [`DashboardError::Notifications`].
    pub fn from_path(path: &Path) -> Result<Self, DashboardError> {
        log::info!("Loading notifications from {}", path.display());
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Returns the feed bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Notifications`] if the embedded feed is
    /// malformed.
    pub fn embedded() -> Result<Self, DashboardError> {
        Self::from_json_str(NOTIFICATIONS_JSON)
    }

    #[must_use]
    pub fn categories(&self) -> &[NotificationCategory] {
        &self.categories
    }

    /// Unread notifications across every category.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.notifications.iter().filter(|n| !n.read).count())
            .sum()
    }

    /// Marks every notification in every category as read.
    pub fn mark_all_read(&mut self) {
        for notification in self
            .categories
            .iter_mut()
            .flat_map(|c| c.notifications.iter_mut())
        {
            notification.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r##"{"categories": [
        {"id": "a", "name": "Alerts", "color": "#E74C3C", "notifications": [
            {"id": 1, "title": "t1", "description": "d1", "time": "now", "read": false},
            {"id": 2, "title": "t2", "description": "d2", "time": "now", "read": true}
        ]},
        {"id": "b", "name": "Updates", "color": "#2ECC71", "notifications": [
            {"id": 3, "title": "t3", "description": "d3", "time": "now", "read": false}
        ]},
        {"id": "c", "name": "Empty", "color": "#3498DB", "notifications": []}
    ]}"##;

    #[test]
    fn embedded_feed_parses() {
        let feed = NotificationFeed::embedded().unwrap();
        assert!(!feed.categories().is_empty());
        assert!(feed.unread_count() > 0);
    }

    #[test]
    fn unread_count_sums_across_categories() {
        let feed = NotificationFeed::from_json_str(FEED).unwrap();
        assert_eq!(feed.categories().len(), 3);
        assert_eq!(feed.unread_count(), 2);
    }

    #[test]
    fn mark_all_read_clears_every_category() {
        let mut feed = NotificationFeed::from_json_str(FEED).unwrap();
        feed.mark_all_read();

        assert_eq!(feed.unread_count(), 0);
        assert!(
            feed.categories()
                .iter()
                .flat_map(|c| &c.notifications)
                .all(|n| n.read)
        );
        assert_eq!(feed.categories()[0].notifications[1].title, "t2");
    }

    #[test]
    fn malformed_feed_is_an_error() {
        assert!(matches!(
            NotificationFeed::from_json_str("{\"categories\": 3}"),
            Err(DashboardError::Notifications(_))
        ));
    }
}
