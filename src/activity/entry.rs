//! Activity entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vault events worth recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityEvent {
    ProfileSaved,
    ProfileExported,
    ProfileImported,
    ProfileRestored,
    ProfileForgotten,
    ThemeChanged,
}

impl std::fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityEvent::ProfileSaved => write!(f, "SAVE"),
            ActivityEvent::ProfileExported => write!(f, "EXPORT"),
            ActivityEvent::ProfileImported => write!(f, "IMPORT"),
            ActivityEvent::ProfileRestored => write!(f, "RESTORE"),
            ActivityEvent::ProfileForgotten => write!(f, "FORGET"),
            ActivityEvent::ThemeChanged => write!(f, "THEME"),
        }
    }
}

/// A single activity log entry
///
/// `detail` is free text such as a file path or theme name. Passphrases and
/// profile contents never go here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub event: ActivityEvent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ActivityEntry {
    pub fn new(event: ActivityEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event
        );

        if let Some(detail) = &self.detail {
            output.push_str(&format!(" {}", detail));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        assert_eq!(ActivityEvent::ProfileSaved.to_string(), "SAVE");
        assert_eq!(ActivityEvent::ThemeChanged.to_string(), "THEME");
    }

    #[test]
    fn test_serialization() {
        let entry = ActivityEntry::new(ActivityEvent::ProfileExported).with_detail("out.json");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"profile_exported\""));

        let deserialized: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.event, ActivityEvent::ProfileExported);
        assert_eq!(deserialized.detail.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_human_readable_format() {
        let entry = ActivityEntry::new(ActivityEvent::ThemeChanged).with_detail("dark");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("THEME"));
        assert!(formatted.ends_with(" dark"));
    }
}
