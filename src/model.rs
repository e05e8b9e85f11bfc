//! Core data types for `pytracker-core`.
//!
//! Same serde format as the board client consumes: camelCase field names,
//! upper snake-case enum values, RFC 3339 timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket workflow stage on the kanban board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    InReview,
    Done,
}

impl Status {
    /// All stages in board column order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::InReview, Self::Done];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::InReview => "IN_REVIEW",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" | "INPROGRESS" => Ok(Self::InProgress),
            "IN_REVIEW" | "INREVIEW" => Ok(Self::InReview),
            "DONE" => Ok(Self::Done),
            other => Err(crate::error::TrackerError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Ticket urgency classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = crate::error::TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            other => Err(crate::error::TrackerError::InvalidPriority {
                priority: other.to_string(),
            }),
        }
    }
}

/// A registered account in the identity directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque unique ID.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unique within the directory; matched case-sensitively on login.
    pub email: String,

    /// Short display label, the uppercase initials of `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A project owning a board of tickets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque unique ID.
    pub id: String,

    /// Display name.
    pub name: String,

    /// 2-4 uppercase letters, used as the ticket-ID prefix.
    pub key: String,

    /// Free-form description.
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// The primary ticket entity.
///
/// `assignee` and `reporter` are value snapshots taken when the ticket was
/// created or reassigned, not references into the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique ID in the form `<projectKey>-<sequence>` (e.g. "PT-3").
    pub id: String,

    /// Title (non-blank).
    pub title: String,

    /// Detailed description.
    pub description: String,

    /// Workflow stage.
    #[serde(default)]
    pub status: Status,

    /// Urgency classification.
    #[serde(default)]
    pub priority: Priority,

    /// Assigned user, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,

    /// The user who filed the ticket. Mandatory.
    pub reporter: User,

    /// Owning project ID.
    pub project_id: String,

    /// Ordered tags, case-normalized upper, no duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Creation timestamp. Never changes after creation.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp. Refreshed on every partial update.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_round_trips_through_str() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!("todo".parse::<Status>().unwrap(), Status::Todo);
        assert_eq!("in_progress".parse::<Status>().unwrap(), Status::InProgress);
        assert!("shipped".parse::<Status>().is_err());
    }

    #[test]
    fn priority_orders_by_urgency() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn priority_parse_rejects_unknown() {
        assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!("P1".parse::<Priority>().is_err());
    }

    #[test]
    fn ticket_serializes_with_client_field_names() {
        let reporter = User {
            id: "2".to_string(),
            name: "Alex Rodriguez".to_string(),
            email: "alex@pytracker.com".to_string(),
            avatar: Some("AR".to_string()),
        };
        let ticket = Ticket {
            id: "PT-1".to_string(),
            title: "Create User Authentication System".to_string(),
            description: "Implement login, logout, and user session management".to_string(),
            status: Status::InProgress,
            priority: Priority::High,
            assignee: None,
            reporter,
            project_id: "1".to_string(),
            tags: vec!["AUTHENTICATION".to_string(), "BACKEND".to_string()],
            created_at: Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 22, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["id"], "PT-1");
        assert_eq!(value["status"], "IN_PROGRESS");
        assert_eq!(value["priority"], "HIGH");
        assert_eq!(value["projectId"], "1");
        assert_eq!(value["reporter"]["email"], "alex@pytracker.com");
        let created_at = value["createdAt"].as_str().unwrap();
        assert!(created_at.starts_with("2024-01-20T00:00:00"));
        assert!(value.get("assignee").is_none());
    }

    #[test]
    fn user_without_avatar_omits_field() {
        let user = User {
            id: "9".to_string(),
            name: "Solo".to_string(),
            email: "solo@pytracker.com".to_string(),
            avatar: None,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("avatar").is_none());
    }
}
