//! Input and filter types for tracking service operations.

use crate::model::{Priority, Status, User};

/// Fields for a new ticket.
///
/// The ID, timestamps, and tag normalization are the store's business;
/// everything else is caller-supplied, including the initial status.
#[derive(Debug, Clone)]
pub struct NewTicket {
    /// Owning project ID. Must resolve to a known project.
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub assignee: Option<User>,
    pub reporter: User,
    pub tags: Vec<String>,
}

/// Fields for a new project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    /// 2-4 uppercase letters; validated and unique across the registry.
    pub key: String,
    pub description: String,
    pub avatar: Option<String>,
}

/// Fields to change on a ticket. `None` leaves the field untouched.
///
/// `id`, `created_at`, `project_id`, and `reporter` are immutable after
/// creation and deliberately have no carrier here.
#[derive(Debug, Clone, Default)]
pub struct TicketUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// `Some(None)` clears the assignee, `Some(Some(user))` reassigns.
    pub assignee: Option<Option<User>>,
    /// Replaces the full tag list (normalized by the store).
    pub tags: Option<Vec<String>>,
}

impl TicketUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.tags.is_none()
    }
}

/// Filter options for listing tickets.
///
/// All filters are conjunctive; an empty filter set returns every ticket.
#[derive(Debug, Clone, Default)]
pub struct TicketFilters {
    pub project_id: Option<String>,
    pub statuses: Option<Vec<Status>>,
    pub priorities: Option<Vec<Priority>>,
    /// Match the assignee snapshot by user ID.
    pub assignee: Option<String>,
    pub unassigned: bool,
    /// Case-insensitive title substring match.
    pub title_contains: Option<String>,
    pub limit: Option<usize>,
}

impl TicketFilters {
    /// Filter to a single project, the common board query.
    #[must_use]
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            ..Self::default()
        }
    }
}
