//! In-memory ticket store with project-scoped sequential IDs.
//!
//! Tickets are kept in insertion order; every listing preserves it. ID
//! sequences are monotonic per project and never rewind on delete, so a
//! deleted ID is never minted again.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::{Result, TrackerError};
use crate::model::{Project, Ticket};
use crate::query::{NewTicket, TicketFilters, TicketUpdate};
use crate::util::normalize_tags;

/// In-memory ticket store.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    /// Highest sequence number handed out per project ID.
    sequences: HashMap<String, u64>,
}

impl TicketStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed tickets.
    ///
    /// Each project's sequence starts at the highest suffix present in the
    /// seed, so fresh IDs continue after the seeded ones.
    #[must_use]
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        let mut sequences: HashMap<String, u64> = HashMap::new();
        for ticket in &tickets {
            if let Some(sequence) = id_sequence(&ticket.id) {
                let entry = sequences.entry(ticket.project_id.clone()).or_insert(0);
                *entry = (*entry).max(sequence);
            }
        }
        Self { tickets, sequences }
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a new ticket in the given project.
    ///
    /// The caller resolves the project first; this keeps the "unknown
    /// project never mutates the store" contract in one place (the facade).
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the title is blank.
    pub fn create(&mut self, project: &Project, fields: NewTicket) -> Result<Ticket> {
        if fields.title.trim().is_empty() {
            return Err(TrackerError::validation("title", "cannot be empty"));
        }

        let sequence = self.sequences.entry(project.id.clone()).or_insert(0);
        *sequence += 1;

        let now = Utc::now();
        let ticket = Ticket {
            id: format!("{}-{}", project.key, sequence),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            priority: fields.priority,
            assignee: fields.assignee,
            reporter: fields.reporter,
            project_id: project.id.clone(),
            tags: normalize_tags(&fields.tags),
            created_at: now,
            updated_at: now,
        };

        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Only fields carried as `Some` change; `id`, `created_at`,
    /// `project_id`, and `reporter` are immutable by construction. The
    /// timestamp refreshes even for an empty update.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ID is unknown, or `Validation` if
    /// the new title is blank.
    pub fn update(&mut self, id: &str, update: &TicketUpdate) -> Result<Ticket> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|ticket| ticket.id == id)
            .ok_or_else(|| TrackerError::TicketNotFound { id: id.to_string() })?;

        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(TrackerError::validation("title", "cannot be empty"));
            }
            ticket.title.clone_from(title);
        }
        if let Some(ref description) = update.description {
            ticket.description.clone_from(description);
        }
        if let Some(status) = update.status {
            ticket.status = status;
        }
        if let Some(priority) = update.priority {
            ticket.priority = priority;
        }
        if let Some(ref assignee) = update.assignee {
            ticket.assignee.clone_from(assignee);
        }
        if let Some(ref tags) = update.tags {
            ticket.tags = normalize_tags(tags);
        }

        ticket.updated_at = Utc::now();
        Ok(ticket.clone())
    }

    /// Remove a ticket permanently. Sequences are untouched.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ID is unknown.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.tickets.len();
        self.tickets.retain(|ticket| ticket.id != id);
        if self.tickets.len() == before {
            return Err(TrackerError::TicketNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Get a single ticket by ID.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ID is unknown.
    pub fn get(&self, id: &str) -> Result<&Ticket> {
        self.tickets
            .iter()
            .find(|ticket| ticket.id == id)
            .ok_or_else(|| TrackerError::TicketNotFound { id: id.to_string() })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// List tickets matching the filters, in insertion order.
    #[must_use]
    pub fn list(&self, filters: &TicketFilters) -> Vec<&Ticket> {
        let mut results: Vec<&Ticket> = self
            .tickets
            .iter()
            .filter(|ticket| matches_filters(ticket, filters))
            .collect();

        if let Some(limit) = filters.limit {
            results.truncate(limit);
        }

        results
    }

    /// Count tickets matching the filters.
    #[must_use]
    pub fn count(&self, filters: &TicketFilters) -> usize {
        self.tickets
            .iter()
            .filter(|ticket| matches_filters(ticket, filters))
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Numeric suffix of a `<key>-<sequence>` ticket ID.
fn id_sequence(id: &str) -> Option<u64> {
    id.rsplit_once('-')
        .and_then(|(_, suffix)| suffix.parse().ok())
}

fn matches_filters(ticket: &Ticket, filters: &TicketFilters) -> bool {
    if let Some(ref project_id) = filters.project_id {
        if &ticket.project_id != project_id {
            return false;
        }
    }

    if let Some(ref statuses) = filters.statuses {
        if !statuses.contains(&ticket.status) {
            return false;
        }
    }

    if let Some(ref priorities) = filters.priorities {
        if !priorities.contains(&ticket.priority) {
            return false;
        }
    }

    if filters.unassigned && ticket.assignee.is_some() {
        return false;
    }
    if let Some(ref assignee_id) = filters.assignee {
        if ticket
            .assignee
            .as_ref()
            .is_none_or(|user| &user.id != assignee_id)
        {
            return false;
        }
    }

    if let Some(ref query) = filters.title_contains {
        if !ticket.title.to_lowercase().contains(&query.to_lowercase()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status, User};
    use chrono::TimeZone;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@pytracker.com"),
            avatar: None,
        }
    }

    fn project(id: &str, key: &str) -> Project {
        Project {
            id: id.to_string(),
            name: "Test".to_string(),
            key: key.to_string(),
            description: String::new(),
            avatar: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    fn new_ticket(project_id: &str, title: &str) -> NewTicket {
        NewTicket {
            project_id: project_id.to_string(),
            title: title.to_string(),
            description: String::new(),
            status: Status::Todo,
            priority: Priority::Low,
            assignee: None,
            reporter: user("1", "Reporter"),
            tags: Vec::new(),
        }
    }

    #[test]
    fn create_assigns_key_prefixed_sequential_ids() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");

        let first = store.create(&pt, new_ticket("1", "First")).unwrap();
        let second = store.create(&pt, new_ticket("1", "Second")).unwrap();
        assert_eq!(first.id, "PT-1");
        assert_eq!(second.id, "PT-2");
        assert_eq!(first.created_at, first.updated_at);
    }

    #[test]
    fn sequences_are_independent_per_project() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        let ma = project("2", "MA");

        store.create(&pt, new_ticket("1", "A")).unwrap();
        let mobile = store.create(&ma, new_ticket("2", "B")).unwrap();
        assert_eq!(mobile.id, "MA-1");
    }

    #[test]
    fn create_rejects_blank_title() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        let result = store.create(&pt, new_ticket("1", "  "));
        assert!(matches!(result, Err(TrackerError::Validation { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn create_normalizes_tags() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        let mut fields = new_ticket("1", "Tagged");
        fields.tags = vec![
            "backend".to_string(),
            " Backend ".to_string(),
            "email".to_string(),
        ];

        let ticket = store.create(&pt, fields).unwrap();
        assert_eq!(ticket.tags, vec!["BACKEND", "EMAIL"]);
    }

    #[test]
    fn deleted_ids_are_never_reissued() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        store.create(&pt, new_ticket("1", "First")).unwrap();
        store.create(&pt, new_ticket("1", "Second")).unwrap();

        store.delete("PT-1").unwrap();
        let next = store.create(&pt, new_ticket("1", "Third")).unwrap();
        assert_eq!(next.id, "PT-3");
        assert!(store.get("PT-1").is_err());
    }

    #[test]
    fn with_tickets_resumes_seeded_sequences() {
        let pt = project("1", "PT");
        let mut store = TicketStore::new();
        store.create(&pt, new_ticket("1", "One")).unwrap();
        store.create(&pt, new_ticket("1", "Two")).unwrap();
        let seeded: Vec<Ticket> = store.list(&TicketFilters::default())
            .into_iter()
            .cloned()
            .collect();

        let mut resumed = TicketStore::with_tickets(seeded);
        let next = resumed.create(&pt, new_ticket("1", "Three")).unwrap();
        assert_eq!(next.id, "PT-3");
    }

    #[test]
    fn update_applies_only_carried_fields() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        let mut fields = new_ticket("1", "Original");
        fields.assignee = Some(user("2", "Worker"));
        let created = store.create(&pt, fields).unwrap();

        let updated = store
            .update(
                "PT-1",
                &TicketUpdate {
                    status: Some(Status::Done),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, Status::Done);
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.assignee, created.assignee);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.project_id, created.project_id);
        assert_eq!(updated.reporter, created.reporter);
    }

    #[test]
    fn update_clears_assignee_with_inner_none() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        let mut fields = new_ticket("1", "Assigned");
        fields.assignee = Some(user("2", "Worker"));
        store.create(&pt, fields).unwrap();

        let updated = store
            .update(
                "PT-1",
                &TicketUpdate {
                    assignee: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.assignee.is_none());
    }

    #[test]
    fn update_rejects_blank_title() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        store.create(&pt, new_ticket("1", "Kept")).unwrap();

        let result = store.update(
            "PT-1",
            &TicketUpdate {
                title: Some("  ".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(TrackerError::Validation { .. })));
        assert_eq!(store.get("PT-1").unwrap().title, "Kept");
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut store = TicketStore::new();
        let result = store.update("PT-99", &TicketUpdate::default());
        assert!(matches!(result, Err(TrackerError::TicketNotFound { .. })));
    }

    #[test]
    fn delete_unknown_id_fails() {
        let mut store = TicketStore::new();
        let result = store.delete("PT-99");
        assert!(matches!(result, Err(TrackerError::TicketNotFound { .. })));
    }

    #[test]
    fn list_filters_by_project_in_insertion_order() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        let ma = project("2", "MA");
        store.create(&pt, new_ticket("1", "A")).unwrap();
        store.create(&ma, new_ticket("2", "B")).unwrap();
        store.create(&pt, new_ticket("1", "C")).unwrap();

        let titles: Vec<&str> = store
            .list(&TicketFilters::for_project("1"))
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn list_filters_by_status_and_assignee() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        let mut todo = new_ticket("1", "Open work");
        todo.assignee = Some(user("3", "Maya"));
        store.create(&pt, todo).unwrap();
        let mut done = new_ticket("1", "Shipped work");
        done.status = Status::Done;
        store.create(&pt, done).unwrap();

        let open = store.list(&TicketFilters {
            statuses: Some(vec![Status::Todo]),
            ..Default::default()
        });
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].title, "Open work");

        let mayas = store.list(&TicketFilters {
            assignee: Some("3".to_string()),
            ..Default::default()
        });
        assert_eq!(mayas.len(), 1);

        let unassigned = store.list(&TicketFilters {
            unassigned: true,
            ..Default::default()
        });
        assert_eq!(unassigned.len(), 1);
        assert_eq!(unassigned[0].title, "Shipped work");
    }

    #[test]
    fn list_title_search_is_case_insensitive() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        store.create(&pt, new_ticket("1", "Fix login bug")).unwrap();
        store.create(&pt, new_ticket("1", "Add dashboard")).unwrap();

        let found = store.list(&TicketFilters {
            title_contains: Some("LOGIN".to_string()),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn count_matches_list_length() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        store.create(&pt, new_ticket("1", "A")).unwrap();
        let mut done = new_ticket("1", "B");
        done.status = Status::Done;
        store.create(&pt, done).unwrap();

        let filters = TicketFilters {
            statuses: Some(vec![Status::Done]),
            ..Default::default()
        };
        assert_eq!(store.count(&filters), store.list(&filters).len());
        assert_eq!(store.count(&TicketFilters::default()), 2);
    }

    #[test]
    fn list_respects_limit() {
        let mut store = TicketStore::new();
        let pt = project("1", "PT");
        for n in 0..5 {
            store.create(&pt, new_ticket("1", &format!("T{n}"))).unwrap();
        }
        let limited = store.list(&TicketFilters {
            limit: Some(2),
            ..Default::default()
        });
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].title, "T0");
    }
}
