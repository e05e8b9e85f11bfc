//! Project registry: creation, listing, and lookup of projects.

use chrono::Utc;

use crate::error::{Result, TrackerError};
use crate::model::Project;
use crate::query::NewProject;

/// In-memory project registry, insertion-ordered.
///
/// Keys are validated and unique: a shared key would make two projects
/// mint colliding ticket IDs.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    next_id: u64,
}

impl ProjectRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a registry from seed projects.
    ///
    /// Fresh IDs continue past the highest numeric seed ID.
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let next_id = projects
            .iter()
            .filter_map(|project| project.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self { projects, next_id }
    }

    /// Full snapshot in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by ID.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Create a new project with `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the key is not 2-4 uppercase ASCII letters,
    /// or `KeyTaken` if another project already uses it.
    pub fn create(&mut self, fields: NewProject) -> Result<Project> {
        validate_key(&fields.key)?;
        if self.projects.iter().any(|project| project.key == fields.key) {
            return Err(TrackerError::KeyTaken { key: fields.key });
        }

        let project = Project {
            id: self.next_id.to_string(),
            name: fields.name,
            key: fields.key,
            description: fields.description,
            avatar: fields.avatar,
            created_at: Utc::now(),
        };
        self.next_id += 1;

        self.projects.push(project.clone());
        Ok(project)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.len() < 2 || key.len() > 4 {
        return Err(TrackerError::validation("key", "must be 2-4 characters"));
    }
    if !key.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(TrackerError::validation(
            "key",
            "must contain only uppercase letters",
        ));
    }
    Ok(())
}
