//! Tracking service facade.
//!
//! Single entry point for the presentation layer: login/register, project
//! and ticket CRUD, user listing. Composes the identity directory, project
//! registry, and ticket store behind one lock, and simulates asynchronous
//! completion with a fixed per-operation delay so consumers exercise their
//! pending states.

use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::auth::{CredentialVerifier, SharedSecret};
use crate::directory::UserDirectory;
use crate::error::{Result, TrackerError};
use crate::model::{Project, Ticket, User};
use crate::query::{NewProject, NewTicket, TicketFilters, TicketUpdate};
use crate::registry::ProjectRegistry;
use crate::seed::Seed;
use crate::store::TicketStore;

/// Artificial per-operation delays. Reads are shorter than writes.
///
/// The defaults are the reference client's values; the exact milliseconds
/// are not load-bearing, only that operations are not instantaneous.
#[derive(Debug, Clone)]
pub struct Latency {
    pub login: Duration,
    pub register: Duration,
    pub list_projects: Duration,
    pub create_project: Duration,
    pub list_tickets: Duration,
    pub create_ticket: Duration,
    pub update_ticket: Duration,
    pub delete_ticket: Duration,
    pub list_users: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(1000),
            register: Duration::from_millis(1000),
            list_projects: Duration::from_millis(500),
            create_project: Duration::from_millis(800),
            list_tickets: Duration::from_millis(600),
            create_ticket: Duration::from_millis(800),
            update_ticket: Duration::from_millis(500),
            delete_ticket: Duration::from_millis(500),
            list_users: Duration::from_millis(400),
        }
    }
}

impl Latency {
    /// Zero delay everywhere, for tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            register: Duration::ZERO,
            list_projects: Duration::ZERO,
            create_project: Duration::ZERO,
            list_tickets: Duration::ZERO,
            create_ticket: Duration::ZERO,
            update_ticket: Duration::ZERO,
            delete_ticket: Duration::ZERO,
            list_users: Duration::ZERO,
        }
    }

    /// The same delay for every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            login: delay,
            register: delay,
            list_projects: delay,
            create_project: delay,
            list_tickets: delay,
            create_ticket: delay,
            update_ticket: delay,
            delete_ticket: delay,
            list_users: delay,
        }
    }
}

/// The three entity stores, guarded together.
///
/// One lock keeps cross-store operations (project lookup + ticket insert)
/// atomic; the ID sequence can never race.
#[derive(Debug, Default)]
struct Stores {
    directory: UserDirectory,
    registry: ProjectRegistry,
    tickets: TicketStore,
}

impl Stores {
    fn from_seed(seed: Seed) -> Self {
        Self {
            directory: UserDirectory::with_users(seed.users),
            registry: ProjectRegistry::with_projects(seed.projects),
            tickets: TicketStore::with_tickets(seed.tickets),
        }
    }
}

/// Tracking service facade over the entity stores.
pub struct TrackerService {
    stores: RwLock<Stores>,
    verifier: Box<dyn CredentialVerifier>,
    latency: Latency,
}

impl TrackerService {
    /// Create a service with empty stores, the shared demo secret, and the
    /// reference latency profile.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(Seed::empty())
    }

    /// Create a service initialized from a seed.
    #[must_use]
    pub fn with_seed(seed: Seed) -> Self {
        Self {
            stores: RwLock::new(Stores::from_seed(seed)),
            verifier: Box::new(SharedSecret::demo()),
            latency: Latency::default(),
        }
    }

    /// Replace the credential policy.
    #[must_use]
    pub fn with_verifier(mut self, verifier: impl CredentialVerifier + 'static) -> Self {
        self.verifier = Box::new(verifier);
        self
    }

    /// Replace the latency profile.
    #[must_use]
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Replace all store contents from a seed. Test lifecycle hook.
    pub async fn reset(&self, seed: Seed) {
        let mut stores = self.stores.write().await;
        *stores = Stores::from_seed(seed);
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// Authenticate a user by email and password.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for an unknown email or a rejected
    /// password; the two cases are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.pause(self.latency.login).await;

        let stores = self.stores.read().await;
        let Some(user) = stores.directory.find_by_email(email) else {
            warn!(email, "login rejected: unknown email");
            return Err(TrackerError::InvalidCredentials);
        };
        if !self.verifier.verify(user, password) {
            warn!(email, "login rejected: bad password");
            return Err(TrackerError::InvalidCredentials);
        }

        info!(email, user = %user.id, "login succeeded");
        Ok(user.clone())
    }

    /// Register a new user and enroll the password with the active
    /// credential policy.
    ///
    /// # Errors
    ///
    /// Returns `EmailTaken` if the email is already registered.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        self.pause(self.latency.register).await;

        let mut stores = self.stores.write().await;
        let user = stores.directory.register(name, email)?;
        self.verifier.enroll(&user, password);

        info!(email, user = %user.id, "registered user");
        Ok(user)
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// Full project snapshot, insertion order.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.pause(self.latency.list_projects).await;

        let stores = self.stores.read().await;
        debug!(count = stores.registry.len(), "listed projects");
        stores.registry.list().to_vec()
    }

    /// Create a new project.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a malformed key or `KeyTaken` for a
    /// duplicate one.
    pub async fn create_project(&self, fields: NewProject) -> Result<Project> {
        self.pause(self.latency.create_project).await;

        let mut stores = self.stores.write().await;
        let project = stores.registry.create(fields)?;

        info!(project = %project.id, key = %project.key, "created project");
        Ok(project)
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Tickets for one project, or all tickets, in insertion order.
    pub async fn list_tickets(&self, project_id: Option<&str>) -> Vec<Ticket> {
        self.pause(self.latency.list_tickets).await;

        let filters = project_id.map_or_else(TicketFilters::default, TicketFilters::for_project);
        let stores = self.stores.read().await;
        let tickets: Vec<Ticket> = stores.tickets.list(&filters).into_iter().cloned().collect();
        debug!(count = tickets.len(), project = ?project_id, "listed tickets");
        tickets
    }

    /// Create a ticket in the project named by `fields.project_id`.
    ///
    /// The project is resolved before anything is written: an unknown
    /// project never mutates the store.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` for an unknown project, or `Validation`
    /// for a blank title.
    pub async fn create_ticket(&self, fields: NewTicket) -> Result<Ticket> {
        self.pause(self.latency.create_ticket).await;

        let mut stores = self.stores.write().await;
        let Some(project) = stores.registry.find_by_id(&fields.project_id) else {
            return Err(TrackerError::ProjectNotFound {
                id: fields.project_id,
            });
        };
        let project = project.clone();
        let ticket = stores.tickets.create(&project, fields)?;

        info!(ticket = %ticket.id, project = %project.id, "created ticket");
        Ok(ticket)
    }

    /// Apply a partial update to a ticket.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` for an unknown ID, or `Validation` for a
    /// blank title.
    pub async fn update_ticket(&self, id: &str, update: TicketUpdate) -> Result<Ticket> {
        self.pause(self.latency.update_ticket).await;

        let mut stores = self.stores.write().await;
        let ticket = stores.tickets.update(id, &update)?;

        info!(ticket = %ticket.id, "updated ticket");
        Ok(ticket)
    }

    /// Delete a ticket permanently.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` for an unknown ID.
    pub async fn delete_ticket(&self, id: &str) -> Result<()> {
        self.pause(self.latency.delete_ticket).await;

        let mut stores = self.stores.write().await;
        stores.tickets.delete(id)?;

        info!(ticket = id, "deleted ticket");
        Ok(())
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Full user snapshot, insertion order.
    pub async fn list_users(&self) -> Vec<User> {
        self.pause(self.latency.list_users).await;

        let stores = self.stores.read().await;
        debug!(count = stores.directory.len(), "listed users");
        stores.directory.list().to_vec()
    }

    /// Sleep for the operation's configured delay, before any store access.
    ///
    /// A caller that drops the future during the sleep has observed no
    /// mutation; once the store section starts it runs without awaiting and
    /// always completes.
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

impl Default for TrackerService {
    fn default() -> Self {
        Self::new()
    }
}
