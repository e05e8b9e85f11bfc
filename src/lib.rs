//! `pytracker-core` — In-process ticket tracking service.
//!
//! The domain core of a kanban-style issue tracker: an identity directory,
//! a project registry, and a ticket store composed behind the
//! [`TrackerService`] facade. Operations are asynchronous with a simulated
//! per-operation delay, the contract the consuming board client is built
//! against.
//!
//! # Quick Start
//!
//! ```no_run
//! use pytracker_core::{Seed, Status, TicketUpdate, TrackerService};
//!
//! # async fn demo() -> pytracker_core::Result<()> {
//! let service = TrackerService::with_seed(Seed::demo());
//!
//! let user = service.login("sarah@pytracker.com", "password").await?;
//!
//! // Board for the "PyTracker Platform" project
//! let tickets = service.list_tickets(Some("1")).await;
//!
//! // Drag a card back to the first column
//! service
//!     .update_ticket("PT-3", TicketUpdate { status: Some(Status::Todo), ..Default::default() })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod directory;
pub mod error;
pub mod model;
pub mod query;
pub mod registry;
pub mod seed;
pub mod service;
pub mod store;
pub mod util;

pub use auth::{CredentialVerifier, HashedSecrets, SharedSecret};
pub use directory::UserDirectory;
pub use error::{Result, TrackerError};
pub use model::{Priority, Project, Status, Ticket, User};
pub use query::{NewProject, NewTicket, TicketFilters, TicketUpdate};
pub use registry::ProjectRegistry;
pub use seed::Seed;
pub use service::{Latency, TrackerService};
pub use store::TicketStore;
