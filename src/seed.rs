//! Seed fixtures for service startup and tests.
//!
//! `Seed::demo()` reproduces the reference demo dataset: three users, two
//! projects (keys `PT` and `MA`), and five tickets spread across the board
//! columns. Scenario tests assert on this exact data.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{Priority, Project, Status, Ticket, User};

/// Initial contents for the three stores.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub tickets: Vec<Ticket>,
}

impl Seed {
    /// An empty seed: all stores start blank.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed demo dataset.
    #[must_use]
    pub fn demo() -> Self {
        let sarah = User {
            id: "1".to_string(),
            name: "Sarah Chen".to_string(),
            email: "sarah@pytracker.com".to_string(),
            avatar: Some("SC".to_string()),
        };
        let alex = User {
            id: "2".to_string(),
            name: "Alex Rodriguez".to_string(),
            email: "alex@pytracker.com".to_string(),
            avatar: Some("AR".to_string()),
        };
        let maya = User {
            id: "3".to_string(),
            name: "Maya Patel".to_string(),
            email: "maya@pytracker.com".to_string(),
            avatar: Some("MP".to_string()),
        };

        let projects = vec![
            Project {
                id: "1".to_string(),
                name: "PyTracker Platform".to_string(),
                key: "PT".to_string(),
                description: "Main project management platform".to_string(),
                avatar: None,
                created_at: date(2024, 1, 15),
            },
            Project {
                id: "2".to_string(),
                name: "Mobile App".to_string(),
                key: "MA".to_string(),
                description: "iOS and Android mobile application".to_string(),
                avatar: None,
                created_at: date(2024, 2, 1),
            },
        ];

        let tickets = vec![
            Ticket {
                id: "PT-1".to_string(),
                title: "Create User Authentication System".to_string(),
                description: "Implement login, logout, and user session management".to_string(),
                status: Status::InProgress,
                priority: Priority::High,
                assignee: Some(sarah.clone()),
                reporter: alex.clone(),
                project_id: "1".to_string(),
                tags: vec!["AUTHENTICATION".to_string(), "BACKEND".to_string()],
                created_at: date(2024, 1, 20),
                updated_at: date(2024, 1, 22),
            },
            Ticket {
                id: "PT-2".to_string(),
                title: "Design Dashboard UI".to_string(),
                description: "Create modern and intuitive dashboard interface".to_string(),
                status: Status::Todo,
                priority: Priority::Medium,
                assignee: Some(maya.clone()),
                reporter: sarah.clone(),
                project_id: "1".to_string(),
                tags: vec!["UI/UX".to_string(), "FRONTEND".to_string()],
                created_at: date(2024, 1, 21),
                updated_at: date(2024, 1, 21),
            },
            Ticket {
                id: "PT-3".to_string(),
                title: "Setup CI/CD Pipeline".to_string(),
                description: "Configure automated testing and deployment".to_string(),
                status: Status::Done,
                priority: Priority::High,
                assignee: Some(alex.clone()),
                reporter: sarah.clone(),
                project_id: "1".to_string(),
                tags: vec!["DEVOPS".to_string(), "AUTOMATION".to_string()],
                created_at: date(2024, 1, 18),
                updated_at: date(2024, 1, 25),
            },
            Ticket {
                id: "PT-4".to_string(),
                title: "Email Verification Process".to_string(),
                description: "Add email verification for new user registrations".to_string(),
                status: Status::InReview,
                priority: Priority::Medium,
                assignee: Some(sarah.clone()),
                reporter: maya.clone(),
                project_id: "1".to_string(),
                tags: vec!["AUTHENTICATION".to_string(), "EMAIL".to_string()],
                created_at: date(2024, 1, 19),
                updated_at: date(2024, 1, 24),
            },
            Ticket {
                id: "MA-1".to_string(),
                title: "Mobile App Wireframes".to_string(),
                description: "Create initial wireframes for mobile application".to_string(),
                status: Status::Todo,
                priority: Priority::Low,
                assignee: Some(maya.clone()),
                reporter: alex.clone(),
                project_id: "2".to_string(),
                tags: vec!["MOBILE".to_string(), "DESIGN".to_string()],
                created_at: date(2024, 2, 1),
                updated_at: date(2024, 2, 1),
            },
        ];

        Self {
            users: vec![sarah, alex, maya],
            projects,
            tickets,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
