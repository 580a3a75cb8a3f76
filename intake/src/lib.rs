//! # intake
//!
//! Multi-step survey intake for three audiences: people looking for
//! properties or services, service providers, and real estate professionals.
//! Front-end agnostic.
//!
//! A [`Session`] walks one survey step by step and holds its answers. A
//! [`Gateway`] turns a finished session into a stored row and reports the
//! outcome through a [`Notifier`]. The [`Dashboard`] reads every stored row
//! back and summarizes it.
//!
//! ## Usage
//!
//! ```rust
//! use intake::surveys::{UserMulti, UserSingle, UserSurvey};
//! use intake::{Dashboard, Gateway, LogNotifier, MemoryStore, Route, Session};
//!
//! let store = MemoryStore::new();
//! let gateway = Gateway::new(&store, &LogNotifier);
//!
//! let mut session = Session::<UserSurvey>::new();
//! session.set(UserSingle::PrimaryReason, "Looking to rent a property");
//! session.toggle(UserMulti::ImportantFilters, "Price range", true);
//!
//! // "Next" on the last step submits
//! let mut route = None;
//! while route.is_none() {
//!     route = gateway.advance(&mut session).unwrap();
//! }
//! assert_eq!(route, Some(Route::Complete));
//!
//! let dashboard = Dashboard::fetch(&store).dashboard().unwrap();
//! assert_eq!(dashboard.counts().users, 1);
//! ```
//!
//! ## Stores
//!
//! Persistence goes through the [`SurveyStore`] trait:
//! - [`MemoryStore`] - In-process rows, for tests and offline runs
//! - [`RestStore`] - A hosted PostgREST-style backend
//!
//! [`IntakeConfig`] picks one from the environment.

// Re-export all types from intake-types
pub use intake_types::*;

// The three questionnaires
pub use intake_surveys as surveys;

mod session;
pub use session::{Advance, Session};

mod gateway;
pub use gateway::Gateway;

mod dashboard;
pub use dashboard::{
    Dashboard, DashboardLoader, Group, Preview, ProviderTableRow, RealEstateTableRow,
    SurveyCounts, UserTableRow, fetch_rows, group_by,
};

mod memory_store;
pub use memory_store::MemoryStore;

mod rest_store;
pub use rest_store::RestStore;

mod notify;
pub use notify::{LogNotifier, RecordingNotifier};

mod config;
pub use config::{Backend, ConfigError, IntakeConfig};
