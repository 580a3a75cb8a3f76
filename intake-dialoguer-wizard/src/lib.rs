//! # intake-dialoguer-wizard
//!
//! Dialoguer wizard front-end for survey-intake.
//!
//! This crate walks a survey session step by step on the command line using
//! the `dialoguer` library, and renders the landing, completion and dashboard
//! views as plain text.
//!
//! ## Example
//!
//! ```rust,ignore
//! use intake::surveys::UserSurvey;
//! use intake::{Gateway, MemoryStore, Session};
//! use intake_dialoguer_wizard::{DialoguerWizard, TerminalNotifier};
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = MemoryStore::new();
//!     let gateway = Gateway::new(&store, &TerminalNotifier);
//!     let mut session = Session::<UserSurvey>::new();
//!     let route = DialoguerWizard::new().run(&gateway, &mut session)?;
//!     println!("finished at {route}");
//!     Ok(())
//! }
//! ```

mod app;
pub mod screens;
mod wizard;

pub use app::App;
pub use wizard::{DialoguerWizard, TerminalNotifier, WizardError, step_header};
