//! Application layer: list state, engine, events and actions.
//!
//! Sits between the repository and a presentation adapter. Data flows one
//! way:
//!
//! ```text
//! User Input → Events → handle_event → ListEngine → Actions → Adapter
//!                                          ↑
//!                       Repository stream ─┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Follow-ups returned by the event handler
//! - [`engine`]: Filter and search engine with observable outputs
//! - [`handler`]: Event processing
//! - [`router`]: Detail navigation collaborator
//! - [`state`]: List inputs and pure derivation

pub mod actions;
pub mod engine;
pub mod handler;
pub mod router;
pub mod state;

pub use actions::Action;
pub use engine::ListEngine;
pub use handler::{handle_event, Event};
pub use router::Router;
pub use state::{derive_subset, ListState};
