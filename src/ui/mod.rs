//! Presentation contract for the item list screen.
//!
//! Rendering itself belongs to the host adapter. This layer turns engine
//! outputs into display-ready data:
//!
//! ```text
//! ListEngine → ListViewModel::compute → ListViewModel → Adapter
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and their computation

pub mod viewmodel;

pub use viewmodel::{
    DisplayRow, EmptyState, FilterChip, HeaderInfo, ListViewModel, RowIcon, SearchBarInfo,
};
