//! # joblens-core
//!
//! Core types and logic for the joblens job-board client:
//! - The [`Job`] entity as served by the board API
//! - Experience-level and work-type derivation heuristics
//! - The [`JobFilter`] predicate and option-list building
//! - The [`FilterSelect`] widget state machine used by interactive mode
//!
//! Everything here is pure and synchronous; fetching lives in `joblens-api`
//! and rendering in the CLI crate.

pub mod derive;
pub mod entities;
pub mod filter;
pub mod options;
pub mod select;

pub use derive::{derive_experience, derive_work_type};
pub use entities::Job;
pub use filter::JobFilter;
pub use options::{uniq_sorted, FilterOptions};
pub use select::{FilterSelect, SelectChange};
