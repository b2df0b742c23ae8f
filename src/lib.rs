//! # CSG Rust Engine
//!
//! Deterministic course schedule generation and conflict detection.
//!
//! Given a catalog of courses (each with one or more sections, each section
//! carrying weekly time slots) and a preference mode, this crate enumerates
//! every valid combination of one section bundle per course, discards any
//! combination containing a time overlap, scores each survivor against a
//! fixed metrics model, and returns a ranked top-N list.
//!
//! The engine is pure computation over in-memory structures: it owns no
//! network or database I/O, and repeated calls with identical inputs produce
//! identical ordered output.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core domain types (courses, sections, time slots, bundles)
//! - [`parsing`]: JSON catalog loading and boundary validation
//! - [`algorithms`]: Conflict detection, combination enumeration, metrics,
//!   and preference ranking
//! - [`services`]: The schedule generation facade that composes the
//!   algorithm layer end to end
//!
//! ## Determinism
//!
//! Bundle iteration strictly follows each course's section declaration
//! order, which fixes which combination is discovered first. The ranker's
//! sort is stable, so candidates tying on every active key retain discovery
//! order. This makes automated comparisons against reference fixtures
//! reproducible.

pub mod algorithms;
pub mod models;
pub mod parsing;
pub mod services;

pub use algorithms::conflicts::{conflicts, schedule_has_conflict};
pub use algorithms::metrics::{calculate_schedule_metrics, ScheduleMetrics};
pub use algorithms::ranking::{Preference, ScoredSchedule};
pub use models::{Bundle, Catalog, Course, Section, SectionKind, TimeSlot, Weekday};
pub use parsing::{load_catalog_str, CatalogError};
pub use services::generator::{generate_schedules, GenerateOptions};
