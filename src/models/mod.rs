//! Core domain types for course catalogs and weekly time slots.

pub mod catalog;
pub mod time;

pub use catalog::*;
pub use time::*;
