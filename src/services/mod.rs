//! Service layer composing the algorithm modules end to end.

pub mod generator;

pub use generator::{generate_schedules, GenerateOptions};
