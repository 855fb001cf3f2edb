//! Data models for the goal tracker.
//!
//! Records mirror the database rows; view models match the frontend
//! TypeScript interfaces.

mod dashboard;
mod goal;
mod member;
mod mood;

pub use dashboard::*;
pub use goal::*;
pub use member::*;
pub use mood::*;
