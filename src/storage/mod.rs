//! Durable storage for the planner state.
//!
//! The whole [`PlannerState`](crate::model::PlannerState) lives in one JSON
//! file:
//!
//! ```json
//! {
//!   "user_name": "Ada",
//!   "study_list": [
//!     {
//!       "id": 1,
//!       "name": "Calculus exam",
//!       "priority": 3,
//!       "due_date": "2025-03-15",
//!       "done": false,
//!       "reminded": false,
//!       "user_email": "ada@example.com"
//!     }
//!   ]
//! }
//! ```
//!
//! Every save rewrites the file atomically. A file that cannot be parsed is
//! not fatal: loading falls back to an empty state and reports a
//! [`CorruptDataWarning`].

mod store;

pub use store::{CorruptDataWarning, Loaded, PlannerStore};
