//! # Studyplan - a personal study planner
//!
//! Studyplan keeps a list of assignments with a priority, a due date and an
//! optional reminder email. It tells you what is due, what to study next and
//! emails a reminder the day before an assignment is due.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a planner in the current directory
//! studyplan init --name Ada
//!
//! # Add an assignment due in three days
//! studyplan add "Calculus exam" -p high --in 3 --email ada@example.com
//!
//! # List by due date
//! studyplan list --sort due
//!
//! # What should I study now?
//! studyplan next
//!
//! # Send reminders (run daily from cron)
//! studyplan remind
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Tasks, the study list and the planner state
//! - [`due`]: Days until due and urgency classification
//! - [`selection`]: Sort orders and the next-task recommendation
//! - [`reminder`]: Reminder decisions and dispatch
//! - [`summary`]: Progress counts
//! - [`storage`]: JSON persistence
//! - [`cli`]: Command-line interface definitions

/// Calendar export.
pub mod calendar;

/// Command-line interface definitions using clap.
pub mod cli;

/// The source of "today".
pub mod clock;

/// Configuration loading and management.
///
/// Handles `.studyplan.toml` configuration files and planner discovery.
pub mod config;

/// Days-until-due arithmetic and status phrases.
pub mod due;

/// Error types and result aliases.
///
/// Defines `PlannerError` enum and `Result<T>` type alias.
pub mod error;

/// Tracing subscriber setup.
pub mod logging;

/// SMTP transport for reminder emails.
#[cfg(feature = "email")]
pub mod mailer;

/// Data models for the planner.
///
/// Includes `Task`, `StudyList`, `PlannerState` and `Priority`.
pub mod model;

/// Reminder rule, message composition and dispatch.
pub mod reminder;

/// Task ordering and next-task selection.
pub mod selection;

/// JSON file storage with atomic saves.
pub mod storage;

/// Progress counts over the study list.
pub mod summary;

/// Input validation utilities.
pub mod validation;
