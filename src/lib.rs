//! Lifeline - attendance requirement calculator
//!
//! This library answers two questions for a student with a minimum
//! attendance percentage to keep: how many consecutive classes must be
//! attended to get back above the line, and how many upcoming classes can
//! be skipped without dropping below it.
//!
//! The arithmetic lives in [`solver`] as pure functions; the remaining
//! modules validate input, load configuration and render reports.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod record;
pub mod report;
pub mod solver;
