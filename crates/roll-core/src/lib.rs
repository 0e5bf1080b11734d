//! # roll-core
//!
//! Core types, calendar resolution, and attendance math for rollcall.
//!
//! This crate provides the foundational types shared across all rollcall crates:
//! - Entity structs for users, timetable entries, and attendance records
//! - The closed reason-category enum and projection standings
//! - ID prefix constants
//! - The day resolver and wall-clock parsing (no timezone conversion anywhere)
//! - Pure per-class statistics and 75%-threshold projections
//! - Cross-cutting error types
//! - CLI response types

pub mod calendar;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod stats;
