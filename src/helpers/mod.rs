//! Helper functions shared across the data layer
//!
//! Small, dependency-light utilities: strict calendar-date parsing plus the
//! newest-first ordering used by the defensive preview sort, and slug
//! well-formedness/derivation.

pub mod date;
pub mod slug;
