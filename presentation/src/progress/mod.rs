//! Crew progress display

pub mod reporter;
