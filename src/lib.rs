//! Bookly — catalog filtering and reader/writer/publisher onboarding core.

pub mod catalog;
pub mod config;
pub mod delayed;
pub mod error;
pub mod onboarding;
