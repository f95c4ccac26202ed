//! Drug Candidate Catalog - GUI Library
//!
//! This module exposes internal components for testing.

pub mod app;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
