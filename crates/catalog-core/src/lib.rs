//! Filter engine and view-state machine for the candidate catalog.
//!
//! The record store (an ordered `Vec<Record>`, immutable after load) flows
//! through [`filter::apply`] on every filter change; the resulting ordered
//! subsequence drives the two view modes tracked by [`session::Session`]:
//! the summary list and the single-record detail view.

pub mod filter;
pub mod session;

pub use filter::{apply, category_options, contains_id, matches};
pub use session::Session;
