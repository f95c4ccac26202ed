//! View components
//!
//! Each view represents a major screen in the application.

mod browse;
mod detail;
mod home;

pub use browse::{BrowseAction, BrowseView};
pub use detail::DetailView;
pub use home::{HomeAction, HomeView};
