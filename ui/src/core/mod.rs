//! Pure, platform-agnostic helpers shared by the page components.

pub mod accordion;
pub mod config;
pub mod format;
pub mod outbound;
pub mod rating;
