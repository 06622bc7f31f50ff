//! Server-side loader for the changelog page.
//!
//! One call to [`ChangelogClient::load`] fetches the raw changelog from
//! the backend, renders each entry's markdown into HTML, parses the
//! wire timestamps, and returns the enriched list in backend order.
//! Each call builds a fresh result; nothing is cached between page
//! renders.

mod config;
mod error;
mod loader;
mod markdown;
pub mod telemetry;

pub use config::LoaderConfig;
pub use error::LoadError;
pub use loader::{ChangelogClient, ChangelogData};
pub use markdown::{CmarkRenderer, MarkdownRenderer};
