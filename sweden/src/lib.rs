//! Expose sweden's internal API for use in integration tests and for tools
//! that want to convert documents without going through the CLI.
pub mod cli;
pub mod document;
pub mod error;
pub mod frontmatter;

pub use document::{Document, Outcome, collect_documents};
pub use error::SwedenError;
pub use frontmatter::{FrontMatter, extract_title, synthesize_front_matter};
