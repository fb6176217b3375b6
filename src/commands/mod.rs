//! CLI command implementations.
//!
//! Commands orchestrate the library components; the I/O at the edges
//! (commit markers, publishing) lives here rather than in the core.

pub mod compare;
pub mod context;
pub mod models;
pub mod publish;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_compare, resolve_config, run_comparison, Comparison};
pub use context::RunContext;
pub use models::CompareArgs;
pub use publish::{FilePublisher, GithubCommentPublisher, Publisher, StdoutPublisher};
pub use utils::{display_config, display_version};
