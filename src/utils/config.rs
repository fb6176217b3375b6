//! Configuration and constants for the size bot.

use std::time::Duration;

/// Default timeout for GitHub API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current JSON summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Any raw change above this fraction lands in the critical section
pub const DEFAULT_CRITICAL_THRESHOLD: f64 = 0.02;

/// Any raw change above this fraction lands in the significant section
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.002;

/// Changes smaller than this render as "=" regardless of thresholds
pub const DISPLAY_FLOOR: f64 = 0.0001;

/// Artifact file extension (without the dot)
pub const DEFAULT_EXTENSION: &str = "js";

/// Marker file holding the commit a build tree was produced from
pub const COMMIT_SHA_FILE: &str = "COMMIT_SHA";

/// Deep link to the build viewer.
/// Placeholders: `{head}`, `{base}`, `{path}`.
pub const DEFAULT_LINK_TEMPLATE: &str =
    "https://react-builds.vercel.app/commits/{head}/files/{path}?compare={base}";

// Changes confined to these paths cannot move production bundle sizes
pub const DEFAULT_SKIP_PATH_PATTERNS: &[&str] = &["packages/react-devtools"];

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";

// Bundles that are always reported, even when nothing changed
pub const DEFAULT_CRITICAL_ARTIFACTS: &[&str] = &[
    "oss-stable/react-dom/cjs/react-dom.production.min.js",
    "oss-experimental/react-dom/cjs/react-dom.production.min.js",
    "facebook-www/ReactDOM-prod.classic.js",
    "facebook-www/ReactDOM-prod.modern.js",
];
