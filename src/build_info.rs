//! Compile-time build metadata for the `--version` surface.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("CCS_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("CCS_BUILD_TIMESTAMP");

/// Long version block used by `ccs --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("CCS_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("CCS_BUILD_TIMESTAMP")
);
