/// What `version` reports about the running binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub revision: &'static str,
    pub profile: &'static str,
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        revision: option_env!("CREDIT_APP_GIT_REVISION").unwrap_or("unknown"),
        profile: option_env!("CREDIT_APP_PROFILE").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    /// One-line summary, e.g. `0.1.0 (a1b2c3d, debug)`.
    pub fn summary(&self) -> String {
        format!("{} ({}, {})", self.version, self.revision, self.profile)
    }
}
