//! Startup errors.
//!
//! Nothing inside a tick can fail. Everything that can go wrong happens
//! while building the session (config, assets, window, GPU) and is fatal:
//! the game never starts without valid sprite resources.

use std::fmt;
use std::path::PathBuf;

/// Errors that abort session creation.
#[derive(Debug)]
pub enum CrabError {
    /// The config file could not be read, parsed, or is inconsistent.
    Config { path: PathBuf, reason: String },
    /// An image or font asset is missing, corrupt, or has the wrong shape.
    Asset { path: PathBuf, reason: String },
    /// The crab animation cannot be timed with the given tick rate.
    Animation(String),
    /// The event loop or window could not be created.
    Window(String),
    /// No usable GPU adapter, device, or surface.
    Gpu(String),
}

impl CrabError {
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        CrabError::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn asset(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        CrabError::Asset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for CrabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrabError::Config { path, reason } => {
                write!(f, "invalid config '{}': {reason}", path.display())
            }
            CrabError::Asset { path, reason } => {
                write!(f, "failed to load asset '{}': {reason}", path.display())
            }
            CrabError::Animation(e) => write!(f, "invalid crab animation: {e}"),
            CrabError::Window(e) => write!(f, "window creation failed: {e}"),
            CrabError::Gpu(e) => write!(f, "GPU initialization failed: {e}"),
        }
    }
}

impl std::error::Error for CrabError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_error_names_the_path() {
        let err = CrabError::asset("assets/fish.png", "No such file");
        assert_eq!(
            err.to_string(),
            "failed to load asset 'assets/fish.png': No such file"
        );
    }
}
