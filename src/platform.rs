//! Operating system identification for resolver dispatch.

use std::fmt;
use thiserror::Error;

/// Error raised when a platform identifier matches no supported resolver.
///
/// This is the only error ever surfaced by the public API; every tool-level
/// failure inside a resolver is absorbed by its fallback chain.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported platform: {0}. This library supports Windows, macOS and Linux.")]
pub struct UnsupportedPlatform(pub String);

/// Operating systems with a screen resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Microsoft Windows (`win32`)
    Windows,
    /// Apple macOS (`darwin`)
    MacOs,
    /// Linux
    Linux,
}

impl Platform {
    /// Map a platform identifier to a [`Platform`].
    ///
    /// Accepts both the node-style identifiers (`win32`, `darwin`, `linux`)
    /// and the names used by `std::env::consts::OS` (`windows`, `macos`).
    pub fn from_identifier(identifier: &str) -> Result<Self, UnsupportedPlatform> {
        match identifier {
            "win32" | "windows" => Ok(Platform::Windows),
            "darwin" | "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(UnsupportedPlatform(other.to_owned())),
        }
    }

    /// Identify the platform this process is running on.
    pub fn current() -> Result<Self, UnsupportedPlatform> {
        Self::from_identifier(std::env::consts::OS)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn recognize_node_style_identifiers() {
        assert_eq!(Platform::from_identifier("win32"), Ok(Platform::Windows));
        assert_eq!(Platform::from_identifier("darwin"), Ok(Platform::MacOs));
        assert_eq!(Platform::from_identifier("linux"), Ok(Platform::Linux));
    }

    #[test]
    fn recognize_rust_os_names() {
        assert_eq!(Platform::from_identifier("windows"), Ok(Platform::Windows));
        assert_eq!(Platform::from_identifier("macos"), Ok(Platform::MacOs));
    }

    #[test]
    fn reject_unknown_identifier_with_its_name() {
        let err = Platform::from_identifier("freebsd").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unsupported"), "Unexpected message: {}", msg);
        assert!(msg.contains("freebsd"), "Unexpected message: {}", msg);
    }

    #[test]
    fn identify_the_running_platform() {
        // The test suite only runs on supported platforms.
        assert!(Platform::current().is_ok());
    }
}
