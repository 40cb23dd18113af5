#![warn(missing_docs)]
//! Detect the primary display resolution and usable work area by querying OS
//! command line tools, without any GUI toolkit dependency.
use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

pub mod command;
pub mod geometry;
pub mod platform;
pub mod screenscan;

pub use command::{CommandRunner, SystemCommandRunner};
pub use geometry::{ScreenDimensions, ScreenInfo, WorkAreaRect};
pub use platform::{Platform, UnsupportedPlatform};
pub use screenscan::ScreenScan;

/// Setup logging to stdout
/// (Tracing is a bit more involving to set up but will provide much more feature if needed)
pub fn setup_tracing(filter: &str) -> Result<()> {
    let fmt_layer = fmt::layer().with_target(false);
    let filter_layer = EnvFilter::try_new(filter).context("Initializing log filter")?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

/// Detect the current platform and return its screen geometry.
///
/// The only possible error is [`UnsupportedPlatform`]; once the platform is
/// known, tool failures are absorbed by the resolver's fallback chain and a
/// [`ScreenInfo`] is always returned.
pub fn get_screen_dimensions() -> Result<ScreenInfo, UnsupportedPlatform> {
    let platform = Platform::current()?;
    Ok(ScreenScan::new(platform).screen_info())
}

/// Run the Windows resolver, regardless of the platform this process runs
/// on.
pub fn get_windows_screen_dimensions() -> ScreenInfo {
    ScreenScan::new(Platform::Windows).screen_info()
}

/// Run the macOS resolver, regardless of the platform this process runs on.
pub fn get_macos_screen_dimensions() -> ScreenInfo {
    ScreenScan::new(Platform::MacOs).screen_info()
}

/// Run the Linux resolver, regardless of the platform this process runs on.
pub fn get_linux_screen_dimensions() -> ScreenInfo {
    ScreenScan::new(Platform::Linux).screen_info()
}

#[cfg(test)]
mod get_screen_dimensions_should {
    use super::*;
    use test_log::test; // Automatically trace tests

    #[test]
    fn always_return_a_positive_resolution() -> anyhow::Result<()> {
        // Whatever tools exist on the test host, the resolver must produce a
        // screen, at worst the fallback one.
        let info = get_screen_dimensions()?;
        assert!(info.screen.width > 0);
        assert!(info.screen.height > 0);
        Ok(())
    }
}
