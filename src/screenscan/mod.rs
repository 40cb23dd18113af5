//! Screen and work-area detection for linux, windows and mac os.
//!
//! Every platform carries an ordered list of probes against external tools
//! (powershell, system_profiler, xrandr, ...). Each probe either yields a
//! complete [`ScreenInfo`] or nothing; the first usable answer wins and an
//! exhausted list falls back to a fixed 1920x1080 resolution. Tool failures
//! never escape a resolver.

mod linux;
mod linux_parse;
mod osx;
mod osx_parse;
mod windows;
mod windows_parse;

use crate::command::{CommandRunner, SystemCommandRunner};
use crate::geometry::ScreenInfo;
use crate::platform::Platform;
use std::fmt;
use tracing::debug;

/// One detection strategy: probe a tool and yield a [`ScreenInfo`] when its
/// output was usable. `None` means "try the next one".
type Strategy = fn(&ScreenScan) -> Option<ScreenInfo>;

/// Screen resolver for one operating system.
///
/// Stateless apart from its command runner; every [`screen_info`] call probes
/// the external tools from scratch.
///
/// [`screen_info`]: ScreenScan::screen_info
pub struct ScreenScan {
    platform: Platform,
    /// Command runner for executing system commands (enables mocking in tests)
    runner: Box<dyn CommandRunner>,
}

impl fmt::Debug for ScreenScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenScan")
            .field("platform", &self.platform)
            .finish()
    }
}

impl ScreenScan {
    /// Create a resolver for `platform` backed by real command execution.
    pub fn new(platform: Platform) -> Self {
        ScreenScan {
            platform,
            runner: Box::new(SystemCommandRunner),
        }
    }

    /// Create a resolver with a custom command runner (for testing).
    pub fn with_runner(platform: Platform, runner: Box<dyn CommandRunner>) -> Self {
        ScreenScan { platform, runner }
    }

    /// Detect the primary screen dimensions and usable work area.
    ///
    /// Probes run strictly in order; a missing tool, a non-zero exit or
    /// unparsable output moves on to the next probe. An exhausted list yields
    /// [`ScreenInfo::fallback`], never an error.
    pub fn screen_info(&self) -> ScreenInfo {
        let strategies: &[(&str, Strategy)] = match self.platform {
            Platform::Windows => windows::STRATEGIES,
            Platform::MacOs => osx::STRATEGIES,
            Platform::Linux => linux::STRATEGIES,
        };
        for (tool, strategy) in strategies {
            if let Some(info) = strategy(self) {
                debug!("{} reported {:?}", tool, info);
                return info;
            }
            debug!("{} produced no usable output", tool);
        }
        debug!("all probes exhausted, assuming fallback resolution");
        ScreenInfo::fallback()
    }

    /// Run a tool, folding spawn errors into `None`.
    fn run(&self, cmd: &str, args: &[&str]) -> Option<String> {
        self.runner
            .run(cmd, args.iter().map(|s| (*s).to_owned()).collect())
            .ok()
    }
}
