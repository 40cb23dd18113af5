//! Screen geometry value types shared by every platform resolver.

use serde::{Deserialize, Serialize};

/// Size of a display in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenDimensions {
    /// Screen width in pixels, strictly positive.
    pub width: u32,
    /// Screen height in pixels, strictly positive.
    pub height: u32,
}

/// Usable desktop rectangle (screen minus taskbars, docks, menu bars).
///
/// The origin may be negative on multi-monitor layouts, but most probes only
/// report a size and leave it at `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkAreaRect {
    /// Horizontal offset of the work area origin.
    pub x: i32,
    /// Vertical offset of the work area origin.
    pub y: i32,
    /// Work area width in pixels.
    pub width: u32,
    /// Work area height in pixels.
    pub height: u32,
}

/// Screen information returned by every resolver.
///
/// A plain value, rebuilt from scratch on each probe; nothing is cached
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInfo {
    /// Full screen dimensions.
    pub screen: ScreenDimensions,
    /// Usable work area.
    pub work_area: WorkAreaRect,
}

impl ScreenInfo {
    /// Build a `ScreenInfo` whose work area covers the whole screen at origin.
    pub const fn full_screen(width: u32, height: u32) -> Self {
        ScreenInfo {
            screen: ScreenDimensions { width, height },
            work_area: WorkAreaRect {
                x: 0,
                y: 0,
                width,
                height,
            },
        }
    }

    /// Resolution assumed when every probe on a platform came up empty.
    pub const fn fallback() -> Self {
        Self::full_screen(1920, 1080)
    }
}
