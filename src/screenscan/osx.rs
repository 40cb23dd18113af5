use super::osx_parse::{parse_desktop_bounds, parse_screenresolution, parse_system_profiler};
use super::{ScreenScan, Strategy};
use crate::geometry::ScreenInfo;

/// macOS probes: `system_profiler` ships with the OS and knows which display
/// is the main one, `screenresolution` is a third-party tool that also
/// reports the display position, and the Finder script only knows the
/// desktop bounds.
pub(super) const STRATEGIES: &[(&str, Strategy)] = &[
    ("system_profiler", ScreenScan::system_profiler),
    ("screenresolution", ScreenScan::screenresolution),
    ("osascript desktop bounds", ScreenScan::desktop_bounds),
];

/// Asks the Finder for the desktop window bounds; prints "width, height".
const DESKTOP_BOUNDS_SCRIPT: &str = r#"
tell application "Finder"
  set desktopBounds to bounds of window of desktop
  set screenWidth to item 3 of desktopBounds
  set screenHeight to item 4 of desktopBounds
  return {screenWidth, screenHeight}
end tell
"#;

impl ScreenScan {
    fn system_profiler(&self) -> Option<ScreenInfo> {
        let stdout = self.run("system_profiler", &["SPDisplaysDataType", "-json"])?;
        parse_system_profiler(&stdout)
    }

    fn screenresolution(&self) -> Option<ScreenInfo> {
        let stdout = self.run("screenresolution", &["get"])?;
        parse_screenresolution(&stdout)
    }

    fn desktop_bounds(&self) -> Option<ScreenInfo> {
        let stdout = self.run("osascript", &["-e", DESKTOP_BOUNDS_SCRIPT])?;
        parse_desktop_bounds(&stdout)
    }
}
