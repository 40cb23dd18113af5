//! Parsers for the output of the macOS display tools.

use crate::geometry::{ScreenDimensions, ScreenInfo, WorkAreaRect};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

static PIXELS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*x\s*(\d+)").expect("static regex"));

/// `system_profiler -json` encodes boolean display attributes either as JSON
/// `true` or as marker strings like `"spdisplays_yes"`.
fn is_flagged(display: &Value, key: &str) -> bool {
    match display.get(key) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(marker)) => !marker.is_empty() && marker != "spdisplays_no",
        _ => false,
    }
}

/// Locate the primary display in `system_profiler SPDisplaysDataType -json`
/// output and extract its pixel resolution.
///
/// Display selection priority: the one flagged as main, else the built-in
/// one, else the first entry of the list.
pub(crate) fn parse_system_profiler(stdout: &str) -> Option<ScreenInfo> {
    let data: Value = match serde_json::from_str(stdout) {
        Ok(data) => data,
        Err(e) => {
            debug!("system_profiler output is not valid JSON: {}", e);
            return None;
        }
    };
    let displays = data.get("SPDisplaysDataType")?.as_array()?;
    let display = displays
        .iter()
        .find(|d| is_flagged(d, "spdisplays_main"))
        .or_else(|| displays.iter().find(|d| is_flagged(d, "spdisplays_is_builtin")))
        .or_else(|| displays.first())?;
    // Older releases expose the resolution as `spdisplays_pixels`, newer ones
    // prefix it with an underscore.
    let pixels = display
        .get("spdisplays_pixels")
        .or_else(|| display.get("_spdisplays_pixels"))?
        .as_str()?;
    let caps = PIXELS_RE.captures(pixels)?;
    let width: u32 = caps[1].parse().ok()?;
    let height: u32 = caps[2].parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(ScreenInfo::full_screen(width, height))
}

static RESOLUTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)x(\d+).*?@(-?\d+),(-?\d+)").expect("static regex"));

/// Parse `screenresolution get` output of the form
/// `Display 0: 1920x1080x32@0,0`.
///
/// A missing `@X,Y` position suffix is tolerated and defaults to the origin.
pub(crate) fn parse_screenresolution(stdout: &str) -> Option<ScreenInfo> {
    if let Some(caps) = RESOLUTION_RE.captures(stdout) {
        let width: u32 = caps[1].parse().ok()?;
        let height: u32 = caps[2].parse().ok()?;
        let x: i32 = caps[3].parse().unwrap_or(0);
        let y: i32 = caps[4].parse().unwrap_or(0);
        if width == 0 || height == 0 {
            return None;
        }
        return Some(ScreenInfo {
            screen: ScreenDimensions { width, height },
            work_area: WorkAreaRect {
                x,
                y,
                width,
                height,
            },
        });
    }
    let caps = PIXELS_RE.captures(stdout)?;
    let width: u32 = caps[1].parse().ok()?;
    let height: u32 = caps[2].parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(ScreenInfo::full_screen(width, height))
}

/// Parse the "width, height" pair returned by the Finder desktop bounds
/// script.
pub(crate) fn parse_desktop_bounds(stdout: &str) -> Option<ScreenInfo> {
    let mut numbers = stdout.trim().split(',');
    let width: u32 = numbers.next()?.trim().parse().ok()?;
    let height: u32 = numbers.next()?.trim().parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(ScreenInfo::full_screen(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    mod should {
        use super::*;
        use crate::geometry::ScreenDimensions;

        #[test]
        fn select_the_display_flagged_as_main() {
            let stdout = r#"{
              "SPDisplaysDataType": [
                {"_name": "Color LCD", "spdisplays_pixels": "1440 x 900"},
                {"_name": "LG HDR 4K", "spdisplays_pixels": "2560 x 1440", "spdisplays_main": true}
              ]
            }"#;
            assert_eq!(
                parse_system_profiler(stdout),
                Some(ScreenInfo::full_screen(2560, 1440))
            );
        }

        #[test]
        fn accept_the_marker_string_main_flag() {
            // Real system_profiler output flags the main display with the
            // string "spdisplays_yes" rather than a JSON boolean.
            let stdout = r#"{
              "SPDisplaysDataType": [
                {"_name": "Color LCD", "spdisplays_pixels": "1440 x 900"},
                {"_name": "Studio Display", "spdisplays_pixels": "5120 x 2880", "spdisplays_main": "spdisplays_yes"}
              ]
            }"#;
            assert_eq!(
                parse_system_profiler(stdout),
                Some(ScreenInfo::full_screen(5120, 2880))
            );
        }

        #[test]
        fn prefer_the_builtin_display_when_none_is_main() {
            let stdout = r#"{
              "SPDisplaysDataType": [
                {"_name": "LG HDR 4K", "spdisplays_pixels": "3840 x 2160"},
                {"_name": "Color LCD", "spdisplays_pixels": "2880 x 1800", "spdisplays_is_builtin": true}
              ]
            }"#;
            assert_eq!(
                parse_system_profiler(stdout),
                Some(ScreenInfo::full_screen(2880, 1800))
            );
        }

        #[test]
        fn use_the_first_display_as_a_last_resort() {
            let stdout = r#"{
              "SPDisplaysDataType": [
                {"_name": "A", "spdisplays_pixels": "1920 x 1200"},
                {"_name": "B", "spdisplays_pixels": "1280 x 1024"}
              ]
            }"#;
            assert_eq!(
                parse_system_profiler(stdout),
                Some(ScreenInfo::full_screen(1920, 1200))
            );
        }

        #[test]
        fn read_the_underscore_prefixed_pixels_key() {
            let stdout = r#"{
              "SPDisplaysDataType": [
                {"_name": "Color LCD", "_spdisplays_pixels": "2560 x 1600", "spdisplays_main": "spdisplays_yes"}
              ]
            }"#;
            assert_eq!(
                parse_system_profiler(stdout),
                Some(ScreenInfo::full_screen(2560, 1600))
            );
        }

        #[test]
        fn reject_invalid_or_empty_profiler_output() {
            assert_eq!(parse_system_profiler(""), None);
            assert_eq!(parse_system_profiler("not json"), None);
            assert_eq!(parse_system_profiler(r#"{"SPDisplaysDataType": []}"#), None);
            assert_eq!(
                parse_system_profiler(r#"{"SPDisplaysDataType": [{"_name": "A"}]}"#),
                None
            );
        }

        #[test]
        fn parse_screenresolution_with_position() {
            assert_eq!(
                parse_screenresolution("Display 0: 1920x1080x32@0,0\n"),
                Some(ScreenInfo::full_screen(1920, 1080))
            );
        }

        #[test]
        fn keep_a_negative_display_position() {
            assert_eq!(
                parse_screenresolution("Display 1: 1440x900x32@-1440,0\n"),
                Some(ScreenInfo {
                    screen: ScreenDimensions {
                        width: 1440,
                        height: 900
                    },
                    work_area: WorkAreaRect {
                        x: -1440,
                        y: 0,
                        width: 1440,
                        height: 900
                    },
                })
            );
        }

        #[test]
        fn default_to_origin_when_the_position_is_missing() {
            assert_eq!(
                parse_screenresolution("Display 0: 2560x1440x32\n"),
                Some(ScreenInfo::full_screen(2560, 1440))
            );
        }

        #[test]
        fn reject_screenresolution_garbage() {
            assert_eq!(parse_screenresolution(""), None);
            assert_eq!(parse_screenresolution("no displays found"), None);
        }

        #[test]
        fn parse_desktop_bounds_pair() {
            assert_eq!(
                parse_desktop_bounds("1920, 1080\n"),
                Some(ScreenInfo::full_screen(1920, 1080))
            );
        }

        #[test]
        fn reject_malformed_desktop_bounds() {
            assert_eq!(parse_desktop_bounds(""), None);
            assert_eq!(parse_desktop_bounds("1920"), None);
            assert_eq!(parse_desktop_bounds("width, height"), None);
            assert_eq!(parse_desktop_bounds("0, 0"), None);
        }
    }
}
