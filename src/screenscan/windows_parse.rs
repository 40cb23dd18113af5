//! Parsers for the payloads produced by the Windows probes.

use crate::geometry::{ScreenDimensions, ScreenInfo, WorkAreaRect};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Resolutions at or below this many pixels are treated as placeholder
/// registry entries left behind by drivers, not real screen sizes.
const MIN_REGISTRY_RESOLUTION: u32 = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrimaryScreenPayload {
    screen_width: u32,
    screen_height: u32,
    work_area_x: i32,
    work_area_y: i32,
    work_area_width: u32,
    work_area_height: u32,
}

/// Parse the six-field JSON line printed by the `System.Windows.Forms` query.
pub(crate) fn parse_primary_screen(stdout: &str) -> Option<ScreenInfo> {
    let payload: PrimaryScreenPayload = serde_json::from_str(stdout.trim()).ok()?;
    if payload.screen_width == 0 || payload.screen_height == 0 {
        return None;
    }
    Some(ScreenInfo {
        screen: ScreenDimensions {
            width: payload.screen_width,
            height: payload.screen_height,
        },
        work_area: WorkAreaRect {
            x: payload.work_area_x,
            y: payload.work_area_y,
            width: payload.work_area_width,
            height: payload.work_area_height,
        },
    })
}

#[derive(Debug, Deserialize)]
struct MonitorPayload {
    width: Option<u32>,
    height: Option<u32>,
}

/// Parse the `{width, height}` JSON printed by the WMI monitor query.
///
/// WMI may report a monitor without a resolution, in which case the fields
/// are absent or zero and the probe is unusable.
pub(crate) fn parse_wmi_monitor(stdout: &str) -> Option<ScreenInfo> {
    let payload: MonitorPayload = serde_json::from_str(stdout.trim()).ok()?;
    match (payload.width, payload.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            Some(ScreenInfo::full_screen(width, height))
        }
        _ => None,
    }
}

static X_RESOLUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"DefaultSettings\.XResolution\s+REG_DWORD\s+(?:0x)?([0-9A-Fa-f]+)")
        .expect("static regex")
});

static Y_RESOLUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"DefaultSettings\.YResolution\s+REG_DWORD\s+(?:0x)?([0-9A-Fa-f]+)")
        .expect("static regex")
});

/// Extract the stored resolution from two `reg query` dumps.
///
/// `reg query` prints `REG_DWORD` values in hexadecimal (`0x780`), so the
/// captured digits are decoded base 16.
pub(crate) fn parse_registry_resolution(
    width_stdout: &str,
    height_stdout: &str,
) -> Option<ScreenInfo> {
    let width = X_RESOLUTION_RE
        .captures(width_stdout)
        .and_then(|c| u32::from_str_radix(&c[1], 16).ok())?;
    let height = Y_RESOLUTION_RE
        .captures(height_stdout)
        .and_then(|c| u32::from_str_radix(&c[1], 16).ok())?;
    (width > MIN_REGISTRY_RESOLUTION && height > MIN_REGISTRY_RESOLUTION)
        .then(|| ScreenInfo::full_screen(width, height))
}
