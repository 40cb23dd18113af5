//! Parsers for the output of the Linux display tools.

use crate::geometry::{ScreenDimensions, ScreenInfo, WorkAreaRect};
use once_cell::sync::Lazy;
use regex::Regex;

static MODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)x(\d+)(?:([+-]\d+)([+-]\d+))?").expect("static regex"));

/// Extract the primary (or first connected) monitor geometry from
/// `xrandr --query` output.
///
/// Lines for disconnected outputs are never candidates: the substring
/// ` connected` does not appear in `disconnected`.
pub(crate) fn parse_xrandr(stdout: &str) -> Option<ScreenInfo> {
    let mut connected = Vec::new();
    let mut primary = None;
    for line in stdout.lines() {
        if line.contains(" connected") {
            connected.push(line);
        }
        if line.contains(" primary") {
            primary = Some(line);
            break;
        }
    }
    let target = primary.or_else(|| connected.first().copied())?;

    let caps = MODE_RE.captures(target)?;
    let width: u32 = caps[1].parse().ok()?;
    let height: u32 = caps[2].parse().ok()?;
    // Position offsets like `+0+0` are optional; a bare mode means origin.
    let x: i32 = caps.get(3).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
    let y: i32 = caps.get(4).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
    if width == 0 || height == 0 {
        return None;
    }
    Some(ScreenInfo {
        screen: ScreenDimensions { width, height },
        work_area: WorkAreaRect {
            x,
            y,
            width,
            height,
        },
    })
}

static DIMENSIONS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dimensions:\s+(\d+)x(\d+)\s+pixels").expect("static regex"));

/// Parse the `dimensions: WxH pixels (...)` line of `xdpyinfo` output.
pub(crate) fn parse_xdpyinfo(stdout: &str) -> Option<ScreenInfo> {
    let caps = DIMENSIONS_RE.captures(stdout)?;
    let width: u32 = caps[1].parse().ok()?;
    let height: u32 = caps[2].parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(ScreenInfo::full_screen(width, height))
}

static GEOMETRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)x(\d+)\+(\d+)\+(\d+)").expect("static regex"));

/// Parse `wmctrl -d` output: the sixth whitespace-separated field of a
/// desktop line is expected in `WxH+X+Y` form; the first line whose geometry
/// field matches wins.
pub(crate) fn parse_wmctrl(stdout: &str) -> Option<ScreenInfo> {
    for line in stdout.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            continue;
        }
        if let Some(caps) = GEOMETRY_RE.captures(fields[5]) {
            let width: u32 = caps[1].parse().ok()?;
            let height: u32 = caps[2].parse().ok()?;
            let x: i32 = caps[3].parse().ok()?;
            let y: i32 = caps[4].parse().ok()?;
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
    }
    None
}

static DESKTOP_GEOMETRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"_NET_DESKTOP_GEOMETRY\(\w+\) = (\d+), (\d+)").expect("static regex")
});

/// Parse the root window `_NET_DESKTOP_GEOMETRY` property reported by
/// `xprop`.
pub(crate) fn parse_xprop(stdout: &str) -> Option<ScreenInfo> {
    let caps = DESKTOP_GEOMETRY_RE.captures(stdout)?;
    let width: u32 = caps[1].parse().ok()?;
    let height: u32 = caps[2].parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(ScreenInfo::full_screen(width, height))
}
