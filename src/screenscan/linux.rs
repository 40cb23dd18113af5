use super::linux_parse::{parse_wmctrl, parse_xdpyinfo, parse_xprop, parse_xrandr};
use super::{ScreenScan, Strategy};
use crate::geometry::ScreenInfo;

/// Linux probes, most capable first: xrandr knows the primary monitor and
/// its position, the others only report the overall desktop geometry.
pub(super) const STRATEGIES: &[(&str, Strategy)] = &[
    ("xrandr", ScreenScan::xrandr),
    ("xdpyinfo", ScreenScan::xdpyinfo),
    ("wmctrl", ScreenScan::wmctrl),
    ("xprop", ScreenScan::xprop),
];

impl ScreenScan {
    fn xrandr(&self) -> Option<ScreenInfo> {
        let stdout = self.run("xrandr", &["--query"])?;
        parse_xrandr(&stdout)
    }

    fn xdpyinfo(&self) -> Option<ScreenInfo> {
        let stdout = self.run("xdpyinfo", &[])?;
        parse_xdpyinfo(&stdout)
    }

    fn wmctrl(&self) -> Option<ScreenInfo> {
        let stdout = self.run("wmctrl", &["-d"])?;
        parse_wmctrl(&stdout)
    }

    fn xprop(&self) -> Option<ScreenInfo> {
        let stdout = self.run("xprop", &["-root", "_NET_DESKTOP_GEOMETRY"])?;
        parse_xprop(&stdout)
    }
}
