use super::windows_parse::{parse_primary_screen, parse_registry_resolution, parse_wmi_monitor};
use super::{ScreenScan, Strategy};
use crate::geometry::ScreenInfo;

/// Windows probes, most precise first: only the `System.Windows.Forms` query
/// knows the working area; the WMI and registry probes report the raw screen
/// size and assume the work area covers it.
pub(super) const STRATEGIES: &[(&str, Strategy)] = &[
    ("powershell primary screen", ScreenScan::primary_screen),
    ("wmi desktop monitor", ScreenScan::wmi_monitor),
    ("registry video settings", ScreenScan::registry_resolution),
];

/// Asks the desktop environment for the primary screen bounds and working
/// area, printed as a single JSON line.
const PRIMARY_SCREEN_SCRIPT: &str = r#"Add-Type -AssemblyName System.Windows.Forms; $screen = [System.Windows.Forms.Screen]::PrimaryScreen; $bounds = $screen.Bounds; $work = $screen.WorkingArea; '{"screenWidth":' + $bounds.Width + ',"screenHeight":' + $bounds.Height + ',"workAreaX":' + $work.X + ',"workAreaY":' + $work.Y + ',"workAreaWidth":' + $work.Width + ',"workAreaHeight":' + $work.Height + '}'"#;

const WMI_MONITOR_SCRIPT: &str = r#"$monitor = Get-WmiObject -Class Win32_DesktopMonitor | Select-Object -First 1; if ($monitor) { '{"width":' + $monitor.ScreenWidth + ',"height":' + $monitor.ScreenHeight + '}' }"#;

const REG_WIDTH_SCRIPT: &str = r#"reg query "HKLM\SYSTEM\CurrentControlSet\Control\Video" /s /v "DefaultSettings.XResolution" 2>$null | Select-Object -Last 1"#;

const REG_HEIGHT_SCRIPT: &str = r#"reg query "HKLM\SYSTEM\CurrentControlSet\Control\Video" /s /v "DefaultSettings.YResolution" 2>$null | Select-Object -Last 1"#;

impl ScreenScan {
    fn powershell(&self, script: &str) -> Option<String> {
        self.run(
            "powershell",
            &["-ExecutionPolicy", "Bypass", "-Command", script],
        )
    }

    fn primary_screen(&self) -> Option<ScreenInfo> {
        let stdout = self.powershell(PRIMARY_SCREEN_SCRIPT)?;
        parse_primary_screen(&stdout)
    }

    fn wmi_monitor(&self) -> Option<ScreenInfo> {
        let stdout = self.powershell(WMI_MONITOR_SCRIPT)?;
        parse_wmi_monitor(&stdout)
    }

    fn registry_resolution(&self) -> Option<ScreenInfo> {
        let width_stdout = self.powershell(REG_WIDTH_SCRIPT)?;
        let height_stdout = self.powershell(REG_HEIGHT_SCRIPT)?;
        parse_registry_resolution(&width_stdout, &height_stdout)
    }
}
