// SPDX-License-Identifier: MPL-2.0
//! Host bindings for the motion preference.
//!
//! The desktop has no push notification we can rely on across platforms, so
//! the application polls [`SystemHost::snapshot`] while listeners are
//! registered and feeds the result back as [`MotionEvent`]s.
//!
//! Reduced motion is resolved in this order:
//! 1. `[motion] reduced_motion = "always" | "never"` in `settings.toml`
//! 2. `FOLIO_REDUCED_MOTION` environment variable (`1`/`true`/`yes`/`reduce`)
//! 3. `gtk-enable-animations` in `gtk-3.0/settings.ini`
//!
//! Battery status comes from `/sys/class/power_supply/BAT*` on Linux and is
//! unsupported elsewhere.

use super::{BatteryStatus, Capability, MotionEvent};
use crate::app::config::ReducedMotion;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable forcing the reduced-motion preference.
pub const ENV_REDUCED_MOTION: &str = "FOLIO_REDUCED_MOTION";

const GTK_ANIMATIONS_KEY: &str = "gtk-enable-animations";

/// Source of the two signals the motion preference is derived from.
pub trait MotionHost {
    /// Current value of the reduced-motion accessibility setting.
    fn prefers_reduced_motion(&self) -> bool;

    /// Current battery reading, if the host has one.
    fn battery(&self) -> Capability<BatteryStatus>;
}

/// Point-in-time reading of a host, safe to move across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSnapshot {
    pub prefers_reduced_motion: bool,
    pub battery: Capability<BatteryStatus>,
}

impl HostSnapshot {
    pub fn capture(host: &dyn MotionHost) -> Self {
        Self {
            prefers_reduced_motion: host.prefers_reduced_motion(),
            battery: host.battery(),
        }
    }

    /// Notifications equivalent to this reading.
    pub fn events(self) -> impl Iterator<Item = MotionEvent> {
        std::iter::once(MotionEvent::ReducedMotionChanged(
            self.prefers_reduced_motion,
        ))
        .chain(self.battery.available().map(MotionEvent::BatteryChanged))
    }
}

impl MotionHost for HostSnapshot {
    fn prefers_reduced_motion(&self) -> bool {
        self.prefers_reduced_motion
    }

    fn battery(&self) -> Capability<BatteryStatus> {
        self.battery
    }
}

/// Reads the desktop settings and the kernel power supply class.
#[derive(Debug, Clone)]
pub struct SystemHost {
    mode: ReducedMotion,
    gtk_settings: Option<PathBuf>,
    power_supply_root: Option<PathBuf>,
}

impl SystemHost {
    #[must_use]
    pub fn new(mode: ReducedMotion) -> Self {
        let gtk_settings = dirs::config_dir().map(|dir| dir.join("gtk-3.0").join("settings.ini"));
        let power_supply_root = if cfg!(target_os = "linux") {
            Some(PathBuf::from("/sys/class/power_supply"))
        } else {
            None
        };

        Self {
            mode,
            gtk_settings,
            power_supply_root,
        }
    }

    /// Host reading from custom locations instead of the platform defaults.
    #[must_use]
    pub fn with_paths(
        mode: ReducedMotion,
        gtk_settings: Option<PathBuf>,
        power_supply_root: Option<PathBuf>,
    ) -> Self {
        Self {
            mode,
            gtk_settings,
            power_supply_root,
        }
    }

    /// Captures both signals at once.
    #[must_use]
    pub fn snapshot(&self) -> HostSnapshot {
        HostSnapshot::capture(self)
    }

    fn desktop_prefers_reduced_motion(&self) -> bool {
        if let Some(forced) = std::env::var(ENV_REDUCED_MOTION)
            .ok()
            .as_deref()
            .and_then(parse_motion_flag)
        {
            return forced;
        }

        self.gtk_settings
            .as_deref()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|contents| gtk_animations_disabled(&contents))
            .unwrap_or(false)
    }
}

impl MotionHost for SystemHost {
    fn prefers_reduced_motion(&self) -> bool {
        match self.mode {
            ReducedMotion::Always => true,
            ReducedMotion::Never => false,
            ReducedMotion::System => self.desktop_prefers_reduced_motion(),
        }
    }

    fn battery(&self) -> Capability<BatteryStatus> {
        self.power_supply_root
            .as_deref()
            .and_then(read_power_supply)
            .into()
    }
}

/// Interprets an environment flag. Unknown values return `None`.
fn parse_motion_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "reduce" => Some(true),
        "0" | "false" | "no" | "off" | "no-preference" => Some(false),
        _ => None,
    }
}

/// Returns `Some(true)` when the GTK settings disable animations.
fn gtk_animations_disabled(contents: &str) -> Option<bool> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == GTK_ANIMATIONS_KEY)
        .and_then(|(_, value)| match value.trim().to_ascii_lowercase().as_str() {
            "false" | "0" => Some(true),
            "true" | "1" => Some(false),
            _ => None,
        })
}

/// Reads the first `BAT*` entry under a power supply class directory.
fn read_power_supply(root: &Path) -> Option<BatteryStatus> {
    let mut batteries: Vec<PathBuf> = fs::read_dir(root)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("BAT"))
        .map(|entry| entry.path())
        .collect();
    batteries.sort();

    batteries.iter().find_map(|battery| {
        let capacity: f32 = fs::read_to_string(battery.join("capacity"))
            .ok()?
            .trim()
            .parse()
            .ok()?;
        let status = fs::read_to_string(battery.join("status")).unwrap_or_default();
        let charging = status.trim() != "Discharging";
        Some(BatteryStatus::new(capacity / 100.0, charging))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn write_battery(root: &Path, name: &str, capacity: &str, status: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).expect("create battery dir");
        fs::write(dir.join("capacity"), capacity).expect("write capacity");
        fs::write(dir.join("status"), status).expect("write status");
    }

    #[test]
    fn env_flag_parsing() {
        assert_eq!(parse_motion_flag("1"), Some(true));
        assert_eq!(parse_motion_flag(" Reduce "), Some(true));
        assert_eq!(parse_motion_flag("no-preference"), Some(false));
        assert_eq!(parse_motion_flag("maybe"), None);
    }

    #[test]
    fn gtk_setting_parsing() {
        let contents = "[Settings]\n# gtk-enable-animations=true\ngtk-enable-animations = false\n";
        assert_eq!(gtk_animations_disabled(contents), Some(true));
        assert_eq!(
            gtk_animations_disabled("[Settings]\ngtk-enable-animations=1\n"),
            Some(false)
        );
        assert_eq!(gtk_animations_disabled("[Settings]\ngtk-theme-name=Adwaita\n"), None);
    }

    #[test]
    fn reads_discharging_battery() {
        let dir = tempdir().expect("tempdir");
        write_battery(dir.path(), "BAT0", "15\n", "Discharging\n");
        fs::create_dir_all(dir.path().join("AC")).expect("create ac dir");

        let status = read_power_supply(dir.path()).expect("battery present");
        assert!((status.level() - 0.15).abs() < 1e-6);
        assert!(!status.charging());
        assert!(status.is_low_power(0.2));
    }

    #[test]
    fn full_or_charging_battery_counts_as_charging() {
        let dir = tempdir().expect("tempdir");
        write_battery(dir.path(), "BAT1", "100", "Full");
        let status = read_power_supply(dir.path()).expect("battery present");
        assert!(status.charging());
    }

    #[test]
    fn no_battery_is_unsupported() {
        let dir = tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("AC")).expect("create ac dir");

        let host = SystemHost::with_paths(
            ReducedMotion::Never,
            None,
            Some(dir.path().to_path_buf()),
        );
        assert_eq!(host.battery(), Capability::Unsupported);

        let host = SystemHost::with_paths(ReducedMotion::Never, None, None);
        assert_eq!(host.battery(), Capability::Unsupported);
    }

    #[test]
    fn config_override_wins_over_desktop() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_REDUCED_MOTION, "1");

        let never = SystemHost::with_paths(ReducedMotion::Never, None, None);
        assert!(!never.prefers_reduced_motion());
        let always = SystemHost::with_paths(ReducedMotion::Always, None, None);
        assert!(always.prefers_reduced_motion());
        let system = SystemHost::with_paths(ReducedMotion::System, None, None);
        assert!(system.prefers_reduced_motion());

        std::env::remove_var(ENV_REDUCED_MOTION);
    }

    #[test]
    fn gtk_settings_file_is_consulted() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_REDUCED_MOTION);

        let dir = tempdir().expect("tempdir");
        let ini = dir.path().join("settings.ini");
        fs::write(&ini, "[Settings]\ngtk-enable-animations=false\n").expect("write ini");

        let host = SystemHost::with_paths(ReducedMotion::System, Some(ini), None);
        assert!(host.prefers_reduced_motion());

        let missing = SystemHost::with_paths(
            ReducedMotion::System,
            Some(dir.path().join("absent.ini")),
            None,
        );
        assert!(!missing.prefers_reduced_motion());
    }

    #[test]
    fn snapshot_yields_battery_event_only_when_available() {
        let with_battery = HostSnapshot {
            prefers_reduced_motion: true,
            battery: Capability::Available(BatteryStatus::new(0.5, true)),
        };
        assert_eq!(with_battery.events().count(), 2);

        let without = HostSnapshot {
            prefers_reduced_motion: false,
            battery: Capability::Unsupported,
        };
        let events: Vec<_> = without.events().collect();
        assert_eq!(events, vec![MotionEvent::ReducedMotionChanged(false)]);
    }
}
