// SPDX-License-Identifier: MPL-2.0
//! Motion preference derivation through the public broadcaster API.

use iced_folio::app::config::ReducedMotion;
use iced_folio::motion::{
    BatteryStatus, Capability, HostSnapshot, MotionBroadcaster, MotionEvent, MotionHost,
    MotionPreference, SystemHost,
};
use std::fs;
use tempfile::tempdir;

struct FakeHost {
    reduced: bool,
    battery: Capability<BatteryStatus>,
}

impl MotionHost for FakeHost {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced
    }

    fn battery(&self) -> Capability<BatteryStatus> {
        self.battery
    }
}

fn assert_derived(preference: MotionPreference) {
    assert_eq!(
        preference.should_reduce_motion(),
        preference.prefers_reduced_motion() || preference.is_low_power_mode()
    );
}

#[test]
fn derived_flag_holds_after_every_event() {
    let mut broadcaster = MotionBroadcaster::new();
    broadcaster.activate(&FakeHost {
        reduced: false,
        battery: Capability::Available(BatteryStatus::new(0.8, false)),
    });

    let events = [
        MotionEvent::BatteryChanged(BatteryStatus::new(0.15, false)),
        MotionEvent::ReducedMotionChanged(true),
        MotionEvent::BatteryChanged(BatteryStatus::new(0.15, true)),
        MotionEvent::ReducedMotionChanged(false),
        MotionEvent::BatteryChanged(BatteryStatus::new(0.05, false)),
    ];
    for event in events {
        broadcaster.handle(event);
        assert_derived(broadcaster.preference());
    }
    assert!(broadcaster.preference().is_low_power_mode());
}

#[test]
fn charging_battery_is_never_low_power() {
    let mut broadcaster = MotionBroadcaster::new();
    broadcaster.activate(&FakeHost {
        reduced: false,
        battery: Capability::Available(BatteryStatus::new(0.15, true)),
    });
    assert!(!broadcaster.preference().is_low_power_mode());

    broadcaster.handle(MotionEvent::BatteryChanged(BatteryStatus::new(0.15, false)));
    assert!(broadcaster.preference().is_low_power_mode());
    assert!(broadcaster.preference().should_reduce_motion());
}

#[test]
fn missing_battery_keeps_low_power_off_for_good() {
    let mut broadcaster = MotionBroadcaster::new();
    broadcaster.activate(&FakeHost {
        reduced: false,
        battery: Capability::Unsupported,
    });
    assert!(!broadcaster.listeners().battery);

    assert!(!broadcaster.handle(MotionEvent::BatteryChanged(BatteryStatus::new(0.01, false))));
    assert!(!broadcaster.preference().is_low_power_mode());
}

#[test]
fn deactivated_broadcaster_ignores_events() {
    let mut broadcaster = MotionBroadcaster::new();
    broadcaster.activate(&FakeHost {
        reduced: false,
        battery: Capability::Available(BatteryStatus::new(0.9, false)),
    });
    broadcaster.deactivate();

    assert!(!broadcaster.listeners().any());
    assert!(!broadcaster.handle(MotionEvent::ReducedMotionChanged(true)));
    assert!(!broadcaster.preference().should_reduce_motion());
}

#[tokio::test]
async fn subscribers_see_every_change() {
    let mut broadcaster = MotionBroadcaster::new();
    let mut receiver = broadcaster.subscribe();
    broadcaster.activate(&FakeHost {
        reduced: true,
        battery: Capability::Unsupported,
    });

    receiver.changed().await.expect("sender alive");
    assert!(receiver.borrow_and_update().prefers_reduced_motion());

    broadcaster.handle(MotionEvent::ReducedMotionChanged(false));
    receiver.changed().await.expect("sender alive");
    assert!(!receiver.borrow_and_update().should_reduce_motion());
}

#[test]
fn system_host_reads_battery_and_gtk_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let battery = dir.path().join("power_supply").join("BAT0");
    fs::create_dir_all(&battery).expect("battery dir");
    fs::write(battery.join("capacity"), "12\n").expect("capacity");
    fs::write(battery.join("status"), "Discharging\n").expect("status");
    let gtk = dir.path().join("settings.ini");
    fs::write(&gtk, "[Settings]\ngtk-enable-animations=false\n").expect("gtk settings");

    let host = SystemHost::with_paths(
        ReducedMotion::Never,
        Some(gtk),
        Some(dir.path().join("power_supply")),
    );
    let snapshot: HostSnapshot = host.snapshot();
    assert!(!snapshot.prefers_reduced_motion);
    assert_eq!(
        snapshot.battery,
        Capability::Available(BatteryStatus::new(0.12, false))
    );

    let mut broadcaster = MotionBroadcaster::new();
    broadcaster.activate(&snapshot);
    assert!(broadcaster.preference().should_reduce_motion());
}
