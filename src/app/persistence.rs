// SPDX-License-Identifier: MPL-2.0
//! Writing user preferences back to `settings.toml`.

use super::config::{self, Config};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;

/// Records the chosen theme and persists it to disk.
///
/// The file is reloaded first so edits made while the app runs survive.
/// Guarded during tests to keep the user's settings untouched.
pub fn persist_theme(
    current: &mut Config,
    theme_mode: ThemeMode,
    notifications: &mut notifications::Manager,
) {
    current.general.theme_mode = theme_mode;
    if cfg!(test) {
        return;
    }

    let (mut on_disk, _) = config::load();
    on_disk.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&on_disk) {
        tracing::warn!(%error, "failed to save settings");
        notifications.push(Notification::warning("notification-config-save-error"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_is_recorded_in_memory() {
        let mut config = Config::default();
        let mut manager = notifications::Manager::new();
        persist_theme(&mut config, ThemeMode::Light, &mut manager);
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert!(!manager.has_notifications());
    }
}
