// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are stroke-only SVGs embedded at compile time via `include_bytes!`.
//! Handles are cached using `OnceLock` so every view reuses the same
//! rasterization. Strokes use `currentColor`; pass the color through
//! [`tinted`] or [`themed`] to follow the active theme.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_menu`).

use crate::content::{SkillIcon, SocialKind};
use crate::ui::styles::faded;
use crate::ui::theming::ColorScheme;
use iced::widget::svg::{self, Handle, Svg};
use iced::Color;
use std::sync::OnceLock;

/// Defines an icon function returning a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

// =============================================================================
// Brand and Contact Icons
// =============================================================================

define_icon!(github, "github.svg", "GitHub mark: cat silhouette.");
define_icon!(linkedin, "linkedin.svg", "LinkedIn mark: \"in\" letters.");
define_icon!(mail, "mail.svg", "Envelope.");

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(menu, "menu.svg", "Hamburger: three horizontal bars.");
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");
define_icon!(arrow_up, "arrow_up.svg", "Arrow pointing up.");
define_icon!(
    external_link,
    "external_link.svg",
    "Square with an arrow leaving its corner."
);
define_icon!(download, "download.svg", "Tray with a downward arrow.");

// =============================================================================
// Theme Icons
// =============================================================================

define_icon!(sun, "sun.svg", "Sun with rays.");
define_icon!(moon, "moon.svg", "Crescent moon.");

// =============================================================================
// Card Metadata Icons
// =============================================================================

define_icon!(calendar, "calendar.svg", "Calendar page.");
define_icon!(clock, "clock.svg", "Clock face.");
define_icon!(tag, "tag.svg", "Price tag.");

// =============================================================================
// Skill Icons
// =============================================================================

define_icon!(document, "document.svg", "Document with a grid.");
define_icon!(target, "target.svg", "Circle with crosshair.");
define_icon!(bot, "bot.svg", "Robot head.");
define_icon!(sparkles, "sparkles.svg", "Four-pointed sparkle.");

// =============================================================================
// Chat and Notification Icons
// =============================================================================

define_icon!(message, "message.svg", "Speech bubble.");
define_icon!(send, "send.svg", "Paper plane.");
define_icon!(check, "check.svg", "Checkmark.");
define_icon!(info, "info.svg", "Letter i in a circle.");
define_icon!(warning, "warning.svg", "Exclamation mark in a triangle.");
define_icon!(user, "user.svg", "Head and shoulders silhouette.");

/// Icon for a social link.
pub fn social(kind: SocialKind) -> Handle {
    match kind {
        SocialKind::Github => github(),
        SocialKind::Linkedin => linkedin(),
        SocialKind::Email => mail(),
    }
}

/// Icon for a skill card.
pub fn skill(icon: SkillIcon) -> Handle {
    match icon {
        SkillIcon::Document => document(),
        SkillIcon::Target => target(),
        SkillIcon::Bot => bot(),
        SkillIcon::Sparkles => sparkles(),
    }
}

/// Square icon widget of `size` pixels.
pub fn sized<'a>(handle: Handle, size: f32) -> Svg<'a> {
    Svg::new(handle).width(size).height(size)
}

/// Square icon widget drawn in `color`.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a> {
    sized(handle, size).style(move |_theme, _status| svg::Style { color: Some(color) })
}

/// Square icon widget drawn in a theme color, faded by `alpha`.
pub fn themed<'a>(
    handle: Handle,
    size: f32,
    role: fn(&ColorScheme) -> Color,
    alpha: f32,
) -> Svg<'a> {
    sized(handle, size).style(move |theme, _status| svg::Style {
        color: Some(faded(role(&ColorScheme::of(theme)), alpha)),
    })
}
