// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Portfolio;
use crate::error::Error;
use crate::motion::HostSnapshot;
use crate::ui::chat;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use iced::widget::image;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{window, Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Navbar(navbar::Message),
    Chat(chat::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or changed size.
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    ScrollToTop,
    /// Frame tick while a transition or a scroll animation runs.
    Tick(Instant),
    /// Time to probe the host for motion preference changes.
    MotionPoll,
    /// Host reading, `None` when the probe could not run.
    MotionSampled(Option<HostSnapshot>),
    ImageLoaded {
        source: String,
        result: Result<image::Handle, Error>,
    },
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags and the content resolved before the window opens.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Navigation fragment the page opens at (e.g. `#contact`).
    pub anchor: Option<String>,
    /// Portfolio shown by the page.
    pub portfolio: Portfolio,
    /// i18n key of a warning when the custom content file was rejected.
    pub content_warning: Option<&'static str>,
}
