// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events are always routed. Timers run only while something needs
//! them: the motion probe while the broadcaster holds listeners, the frame
//! tick while a transition or scroll animation is in progress.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval of running transitions.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Interval that is enough for toast expiry.
pub const NOTIFICATION_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window close requests and resizes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Periodic host probe feeding the motion broadcaster.
pub fn create_motion_subscription(listening: bool, interval_secs: u64) -> Subscription<Message> {
    if listening {
        time::every(Duration::from_secs(interval_secs)).map(|_| Message::MotionPoll)
    } else {
        Subscription::none()
    }
}

/// Frame tick while animating, a slower one while toasts are shown.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
