// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window file events to the upload screen and drives the
//! periodic ticks (estimated progress, notification auto-dismiss).

use super::{Message, Screen};
use crate::ui::upload;
use iced::{event, time, window, Subscription};
use std::time::{Duration, Instant};

/// Notification expiry granularity.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// File hover and drop events, only while the upload screen is shown.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Upload => event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::FileHovered(_)) => {
                Some(Message::Upload(upload::Message::FileHovered))
            }
            event::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::Upload(upload::Message::FilesHoveredLeft))
            }
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::Upload(upload::Message::FileDropped {
                    path,
                    at: Instant::now(),
                }))
            }
            _ => None,
        }),
        Screen::Edit => Subscription::none(),
    }
}

/// Steps estimated progress while a submission without measured progress
/// is in flight.
pub fn create_estimated_progress_subscription(
    is_estimating: bool,
    interval: Duration,
) -> Subscription<Message> {
    if is_estimating {
        time::every(interval).map(|_| Message::Upload(upload::Message::EstimatedTick))
    } else {
        Subscription::none()
    }
}

/// Ticks notification expiry while any notification is pending.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
