// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription.
///
/// While toasts are visible the tick runs at `frame_interval` so lifecycles
/// animate smoothly. Otherwise it falls back to `idle_poll`, which is only
/// needed to pick up toasts requested from outside the update loop.
pub fn create_tick_subscription(
    has_notifications: bool,
    frame_interval: Duration,
    idle_poll: Duration,
) -> Subscription<Message> {
    let interval = if has_notifications {
        frame_interval
    } else {
        idle_poll
    };

    time::every(interval).map(Message::Tick)
}
