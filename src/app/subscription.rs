// SPDX-License-Identifier: MPL-2.0
//! Event and time-based subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Spinner animation interval.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the tick subscription driving spinner animation.
///
/// Only active while something is loading so an idle window stays idle.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Reports window resizes so the list can be kept taller than the viewport.
pub fn create_resize_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
