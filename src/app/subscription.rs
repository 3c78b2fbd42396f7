// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_TICK;
use iced::{time, Subscription};

/// Creates the animation tick subscription while any widget is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
