// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::Manager;
use iced::{event, keyboard, Subscription};

/// Tick subscriptions of every live toast.
///
/// Rebuilt from the current collection each time the runtime asks, so a
/// removed toast stops ticking as soon as it leaves the collection.
pub fn create_toast_subscription(toasts: &Manager) -> Subscription<Message> {
    toasts.subscription().map(Message::Toast)
}

/// Keyboard shortcuts: Escape closes the newest toast.
///
/// Only active while at least one toast is visible.
pub fn create_keyboard_subscription(has_toasts: bool) -> Subscription<Message> {
    if !has_toasts {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::DismissNewestToast),
            _ => None,
        }
    })
}
