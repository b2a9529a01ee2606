// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The arrow keys mirror the on-screen navigation buttons; both end up as
//! the same controls message, so keyboard navigation goes through the same
//! cursor operations as a click.

use super::Message;
use crate::ui::controls;
use iced::keyboard::key::Named;
use iced::{event, keyboard, Subscription};

/// Creates the keyboard navigation subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Leave events alone once a widget has claimed them
        if matches!(status, event::Status::Captured) {
            return None;
        }

        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };

        map_key(&key)
    })
}

/// Maps a pressed key to a navigation message, if it is one of the
/// navigation keys.
fn map_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => {
            Some(Message::Controls(controls::Message::Previous))
        }
        keyboard::Key::Named(Named::ArrowRight) => {
            Some(Message::Controls(controls::Message::Next))
        }
        _ => None,
    }
}
