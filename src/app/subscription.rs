// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only two native events matter: window resizes (for the drawer
//! breakpoint) and an uncaptured Escape key (to dismiss overlays).

use super::Message;
use iced::{event, keyboard, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) if status == event::Status::Ignored => Some(Message::EscapePressed),
        _ => None,
    })
}
