// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to messages according to the current state: the
//! poster viewer's Escape, pointer and release listeners exist only while a
//! poster is open, and the tick only runs while something animates.

use super::Message;
use crate::ui::poster::{self, Listeners};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

const ANIMATION_TICK: Duration = Duration::from_millis(16);
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Keyboard shortcuts, the Back gesture and window resizes. Always active.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match key.as_ref() {
                Key::Named(Named::F5) => Some(Message::ReloadPublications),
                Key::Named(Named::ArrowLeft) if modifiers.alt() => Some(Message::NavigateBack),
                _ => Some(Message::KeyPressed(key.clone())),
            }
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Back)) => {
            Some(Message::NavigateBack)
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Listeners of the poster viewer, derived from its state.
pub fn create_poster_subscription(listeners: Listeners) -> Subscription<Message> {
    match listeners {
        Listeners::None => Subscription::none(),
        Listeners::Open => event::listen_with(|event, _status, _window_id| {
            let message = match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: Key::Named(Named::Escape),
                    ..
                }) => poster::Message::EscapePressed,
                event::Event::Mouse(mouse::Event::CursorMoved { position })
                | event::Event::Touch(
                    touch::Event::FingerPressed { position, .. }
                    | touch::Event::FingerMoved { position, .. },
                ) => {
                    poster::Message::CursorMoved(position)
                }
                event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                | event::Event::Touch(
                    touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
                ) => poster::Message::PointerReleased,
                _ => return None,
            };
            Some(Message::Poster(message))
        }),
    }
}

/// Creates a periodic tick for reveal fades and notification auto-dismiss.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else if has_notifications {
        time::every(IDLE_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
