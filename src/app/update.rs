// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler mutates `App` and returns the follow-up task, if any. Store
//! failures surface as warning toasts; they never interrupt the UI.

use super::{App, Message, PAGE_SCROLL_ID};
use crate::error::{Error, NetworkError};
use crate::publications::PublicationEntry;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::poster::{self, Effect as PosterEffect};
use crate::ui::sections;
use crate::ui::skin::{Skin, SequenceKey};
use crate::ui::state::Route;
use iced::keyboard::Key;
use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::Id;
use iced::{Size, Task};
use std::time::Instant;

fn warn(app: &mut App, warning: Option<String>) {
    if let Some(key) = warning {
        app.notifications.push(Notification::warning(key));
    }
}

pub fn scroll_to_top() -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y: 0.0 })
}

fn scroll_to_section(app: &App, id: &str) -> Task<Message> {
    match app.scroll.section_target(id) {
        Some(offset) => operation::scroll_to(Id::new(PAGE_SCROLL_ID), offset),
        None => {
            log::debug!("section {} not measured yet", id);
            Task::none()
        }
    }
}

pub fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.nav_expanded) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::ScrollToTop => scroll_to_top(),
        NavbarEvent::ScrollToSection(id) => scroll_to_section(app, &id),
        NavbarEvent::ToggleTheme => {
            let warning = app.theme.toggle(app.preferences.as_mut());
            warn(app, warning);
            Task::none()
        }
        NavbarEvent::ToggleCrt => {
            let warning = app.theme.toggle_crt(app.preferences.as_mut());
            warn(app, warning);
            Task::none()
        }
    }
}

pub fn handle_sections_message(app: &mut App, message: sections::Message) -> Task<Message> {
    match message {
        sections::Message::Revealed(id) => {
            let now = Instant::now();
            if app.reveal.reveal(&id, now) {
                app.now = now;
            }
        }
        sections::Message::Measured(id, top) => app.scroll.measure_section(&id, top),
        sections::Message::PageMeasured(top) => app.scroll.measure_page(top),
        sections::Message::Poster(poster_message) => handle_poster_message(app, poster_message),
        sections::Message::OpenLink(url) => {
            log::info!("opening {}", url);
            if let Err(err) = open::that(&url) {
                log::error!("cannot open {}: {}", url, err);
            }
        }
    }
    Task::none()
}

/// Applies a poster message and mirrors open/close into the history.
pub fn handle_poster_message(app: &mut App, message: poster::Message) {
    if let poster::Message::Open(id) = &message {
        if app.manifest.poster(id).is_none() {
            log::debug!("ignoring unknown poster {}", id);
            return;
        }
    }

    match app.poster.handle(message) {
        PosterEffect::None => {}
        PosterEffect::PushRoute(route) => {
            // A replaced poster must not leave its entry behind.
            if matches!(app.history.top(), Some(Route::Poster(_))) {
                let _ = app.history.pop();
            }
            app.history.push(route);
        }
        PosterEffect::PopRoute(route) => {
            if !app.history.pop_if(&route) {
                log::debug!("closed poster had no history entry");
            }
        }
    }
}

pub fn handle_navigate_back(app: &mut App) {
    match app.history.pop() {
        Some(Route::Poster(id)) => {
            if app.poster.active_id() == Some(id.as_str()) {
                let _ = app.poster.close();
            }
        }
        None => log::debug!("navigate back with empty history"),
    }
}

pub fn handle_key_pressed(app: &mut App, key: &Key) {
    if !app.konami.push(SequenceKey::from_key(key)) {
        return;
    }

    let warning = app.skin.toggle(app.preferences.as_mut());
    let key = match app.skin.skin() {
        Skin::Retro => "notification-skin-retro",
        Skin::Default => "notification-skin-default",
    };
    app.notifications.push(Notification::info(key));
    warn(app, warning);
}

pub fn handle_publications_loaded(
    app: &mut App,
    generation: u64,
    result: Result<Vec<PublicationEntry>, Error>,
) {
    let network_error = match &result {
        Err(Error::Network(err)) => Some(err.clone()),
        _ => None,
    };
    if !app.publications.finish(generation, result) {
        return;
    }
    if let Some(err) = network_error {
        let mut notification = Notification::warning(err.i18n_key());
        if let NetworkError::Status(status) = err {
            notification = notification.with_arg("status", status.to_string());
        }
        app.notifications.push(notification);
    }
}

pub fn handle_window_resized(app: &mut App, size: Size) {
    app.window_size = size;
    if !navbar::is_compact(size.width) {
        app.nav_expanded = false;
    }
}
