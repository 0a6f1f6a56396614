// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the poster
//! viewer and the publication loader.
//!
//! The `App` struct wires together the domains (theme, skin, reveal, poster
//! viewer, publications) and translates messages into side effects like
//! preference writes, scroll commands or network loads. Startup warnings are
//! surfaced as toasts instead of aborting.

mod message;
pub mod paths;
pub mod preferences;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::publications::{self, OrcidClient, PublicationList};
use crate::site::{self, PosterImage, SiteManifest};
use crate::ui::notifications;
use crate::ui::poster;
use crate::ui::reveal::RevealState;
use crate::ui::skin::{KonamiDetector, SkinController};
use crate::ui::state::{History, ScrollState};
use crate::ui::theming::{self, ThemeController};
use iced::{window, Element, Size, Subscription, Task, Theme};
use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Id of the page scrollable, target of section links and back-to-top.
pub const PAGE_SCROLL_ID: &str = "page";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    manifest: SiteManifest,
    preferences: Box<dyn PreferenceStore>,
    theme: ThemeController,
    skin: SkinController,
    konami: KonamiDetector,
    reveal: RevealState,
    /// Timestamp of the last tick, used to evaluate fades in `view`.
    now: Instant,
    poster: poster::State,
    poster_images: HashMap<String, PosterImage>,
    history: History,
    scroll: ScrollState,
    nav_expanded: bool,
    window_size: Size,
    publications: PublicationList,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme.mode())
            .field("skin", &self.skin.skin())
            .field("poster", &self.poster.active_id())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            log::warn!("boot called more than once, starting with default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let mut preferences: Box<dyn PreferenceStore> = Box::new(MemoryPreferences::new());
        let (theme, _) = ThemeController::initialize(preferences.as_mut());
        let skin = SkinController::initialize(preferences.as_ref());
        let manifest = SiteManifest::embedded().unwrap_or_else(|err| {
            log::error!("embedded site manifest is invalid: {}", err);
            SiteManifest::default()
        });

        Self {
            i18n: I18n::default(),
            config: Config::default(),
            manifest,
            preferences,
            theme,
            skin,
            konami: KonamiDetector::new(),
            reveal: RevealState::new(),
            now: Instant::now(),
            poster: poster::State::new(),
            poster_images: HashMap::new(),
            history: History::default(),
            scroll: ScrollState::default(),
            nav_expanded: false,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            publications: PublicationList::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the publication and
    /// poster image loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (mut config, config_warning) = config::load();
        if let Some(orcid) = flags.orcid.clone() {
            config.publications.orcid_id = Some(orcid);
        }
        let i18n = I18n::new(flags.lang.clone(), &config);

        let site_path = flags
            .site
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.site.manifest.clone());
        let (manifest, site_warning) = site::load(site_path.as_deref());

        let (store, store_warning) = FilePreferences::load();
        let mut preferences: Box<dyn PreferenceStore> = Box::new(store);
        let (theme, theme_warning) = ThemeController::initialize(preferences.as_mut());
        let skin = SkinController::initialize(preferences.as_ref());

        let mut app = App {
            i18n,
            config,
            manifest,
            preferences,
            theme,
            skin,
            ..Self::default()
        };

        for key in [config_warning, site_warning, store_warning, theme_warning]
            .into_iter()
            .flatten()
        {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let mut tasks = vec![app.start_publications_load()];
        tasks.extend(app.load_poster_images());
        (app, Task::batch(tasks))
    }

    /// Starts a publication load unless one is already in flight.
    fn start_publications_load(&mut self) -> Task<Message> {
        let Some(generation) = self.publications.begin_load() else {
            return Task::none();
        };
        let publications_config = &self.config.publications;
        let client = OrcidClient::new(
            publications_config.api_base(),
            publications_config.orcid_id(),
            publications_config.request_timeout(),
        );
        self.publications_task(generation, client)
    }

    /// Runs load `generation` on `client`. A client that could not be built
    /// ends the load as failed.
    fn publications_task(
        &mut self,
        generation: u64,
        client: crate::error::Result<OrcidClient>,
    ) -> Task<Message> {
        let client = match client {
            Ok(client) => client,
            Err(err) => {
                log::error!("cannot build ORCID client: {}", err);
                update::handle_publications_loaded(self, generation, Err(err));
                return Task::none();
            }
        };

        let mode = self.config.publications.fetch_mode();
        let surname = self.config.publications.highlight_surname().to_string();
        Task::perform(
            async move { publications::load_publications(&client, mode, &surname).await },
            move |result| Message::PublicationsLoaded { generation, result },
        )
    }

    fn load_poster_images(&self) -> Vec<Task<Message>> {
        self.manifest
            .posters
            .iter()
            .map(|poster| {
                let id = poster.id.clone();
                let source = self.manifest.image_source(poster);
                Task::perform(site::decode_poster_image(source), move |result| {
                    Message::PosterImageLoaded {
                        id: id.clone(),
                        result,
                    }
                })
            })
            .collect()
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.manifest.title.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", self.manifest.title)
        }
    }

    fn theme(&self) -> Theme {
        theming::app_theme(self.theme.mode(), self.skin.skin())
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let poster_sub = subscription::create_poster_subscription(self.poster.listeners());
        let tick_sub = subscription::create_tick_subscription(
            self.reveal.is_animating(self.now),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, poster_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Sections(sections_message) => {
                update::handle_sections_message(self, sections_message)
            }
            Message::Poster(poster_message) => {
                update::handle_poster_message(self, poster_message);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PageScrolled { bounds, offset } => {
                self.scroll.update(bounds, offset);
                Task::none()
            }
            Message::BackToTop => update::scroll_to_top(),
            Message::KeyPressed(key) => {
                update::handle_key_pressed(self, &key);
                Task::none()
            }
            Message::NavigateBack => {
                update::handle_navigate_back(self);
                Task::none()
            }
            Message::ReloadPublications => self.start_publications_load(),
            Message::PublicationsLoaded { generation, result } => {
                update::handle_publications_loaded(self, generation, result);
                Task::none()
            }
            Message::PosterImageLoaded { id, result } => {
                match result {
                    Ok(image) => {
                        self.poster_images.insert(id, image);
                    }
                    Err(err) => log::warn!("poster {} image unavailable: {}", id, err),
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                update::handle_window_resized(self, size);
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            manifest: &self.manifest,
            theme_mode: self.theme.mode(),
            skin: self.skin.skin(),
            reveal: &self.reveal,
            now: self.now,
            poster: &self.poster,
            poster_images: &self.poster_images,
            scroll: &self.scroll,
            nav_expanded: self.nav_expanded,
            window_size: self.window_size,
            publications: self.publications.state(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, NetworkError};
    use crate::publications::{Author, FetchState, PublicationEntry};
    use crate::ui::navbar;
    use crate::ui::sections;
    use crate::ui::skin::Skin;
    use crate::ui::state::Route;
    use crate::ui::theming::ThemeMode;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::Rectangle;

    fn entry(title: &str) -> PublicationEntry {
        PublicationEntry {
            title: title.into(),
            year: Some("2021".into()),
            journal: "Genetics".into(),
            volume: None,
            issue: None,
            authors: vec![Author {
                name: "Jane Holik".into(),
                is_subject: true,
            }],
            doi: None,
        }
    }

    fn konami() -> Vec<Key> {
        let arrows = [
            Named::ArrowUp,
            Named::ArrowUp,
            Named::ArrowDown,
            Named::ArrowDown,
            Named::ArrowLeft,
            Named::ArrowRight,
            Named::ArrowLeft,
            Named::ArrowRight,
        ];
        arrows
            .into_iter()
            .map(Key::Named)
            .chain([Key::Character("b".into()), Key::Character("a".into())])
            .collect()
    }

    fn open_poster(app: &mut App, id: &str) {
        let _ = app.update(Message::Sections(sections::Message::Poster(
            poster::Message::Open(id.into()),
        )));
    }

    #[test]
    fn title_includes_site_title() {
        let app = App::default();
        let title = app.title();
        assert!(title.ends_with("Folio"), "unexpected title {title}");
        assert!(title.starts_with(&app.manifest.title));
    }

    #[test]
    fn default_app_starts_in_light_mode() {
        let app = App::default();
        assert_eq!(app.theme.mode(), ThemeMode::Light);
        assert_eq!(app.skin.skin(), Skin::Default);
        assert!(!app.poster.is_open());
    }

    #[test]
    fn theme_toggle_persists_choice() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        assert_eq!(app.preferences.get("theme").as_deref(), Some("dark"));

        let _ = app.update(Message::Navbar(navbar::Message::ToggleCrt));
        assert_eq!(app.theme.mode(), ThemeMode::Crt);
        assert_eq!(app.preferences.get("theme").as_deref(), Some("crt"));
    }

    #[test]
    fn konami_sequence_toggles_skin_and_notifies() {
        let mut app = App::default();
        for key in konami() {
            let _ = app.update(Message::KeyPressed(key));
        }
        assert_eq!(app.skin.skin(), Skin::Retro);
        assert_eq!(app.preferences.get("skin").as_deref(), Some("retro"));
        assert!(app.notifications.has_notifications());

        for key in konami() {
            let _ = app.update(Message::KeyPressed(key));
        }
        assert_eq!(app.skin.skin(), Skin::Default);
    }

    #[test]
    fn opening_poster_records_history_entry() {
        let mut app = App::default();
        let id = app.manifest.posters[0].id.clone();
        open_poster(&mut app, &id);

        assert_eq!(app.poster.active_id(), Some(id.as_str()));
        assert_eq!(app.history.top(), Some(&Route::Poster(id)));
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn navigate_back_closes_open_poster() {
        let mut app = App::default();
        let id = app.manifest.posters[0].id.clone();
        open_poster(&mut app, &id);

        let _ = app.update(Message::NavigateBack);
        assert!(!app.poster.is_open());
        assert!(app.history.is_empty());
    }

    #[test]
    fn escape_closes_poster_and_drops_history_entry() {
        let mut app = App::default();
        let id = app.manifest.posters[0].id.clone();
        open_poster(&mut app, &id);

        let _ = app.update(Message::Poster(poster::Message::EscapePressed));
        assert!(!app.poster.is_open());
        assert!(app.history.is_empty());
        assert_eq!(app.poster.listeners(), poster::Listeners::None);
    }

    #[test]
    fn switching_posters_keeps_single_history_entry() {
        let mut app = App::default();
        let first = app.manifest.posters[0].id.clone();
        app.manifest.posters.push(site::Poster {
            id: "second".into(),
            title: "Second poster".into(),
            caption: None,
            image: "posters/gvs_methods.svg".into(),
        });
        open_poster(&mut app, &first);
        open_poster(&mut app, "second");

        assert_eq!(app.poster.active_id(), Some("second"));
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.top(), Some(&Route::Poster("second".into())));
    }

    #[test]
    fn unknown_poster_id_is_ignored() {
        let mut app = App::default();
        open_poster(&mut app, "no-such-poster");

        assert!(!app.poster.is_open());
        assert!(app.history.is_empty());
        assert_eq!(app.poster.listeners(), poster::Listeners::None);
    }

    #[test]
    fn unknown_poster_id_keeps_current_poster_open() {
        let mut app = App::default();
        let id = app.manifest.posters[0].id.clone();
        open_poster(&mut app, &id);
        open_poster(&mut app, "no-such-poster");

        assert_eq!(app.poster.active_id(), Some(id.as_str()));
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn reveal_message_marks_section_once() {
        let mut app = App::default();
        let _ = app.update(Message::Sections(sections::Message::Revealed("about".into())));
        assert!(app.reveal.is_revealed("about"));
    }

    #[test]
    fn page_scroll_controls_back_to_top_visibility() {
        let mut app = App::default();
        let bounds = Rectangle::new(iced::Point::new(0.0, 56.0), Size::new(800.0, 600.0));
        let _ = app.update(Message::PageScrolled {
            bounds,
            offset: AbsoluteOffset { x: 0.0, y: 450.0 },
        });
        assert!(app.scroll.back_to_top_visible());

        let _ = app.update(Message::PageScrolled {
            bounds,
            offset: AbsoluteOffset { x: 0.0, y: 120.0 },
        });
        assert!(!app.scroll.back_to_top_visible());
    }

    #[test]
    fn section_link_collapses_menu() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.nav_expanded);

        let _ = app.update(Message::Navbar(navbar::Message::SectionPressed(
            "contact".into(),
        )));
        assert!(!app.nav_expanded);
    }

    #[test]
    fn widening_window_collapses_menu() {
        let mut app = App::default();
        app.nav_expanded = true;
        let _ = app.update(Message::WindowResized(Size::new(1200.0, 800.0)));
        assert!(!app.nav_expanded);
        assert_eq!(app.window_size.width, 1200.0);
    }

    #[test]
    fn reload_is_refused_while_loading() {
        let mut app = App::default();
        let _ = app.update(Message::ReloadPublications);
        assert!(app.publications.is_loading());

        let _ = app.update(Message::PublicationsLoaded {
            generation: 1,
            result: Ok(vec![entry("Dosage compensation")]),
        });
        assert!(matches!(app.publications.state(), FetchState::Success(list) if list.len() == 1));
    }

    #[test]
    fn failed_load_is_shown_as_failure() {
        let mut app = App::default();
        let _ = app.update(Message::ReloadPublications);
        let _ = app.update(Message::PublicationsLoaded {
            generation: 1,
            result: Err(Error::Network(NetworkError::Status(503))),
        });
        assert!(matches!(app.publications.state(), FetchState::Failed));
    }

    #[test]
    fn unbuildable_client_ends_load_as_failure() {
        let mut app = App::default();
        let generation = app.publications.begin_load().expect("idle session");
        let _ = app.publications_task(
            generation,
            Err(Error::Network(NetworkError::Transport("no TLS backend".into()))),
        );

        assert!(matches!(app.publications.state(), FetchState::Failed));
        assert!(app.notifications.has_notifications());

        let _ = app.update(Message::ReloadPublications);
        assert!(app.publications.is_loading());
    }

    #[test]
    fn failed_poster_image_is_not_stored() {
        let mut app = App::default();
        let _ = app.update(Message::PosterImageLoaded {
            id: "missing".into(),
            result: Err(Error::Io("gone".into())),
        });
        assert!(app.poster_images.is_empty());
    }

    #[test]
    fn tick_advances_clock() {
        let mut app = App::default();
        let later = app.now + std::time::Duration::from_millis(500);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.now, later);
    }
}
