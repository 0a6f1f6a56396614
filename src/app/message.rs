// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::publications::PublicationEntry;
use crate::site::PosterImage;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::poster;
use crate::ui::sections;
use iced::keyboard::Key;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Sections(sections::Message),
    Poster(poster::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was resized.
    PageScrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    BackToTop,
    /// A key press, fed to the easter egg detector.
    KeyPressed(Key),
    /// Back gesture: mouse Back button or `Alt+Left`.
    NavigateBack,
    /// `F5`: fetch the publication list again.
    ReloadPublications,
    PublicationsLoaded {
        generation: u64,
        result: Result<Vec<PublicationEntry>, Error>,
    },
    PosterImageLoaded {
        id: String,
        result: Result<PosterImage, Error>,
    },
    WindowResized(Size),
    /// Periodic tick for fades and notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional site manifest replacing the embedded one.
    pub site: Option<String>,
    /// Optional data directory override (for the preference store).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional ORCID iD replacing `[publications] orcid_id`.
    pub orcid: Option<String>,
}
