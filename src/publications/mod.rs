// SPDX-License-Identifier: MPL-2.0
//! Publication list: ORCID fetch, type filter, citation formatting and the
//! fetch session state shown in the publications section.
//!
//! # Pipeline
//!
//! 1. Fetch the grouped work summaries of the configured researcher.
//! 2. Fetch the full record of the first summary of each group.
//! 3. Keep journal articles, reviews and research articles.
//! 4. Format each record as a [`Citation`].
//! 5. Render in summary order, or the empty-state line when nothing is left.
//!
//! Only a failure of step 1 fails the whole list; a failed record in step 2
//! is logged and skipped.

pub mod citation;
pub mod orcid;
pub mod pipeline;

pub use citation::{Citation, Segment};
pub use orcid::{OrcidClient, WorkRecord};
pub use pipeline::load_publications;

use crate::error::Error;

/// Work types that appear in the list.
pub const LISTED_TYPES: [&str; 3] = ["journal-article", "review", "research-article"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// Whether the name contains the highlighted surname.
    pub is_subject: bool,
}

/// One materialized publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationEntry {
    pub title: String,
    pub year: Option<String>,
    pub journal: String,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub authors: Vec<Author>,
    pub doi: Option<String>,
}

impl PublicationEntry {
    /// Builds an entry from a work record when its type is listed.
    #[must_use]
    pub fn from_record(record: &WorkRecord, highlight_surname: &str) -> Option<Self> {
        if !is_listed_type(record.work_type()) {
            return None;
        }

        let surname = highlight_surname.trim().to_lowercase();
        let authors = record
            .credit_names()
            .map(|name| Author {
                name: name.to_string(),
                is_subject: !surname.is_empty() && name.to_lowercase().contains(&surname),
            })
            .collect();

        Some(Self {
            title: record.title().unwrap_or_default().to_string(),
            year: record.year().map(str::to_string),
            journal: record.journal().unwrap_or_default().to_string(),
            volume: record.volume().map(str::to_string),
            issue: record.issue().map(str::to_string),
            authors,
            doi: record.doi().map(str::to_string),
        })
    }
}

#[must_use]
pub fn is_listed_type(work_type: Option<&str>) -> bool {
    work_type.is_some_and(|t| LISTED_TYPES.contains(&t))
}

/// State of the publication fetch session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Citation>),
    Empty,
    Failed,
}

/// Fetch session owned by the app.
///
/// A load is identified by a generation number so a late result of a
/// superseded load is ignored.
#[derive(Debug, Clone, Default)]
pub struct PublicationList {
    state: FetchState,
    generation: u64,
}

impl PublicationList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Starts a load. Returns its generation, or `None` while one is in flight.
    pub fn begin_load(&mut self) -> Option<u64> {
        if self.is_loading() {
            log::debug!("publication load already in flight");
            return None;
        }
        self.generation += 1;
        self.state = FetchState::Loading;
        Some(self.generation)
    }

    /// Applies the outcome of load `generation`. Returns `false` for a stale result.
    pub fn finish(&mut self, generation: u64, result: Result<Vec<PublicationEntry>, Error>) -> bool {
        if generation != self.generation || !self.is_loading() {
            log::debug!("ignoring stale publication result #{}", generation);
            return false;
        }

        self.state = match result {
            Ok(entries) if entries.is_empty() => {
                log::info!("publication list is empty");
                FetchState::Empty
            }
            Ok(entries) => {
                log::info!("loaded {} publications", entries.len());
                FetchState::Success(entries.iter().map(Citation::from_entry).collect())
            }
            Err(err) => {
                log::warn!("publication list failed: {}", err);
                FetchState::Failed
            }
        };
        true
    }
}
