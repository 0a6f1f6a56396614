// SPDX-License-Identifier: MPL-2.0
//! Citation formatting.
//!
//! An entry renders as `Authors. (Year). Title. Journal, Volume(Issue).` with
//! every absent part dropped together with its punctuation. The result is a
//! sequence of [`Segment`]s so the view can emphasize the subject author.

use super::PublicationEntry;

const DOI_RESOLVER: &str = "https://doi.org/";

/// A run of citation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    /// The researcher's own name in the author list.
    Emphasis(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Emphasis(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    segments: Vec<Segment>,
    doi: Option<String>,
}

impl Citation {
    #[must_use]
    pub fn from_entry(entry: &PublicationEntry) -> Self {
        let mut builder = SegmentBuilder::default();

        if !entry.authors.is_empty() {
            for (index, author) in entry.authors.iter().enumerate() {
                if index > 0 {
                    builder.plain(", ");
                }
                if author.is_subject {
                    builder.emphasis(&author.name);
                } else {
                    builder.plain(&author.name);
                }
            }
            builder.plain(".");
            builder.end_part();
        }

        if let Some(year) = entry.year.as_deref() {
            builder.plain(&format!("({year})."));
            builder.end_part();
        }

        if !entry.title.is_empty() {
            builder.plain(&format!("{}.", entry.title));
            builder.end_part();
        }

        let volume_issue = entry.volume.as_deref().map(|volume| match entry.issue.as_deref() {
            Some(issue) => format!("{volume}({issue})"),
            None => volume.to_string(),
        });
        match (entry.journal.is_empty(), volume_issue) {
            (false, Some(volume_issue)) => {
                builder.plain(&format!("{}, {volume_issue}.", entry.journal));
            }
            (false, None) => builder.plain(&format!("{}.", entry.journal)),
            (true, Some(volume_issue)) => builder.plain(&format!("{volume_issue}.")),
            (true, None) => {}
        }

        Self {
            segments: builder.finish(),
            doi: entry.doi.clone(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The citation text without emphasis or link.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.doi.as_deref()
    }

    /// Resolver URL for the DOI, if any.
    #[must_use]
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_deref().map(|doi| format!("{DOI_RESOLVER}{doi}"))
    }
}

/// Collects segments, merging adjacent plain runs and separating parts by a space.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
    pending_space: bool,
}

impl SegmentBuilder {
    fn plain(&mut self, text: &str) {
        let text = self.with_separator(text);
        if let Some(Segment::Plain(last)) = self.segments.last_mut() {
            last.push_str(&text);
        } else {
            self.segments.push(Segment::Plain(text));
        }
    }

    fn emphasis(&mut self, text: &str) {
        if self.pending_space {
            self.pending_space = false;
            self.plain(" ");
        }
        self.segments.push(Segment::Emphasis(text.to_string()));
    }

    fn with_separator(&mut self, text: &str) -> String {
        if std::mem::take(&mut self.pending_space) {
            format!(" {text}")
        } else {
            text.to_string()
        }
    }

    fn end_part(&mut self) {
        if !self.segments.is_empty() {
            self.pending_space = true;
        }
    }

    fn finish(self) -> Vec<Segment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publications::Author;

    fn entry() -> PublicationEntry {
        PublicationEntry {
            title: "X".to_string(),
            year: Some("2020".to_string()),
            journal: "Y".to_string(),
            volume: Some("4".to_string()),
            issue: Some("2".to_string()),
            authors: vec![Author {
                name: "Jane Holik".to_string(),
                is_subject: true,
            }],
            doi: Some("10.1/abc".to_string()),
        }
    }

    #[test]
    fn full_citation_with_emphasis_and_doi() {
        let citation = Citation::from_entry(&entry());

        assert_eq!(citation.plain_text(), "Jane Holik. (2020). X. Y, 4(2).");
        assert_eq!(
            citation.segments()[0],
            Segment::Emphasis("Jane Holik".to_string())
        );
        assert_eq!(
            citation.doi_url().as_deref(),
            Some("https://doi.org/10.1/abc")
        );
    }

    #[test]
    fn missing_year_volume_and_doi_drop_their_parts() {
        let entry = PublicationEntry {
            year: None,
            volume: None,
            issue: Some("9".to_string()),
            doi: None,
            authors: vec![Author {
                name: "Authors".to_string(),
                is_subject: false,
            }],
            title: "Title".to_string(),
            journal: "Journal".to_string(),
        };
        let citation = Citation::from_entry(&entry);

        assert_eq!(citation.plain_text(), "Authors. Title. Journal.");
        assert_eq!(citation.doi_url(), None);
    }

    #[test]
    fn volume_without_issue() {
        let entry = PublicationEntry {
            issue: None,
            ..entry()
        };
        assert_eq!(
            Citation::from_entry(&entry).plain_text(),
            "Jane Holik. (2020). X. Y, 4."
        );
    }

    #[test]
    fn authors_are_joined_with_comma() {
        let entry = PublicationEntry {
            authors: vec![
                Author {
                    name: "A. Szalay".to_string(),
                    is_subject: false,
                },
                Author {
                    name: "J. Holik".to_string(),
                    is_subject: true,
                },
                Author {
                    name: "N. Nguyen".to_string(),
                    is_subject: false,
                },
            ],
            ..entry()
        };
        let citation = Citation::from_entry(&entry);

        assert_eq!(
            citation.plain_text(),
            "A. Szalay, J. Holik, N. Nguyen. (2020). X. Y, 4(2)."
        );
        assert_eq!(
            citation.segments(),
            &[
                Segment::Plain("A. Szalay, ".to_string()),
                Segment::Emphasis("J. Holik".to_string()),
                Segment::Plain(", N. Nguyen. (2020). X. Y, 4(2).".to_string()),
            ]
        );
    }

    #[test]
    fn empty_authors_and_title_leave_no_dangling_punctuation() {
        let entry = PublicationEntry {
            authors: vec![],
            title: String::new(),
            ..entry()
        };
        assert_eq!(Citation::from_entry(&entry).plain_text(), "(2020). Y, 4(2).");
    }

    #[test]
    fn everything_absent_renders_nothing() {
        let entry = PublicationEntry {
            title: String::new(),
            year: None,
            journal: String::new(),
            volume: None,
            issue: None,
            authors: vec![],
            doi: None,
        };
        assert_eq!(Citation::from_entry(&entry).plain_text(), "");
    }

    #[test]
    fn volume_without_journal() {
        let entry = PublicationEntry {
            journal: String::new(),
            ..entry()
        };
        assert_eq!(
            Citation::from_entry(&entry).plain_text(),
            "Jane Holik. (2020). X. 4(2)."
        );
    }
}
