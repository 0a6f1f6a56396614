// SPDX-License-Identifier: MPL-2.0
//! ORCID public API v3.0 client and response models.
//!
//! Every field of the response models is optional: ORCID omits or nulls
//! fields freely and a missing field must never reject a record.

use crate::error::{NetworkError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Response Models
// =============================================================================

/// `{ "value": ... }` wrapper used throughout the ORCID schema.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Value {
    #[serde(default)]
    pub value: Option<String>,
}

impl Value {
    fn text(field: &Option<Value>) -> Option<&str> {
        field
            .as_ref()
            .and_then(|v| v.value.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Response of `GET /{orcid}/works`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WorksResponse {
    #[serde(default)]
    pub group: Option<Vec<WorkGroup>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WorkGroup {
    #[serde(default, rename = "work-summary")]
    pub work_summary: Option<Vec<WorkSummary>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WorkSummary {
    #[serde(default, rename = "put-code")]
    pub put_code: Option<u64>,
}

impl WorksResponse {
    /// Put-code of the first summary of each group, in group order.
    ///
    /// Groups without a usable summary are skipped.
    #[must_use]
    pub fn first_put_codes(&self) -> Vec<u64> {
        self.group
            .iter()
            .flatten()
            .filter_map(|group| {
                let code = group
                    .work_summary
                    .as_ref()
                    .and_then(|summaries| summaries.first())
                    .and_then(|summary| summary.put_code);
                if code.is_none() {
                    log::debug!("skipping work group without put-code");
                }
                code
            })
            .collect()
    }
}

/// Response of `GET /{orcid}/work/{put-code}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct WorkRecord {
    #[serde(default)]
    pub title: Option<WorkTitle>,
    #[serde(default)]
    pub journal_title: Option<Value>,
    #[serde(default)]
    pub publication_date: Option<PublicationDate>,
    #[serde(default)]
    pub journal_issue: Option<JournalIssue>,
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub contributors: Option<Contributors>,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WorkTitle {
    #[serde(default)]
    pub title: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PublicationDate {
    #[serde(default)]
    pub year: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct JournalIssue {
    #[serde(default)]
    pub journal_volume: Option<Value>,
    #[serde(default)]
    pub issue: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Contributors {
    #[serde(default)]
    pub contributor: Option<Vec<Contributor>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Contributor {
    #[serde(default)]
    pub credit_name: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalIds {
    #[serde(default)]
    pub external_id: Option<Vec<ExternalId>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ExternalId {
    #[serde(default)]
    pub external_id_type: Option<String>,
    #[serde(default)]
    pub external_id_value: Option<String>,
}

impl WorkRecord {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().and_then(|t| Value::text(&t.title))
    }

    #[must_use]
    pub fn journal(&self) -> Option<&str> {
        Value::text(&self.journal_title)
    }

    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.publication_date
            .as_ref()
            .and_then(|d| Value::text(&d.year))
    }

    #[must_use]
    pub fn volume(&self) -> Option<&str> {
        self.journal_issue
            .as_ref()
            .and_then(|i| Value::text(&i.journal_volume))
    }

    #[must_use]
    pub fn issue(&self) -> Option<&str> {
        self.journal_issue.as_ref().and_then(|i| Value::text(&i.issue))
    }

    #[must_use]
    pub fn work_type(&self) -> Option<&str> {
        self.work_type.as_deref().map(str::trim)
    }

    /// Credit names in contributor order, blank names skipped.
    pub fn credit_names(&self) -> impl Iterator<Item = &str> {
        self.contributors
            .iter()
            .flat_map(|c| c.contributor.iter().flatten())
            .filter_map(|c| Value::text(&c.credit_name))
    }

    /// First external id of type `doi`.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids
            .iter()
            .flat_map(|ids| ids.external_id.iter().flatten())
            .find(|id| {
                id.external_id_type
                    .as_deref()
                    .is_some_and(|t| t.trim().eq_ignore_ascii_case("doi"))
            })
            .and_then(|id| id.external_id_value.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

// =============================================================================
// Client
// =============================================================================

/// Thin client over the two ORCID endpoints the publication list needs.
#[derive(Debug, Clone)]
pub struct OrcidClient {
    http: reqwest::Client,
    api_base: String,
    orcid_id: String,
}

impl OrcidClient {
    /// Creates a client for `orcid_id` against `api_base` (no trailing slash).
    pub fn new(api_base: &str, orcid_id: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            orcid_id: orcid_id.trim().to_string(),
        })
    }

    #[must_use]
    pub fn works_url(&self) -> String {
        format!("{}/{}/works", self.api_base, self.orcid_id)
    }

    #[must_use]
    pub fn work_url(&self, put_code: u64) -> String {
        format!("{}/{}/work/{}", self.api_base, self.orcid_id, put_code)
    }

    /// Fetches the grouped work summaries.
    pub async fn works(&self) -> Result<WorksResponse> {
        self.get_json(&self.works_url()).await
    }

    /// Fetches the full record of one work.
    pub async fn work(&self, put_code: u64) -> Result<WorkRecord> {
        self.get_json(&self.work_url(put_code)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()).into());
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
