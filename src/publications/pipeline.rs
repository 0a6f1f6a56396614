// SPDX-License-Identifier: MPL-2.0
//! Two-stage publication fetch.

use super::orcid::{OrcidClient, WorkRecord};
use super::PublicationEntry;
use crate::config::FetchMode;
use crate::error::Result;
use futures_util::future::join_all;

/// Fetches and filters the researcher's publications, in summary order.
///
/// Fails only when the summary list cannot be fetched or parsed. A detail
/// request that fails is logged and its work left out.
pub async fn load_publications(
    client: &OrcidClient,
    mode: FetchMode,
    highlight_surname: &str,
) -> Result<Vec<PublicationEntry>> {
    log::info!("loading publications from {}", client.works_url());
    let works = client.works().await?;
    let put_codes = works.first_put_codes();
    log::debug!("{} work groups to resolve", put_codes.len());

    let records: Vec<Option<WorkRecord>> = match mode {
        FetchMode::Concurrent => {
            join_all(put_codes.iter().map(|code| fetch_record(client, *code))).await
        }
        FetchMode::Sequential => {
            let mut records = Vec::with_capacity(put_codes.len());
            for code in &put_codes {
                records.push(fetch_record(client, *code).await);
            }
            records
        }
    };

    Ok(records
        .iter()
        .flatten()
        .filter_map(|record| PublicationEntry::from_record(record, highlight_surname))
        .collect())
}

async fn fetch_record(client: &OrcidClient, put_code: u64) -> Option<WorkRecord> {
    match client.work(put_code).await {
        Ok(record) => Some(record),
        Err(err) => {
            log::warn!("skipping work {}: {}", put_code, err);
            None
        }
    }
}
