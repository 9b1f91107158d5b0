// SPDX-License-Identifier: GPL-3.0-only

//! HTTP client for the PokéAPI REST service. Responses are fetched as raw
//! JSON and pushed through the validators, so nothing with an unexpected
//! shape ever reaches a coordinator or the cache.

use std::sync::Arc;

use futures_util::StreamExt;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::core::coordinator::PokemonSource;
use crate::core::validation::{self, ValidationError};
use crate::entities::{PokemonDetail, PokemonListPage, PokemonRef};

/// Concurrent requests allowed while prefetching details for a page.
const DETAIL_CONCURRENCY: usize = 30;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected payload: {0}")]
    InvalidPayload(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
    max_page_size: u32,
}

impl PokeApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            max_page_size: config.max_page_size,
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetches the details for every reference in `refs` with bounded
    /// concurrency. Individual failures are logged and skipped; the result
    /// keeps the order of `refs`.
    pub async fn fetch_details(&self, refs: &[PokemonRef]) -> Vec<PokemonDetail> {
        let semaphore = Arc::new(Semaphore::new(DETAIL_CONCURRENCY));

        let mut details: Vec<PokemonDetail> = futures_util::stream::iter(refs)
            .map(|entry| {
                let semaphore = Arc::clone(&semaphore);
                async move {
                    let _permit = semaphore.acquire().await.ok()?;
                    match self.fetch_detail_by_name(&entry.name).await {
                        Ok(detail) => Some(detail),
                        Err(err) => {
                            tracing::warn!("failed to fetch details for {}: {err}", entry.name);
                            None
                        }
                    }
                }
            })
            .buffer_unordered(DETAIL_CONCURRENCY)
            .filter_map(|detail| async move { detail })
            .collect()
            .await;

        let order: Vec<&str> = refs.iter().map(|entry| entry.name.as_str()).collect();
        details.sort_by_key(|detail| order.iter().position(|name| *name == detail.name));
        details
    }
}

impl PokemonSource for PokeApi {
    async fn fetch_list(&self, offset: u32, limit: u32) -> Result<PokemonListPage, ApiError> {
        let limit = limit.min(self.max_page_size);
        let url = format!(
            "{}/pokemon/?offset={offset}&limit={limit}",
            self.base_url
        );
        tracing::debug!("fetching list page: {url}");

        let payload = self.get_json(&url).await?;
        Ok(validation::validate_list_page(&payload)?)
    }

    async fn fetch_detail_by_id(&self, id: i64) -> Result<PokemonDetail, ApiError> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        tracing::debug!("fetching detail: {url}");

        let payload = self.get_json(&url).await?;
        Ok(validation::validate_detail(&payload)?)
    }

    async fn fetch_detail_by_name(&self, name: &str) -> Result<PokemonDetail, ApiError> {
        let url = format!("{}/pokemon/{name}", self.base_url);
        tracing::debug!("fetching detail: {url}");

        let payload = self.get_json(&url).await?;
        Ok(validation::validate_detail(&payload)?)
    }
}
