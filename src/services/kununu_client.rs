use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::domain::keyword::{FilterKeyword, FilterKeywords};

#[derive(Debug, Error)]
pub enum KununuError {
    #[error("request to the search endpoint failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("search endpoint returned a non-json body: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("search response shape changed: {0}")]
    SchemaMismatch(#[source] serde_json::Error),
}

/// Client for the kununu top-company-profiles search endpoint.
///
/// The endpoint url comes from configuration; the url is expected to
/// already carry its fixed query (sort order), so further parameters are
/// appended with `&`, the way the upstream page built its requests.
pub struct KununuClient {
    client: Client,
    search_url: Url,
}

#[derive(Deserialize)]
struct KeywordResponse {
    filters: Filters,
}

#[derive(Deserialize)]
struct Filters {
    #[serde(rename = "possibleFilters")]
    possible_filters: PossibleFilters,
}

#[derive(Deserialize)]
struct PossibleFilters {
    industries: OptionList<IndustryOption>,
    #[serde(rename = "employerSegments")]
    employer_segments: OptionList<SegmentOption>,
    // locations is a plain array upstream, not wrapped in `options`
    locations: Vec<LocationOption>,
}

#[derive(Deserialize)]
struct OptionList<T> {
    options: Vec<T>,
}

#[derive(Deserialize)]
struct IndustryOption {
    value: String,
    slug: String,
}

#[derive(Deserialize)]
struct SegmentOption {
    slug: String,
}

#[derive(Deserialize)]
struct LocationOption {
    name: String,
    slug: String,
}

#[derive(Deserialize)]
struct PaginationResponse {
    meta: Meta,
}

#[derive(Deserialize)]
struct Meta {
    pagination: Pagination,
}

#[derive(Deserialize)]
struct Pagination {
    #[serde(rename = "totalPages")]
    total_pages: u32,
}

impl KununuClient {
    pub fn new(search_url: &str) -> Result<Self, url::ParseError> {
        Ok(KununuClient {
            client: Client::new(),
            search_url: Url::parse(search_url)?,
        })
    }

    /// One call to the search endpoint, shaped into the three keyword
    /// categories.
    pub async fn fetch_keywords(&self) -> Result<FilterKeywords, KununuError> {
        let body = self.get_json(self.search_url.as_str().to_string()).await?;
        decode_keywords(body)
    }

    /// Total page count for exactly this keyword set. Nothing is cached;
    /// a different keyword set needs a fresh call.
    pub async fn fetch_pagination(&self, keywords: &[String]) -> Result<u32, KununuError> {
        let url = build_search_url(self.search_url.as_str(), keywords, None);
        let body = self.get_json(url).await?;
        decode_pagination(body)
    }

    /// One page of raw search results, unshaped. Interpreting and
    /// persisting the payload is the caller's job.
    pub async fn fetch_page(&self, keywords: &[String], page: u32) -> Result<Value, KununuError> {
        let url = build_search_url(self.search_url.as_str(), keywords, Some(page));
        self.get_json(url).await
    }

    async fn get_json(&self, url: String) -> Result<Value, KununuError> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_body(&body)
    }
}

fn decode_body(body: &str) -> Result<Value, KununuError> {
    serde_json::from_str(body).map_err(KununuError::Parse)
}

/// Appends one `filterKeywords[]` pair per keyword in input order, then
/// the 1-based page number if given.
fn build_search_url(base: &str, keywords: &[String], page: Option<u32>) -> String {
    let mut url = base.to_string();
    for keyword in keywords {
        url.push_str(&format!("&filterKeywords[]={}", keyword));
    }
    if let Some(page) = page {
        url.push_str(&format!("&page={}", page));
    }
    url
}

fn decode_keywords(body: Value) -> Result<FilterKeywords, KununuError> {
    let response: KeywordResponse =
        serde_json::from_value(body).map_err(KununuError::SchemaMismatch)?;
    let possible_filters = response.filters.possible_filters;

    Ok(FilterKeywords {
        industry: possible_filters
            .industries
            .options
            .into_iter()
            .map(|industry| FilterKeyword {
                name: industry.value,
                key: industry.slug,
            })
            .collect(),
        // upstream carries no display value for segments, the slug
        // doubles as the name
        company_size: possible_filters
            .employer_segments
            .options
            .into_iter()
            .map(|segment| FilterKeyword {
                name: segment.slug.clone(),
                key: segment.slug,
            })
            .collect(),
        country: possible_filters
            .locations
            .into_iter()
            .map(|location| FilterKeyword {
                name: location.name,
                key: location.slug,
            })
            .collect(),
    })
}

fn decode_pagination(body: Value) -> Result<u32, KununuError> {
    let response: PaginationResponse =
        serde_json::from_value(body).map_err(KununuError::SchemaMismatch)?;
    Ok(response.meta.pagination.total_pages)
}
