use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::data_models::{PAGE_SIZE, ResultPage, SearchRequest, SearchView};
use crate::error::SearchError;

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Newest articles first.
pub const SORT_BY: &str = "publishedAt";
pub const LANGUAGE: &str = "en";

/// Body newsapi sends alongside a non-200 status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the newsapi `everything` endpoint. Cheap to clone; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl NewsClient {
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> NewsClient {
        NewsClient {
            http: reqwest::Client::new(),
            endpoint,
            api_key: api_key.into(),
        }
    }

    /// Upstream URL for `request`. The query is form-encoded by `Url`, so
    /// reserved characters reach the api unchanged.
    pub fn search_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &request.query)
            .append_pair("pageSize", &PAGE_SIZE.to_string())
            .append_pair("page", &request.page.to_string())
            .append_pair("apiKey", &self.api_key)
            .append_pair("sortBy", SORT_BY)
            .append_pair("language", LANGUAGE);
        url
    }

    /// Fetches and decodes one page of results.
    pub async fn fetch_page(&self, request: &SearchRequest) -> Result<ResultPage, SearchError> {
        let url = self.search_url(request);
        log::info!("fetching news: {}", redact_api_key(&url));

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(SearchError::UpstreamUnreachable)?;
        let status = res.status();
        let body = res.bytes().await.map_err(SearchError::UpstreamUnreachable)?;

        if status != StatusCode::OK {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| match (b.code, b.message) {
                    (Some(code), Some(message)) => Some(format!("{code}: {message}")),
                    (None, message) => message,
                    (Some(code), None) => Some(code),
                });
            log::warn!("news api returned {status}");
            return Err(SearchError::UpstreamRejected {
                status: status.as_u16(),
                message,
            });
        }

        let mut page: ResultPage = serde_json::from_slice(&body).map_err(SearchError::Decode)?;
        if page.articles.len() > PAGE_SIZE as usize {
            log::warn!(
                "news api returned {} articles for a page of {PAGE_SIZE}, truncating",
                page.articles.len()
            );
            page.articles.truncate(PAGE_SIZE as usize);
        }

        Ok(page)
    }

    /// Fetches a page and shapes it for rendering.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchView, SearchError> {
        let page = self.fetch_page(request).await?;
        let view = SearchView::new(request, page);
        log::info!(
            "found {} results for {:?}, page {} of {}",
            view.results.total_results,
            view.query,
            view.current_page,
            view.total_pages
        );
        Ok(view)
    }
}

/// `url` with the `apiKey` value masked, for logging.
fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apiKey" { "REDACTED".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
