use crate::data_models::SearchRequest;
use crate::error::SearchError;

impl SearchRequest {
    /// Builds a request from raw parameters. The query is passed through
    /// as-is; a missing or empty page means page 1, anything else must be a
    /// positive integer.
    pub fn from_params(
        q: Option<String>,
        page: Option<&str>,
    ) -> Result<SearchRequest, SearchError> {
        let query = q.unwrap_or_default();
        let page = parse_page(page)?;

        tracing::info!(query = %query, page, "search request");

        Ok(SearchRequest { query, page })
    }
}

pub fn parse_page(raw: Option<&str>) -> Result<u32, SearchError> {
    let raw = match raw {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };

    match raw.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(SearchError::InvalidPage {
            value: raw.to_string(),
        }),
    }
}
