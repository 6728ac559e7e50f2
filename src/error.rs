use thiserror::Error;

/// Failures of a single search request. Every variant is terminal for the
/// request that produced it.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid page number: {value:?}")]
    InvalidPage { value: String },

    #[error("news api unreachable: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("news api rejected request with status {status}{}", detail(.message))]
    UpstreamRejected { status: u16, message: Option<String> },

    #[error("failed to decode news api response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SearchError {
    /// Short stable name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidPage { .. } => "invalid_page",
            SearchError::UpstreamUnreachable(_) => "upstream_unreachable",
            SearchError::UpstreamRejected { .. } => "upstream_rejected",
            SearchError::Decode(_) => "decode",
        }
    }
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to read template file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}
