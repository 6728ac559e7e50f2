use crate::data_models::SearchRequest;
use crate::error::SearchError;

/// Query string of `/search/`. Both parameters are optional on the wire; when
/// a key repeats, its first value wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

impl FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" if params.q.is_none() => params.q = Some(value),
                "page" if params.page.is_none() => params.page = Some(value),
                _ => {}
            }
        }
        params
    }
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = SearchError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        SearchRequest::from_params(params.q, params.page.as_deref())
    }
}
