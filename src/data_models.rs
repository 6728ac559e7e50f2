use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Articles requested from the news api per page.
pub const PAGE_SIZE: u32 = 20;

/// A parsed `/search/` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Source {
    // newsapi sends a string or null; nothing here looks inside it.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url_to_image: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl Article {
    /// Publication date as shown on the results page, e.g. `January 2, 2006`.
    pub fn formatted_published_date(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// One page of results as returned by the news api.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub status: String,
    pub total_results: u32,
    pub articles: Vec<Article>,
}

/// Everything the results page needs for one search.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SearchView {
    pub query: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub results: ResultPage,
}

impl SearchView {
    pub fn new(request: &SearchRequest, results: ResultPage) -> SearchView {
        SearchView {
            query: request.query.clone(),
            current_page: request.page,
            total_pages: total_pages(results.total_results, PAGE_SIZE),
            results,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn previous_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        (!self.is_last_page()).then(|| self.current_page + 1)
    }
}

/// Number of pages needed to show `total_results` at `page_size` per page.
pub fn total_pages(total_results: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_results.div_ceil(page_size)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article_json() -> serde_json::Value {
        json!({
            "source": {"id": null, "name": "Example Wire"},
            "author": null,
            "title": "Rust 2024 ships",
            "description": "The new edition is out.",
            "url": "https://example.com/rust-2024",
            "urlToImage": null,
            "publishedAt": "2025-02-20T14:05:00Z",
            "content": null
        })
    }

    #[test]
    fn test_total_pages_boundaries() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(19, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
        assert_eq!(total_pages(u32::MAX, 20), u32::MAX / 20 + 1);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(100, 0), 0);
    }

    #[test]
    fn test_article_nulls_become_empty_strings() {
        let article: Article = serde_json::from_value(article_json()).unwrap();
        assert_eq!(article.author, "");
        assert_eq!(article.url_to_image, "");
        assert_eq!(article.content, "");
        assert_eq!(article.source.id, None);
        assert_eq!(article.source.name, "Example Wire");
    }

    #[test]
    fn test_source_id_is_opaque() {
        let mut value = article_json();
        value["source"]["id"] = json!("bbc-news");
        let article: Article = serde_json::from_value(value).unwrap();
        assert_eq!(article.source.id, Some(json!("bbc-news")));
    }

    #[test]
    fn test_article_requires_published_at() {
        let mut value = article_json();
        value.as_object_mut().unwrap().remove("publishedAt");
        assert!(serde_json::from_value::<Article>(value).is_err());
    }

    #[test]
    fn test_formatted_published_date() {
        let article: Article = serde_json::from_value(article_json()).unwrap();
        assert_eq!(article.formatted_published_date(), "February 20, 2025");
    }

    #[test]
    fn test_result_page_requires_articles() {
        let value = json!({"status": "ok", "totalResults": 3});
        assert!(serde_json::from_value::<ResultPage>(value).is_err());
    }

    #[test]
    fn test_search_view_navigation() {
        let request = SearchRequest {
            query: "rust".to_string(),
            page: 2,
        };
        let results = ResultPage {
            status: "ok".to_string(),
            total_results: 45,
            articles: vec![],
        };
        let view = SearchView::new(&request, results);

        assert_eq!(view.total_pages, 3);
        assert!(!view.is_last_page());
        assert_eq!(view.previous_page(), Some(1));
        assert_eq!(view.next_page(), Some(3));
    }

    #[test]
    fn test_search_view_single_page() {
        let request = SearchRequest {
            query: "rust".to_string(),
            page: 1,
        };
        let results = ResultPage {
            status: "ok".to_string(),
            total_results: 0,
            articles: vec![],
        };
        let view = SearchView::new(&request, results);

        assert_eq!(view.total_pages, 0);
        assert!(view.is_last_page());
        assert_eq!(view.previous_page(), None);
        assert_eq!(view.next_page(), None);
    }
}
