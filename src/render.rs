//! HTML rendering for the index and results pages.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;

use crate::data_models::{Article, SearchView};
use crate::error::RenderError;

const PAGE_TEMPLATE: &str = "index";
const BUILTIN_PAGE_TEMPLATE: &str = include_str!("../templates/index.hbs");

#[derive(Debug)]
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

#[derive(Serialize)]
struct PageContext<'a> {
    search: Option<SearchContext<'a>>,
}

#[derive(Serialize)]
struct SearchContext<'a> {
    query: &'a str,
    current_page: u32,
    total_pages: u32,
    previous_href: Option<String>,
    next_href: Option<String>,
    results: ResultsContext<'a>,
}

#[derive(Serialize)]
struct ResultsContext<'a> {
    status: &'a str,
    total_results: u32,
    articles: Vec<ArticleContext<'a>>,
}

#[derive(Serialize)]
struct ArticleContext<'a> {
    source_name: &'a str,
    author: &'a str,
    title: &'a str,
    description: &'a str,
    url: &'a str,
    image_url: &'a str,
    published_date: String,
    content: &'a str,
}

impl<'a> From<&'a Article> for ArticleContext<'a> {
    fn from(article: &'a Article) -> Self {
        ArticleContext {
            source_name: &article.source.name,
            author: &article.author,
            title: &article.title,
            description: &article.description,
            url: &article.url,
            image_url: &article.url_to_image,
            published_date: article.formatted_published_date(),
            content: &article.content,
        }
    }
}

impl<'a> From<&'a SearchView> for SearchContext<'a> {
    fn from(view: &'a SearchView) -> Self {
        SearchContext {
            query: &view.query,
            current_page: view.current_page,
            total_pages: view.total_pages,
            previous_href: view.previous_page().map(|p| search_href(&view.query, p)),
            next_href: view.next_page().map(|p| search_href(&view.query, p)),
            results: ResultsContext {
                status: &view.results.status,
                total_results: view.results.total_results,
                articles: view.results.articles.iter().map(ArticleContext::from).collect(),
            },
        }
    }
}

/// Link to `page` of the results for `query`.
pub fn search_href(query: &str, page: u32) -> String {
    let q: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("/search/?q={q}&page={page}")
}

impl Renderer {
    /// Renderer backed by the template compiled into the binary.
    pub fn builtin() -> Result<Renderer, RenderError> {
        Self::from_source(BUILTIN_PAGE_TEMPLATE)
    }

    /// Renderer backed by a template file on disk. The file is read once.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Renderer, RenderError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_source(&source)
    }

    pub fn from_source(source: &str) -> Result<Renderer, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_template_string(PAGE_TEMPLATE, source)?;
        Ok(Renderer { handlebars })
    }

    /// Page with only the search form.
    pub fn render_index(&self) -> Result<String, RenderError> {
        self.render(&PageContext { search: None })
    }

    pub fn render_search(&self, view: &SearchView) -> Result<String, RenderError> {
        self.render(&PageContext {
            search: Some(SearchContext::from(view)),
        })
    }

    fn render(&self, context: &PageContext<'_>) -> Result<String, RenderError> {
        Ok(self.handlebars.render(PAGE_TEMPLATE, context)?)
    }
}
