//! Search view state.
//!
//! The search screen never owns its query, tab or page. They live in the
//! navigable [`QueryParams`] and [`SearchViewState::derive`] recomputes them
//! whenever the params change. The derived state decides which request to
//! issue.

pub mod pagination;
pub mod results;

pub use pagination::PageButton;
pub use results::{SearchPayload, SearchResults};

use std::collections::BTreeMap;
use std::fmt;

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_TAB: &str = "tab";
pub const PARAM_PAGE: &str = "page";

/// Result category filter.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    All,
    Movie,
    Tv,
    Person,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::All, Tab::Movie, Tab::Tv, Tab::Person];

    /// Parse a tab parameter; anything unknown is `All`.
    ///
    pub fn from_param(value: &str) -> Tab {
        match value {
            "movie" => Tab::Movie,
            "tv" => Tab::Tv,
            "person" => Tab::Person,
            _ => Tab::All,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Movie => "movie",
            Tab::Tv => "tv",
            Tab::Person => "person",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Movie => "Movies",
            Tab::Tv => "TV Shows",
            Tab::Person => "People",
        }
    }

    pub fn next(&self) -> Tab {
        let index = Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0);
        Tab::ALL[(index + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        let index = Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0);
        Tab::ALL[(index + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Navigable parameters of the search screen, as raw strings.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        QueryParams::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.0.remove(key);
        self
    }

    /// New search text; back to the first page.
    ///
    pub fn submit_search(&mut self, query: &str) -> &mut Self {
        self.set(PARAM_SEARCH, query).set(PARAM_PAGE, "1")
    }

    /// New tab; back to the first page.
    ///
    pub fn change_tab(&mut self, tab: Tab) -> &mut Self {
        self.set(PARAM_TAB, tab.as_param()).set(PARAM_PAGE, "1")
    }

    pub fn change_page(&mut self, page: u32) -> &mut Self {
        self.set(PARAM_PAGE, page.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Query, tab and page of the search screen.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchViewState {
    pub query: String,
    pub tab: Tab,
    pub page: u32,
}

impl SearchViewState {
    /// Derive the view state from raw params. Missing search is empty,
    /// missing or unknown tab is `All`, and a missing, non-numeric or zero
    /// page is 1.
    ///
    pub fn derive(params: &QueryParams) -> SearchViewState {
        SearchViewState {
            query: params.get(PARAM_SEARCH).unwrap_or_default().to_string(),
            tab: params.get(PARAM_TAB).map(Tab::from_param).unwrap_or_default(),
            page: params
                .get(PARAM_PAGE)
                .and_then(|page| page.trim().parse::<u32>().ok())
                .filter(|page| *page >= 1)
                .unwrap_or(1),
        }
    }

    /// Which request this state calls for.
    ///
    pub fn request(&self) -> SearchRequest {
        let query = self.query.trim();
        if query.is_empty() {
            return SearchRequest::Trending;
        }
        let query = self.query.clone();
        let page = self.page;
        match self.tab {
            Tab::All => SearchRequest::All { query, page },
            Tab::Movie => SearchRequest::Movie { query, page },
            Tab::Tv => SearchRequest::Tv { query, page },
            Tab::Person => SearchRequest::Person { query, page },
        }
    }
}

/// Content API call for a search view state.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchRequest {
    /// Blank query, regardless of tab
    Trending,
    All { query: String, page: u32 },
    Movie { query: String, page: u32 },
    Tv { query: String, page: u32 },
    Person { query: String, page: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_defaults() {
        let view = SearchViewState::derive(&QueryParams::new());
        assert_eq!(
            view,
            SearchViewState {
                query: String::new(),
                tab: Tab::All,
                page: 1,
            }
        );
    }

    #[test]
    fn derive_sanitizes_bad_values() {
        let params: QueryParams = [("search", "alien"), ("tab", "books"), ("page", "zero")]
            .into_iter()
            .collect();
        let view = SearchViewState::derive(&params);
        assert_eq!(view.tab, Tab::All);
        assert_eq!(view.page, 1);

        let params: QueryParams = [("page", "0")].into_iter().collect();
        assert_eq!(SearchViewState::derive(&params).page, 1);
    }

    #[test]
    fn derive_reads_all_params() {
        let params: QueryParams = [("search", "batman"), ("tab", "tv"), ("page", "4")]
            .into_iter()
            .collect();
        let view = SearchViewState::derive(&params);
        assert_eq!(view.query, "batman");
        assert_eq!(view.tab, Tab::Tv);
        assert_eq!(view.page, 4);
        assert_eq!(
            view.request(),
            SearchRequest::Tv {
                query: "batman".to_string(),
                page: 4
            }
        );
    }

    #[test]
    fn blank_query_is_trending_for_any_tab() {
        for tab in Tab::ALL {
            let mut params = QueryParams::new();
            params.set(PARAM_SEARCH, "   ").change_tab(tab);
            assert_eq!(SearchViewState::derive(&params).request(), SearchRequest::Trending);
        }
    }

    #[test]
    fn tab_and_search_changes_reset_page() {
        let mut params = QueryParams::new();
        params.submit_search("alien").change_page(5);
        assert_eq!(SearchViewState::derive(&params).page, 5);

        params.change_tab(Tab::Movie);
        assert_eq!(SearchViewState::derive(&params).page, 1);

        params.change_page(3).submit_search("aliens");
        let view = SearchViewState::derive(&params);
        assert_eq!(view.page, 1);
        assert_eq!(view.tab, Tab::Movie);
    }

    #[test]
    fn tab_cycling() {
        assert_eq!(Tab::All.next(), Tab::Movie);
        assert_eq!(Tab::Person.next(), Tab::All);
        assert_eq!(Tab::All.previous(), Tab::Person);
    }
}
