//! Search results slice.
//!
//! Holds the raw page of the latest search (for pagination metadata) and
//! its normalized items. Results are applied only when their token is the
//! latest issued, so a slow response for an older query can never replace
//! a newer one.

use super::{SearchRequest, SearchViewState};
use crate::api::{ApiError, MovieResult, MultiResult, PersonResult, SearchPage, TvResult};
use crate::state::{RequestToken, RequestTracker};
use crate::store::ApiResponse;
use crate::utils::format::{
    format_search_all, format_search_movie, format_search_person, format_search_tv,
};
use crate::utils::MediaItem;
use log::*;

/// Raw payload of one search call.
///
#[derive(Clone, Debug, PartialEq)]
pub enum SearchPayload {
    Multi(SearchPage<MultiResult>),
    Movie(SearchPage<MovieResult>),
    Tv(SearchPage<TvResult>),
    Person(SearchPage<PersonResult>),
}

impl SearchPayload {
    pub fn page(&self) -> u32 {
        match self {
            SearchPayload::Multi(page) => page.page,
            SearchPayload::Movie(page) => page.page,
            SearchPayload::Tv(page) => page.page,
            SearchPayload::Person(page) => page.page,
        }
    }

    pub fn total_pages(&self) -> u32 {
        match self {
            SearchPayload::Multi(page) => page.total_pages,
            SearchPayload::Movie(page) => page.total_pages,
            SearchPayload::Tv(page) => page.total_pages,
            SearchPayload::Person(page) => page.total_pages,
        }
    }

    pub fn total_results(&self) -> u32 {
        match self {
            SearchPayload::Multi(page) => page.total_results,
            SearchPayload::Movie(page) => page.total_results,
            SearchPayload::Tv(page) => page.total_results,
            SearchPayload::Person(page) => page.total_results,
        }
    }

    /// UI-ready rows of this page.
    ///
    pub fn items(&self) -> Vec<MediaItem> {
        match self {
            SearchPayload::Multi(page) => format_search_all(page),
            SearchPayload::Movie(page) => format_search_movie(page),
            SearchPayload::Tv(page) => format_search_tv(page),
            SearchPayload::Person(page) => format_search_person(page),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchResults {
    tracker: RequestTracker,
    view: Option<SearchViewState>,
    response: ApiResponse<SearchPayload>,
    items: Vec<MediaItem>,
}

impl SearchResults {
    /// Start loading for `view` unless it is what was last requested.
    /// Returns the token and request to issue.
    ///
    pub fn begin(&mut self, view: &SearchViewState) -> Option<(RequestToken, SearchRequest)> {
        if self.view.as_ref() == Some(view) {
            return None;
        }
        Some(self.restart(view))
    }

    /// Start loading for `view` even when unchanged.
    ///
    pub fn restart(&mut self, view: &SearchViewState) -> (RequestToken, SearchRequest) {
        let token = self.tracker.issue();
        self.view = Some(view.clone());
        self.response = ApiResponse::Pending;
        debug!("Search {:?} issued as generation {}", view, token.generation());
        (token, view.request())
    }

    /// Apply a result. Returns `false` when the token was superseded and the
    /// result discarded.
    ///
    pub fn apply(&mut self, token: RequestToken, result: Result<SearchPayload, ApiError>) -> bool {
        if !self.tracker.complete(token) {
            debug!(
                "Discarding stale search result of generation {}",
                token.generation()
            );
            return false;
        }
        match result {
            Ok(payload) => {
                self.items = payload.items();
                self.response = ApiResponse::Resolved(payload);
            }
            Err(error) => {
                self.items = Vec::new();
                self.response = ApiResponse::Rejected(Some(error));
            }
        }
        true
    }

    pub fn response(&self) -> &ApiResponse<SearchPayload> {
        &self.response
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn total_pages(&self) -> u32 {
        self.response
            .data()
            .map(SearchPayload::total_pages)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{QueryParams, Tab};

    fn movie_page(title: &str, page: u32, total_pages: u32) -> SearchPayload {
        SearchPayload::Movie(SearchPage {
            page,
            total_pages,
            total_results: total_pages * 20,
            results: vec![MovieResult {
                id: 1,
                title: Some(title.to_string()),
                release_date: None,
                poster_path: None,
                overview: None,
                vote_average: None,
            }],
        })
    }

    fn view(query: &str) -> SearchViewState {
        let mut params = QueryParams::new();
        params.submit_search(query).change_tab(Tab::Movie);
        SearchViewState::derive(&params)
    }

    #[test]
    fn newest_search_wins_when_older_resolves_late() {
        let mut results = SearchResults::default();
        let (batman, _) = results.begin(&view("batman")).unwrap();
        let (superman, request) = results.begin(&view("superman")).unwrap();
        assert_eq!(
            request,
            SearchRequest::Movie {
                query: "superman".to_string(),
                page: 1
            }
        );

        assert!(results.apply(superman, Ok(movie_page("Superman", 1, 4))));
        assert!(!results.apply(batman, Ok(movie_page("Batman", 1, 9))));

        assert_eq!(results.items()[0].title, "Superman");
        assert_eq!(results.total_pages(), 4);
    }

    #[test]
    fn stale_result_before_newer_one_is_discarded() {
        let mut results = SearchResults::default();
        let (batman, _) = results.begin(&view("batman")).unwrap();
        let (superman, _) = results.begin(&view("superman")).unwrap();

        assert!(!results.apply(batman, Ok(movie_page("Batman", 1, 9))));
        assert!(results.response().is_pending());

        assert!(results.apply(superman, Ok(movie_page("Superman", 1, 4))));
        assert_eq!(results.items()[0].title, "Superman");
    }

    #[test]
    fn unchanged_view_is_not_refetched() {
        let mut results = SearchResults::default();
        assert!(results.begin(&view("alien")).is_some());
        assert!(results.begin(&view("alien")).is_none());
        assert!(results.response().is_pending());
    }

    #[test]
    fn error_clears_items() {
        let mut results = SearchResults::default();
        let (token, _) = results.begin(&view("alien")).unwrap();
        results.apply(token, Ok(movie_page("Alien", 1, 1)));

        let (token, _) = results.begin(&view("aliens")).unwrap();
        assert!(results.response().is_pending());
        results.apply(token, Err(ApiError::Request("offline".to_string())));
        assert!(results.items().is_empty());
        assert!(results.response().error().is_some());
    }
}
