//! Movie, TV show and person detail views.
//!
//! A detail view fetches its record first and its credits once the record
//! resolves. Both results carry the token issued when the view opened and
//! are dropped if the viewer has moved on.

use super::request::{RequestToken, RequestTracker};
use crate::api::{ApiError, CastMember, Credits, MediaType, MovieDetail, PersonDetail, TvDetail};
use crate::store::ApiResponse;
use crate::utils::format::{
    format_movie_detail, format_person_detail, format_tv_detail, MediaItem,
};

/// Which record a detail view shows.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DetailTarget {
    Movie(u64),
    Tv(u64),
    Person(u64),
}

impl DetailTarget {
    pub fn id(&self) -> u64 {
        match self {
            DetailTarget::Movie(id) | DetailTarget::Tv(id) | DetailTarget::Person(id) => *id,
        }
    }
}

impl From<&MediaItem> for DetailTarget {
    fn from(item: &MediaItem) -> Self {
        match item.media_type {
            MediaType::Movie => DetailTarget::Movie(item.tmdb_id),
            MediaType::Tv => DetailTarget::Tv(item.tmdb_id),
            MediaType::Person => DetailTarget::Person(item.tmdb_id),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum DetailData {
    Movie(MovieDetail),
    Tv(TvDetail),
    Person(PersonDetail),
}

impl DetailData {
    /// The record as a list-ready item.
    ///
    pub fn media_item(&self) -> MediaItem {
        match self {
            DetailData::Movie(movie) => format_movie_detail(movie),
            DetailData::Tv(tv) => format_tv_detail(tv),
            DetailData::Person(person) => format_person_detail(person),
        }
    }
}

/// Credits of a detail record.
///
#[derive(Debug, PartialEq, Clone)]
pub enum CreditsData {
    /// Cast and crew of a movie or show
    Cast(Credits),
    /// Dated movie and TV credits of a person, newest first
    Filmography(Vec<MediaItem>),
}

impl CreditsData {
    pub fn len(&self) -> usize {
        match self {
            CreditsData::Cast(credits) => credits.cast.len(),
            CreditsData::Filmography(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Where selecting the credit at `index` leads.
    ///
    pub fn target(&self, index: usize) -> Option<DetailTarget> {
        match self {
            CreditsData::Cast(credits) => credits
                .cast
                .get(index)
                .map(|member: &CastMember| DetailTarget::Person(member.id)),
            CreditsData::Filmography(items) => items.get(index).map(DetailTarget::from),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DetailState {
    target: DetailTarget,
    tracker: RequestTracker,
    token: RequestToken,
    detail: ApiResponse<DetailData>,
    credits: ApiResponse<CreditsData>,
    selected_credit: usize,
}

impl DetailState {
    /// New pending view for `target`, with the token its requests carry.
    ///
    pub fn open(target: DetailTarget) -> Self {
        let mut tracker = RequestTracker::default();
        let token = tracker.issue();
        DetailState {
            target,
            tracker,
            token,
            detail: ApiResponse::Pending,
            credits: ApiResponse::Pending,
            selected_credit: 0,
        }
    }

    /// Reopen with a token newer than any issued so far.
    ///
    pub fn reopen(&mut self, target: DetailTarget) -> RequestToken {
        self.target = target;
        self.token = self.tracker.issue();
        self.detail = ApiResponse::Pending;
        self.credits = ApiResponse::Pending;
        self.selected_credit = 0;
        self.token
    }

    pub fn target(&self) -> DetailTarget {
        self.target
    }

    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.tracker.is_current(token)
    }

    /// Stop accepting results for this view.
    ///
    pub fn cancel(&mut self) {
        self.tracker.cancel();
    }

    pub fn apply_detail(&mut self, token: RequestToken, result: Result<DetailData, ApiError>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.detail = result.into();
        true
    }

    pub fn apply_credits(&mut self, token: RequestToken, result: Result<CreditsData, ApiError>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.credits = result.into();
        self.selected_credit = 0;
        true
    }

    pub fn detail(&self) -> &ApiResponse<DetailData> {
        &self.detail
    }

    pub fn credits(&self) -> &ApiResponse<CreditsData> {
        &self.credits
    }

    pub fn selected_credit(&self) -> usize {
        self.selected_credit
    }

    pub fn next_credit(&mut self) {
        let len = self.credits.data().map(CreditsData::len).unwrap_or_default();
        if self.selected_credit + 1 < len {
            self.selected_credit += 1;
        }
    }

    pub fn previous_credit(&mut self) {
        self.selected_credit = self.selected_credit.saturating_sub(1);
    }

    /// Detail target of the highlighted credit.
    ///
    pub fn selected_target(&self) -> Option<DetailTarget> {
        self.credits.data()?.target(self.selected_credit)
    }
}
