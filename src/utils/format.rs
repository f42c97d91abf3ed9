//! Normalization of content payloads into UI-ready items.
//!
//! Search pages, person credits and list items all render as the same row:
//! a kind, a title, an optional subtitle and an optional poster. Conversion
//! to [`MediaItem`] happens once, when a payload is stored.

use crate::api::{
    CombinedCredits, ListItem, MediaType, MovieDetail, MovieResult, MultiResult, NewListItem,
    PersonDetail, PersonResult, SearchPage, TvDetail, TvResult,
};
use crate::utils::dates::{format_short_month_date, parse_date};
use std::cmp::Reverse;

const UNKNOWN_TITLE: &str = "Unknown title";
const UNKNOWN_NAME: &str = "Unknown name";

/// One renderable media reference.
///
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    /// Id of the stored list item, when the entry came from a list.
    pub db_id: Option<String>,
    pub tmdb_id: u64,
    pub media_type: MediaType,
    pub poster: Option<String>,
    pub title: String,
    pub subtitle: Option<String>,
}

impl MediaItem {
    /// Body for adding this entry to a list.
    ///
    pub fn to_new_list_item(&self) -> NewListItem {
        NewListItem {
            media_type: self.media_type,
            tmdb_id: self.tmdb_id,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            poster_url: self.poster.clone(),
        }
    }
}

impl From<&ListItem> for MediaItem {
    fn from(item: &ListItem) -> Self {
        MediaItem {
            db_id: Some(item.id.clone()),
            tmdb_id: item.tmdb_id,
            media_type: item.media_type,
            poster: item.poster_url.clone(),
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
        }
    }
}

fn title_or(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(title) if !title.is_empty() => title.clone(),
        _ => fallback.to_string(),
    }
}

pub fn format_movie(movie: &MovieResult) -> MediaItem {
    MediaItem {
        db_id: None,
        tmdb_id: movie.id,
        media_type: MediaType::Movie,
        poster: movie.poster_path.clone(),
        title: title_or(movie.title.as_ref(), UNKNOWN_TITLE),
        subtitle: format_short_month_date(movie.release_date.as_deref()),
    }
}

pub fn format_movie_detail(movie: &MovieDetail) -> MediaItem {
    MediaItem {
        db_id: None,
        tmdb_id: movie.id,
        media_type: MediaType::Movie,
        poster: movie.poster_path.clone(),
        title: title_or(movie.title.as_ref(), UNKNOWN_TITLE),
        subtitle: format_short_month_date(movie.release_date.as_deref()),
    }
}

pub fn format_tv(tv: &TvResult) -> MediaItem {
    MediaItem {
        db_id: None,
        tmdb_id: tv.id,
        media_type: MediaType::Tv,
        poster: tv.poster_path.clone(),
        title: title_or(tv.name.as_ref(), UNKNOWN_NAME),
        subtitle: format_short_month_date(tv.first_air_date.as_deref()),
    }
}

pub fn format_tv_detail(tv: &TvDetail) -> MediaItem {
    MediaItem {
        db_id: None,
        tmdb_id: tv.id,
        media_type: MediaType::Tv,
        poster: tv.poster_path.clone(),
        title: title_or(tv.name.as_ref(), UNKNOWN_NAME),
        subtitle: format_short_month_date(tv.first_air_date.as_deref()),
    }
}

pub fn format_person(person: &PersonResult) -> MediaItem {
    MediaItem {
        db_id: None,
        tmdb_id: person.id,
        media_type: MediaType::Person,
        poster: person.profile_path.clone(),
        title: title_or(person.name.as_ref(), UNKNOWN_NAME),
        subtitle: None,
    }
}

pub fn format_person_detail(person: &PersonDetail) -> MediaItem {
    MediaItem {
        db_id: None,
        tmdb_id: person.id,
        media_type: MediaType::Person,
        poster: person.profile_path.clone(),
        title: title_or(person.name.as_ref(), UNKNOWN_NAME),
        subtitle: None,
    }
}

pub fn format_multi(result: &MultiResult) -> MediaItem {
    match result {
        MultiResult::Movie(movie) => format_movie(movie),
        MultiResult::Tv(tv) => format_tv(tv),
        MultiResult::Person(person) => format_person(person),
    }
}

pub fn format_search_all(page: &SearchPage<MultiResult>) -> Vec<MediaItem> {
    page.results.iter().map(format_multi).collect()
}

pub fn format_search_movie(page: &SearchPage<MovieResult>) -> Vec<MediaItem> {
    page.results.iter().map(format_movie).collect()
}

pub fn format_search_tv(page: &SearchPage<TvResult>) -> Vec<MediaItem> {
    page.results.iter().map(format_tv).collect()
}

pub fn format_search_person(page: &SearchPage<PersonResult>) -> Vec<MediaItem> {
    page.results.iter().map(format_person).collect()
}

/// Acting credits of a person: dated movie and TV entries, newest first.
///
pub fn format_person_credits(credits: &CombinedCredits) -> Vec<MediaItem> {
    let mut dated: Vec<_> = credits
        .cast
        .iter()
        .filter_map(|credit| {
            let date = credit
                .release_date
                .as_deref()
                .and_then(parse_date)
                .or_else(|| credit.first_air_date.as_deref().and_then(parse_date))?;
            Some((date, credit))
        })
        .collect();
    dated.sort_by_key(|(date, _)| Reverse(*date));

    dated
        .into_iter()
        .filter_map(|(_, credit)| match credit.media_type.as_deref() {
            Some("movie") => Some(MediaItem {
                db_id: None,
                tmdb_id: credit.id,
                media_type: MediaType::Movie,
                poster: credit.poster_path.clone(),
                title: title_or(credit.title.as_ref(), UNKNOWN_TITLE),
                subtitle: format_short_month_date(credit.release_date.as_deref()),
            }),
            Some("tv") => Some(MediaItem {
                db_id: None,
                tmdb_id: credit.id,
                media_type: MediaType::Tv,
                poster: credit.poster_path.clone(),
                title: title_or(credit.name.as_ref(), UNKNOWN_NAME),
                subtitle: format_short_month_date(credit.first_air_date.as_deref()),
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CombinedCredit;

    fn credit(id: u64, media_type: &str, date: Option<&str>) -> CombinedCredit {
        CombinedCredit {
            id,
            media_type: Some(media_type.to_string()),
            title: Some(format!("Movie {}", id)),
            name: Some(format!("Show {}", id)),
            release_date: if media_type == "movie" { date.map(str::to_string) } else { None },
            first_air_date: if media_type == "tv" { date.map(str::to_string) } else { None },
            poster_path: None,
            character: None,
        }
    }

    #[test]
    fn movie_falls_back_to_unknown_title() {
        let movie = MovieResult {
            id: 1,
            title: Some(String::new()),
            release_date: Some("1999-03-31".to_string()),
            poster_path: Some("/m.jpg".to_string()),
            overview: None,
            vote_average: None,
        };
        let item = format_movie(&movie);
        assert_eq!(item.title, "Unknown title");
        assert_eq!(item.subtitle.as_deref(), Some("31st Mar 1999"));
        assert_eq!(item.poster.as_deref(), Some("/m.jpg"));
        assert_eq!(item.media_type, MediaType::Movie);
    }

    #[test]
    fn person_has_no_subtitle() {
        let person = PersonResult {
            id: 7,
            name: None,
            profile_path: None,
            known_for_department: Some("Acting".to_string()),
        };
        let item = format_person(&person);
        assert_eq!(item.title, "Unknown name");
        assert_eq!(item.subtitle, None);
    }

    #[test]
    fn person_credits_newest_first_dated_only() {
        let credits = CombinedCredits {
            cast: vec![
                credit(1, "movie", Some("1999-03-31")),
                credit(2, "tv", Some("2011-04-17")),
                credit(3, "movie", None),
                credit(4, "person", Some("2020-01-01")),
                credit(5, "movie", Some("2003-05-15")),
            ],
        };
        let items = format_person_credits(&credits);
        let ids: Vec<u64> = items.iter().map(|item| item.tmdb_id).collect();
        assert_eq!(ids, vec![2, 5, 1]);
        assert_eq!(items[0].media_type, MediaType::Tv);
        assert_eq!(items[0].title, "Show 2");
    }

    #[test]
    fn list_item_keeps_database_id() {
        let item = ListItem {
            id: "i1".to_string(),
            list_id: "l1".to_string(),
            media_type: MediaType::Tv,
            tmdb_id: 1399,
            title: "Game of Thrones".to_string(),
            subtitle: None,
            poster_url: None,
        };
        let media = MediaItem::from(&item);
        assert_eq!(media.db_id.as_deref(), Some("i1"));
        assert_eq!(media.to_new_list_item().tmdb_id, 1399);
    }
}
