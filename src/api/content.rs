//! Content API payloads.
//!
//! These mirror the provider-shaped JSON of the movie database proxy. Only
//! the fields the client reads are declared; everything is optional where
//! the provider omits values.

use serde::{de, Deserialize, Deserializer};

/// One page of search or trending results.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchPage<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn first_page() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MovieResult {
    pub id: u64,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TvResult {
    pub id: u64,
    pub name: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PersonResult {
    pub id: u64,
    pub name: Option<String>,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
}

/// Entry of a combined (multi) search or trending page.
///
/// Results are told apart by `media_type`; person results of the person
/// endpoints come without it, so anything untagged is read as a person.
///
#[derive(Clone, Debug, PartialEq)]
pub enum MultiResult {
    Movie(MovieResult),
    Tv(TvResult),
    Person(PersonResult),
}

impl<'de> Deserialize<'de> for MultiResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let media_type = value
            .get("media_type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        match media_type.as_deref() {
            Some("movie") => serde_json::from_value(value)
                .map(MultiResult::Movie)
                .map_err(de::Error::custom),
            Some("tv") => serde_json::from_value(value)
                .map(MultiResult::Tv)
                .map_err(de::Error::custom),
            _ => serde_json::from_value(value)
                .map(MultiResult::Person)
                .map_err(de::Error::custom),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TvDetail {
    pub id: u64,
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PersonDetail {
    pub id: u64,
    pub name: Option<String>,
    pub biography: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub place_of_birth: Option<String>,
    pub known_for_department: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: Option<String>,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: Option<String>,
    pub job: Option<String>,
    pub department: Option<String>,
}

/// Cast and crew of a movie or TV show.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// One acting credit of a person, either a movie or a TV show.
///
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CombinedCredit {
    pub id: u64,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub character: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CombinedCredits {
    #[serde(default)]
    pub cast: Vec<CombinedCredit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multi_results_by_media_type() {
        let page: SearchPage<MultiResult> = serde_json::from_value(json!({
            "page": 1,
            "total_pages": 3,
            "total_results": 55,
            "results": [
                { "id": 1, "media_type": "movie", "title": "Batman" },
                { "id": 2, "media_type": "tv", "name": "Batman: The Animated Series" },
                { "id": 3, "media_type": "person", "name": "Adam West" },
                { "id": 4, "name": "Michael Keaton" }
            ]
        }))
        .unwrap();

        assert_eq!(page.total_pages, 3);
        assert!(matches!(page.results[0], MultiResult::Movie(ref m) if m.id == 1));
        assert!(matches!(page.results[1], MultiResult::Tv(ref t) if t.id == 2));
        assert!(matches!(page.results[2], MultiResult::Person(ref p) if p.id == 3));
        assert!(matches!(page.results[3], MultiResult::Person(ref p) if p.id == 4));
    }

    #[test]
    fn search_page_defaults() {
        let page: SearchPage<MovieResult> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page.page, 1);
        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 0);
    }
}
