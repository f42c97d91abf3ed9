mod client;
mod content;
mod error;
mod resource;

pub use content::*;
pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;
use serde_json::json;

/// Default location of the lists/auth and content API.
///
pub const DEFAULT_API_URL: &str = "https://movies-api.chapmanio.dev/api";

pub type ApiResult<T> = Result<T, ApiError>;

/// Responsible for asynchronous interaction with the lists/auth API and the
/// content API, one method per endpoint.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> ApiResult<Api> {
        debug!("Initializing API client for {}...", base_url);
        Ok(Api {
            client: Client::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }

    // Auth

    /// Returns the identity of the current session.
    ///
    pub async fn auth_user(&self) -> ApiResult<AuthUser> {
        debug!("Requesting authenticated user details...");
        self.client.get("/auth").await
    }

    pub async fn register(&self, params: &AccountParams) -> ApiResult<User> {
        debug!("Registering account for {}...", params.email);
        self.client.post("/auth/register", Some(params)).await
    }

    pub async fn sign_in(&self, params: &SignInParams) -> ApiResult<User> {
        debug!("Signing in as {}...", params.email);
        self.client.post("/auth/sign-in", Some(params)).await
    }

    pub async fn sign_out(&self) -> ApiResult<()> {
        debug!("Signing out...");
        self.client
            .raw(Method::POST, "/auth/sign-out", None::<&()>)
            .await?;
        Ok(())
    }

    /// Update the account identified by `email`, which is the address the
    /// account currently holds.
    ///
    pub async fn update_user(&self, email: &str, params: &AccountParams) -> ApiResult<User> {
        debug!("Updating account {}...", email);
        self.client
            .post(&format!("/auth/account/{}", email), Some(params))
            .await
    }

    pub async fn delete_user(&self, email: &str) -> ApiResult<()> {
        debug!("Deleting account {}...", email);
        self.client
            .raw(Method::POST, &format!("/auth/delete/{}", email), None::<&()>)
            .await?;
        Ok(())
    }

    // Lists

    /// Returns every list owned by the viewer, items included.
    ///
    pub async fn all_lists(&self) -> ApiResult<Vec<List>> {
        debug!("Requesting lists...");
        self.client.get("/list").await
    }

    pub async fn list(&self, slug: &str) -> ApiResult<List> {
        debug!("Requesting list {}...", slug);
        self.client.get(&format!("/list/{}", slug)).await
    }

    pub async fn add_list(&self, name: &str) -> ApiResult<List> {
        debug!("Creating list '{}'...", name);
        self.client.post("/list", Some(&json!({ "name": name }))).await
    }

    pub async fn update_list(&self, slug: &str, name: &str) -> ApiResult<List> {
        debug!("Renaming list {} to '{}'...", slug, name);
        self.client
            .post(&format!("/list/{}", slug), Some(&json!({ "name": name })))
            .await
    }

    pub async fn delete_list(&self, slug: &str) -> ApiResult<()> {
        debug!("Deleting list {}...", slug);
        self.client
            .raw(Method::POST, &format!("/list/delete/{}", slug), None::<&()>)
            .await?;
        Ok(())
    }

    pub async fn add_list_item(&self, list_slug: &str, item: &NewListItem) -> ApiResult<ListItem> {
        debug!("Adding '{}' to list {}...", item.title, list_slug);
        self.client
            .post(&format!("/list-item/{}", list_slug), Some(item))
            .await
    }

    pub async fn delete_list_item(&self, list_slug: &str, list_item_id: &str) -> ApiResult<()> {
        debug!("Removing item {} from list {}...", list_item_id, list_slug);
        self.client
            .raw(
                Method::POST,
                &format!("/list-item/{}/delete/{}", list_slug, list_item_id),
                None::<&()>,
            )
            .await?;
        Ok(())
    }

    // Content

    pub async fn trending(&self) -> ApiResult<SearchPage<MultiResult>> {
        debug!("Requesting trending titles...");
        self.client.get("/trending").await
    }

    pub async fn search_all(&self, query: &str, page: u32) -> ApiResult<SearchPage<MultiResult>> {
        debug!("Searching everything for '{}' (page {})...", query, page);
        self.client
            .get_with_query("/search", &search_params(query, page))
            .await
    }

    pub async fn search_movie(&self, query: &str, page: u32) -> ApiResult<SearchPage<MovieResult>> {
        debug!("Searching movies for '{}' (page {})...", query, page);
        self.client
            .get_with_query("/movie/search", &search_params(query, page))
            .await
    }

    pub async fn search_tv(&self, query: &str, page: u32) -> ApiResult<SearchPage<TvResult>> {
        debug!("Searching TV shows for '{}' (page {})...", query, page);
        self.client
            .get_with_query("/tv/search", &search_params(query, page))
            .await
    }

    pub async fn search_person(
        &self,
        query: &str,
        page: u32,
    ) -> ApiResult<SearchPage<PersonResult>> {
        debug!("Searching people for '{}' (page {})...", query, page);
        self.client
            .get_with_query("/person/search", &search_params(query, page))
            .await
    }

    pub async fn movie(&self, id: u64) -> ApiResult<MovieDetail> {
        debug!("Requesting movie {}...", id);
        self.client.get(&format!("/movie/{}", id)).await
    }

    pub async fn movie_credits(&self, id: u64) -> ApiResult<Credits> {
        self.client.get(&format!("/movie/{}/credits", id)).await
    }

    pub async fn tv(&self, id: u64) -> ApiResult<TvDetail> {
        debug!("Requesting TV show {}...", id);
        self.client.get(&format!("/tv/{}", id)).await
    }

    pub async fn tv_credits(&self, id: u64) -> ApiResult<Credits> {
        self.client.get(&format!("/tv/{}/credits", id)).await
    }

    pub async fn person(&self, id: u64) -> ApiResult<PersonDetail> {
        debug!("Requesting person {}...", id);
        self.client.get(&format!("/person/{}", id)).await
    }

    pub async fn person_credits(&self, id: u64) -> ApiResult<CombinedCredits> {
        self.client.get(&format!("/person/{}/credits", id)).await
    }
}

fn search_params(query: &str, page: u32) -> [(&'static str, String); 2] {
    [("query", query.to_owned()), ("page", page.to_string())]
}
