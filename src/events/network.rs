use crate::api::{
    AccountParams, Api, ApiError, AuthUser, NewListItem, SignInParams,
};
use crate::search::{SearchPayload, SearchRequest};
use crate::state::{CreditsData, DetailData, DetailTarget, RequestToken, State};
use crate::utils::format::format_person_credits;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    CheckIdentity,
    Search {
        token: RequestToken,
        request: SearchRequest,
    },
    LoadDetail {
        token: RequestToken,
        target: DetailTarget,
    },
    LoadLists {
        token: RequestToken,
    },
    AddToList {
        token: RequestToken,
        list_id: String,
        list_slug: String,
        item: NewListItem,
    },
    CreateListWithItem {
        token: RequestToken,
        name: String,
        item: NewListItem,
    },
    RemoveFromList {
        token: RequestToken,
        list_id: String,
        list_slug: String,
        item_id: String,
    },
    CreateList {
        name: String,
    },
    RenameList {
        id: String,
        slug: String,
        name: String,
    },
    DeleteList {
        id: String,
        slug: String,
    },
    SignIn(SignInParams),
    Register(AccountParams),
    SignOut,
    UpdateAccount {
        email: String,
        params: AccountParams,
    },
    DeleteAccount {
        email: String,
    },
}

/// Specify struct for applying API results to state.
///
/// The handler is cheap to clone so each event can run on its own task;
/// a slow request never holds up a newer one.
///
#[derive(Clone)]
pub struct Handler {
    state: Arc<Mutex<State>>,
    api: Arc<Api>,
}

impl Handler {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: Arc<Mutex<State>>, api: Arc<Api>) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::CheckIdentity => self.check_identity().await?,
            Event::Search { token, request } => self.search(token, request).await?,
            Event::LoadDetail { token, target } => self.load_detail(token, target).await?,
            Event::LoadLists { token } => self.load_lists(token).await?,
            Event::AddToList {
                token,
                list_id,
                list_slug,
                item,
            } => self.add_to_list(token, list_id, list_slug, item).await?,
            Event::CreateListWithItem { token, name, item } => {
                self.create_list_with_item(token, name, item).await?
            }
            Event::RemoveFromList {
                token,
                list_id,
                list_slug,
                item_id,
            } => {
                self.remove_from_list(token, list_id, list_slug, item_id)
                    .await?
            }
            Event::CreateList { name } => self.create_list(name).await?,
            Event::RenameList { id, slug, name } => self.rename_list(id, slug, name).await?,
            Event::DeleteList { id, slug } => self.delete_list(id, slug).await?,
            Event::SignIn(params) => self.sign_in(params).await?,
            Event::Register(params) => self.register(params).await?,
            Event::SignOut => self.sign_out().await?,
            Event::UpdateAccount { email, params } => self.update_account(email, params).await?,
            Event::DeleteAccount { email } => self.delete_account(email).await?,
        }
        Ok(())
    }

    /// Resolve who the viewer is.
    ///
    async fn check_identity(&self) -> Result<()> {
        info!("Checking session identity...");
        let result = self.api.auth_user().await;
        if let Ok(AuthUser::Authenticated(user)) = &result {
            info!("Signed in as {}.", user.email);
        }
        let mut state = self.state.lock().await;
        state.complete_identity(result)?;
        Ok(())
    }

    async fn search(&self, token: RequestToken, request: SearchRequest) -> Result<()> {
        let result = match request {
            SearchRequest::Trending => self.api.trending().await.map(SearchPayload::Multi),
            SearchRequest::All { query, page } => self
                .api
                .search_all(&query, page)
                .await
                .map(SearchPayload::Multi),
            SearchRequest::Movie { query, page } => self
                .api
                .search_movie(&query, page)
                .await
                .map(SearchPayload::Movie),
            SearchRequest::Tv { query, page } => {
                self.api.search_tv(&query, page).await.map(SearchPayload::Tv)
            }
            SearchRequest::Person { query, page } => self
                .api
                .search_person(&query, page)
                .await
                .map(SearchPayload::Person),
        };
        let mut state = self.state.lock().await;
        state.complete_search(token, result);
        Ok(())
    }

    /// Fetch the record, then its credits once the record resolved.
    ///
    async fn load_detail(&self, token: RequestToken, target: DetailTarget) -> Result<()> {
        let detail = match target {
            DetailTarget::Movie(id) => self.api.movie(id).await.map(DetailData::Movie),
            DetailTarget::Tv(id) => self.api.tv(id).await.map(DetailData::Tv),
            DetailTarget::Person(id) => self.api.person(id).await.map(DetailData::Person),
        };
        let resolved = detail.is_ok();
        {
            let mut state = self.state.lock().await;
            if !state.complete_detail(token, detail) || !resolved {
                return Ok(());
            }
        }

        let credits = match target {
            DetailTarget::Movie(id) => self.api.movie_credits(id).await.map(CreditsData::Cast),
            DetailTarget::Tv(id) => self.api.tv_credits(id).await.map(CreditsData::Cast),
            DetailTarget::Person(id) => self
                .api
                .person_credits(id)
                .await
                .map(|credits| CreditsData::Filmography(format_person_credits(&credits))),
        };
        let mut state = self.state.lock().await;
        state.complete_credits(token, credits);
        Ok(())
    }

    async fn load_lists(&self, token: RequestToken) -> Result<()> {
        info!("Fetching lists...");
        let result = self.api.all_lists().await;
        let mut state = self.state.lock().await;
        state.complete_lists(token, result)?;
        Ok(())
    }

    async fn add_to_list(
        &self,
        token: RequestToken,
        list_id: String,
        list_slug: String,
        item: NewListItem,
    ) -> Result<()> {
        let result = self.api.add_list_item(&list_slug, &item).await;
        let mut state = self.state.lock().await;
        state.complete_add_to_list(token, &list_id, result)?;
        Ok(())
    }

    /// Create the viewer's first list, then add the item to it.
    ///
    async fn create_list_with_item(
        &self,
        token: RequestToken,
        name: String,
        item: NewListItem,
    ) -> Result<()> {
        let result = self.api.add_list(&name).await;
        let list = {
            let mut state = self.state.lock().await;
            match state.complete_modal_list_created(token, result)? {
                Some(list) => list,
                None => return Ok(()),
            }
        };
        self.add_to_list(token, list.id, list.slug, item).await
    }

    async fn remove_from_list(
        &self,
        token: RequestToken,
        list_id: String,
        list_slug: String,
        item_id: String,
    ) -> Result<()> {
        let result = self.api.delete_list_item(&list_slug, &item_id).await;
        let mut state = self.state.lock().await;
        state.complete_remove_from_list(token, &list_id, &item_id, result)?;
        Ok(())
    }

    async fn create_list(&self, name: String) -> Result<()> {
        let result = self.api.add_list(&name).await;
        let mut state = self.state.lock().await;
        state.complete_list_created(result)?;
        Ok(())
    }

    async fn rename_list(&self, id: String, slug: String, name: String) -> Result<()> {
        let result = self.api.update_list(&slug, &name).await;
        let mut state = self.state.lock().await;
        state.complete_list_renamed(&id, result)?;
        Ok(())
    }

    async fn delete_list(&self, id: String, slug: String) -> Result<()> {
        let result = self.api.delete_list(&slug).await;
        let mut state = self.state.lock().await;
        state.complete_list_deleted(&id, result)?;
        Ok(())
    }

    async fn sign_in(&self, params: SignInParams) -> Result<()> {
        let result = self.api.sign_in(&params).await;
        let mut state = self.state.lock().await;
        state.complete_authentication(result)?;
        Ok(())
    }

    async fn register(&self, params: AccountParams) -> Result<()> {
        let result = self.api.register(&params).await;
        let mut state = self.state.lock().await;
        state.complete_authentication(result)?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<()> {
        let result = self.api.sign_out().await;
        let mut state = self.state.lock().await;
        state.complete_sign_out(result)?;
        Ok(())
    }

    async fn update_account(&self, email: String, params: AccountParams) -> Result<()> {
        let result = self.api.update_user(&email, &params).await;
        let mut state = self.state.lock().await;
        state.complete_account_update(result)?;
        Ok(())
    }

    async fn delete_account(&self, email: String) -> Result<()> {
        let result: Result<(), ApiError> = self.api.delete_user(&email).await;
        let mut state = self.state.lock().await;
        state.complete_account_delete(result)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AuthenticatedUser, List, MediaType};
    use crate::search::SearchRequest;
    use crate::store::{AuthStore, ListModalStore, ListStore};
    use crate::ui::Theme;
    use crate::utils::MediaItem;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;
    use std::sync::mpsc::{channel, Receiver};

    fn handler_for(server: &MockServer) -> (Handler, Arc<Mutex<State>>, Receiver<Event>) {
        let (tx, rx) = channel();
        let state = Arc::new(Mutex::new(State::new(
            tx,
            Theme::default(),
            AuthStore::default(),
            ListStore::default(),
            ListModalStore::default(),
        )));
        let api = Api::new(&server.base_url()).unwrap();
        (Handler::new(Arc::clone(&state), Arc::new(api)), state, rx)
    }

    fn movie_page(title: &str) -> serde_json::Value {
        json!({
            "page": 1,
            "total_pages": 1,
            "total_results": 1,
            "results": [{ "id": 348, "media_type": "movie", "title": title }]
        })
    }

    #[tokio::test]
    async fn check_identity_signs_viewer_in() -> Result<()> {
        let user: AuthenticatedUser = Faker.fake();
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/auth");
                then.status(200).json_body(json!({
                    "auth": true,
                    "user": { "id": user.id, "name": user.name, "email": user.email }
                }));
            })
            .await;

        let (handler, state, rx) = handler_for(&server);
        state.lock().await.check_identity()?;
        let event = rx.try_recv()?;
        assert_eq!(event, Event::CheckIdentity);
        handler.handle(event).await?;

        let state = state.lock().await;
        assert_eq!(state.viewer(), Some(&user));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn stale_search_response_is_discarded() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/trending");
                then.status(200).json_body(movie_page("Trending Movie"));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/search")
                    .query_param("query", "alien")
                    .query_param("page", "1");
                then.status(200).json_body(movie_page("Alien"));
            })
            .await;

        let (handler, state, rx) = handler_for(&server);
        {
            let mut state = state.lock().await;
            state.refresh_search();
            state.search_input_mut().insert_str("alien");
            state.submit_search();
        }
        let events: Vec<Event> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[1],
            Event::Search { request: SearchRequest::All { .. }, .. }
        ));

        // The newer search answers first; the trending response arrives late.
        handler.handle(events[1].clone()).await?;
        handler.handle(events[0].clone()).await?;

        let state = state.lock().await;
        let items = state.search_results().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Alien");
        Ok(())
    }

    #[tokio::test]
    async fn movie_detail_loads_credits_after_record() -> Result<()> {
        let server = MockServer::start();
        let detail_mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/movie/603");
                then.status(200)
                    .json_body(json!({ "id": 603, "title": "The Matrix", "runtime": 136 }));
            })
            .await;
        let credits_mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/movie/603/credits");
                then.status(200).json_body(json!({
                    "cast": [{ "id": 6384, "name": "Keanu Reeves", "character": "Neo" }]
                }));
            })
            .await;

        let (handler, state, rx) = handler_for(&server);
        state.lock().await.open_detail(DetailTarget::Movie(603));
        handler.handle(rx.try_recv()?).await?;

        let state = state.lock().await;
        let detail = state.detail().unwrap();
        assert!(detail.detail().is_resolved());
        assert_eq!(detail.credits().data().map(CreditsData::len), Some(1));
        assert_eq!(detail.selected_target(), Some(DetailTarget::Person(6384)));
        detail_mock.assert_async().await;
        credits_mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn failed_detail_skips_credits() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/tv/1399");
                then.status(404).body("Not found");
            })
            .await;
        let credits_mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/tv/1399/credits");
                then.status(200).json_body(json!({ "cast": [] }));
            })
            .await;

        let (handler, state, rx) = handler_for(&server);
        state.lock().await.open_detail(DetailTarget::Tv(1399));
        handler.handle(rx.try_recv()?).await?;

        let state = state.lock().await;
        assert!(state.detail().unwrap().detail().error().is_some());
        credits_mock.assert_hits_async(0).await;
        Ok(())
    }

    #[tokio::test]
    async fn create_list_with_item_adds_item_to_new_list() -> Result<()> {
        let list = List {
            id: "l1".to_string(),
            name: "Watch later".to_string(),
            slug: "watch-later".to_string(),
            items: None,
            ..Faker.fake::<List>()
        };
        let server = MockServer::start();
        let create_mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/list")
                    .json_body(json!({ "name": "Watch later" }));
                then.status(200).json_body(json!({
                    "id": list.id,
                    "userId": list.user_id,
                    "createdAt": list.created_at,
                    "updatedAt": list.updated_at,
                    "name": list.name,
                    "slug": list.slug,
                }));
            })
            .await;
        let add_mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/list-item/watch-later");
                then.status(200).json_body(json!({
                    "id": "i1",
                    "listId": "l1",
                    "mediaType": "MOVIE",
                    "tmdbId": 603,
                    "title": "The Matrix"
                }));
            })
            .await;

        let (handler, state, rx) = handler_for(&server);
        let event = {
            let mut state = state.lock().await;
            state.complete_identity(Ok(AuthUser::Authenticated(Faker.fake())))?;
            state.request_lists();
            let token = match rx.try_recv()? {
                Event::LoadLists { token } => token,
                other => panic!("expected lists load, got {:?}", other),
            };
            assert!(state.complete_lists(token, Ok(vec![]))?);

            state.show_add_modal(MediaItem {
                db_id: None,
                tmdb_id: 603,
                media_type: MediaType::Movie,
                poster: None,
                title: "The Matrix".to_string(),
                subtitle: None,
            })?;
            state.modal_form_mut().new_list_name.insert_str("Watch later");
            state.submit_modal()?;
            rx.try_recv()?
        };
        assert!(matches!(event, Event::CreateListWithItem { .. }));
        handler.handle(event).await?;

        let state = state.lock().await;
        let stored = state.lists().find("l1").unwrap();
        assert_eq!(stored.items.as_ref().map(Vec::len), Some(1));
        assert!(!state.list_modal().visible);
        create_mock.assert_async().await;
        add_mock.assert_async().await;
        Ok(())
    }
}
