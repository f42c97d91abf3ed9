use crate::api::{ApiError, AuthUser, AuthenticatedUser, List, ListItem, User};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::search::pagination::{next_page, previous_page};
use crate::search::{QueryParams, SearchPayload, SearchResults, SearchViewState};
use crate::store::{
    ApiResponse, AuthAction, AuthStore, ListAction, ListModalAction, ListModalState,
    ListState, ListStore, ListModalStore, ModalTarget, StoreError,
};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use crate::utils::MediaItem;
use log::*;
use ratatui::layout::Rect;
use tui_textarea::TextArea;

use super::detail::{CreditsData, DetailData, DetailState, DetailTarget};
use super::form::{input_text, AuthForm, FormKind, ListForm, ListFormMode};
use super::modal::ListModalForm;
use super::navigation::{Focus, ListsPanel, View};
use super::notification::Notification;
use super::request::{RequestToken, RequestTracker};

/// Maximum number of log lines kept for the log panel.
///
const LOG_CAPACITY: usize = 500;

const LIST_NAME_TAKEN: &str = "A list with this name already exists";

/// Houses data representative of application state.
///
/// The auth, list and list-modal stores are owned here and only changed
/// through their `dispatch`. Everything else is view state of the screens.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    auth: AuthStore,
    lists: ListStore,
    list_modal: ListModalStore,
    theme: Theme,
    terminal_size: Rect,
    spinner_index: usize,
    view_stack: Vec<View>,
    // Search
    query_params: QueryParams,
    search_input: TextArea<'static>,
    focus: Focus,
    search_results: SearchResults,
    results_index: usize,
    // Detail
    detail: Option<DetailState>,
    // Lists
    lists_request: RequestTracker,
    lists_panel: ListsPanel,
    lists_index: usize,
    items_index: usize,
    list_form: Option<ListForm>,
    list_delete_confirmation: Option<String>,
    lists_error: Option<String>,
    // List modal
    modal_form: ListModalForm,
    modal_request: RequestTracker,
    // Sign in, register, account
    auth_form: Option<AuthForm>,
    notification: Option<Notification>,
    log_visible: bool,
    log_entries: Vec<String>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            auth: AuthStore::default(),
            lists: ListStore::default(),
            list_modal: ListModalStore::default(),
            theme: Theme::default(),
            terminal_size: Rect::default(),
            spinner_index: 0,
            view_stack: vec![View::Search],
            query_params: QueryParams::new(),
            search_input: TextArea::default(),
            focus: Focus::Results,
            search_results: SearchResults::default(),
            results_index: 0,
            detail: None,
            lists_request: RequestTracker::default(),
            lists_panel: ListsPanel::Lists,
            lists_index: 0,
            items_index: 0,
            list_form: None,
            list_delete_confirmation: None,
            lists_error: None,
            modal_form: ListModalForm::default(),
            modal_request: RequestTracker::default(),
            auth_form: None,
            notification: None,
            log_visible: false,
            log_entries: vec![],
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        theme: Theme,
        auth: AuthStore,
        lists: ListStore,
        list_modal: ListModalStore,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            auth,
            lists,
            list_modal,
            ..State::default()
        }
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn auth(&self) -> &ApiResponse<AuthUser> {
        self.auth.state()
    }

    pub fn lists(&self) -> &ListState {
        self.lists.state()
    }

    pub fn list_modal(&self) -> &ListModalState {
        self.list_modal.state()
    }

    /// Returns the signed-in viewer.
    ///
    pub fn viewer(&self) -> Option<&AuthenticatedUser> {
        self.auth.state().data().and_then(AuthUser::user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.viewer().is_some()
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Advance the spinner and count down the notification.
    ///
    pub fn tick(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        if let Some(notification) = self.notification.as_mut() {
            if !notification.tick() {
                self.notification = None;
            }
        }
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    // Views

    /// Return the current view.
    ///
    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::Search)
    }

    /// Push a view unless it is already showing.
    ///
    pub fn push_view(&mut self, view: View) -> &mut Self {
        if self.current_view() != &view {
            self.view_stack.push(view);
        }
        self
    }

    /// Leave the current view. The search view is never popped.
    ///
    pub fn pop_view(&mut self) -> Option<View> {
        if self.view_stack.len() <= 1 {
            return None;
        }
        let popped = self.view_stack.pop();
        if matches!(popped, Some(View::Detail(_))) {
            if let Some(detail) = self.detail.as_mut() {
                detail.cancel();
            }
        }
        if let View::Detail(target) = *self.current_view() {
            self.load_detail(target);
        }
        self.enforce_view_access();
        popped
    }

    pub fn view_stack_len(&self) -> usize {
        self.view_stack.len()
    }

    /// Close the topmost layer: the modal, a pending confirmation, an open
    /// form, then the view itself.
    ///
    pub fn go_back(&mut self) -> Result<(), StoreError> {
        if self.list_modal.state().visible {
            return self.hide_modal();
        }
        if self.list_form.take().is_some() || self.list_delete_confirmation.take().is_some() {
            return Ok(());
        }
        if let Some(form) = self.auth_form.as_mut() {
            if form.confirm_delete {
                form.confirm_delete = false;
                return Ok(());
            }
        }
        self.pop_view();
        Ok(())
    }

    /// Back to the search view, dropping every view above it.
    ///
    pub fn open_search(&mut self) -> &mut Self {
        self.view_stack.truncate(1);
        if let Some(detail) = self.detail.as_mut() {
            detail.cancel();
        }
        self.auth_form = None;
        self
    }

    pub fn open_lists(&mut self) -> &mut Self {
        self.push_view(View::Lists);
        self.lists_error = None;
        self.enforce_view_access();
        self.request_lists();
        if let Some(index) = self.lists.state().selected_id.as_deref().and_then(|id| {
            self.lists
                .state()
                .loaded()?
                .iter()
                .position(|list| list.id == id)
        }) {
            self.lists_index = index;
        }
        self.clamp_lists_selection();
        self
    }

    pub fn open_account(&mut self) -> &mut Self {
        self.push_view(View::Account);
        self.auth_form = self.viewer().map(AuthForm::account);
        self.enforce_view_access();
        self
    }

    pub fn open_sign_in(&mut self) -> &mut Self {
        self.open_auth_view(FormKind::SignIn)
    }

    pub fn open_register(&mut self) -> &mut Self {
        self.open_auth_view(FormKind::Register)
    }

    fn open_auth_view(&mut self, kind: FormKind) -> &mut Self {
        if matches!(self.current_view(), View::SignIn | View::Register) {
            self.view_stack.pop();
        }
        self.view_stack.push(match kind {
            FormKind::Register => View::Register,
            _ => View::SignIn,
        });
        self.auth_form = Some(AuthForm::new(kind));
        self.enforce_view_access();
        self
    }

    /// Keep signed-out viewers off restricted views and signed-in viewers
    /// off sign in and register. Nothing happens while auth is unresolved.
    ///
    pub fn enforce_view_access(&mut self) -> &mut Self {
        let authenticated = match self.auth.state() {
            ApiResponse::Resolved(user) => user.is_authenticated(),
            _ => return self,
        };
        let view = self.current_view().clone();
        if view.requires_auth() && !authenticated {
            debug!("Redirecting signed-out viewer from {:?} to sign in", view);
            self.view_stack.retain(|view| !view.requires_auth());
            self.view_stack.push(View::SignIn);
            self.auth_form = Some(AuthForm::new(FormKind::SignIn));
        } else if view.guest_only() && authenticated {
            self.view_stack.retain(|view| !view.guest_only());
            if self.view_stack.is_empty() {
                self.view_stack.push(View::Search);
            }
            self.auth_form = None;
        }
        self
    }

    // Identity

    /// Issue the identity check.
    ///
    pub fn check_identity(&mut self) -> Result<(), StoreError> {
        self.auth.dispatch(AuthAction::Loading)?;
        self.dispatch(NetworkEvent::CheckIdentity);
        Ok(())
    }

    pub fn complete_identity(&mut self, result: Result<AuthUser, ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(user) => self.auth.dispatch(AuthAction::SetUser(user))?,
            Err(error) => {
                error!("Identity check failed: {}", error);
                self.auth.dispatch(AuthAction::Error(Some(error)))?
            }
        }
        self.enforce_view_access();
        if self.current_view() == &View::Lists {
            self.request_lists();
        }
        Ok(())
    }

    // Search

    pub fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    pub fn search_view(&self) -> SearchViewState {
        SearchViewState::derive(&self.query_params)
    }

    pub fn search_results(&self) -> &SearchResults {
        &self.search_results
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_search_input(&mut self) -> &mut Self {
        self.focus = Focus::SearchInput;
        self
    }

    pub fn focus_results(&mut self) -> &mut Self {
        self.focus = Focus::Results;
        self
    }

    pub fn search_input(&self) -> &TextArea<'static> {
        &self.search_input
    }

    pub fn search_input_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_input
    }

    /// Issue a search if the derived view state changed.
    ///
    pub fn refresh_search(&mut self) -> &mut Self {
        let view = self.search_view();
        if let Some((token, request)) = self.search_results.begin(&view) {
            self.results_index = 0;
            self.dispatch(NetworkEvent::Search { token, request });
        }
        self
    }

    /// Search for the input text from the first page.
    ///
    pub fn submit_search(&mut self) -> &mut Self {
        let query = input_text(&self.search_input);
        self.query_params.submit_search(query.trim());
        self.focus = Focus::Results;
        self.refresh_search()
    }

    pub fn next_tab(&mut self) -> &mut Self {
        let tab = self.search_view().tab.next();
        self.query_params.change_tab(tab);
        self.refresh_search()
    }

    pub fn previous_tab(&mut self) -> &mut Self {
        let tab = self.search_view().tab.previous();
        self.query_params.change_tab(tab);
        self.refresh_search()
    }

    pub fn next_page(&mut self) -> &mut Self {
        let view = self.search_view();
        if let Some(page) = next_page(view.page, self.search_results.total_pages()) {
            self.query_params.change_page(page);
            self.refresh_search();
        }
        self
    }

    pub fn previous_page(&mut self) -> &mut Self {
        if let Some(page) = previous_page(self.search_view().page) {
            self.query_params.change_page(page);
            self.refresh_search();
        }
        self
    }

    /// Go to `page`, kept within the known page count.
    ///
    pub fn set_page(&mut self, page: u32) -> &mut Self {
        let total = self.search_results.total_pages().max(1);
        self.query_params.change_page(page.clamp(1, total));
        self.refresh_search()
    }

    pub fn complete_search(&mut self, token: RequestToken, result: Result<SearchPayload, ApiError>) -> bool {
        if let Err(error) = &result {
            warn!("Search failed: {}", error);
        }
        let applied = self.search_results.apply(token, result);
        if applied {
            self.results_index = 0;
        }
        applied
    }

    pub fn results_index(&self) -> usize {
        self.results_index
    }

    pub fn next_result(&mut self) -> &mut Self {
        if self.results_index + 1 < self.search_results.items().len() {
            self.results_index += 1;
        }
        self
    }

    pub fn previous_result(&mut self) -> &mut Self {
        self.results_index = self.results_index.saturating_sub(1);
        self
    }

    pub fn selected_result(&self) -> Option<&MediaItem> {
        self.search_results.item(self.results_index)
    }

    pub fn open_selected_result(&mut self) -> &mut Self {
        if let Some(target) = self.selected_result().map(DetailTarget::from) {
            self.open_detail(target);
        }
        self
    }

    pub fn add_selected_result_to_list(&mut self) -> Result<(), StoreError> {
        match self.selected_result().cloned() {
            Some(item) => self.show_add_modal(item),
            None => Ok(()),
        }
    }

    // Detail

    pub fn detail(&self) -> Option<&DetailState> {
        self.detail.as_ref()
    }

    pub fn open_detail(&mut self, target: DetailTarget) -> &mut Self {
        self.view_stack.push(View::Detail(target));
        self.load_detail(target)
    }

    fn load_detail(&mut self, target: DetailTarget) -> &mut Self {
        let token = match self.detail.as_mut() {
            Some(detail) => detail.reopen(target),
            None => {
                let detail = DetailState::open(target);
                let token = detail.token();
                self.detail = Some(detail);
                token
            }
        };
        self.dispatch(NetworkEvent::LoadDetail { token, target });
        self
    }

    pub fn complete_detail(&mut self, token: RequestToken, result: Result<DetailData, ApiError>) -> bool {
        match self.detail.as_mut() {
            Some(detail) => detail.apply_detail(token, result),
            None => false,
        }
    }

    pub fn complete_credits(&mut self, token: RequestToken, result: Result<CreditsData, ApiError>) -> bool {
        match self.detail.as_mut() {
            Some(detail) => detail.apply_credits(token, result),
            None => false,
        }
    }

    pub fn next_credit(&mut self) -> &mut Self {
        if let Some(detail) = self.detail.as_mut() {
            detail.next_credit();
        }
        self
    }

    pub fn previous_credit(&mut self) -> &mut Self {
        if let Some(detail) = self.detail.as_mut() {
            detail.previous_credit();
        }
        self
    }

    pub fn open_selected_credit(&mut self) -> &mut Self {
        if let Some(target) = self.detail.as_ref().and_then(DetailState::selected_target) {
            self.open_detail(target);
        }
        self
    }

    pub fn add_detail_to_list(&mut self) -> Result<(), StoreError> {
        let item = self
            .detail
            .as_ref()
            .and_then(|detail| detail.detail().data())
            .map(DetailData::media_item);
        match item {
            Some(item) => self.show_add_modal(item),
            None => Ok(()),
        }
    }

    // Lists

    /// Load the viewer's lists unless loaded or already loading.
    ///
    pub fn request_lists(&mut self) -> &mut Self {
        if !self.is_authenticated()
            || self.lists.state().lists.is_resolved()
            || self.lists_request.in_flight()
        {
            return self;
        }
        let token = self.lists_request.issue();
        self.dispatch(NetworkEvent::LoadLists { token });
        self
    }

    pub fn complete_lists(&mut self, token: RequestToken, result: Result<Vec<List>, ApiError>) -> Result<bool, StoreError> {
        if !self.lists_request.complete(token) {
            debug!("Discarding lists response of generation {}", token.generation());
            return Ok(false);
        }
        match result {
            Ok(lists) => self.lists.dispatch(ListAction::SetLists(lists))?,
            Err(error) => {
                self.lists_error = Some(error.message());
                self.lists.dispatch(ListAction::ListsError(Some(error)))?
            }
        }
        self.modal_form.select_default_list(self.lists.state());
        self.clamp_lists_selection();
        Ok(true)
    }

    pub fn lists_panel(&self) -> ListsPanel {
        self.lists_panel
    }

    pub fn lists_index(&self) -> usize {
        self.lists_index
    }

    pub fn items_index(&self) -> usize {
        self.items_index
    }

    pub fn lists_error(&self) -> Option<&str> {
        self.lists_error.as_deref()
    }

    pub fn list_delete_confirmation(&self) -> Option<&str> {
        self.list_delete_confirmation.as_deref()
    }

    /// The list highlighted on the lists screen.
    ///
    pub fn highlighted_list(&self) -> Option<&List> {
        self.lists.state().loaded()?.get(self.lists_index)
    }

    pub fn highlighted_item(&self) -> Option<&ListItem> {
        self.highlighted_list()?.items().get(self.items_index)
    }

    pub fn toggle_lists_panel(&mut self) -> &mut Self {
        self.lists_panel = match self.lists_panel {
            ListsPanel::Lists if self.highlighted_list().is_some() => ListsPanel::Items,
            _ => ListsPanel::Lists,
        };
        self
    }

    pub fn next_lists_entry(&mut self) -> Result<(), StoreError> {
        match self.lists_panel {
            ListsPanel::Lists => {
                let len = self.lists.state().loaded().map(<[List]>::len).unwrap_or_default();
                if self.lists_index + 1 < len {
                    self.lists_index += 1;
                    self.items_index = 0;
                    self.select_highlighted_list()?;
                }
            }
            ListsPanel::Items => {
                let len = self.highlighted_list().map(|list| list.items().len()).unwrap_or_default();
                if self.items_index + 1 < len {
                    self.items_index += 1;
                }
            }
        }
        Ok(())
    }

    pub fn previous_lists_entry(&mut self) -> Result<(), StoreError> {
        match self.lists_panel {
            ListsPanel::Lists => {
                if self.lists_index > 0 {
                    self.lists_index -= 1;
                    self.items_index = 0;
                    self.select_highlighted_list()?;
                }
            }
            ListsPanel::Items => self.items_index = self.items_index.saturating_sub(1),
        }
        Ok(())
    }

    /// Browsing a list makes it the default target for adding items.
    ///
    fn select_highlighted_list(&mut self) -> Result<(), StoreError> {
        if let Some(id) = self.highlighted_list().map(|list| list.id.clone()) {
            self.lists.dispatch(ListAction::SetSelectedList(id))?;
        }
        Ok(())
    }

    fn clamp_lists_selection(&mut self) {
        let len = self.lists.state().loaded().map(<[List]>::len).unwrap_or_default();
        self.lists_index = self.lists_index.min(len.saturating_sub(1));
        let items = self.highlighted_list().map(|list| list.items().len()).unwrap_or_default();
        self.items_index = self.items_index.min(items.saturating_sub(1));
        if items == 0 {
            self.lists_panel = ListsPanel::Lists;
        }
    }

    pub fn list_form(&self) -> Option<&ListForm> {
        self.list_form.as_ref()
    }

    pub fn list_form_mut(&mut self) -> Option<&mut ListForm> {
        self.list_form.as_mut()
    }

    pub fn start_create_list(&mut self) -> &mut Self {
        if self.lists.state().lists.is_resolved() {
            self.list_form = Some(ListForm::create());
        }
        self
    }

    pub fn start_rename_list(&mut self) -> &mut Self {
        if let Some(list) = self.highlighted_list() {
            self.list_form = Some(ListForm::rename(&list.id, &list.name));
        }
        self
    }

    pub fn submit_list_form(&mut self) -> &mut Self {
        let (mode, name) = match self.list_form.as_mut() {
            Some(form) if !form.submit_loading => {
                let name = form.value();
                if name.is_empty() {
                    form.error = Some("List name is required".to_string());
                    return self;
                }
                form.error = None;
                form.submit_loading = true;
                (form.mode.clone(), name)
            }
            _ => return self,
        };
        match mode {
            ListFormMode::Create => self.dispatch(NetworkEvent::CreateList { name }),
            ListFormMode::Rename { id } => match self.lists.state().find(&id) {
                Some(list) => {
                    let slug = list.slug.clone();
                    self.dispatch(NetworkEvent::RenameList { id, slug, name })
                }
                None => self.list_form = None,
            },
        }
        self
    }

    pub fn complete_list_created(&mut self, result: Result<List, ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(list) => {
                let id = list.id.clone();
                self.lists.dispatch(ListAction::AddList(list))?;
                self.list_form = None;
                self.notify(Notification::success("List added"));
                if let Some(index) = self
                    .lists
                    .state()
                    .loaded()
                    .and_then(|lists| lists.iter().position(|list| list.id == id))
                {
                    self.lists_index = index;
                    self.items_index = 0;
                }
                self.lists.dispatch(ListAction::SetSelectedList(id))?;
            }
            Err(error) => self.fail_list_form(error),
        }
        Ok(())
    }

    pub fn complete_list_renamed(&mut self, id: &str, result: Result<List, ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(list) => {
                self.lists.dispatch(ListAction::UpdateList {
                    id: id.to_string(),
                    list,
                })?;
                self.list_form = None;
                if let Some(index) = self
                    .lists
                    .state()
                    .loaded()
                    .and_then(|lists| lists.iter().position(|list| list.id == id))
                {
                    self.lists_index = index;
                }
                self.notify(Notification::success("List updated"));
            }
            Err(error) => self.fail_list_form(error),
        }
        Ok(())
    }

    fn fail_list_form(&mut self, error: ApiError) {
        warn!("List update failed: {}", error);
        if let Some(form) = self.list_form.as_mut() {
            form.submit_loading = false;
            form.error = Some(if error.is_conflict() {
                LIST_NAME_TAKEN.to_string()
            } else {
                error.message()
            });
        }
    }

    /// First call asks for confirmation, the second deletes.
    ///
    pub fn delete_highlighted_list(&mut self) -> &mut Self {
        let (id, slug) = match self.highlighted_list() {
            Some(list) => (list.id.clone(), list.slug.clone()),
            None => return self,
        };
        if self.list_delete_confirmation.as_deref() == Some(id.as_str()) {
            self.list_delete_confirmation = None;
            self.dispatch(NetworkEvent::DeleteList { id, slug });
        } else {
            self.list_delete_confirmation = Some(id);
        }
        self
    }

    pub fn complete_list_deleted(&mut self, id: &str, result: Result<(), ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(()) => {
                self.lists.dispatch(ListAction::RemoveList { id: id.to_string() })?;
                if self.lists.state().selected_id.as_deref() == Some(id) {
                    self.lists.dispatch(ListAction::ClearSelectedList)?;
                }
                self.lists_error = None;
                self.clamp_lists_selection();
                self.notify(Notification::success("List removed"));
            }
            Err(error) => {
                warn!("List delete failed: {}", error);
                self.lists_error = Some(error.message());
            }
        }
        Ok(())
    }

    pub fn open_highlighted_item(&mut self) -> &mut Self {
        if let Some(target) = self.highlighted_item().map(|item| DetailTarget::from(&MediaItem::from(item))) {
            self.open_detail(target);
        }
        self
    }

    pub fn remove_highlighted_item(&mut self) -> Result<(), StoreError> {
        let target = self
            .highlighted_list()
            .and_then(|list| Some((list.clone(), MediaItem::from(self.highlighted_item()?))));
        match target {
            Some((list, item)) => self.show_remove_modal(list, item),
            None => Ok(()),
        }
    }

    // List modal

    pub fn modal_form(&self) -> &ListModalForm {
        &self.modal_form
    }

    pub fn modal_form_mut(&mut self) -> &mut ListModalForm {
        &mut self.modal_form
    }

    pub fn show_add_modal(&mut self, item: MediaItem) -> Result<(), StoreError> {
        self.list_modal.dispatch(ListModalAction::ShowAddModal(item))?;
        self.prepare_modal();
        Ok(())
    }

    pub fn show_remove_modal(&mut self, list: List, item: MediaItem) -> Result<(), StoreError> {
        self.list_modal
            .dispatch(ListModalAction::ShowRemoveModal { list, item })?;
        self.prepare_modal();
        Ok(())
    }

    /// Reset the form for a newly opened modal. A submit still in flight
    /// belongs to the previous modal and no longer drives this one.
    ///
    fn prepare_modal(&mut self) {
        self.modal_request.cancel();
        self.modal_form = ListModalForm::default();
        self.request_lists();
        self.modal_form.select_default_list(self.lists.state());
    }

    pub fn hide_modal(&mut self) -> Result<(), StoreError> {
        self.list_modal.dispatch(ListModalAction::HideModal)
    }

    pub fn cycle_modal_target(&mut self, forward: bool) -> &mut Self {
        self.modal_form.cycle_target(self.lists.state(), forward);
        self
    }

    /// Whether the modal asks for a first list name.
    ///
    pub fn modal_needs_new_list(&self) -> bool {
        self.list_modal.state().is_add()
            && self
                .lists
                .state()
                .loaded()
                .map(|lists| lists.is_empty())
                .unwrap_or(false)
    }

    /// Submit the modal: add to the chosen list, create a first list and add
    /// to it, or remove from the targeted list. Signed-out viewers are sent
    /// to sign in.
    ///
    pub fn submit_modal(&mut self) -> Result<(), StoreError> {
        let modal = self.list_modal.state().clone();
        let target = match modal.target {
            Some(target) if modal.visible => target,
            _ => return Ok(()),
        };
        if !self.is_authenticated() {
            self.hide_modal()?;
            self.open_sign_in();
            return Ok(());
        }
        if self.modal_form.submit_loading {
            return Ok(());
        }

        match target {
            ModalTarget::Add { item } => {
                let event = if self.modal_needs_new_list() {
                    let name = self.modal_form.new_list_name();
                    if name.is_empty() {
                        self.modal_form.error = Some("List name is required".to_string());
                        return Ok(());
                    }
                    NetworkEvent::CreateListWithItem {
                        token: self.modal_request.issue(),
                        name,
                        item: item.to_new_list_item(),
                    }
                } else {
                    let list = self
                        .modal_form
                        .target_list_id
                        .as_deref()
                        .and_then(|id| self.lists.state().find(id));
                    match list {
                        Some(list) => NetworkEvent::AddToList {
                            token: self.modal_request.issue(),
                            list_id: list.id.clone(),
                            list_slug: list.slug.clone(),
                            item: item.to_new_list_item(),
                        },
                        None => return Ok(()),
                    }
                };
                self.modal_form.error = None;
                self.modal_form.submit_loading = true;
                self.dispatch(event);
            }
            ModalTarget::Remove { list, item } => {
                let item_id = match item.db_id {
                    Some(item_id) => item_id,
                    None => return Ok(()),
                };
                self.modal_form.error = None;
                self.modal_form.submit_loading = true;
                let token = self.modal_request.issue();
                self.dispatch(NetworkEvent::RemoveFromList {
                    token,
                    list_id: list.id,
                    list_slug: list.slug,
                    item_id,
                });
            }
        }
        Ok(())
    }

    /// An already-present item counts as done. A result for a submit that
    /// was superseded or cancelled leaves the modal alone; a stored item is
    /// still recorded while the lists are loaded.
    ///
    pub fn complete_add_to_list(&mut self, token: RequestToken, list_id: &str, result: Result<ListItem, ApiError>) -> Result<(), StoreError> {
        if !self.modal_request.complete(token) {
            debug!("Discarding stale add-to-list result for list {}", list_id);
            if let Ok(item) = result {
                if self.lists.state().loaded().is_some() {
                    self.lists.dispatch(ListAction::AddListItem {
                        id: list_id.to_string(),
                        item,
                    })?;
                }
            }
            return Ok(());
        }
        self.modal_form.submit_loading = false;
        match result {
            Ok(item) => {
                self.lists.dispatch(ListAction::AddListItem {
                    id: list_id.to_string(),
                    item,
                })?;
                self.notify(Notification::success("Added to list"));
                self.hide_modal()?;
            }
            Err(error) if error.is_conflict() => {
                self.notify(Notification::info("Item already added to list"));
                self.hide_modal()?;
            }
            Err(error) => {
                warn!("Add to list failed: {}", error);
                self.modal_form.error = Some("Unable to add to list".to_string());
            }
        }
        Ok(())
    }

    /// Returns the created list so the item can be added to it, or `None`
    /// when creation failed or the submit is no longer current.
    ///
    pub fn complete_modal_list_created(&mut self, token: RequestToken, result: Result<List, ApiError>) -> Result<Option<List>, StoreError> {
        if !self.modal_request.is_current(token) {
            debug!("Discarding stale modal list creation");
            if let Ok(list) = result {
                if self.lists.state().loaded().is_some() {
                    self.lists.dispatch(ListAction::AddList(list))?;
                }
            }
            return Ok(None);
        }
        match result {
            Ok(list) => {
                self.lists.dispatch(ListAction::AddList(list.clone()))?;
                self.modal_form.target_list_id = Some(list.id.clone());
                Ok(Some(list))
            }
            Err(error) => {
                warn!("Create list failed: {}", error);
                self.modal_request.complete(token);
                self.modal_form.submit_loading = false;
                self.modal_form.error = Some(if error.status() == Some(422) {
                    LIST_NAME_TAKEN.to_string()
                } else {
                    error.message()
                });
                Ok(None)
            }
        }
    }

    pub fn complete_remove_from_list(&mut self, token: RequestToken, list_id: &str, item_id: &str, result: Result<(), ApiError>) -> Result<(), StoreError> {
        if !self.modal_request.complete(token) {
            debug!("Discarding stale remove-from-list result for item {}", item_id);
            if result.is_ok() && self.lists.state().loaded().is_some() {
                self.lists.dispatch(ListAction::RemoveListItem {
                    id: list_id.to_string(),
                    item_id: item_id.to_string(),
                })?;
                self.clamp_lists_selection();
            }
            return Ok(());
        }
        self.modal_form.submit_loading = false;
        match result {
            Ok(()) => {
                self.lists.dispatch(ListAction::RemoveListItem {
                    id: list_id.to_string(),
                    item_id: item_id.to_string(),
                })?;
                self.clamp_lists_selection();
                self.notify(Notification::success("Removed from list"));
                self.hide_modal()?;
            }
            Err(error) => {
                warn!("Remove from list failed: {}", error);
                self.modal_form.error = Some(error.message());
            }
        }
        Ok(())
    }

    // Sign in, register, account

    pub fn auth_form(&self) -> Option<&AuthForm> {
        self.auth_form.as_ref()
    }

    pub fn auth_form_mut(&mut self) -> Option<&mut AuthForm> {
        self.auth_form.as_mut()
    }

    pub fn submit_auth_form(&mut self) -> &mut Self {
        let email = self.viewer().map(|user| user.email.clone());
        let form = match self.auth_form.as_mut() {
            Some(form) if !form.submit_loading => form,
            _ => return self,
        };
        let event = match form.kind() {
            FormKind::SignIn => form.sign_in_params().map(NetworkEvent::SignIn),
            FormKind::Register => form.account_params().map(NetworkEvent::Register),
            FormKind::Account => match email {
                Some(email) => form
                    .account_params()
                    .map(|params| NetworkEvent::UpdateAccount { email, params }),
                None => return self,
            },
        };
        match event {
            Ok(event) => {
                form.error = None;
                form.submit_loading = true;
                form.confirm_delete = false;
                self.dispatch(event);
            }
            Err(message) => form.error = Some(message),
        }
        self
    }

    /// First call asks for confirmation, the second deletes the account.
    ///
    pub fn delete_account(&mut self) -> &mut Self {
        let email = match self.viewer() {
            Some(user) => user.email.clone(),
            None => return self,
        };
        let form = match self.auth_form.as_mut() {
            Some(form) if form.kind() == FormKind::Account && !form.submit_loading => form,
            _ => return self,
        };
        if form.confirm_delete {
            form.confirm_delete = false;
            form.error = None;
            form.submit_loading = true;
            self.dispatch(NetworkEvent::DeleteAccount { email });
        } else {
            form.confirm_delete = true;
        }
        self
    }

    pub fn sign_out(&mut self) -> &mut Self {
        if self.is_authenticated() {
            self.dispatch(NetworkEvent::SignOut);
        }
        self
    }

    /// Sign in or register finished.
    ///
    pub fn complete_authentication(&mut self, result: Result<User, ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(user) => {
                self.forget_lists()?;
                self.auth.dispatch(AuthAction::SetUser(user.into()))?;
                self.open_search();
            }
            Err(error) => self.fail_auth_form(error),
        }
        Ok(())
    }

    pub fn complete_sign_out(&mut self, result: Result<(), ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(()) => {
                self.auth.dispatch(AuthAction::SetUser(AuthUser::Unauthenticated))?;
                self.forget_lists()?;
                self.notify(Notification::info("Signed out"));
                self.enforce_view_access();
            }
            Err(error) => {
                error!("Sign out failed: {}", error);
                self.notify(Notification::error(error.message()));
                self.auth.dispatch(AuthAction::Error(Some(error)))?;
            }
        }
        Ok(())
    }

    pub fn complete_account_update(&mut self, result: Result<User, ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(user) => {
                let user = AuthUser::from(user);
                self.auth_form = user.user().map(AuthForm::account);
                self.auth.dispatch(AuthAction::SetUser(user))?;
                self.notify(Notification::success("Account updated"));
            }
            Err(error) => self.fail_auth_form(error),
        }
        Ok(())
    }

    pub fn complete_account_delete(&mut self, result: Result<(), ApiError>) -> Result<(), StoreError> {
        match result {
            Ok(()) => {
                self.auth.dispatch(AuthAction::SetUser(AuthUser::Unauthenticated))?;
                self.forget_lists()?;
                self.open_search();
                self.notify(Notification::info("Account deleted"));
            }
            Err(error) => self.fail_auth_form(error),
        }
        Ok(())
    }

    fn fail_auth_form(&mut self, error: ApiError) {
        warn!("Account request failed: {}", error);
        if let Some(form) = self.auth_form.as_mut() {
            form.submit_loading = false;
            form.error = Some(error.message());
        }
    }

    /// Drop the lists of the previous viewer, any load in flight and the
    /// list modal with its pending submit.
    ///
    fn forget_lists(&mut self) -> Result<(), StoreError> {
        self.lists_request.cancel();
        self.modal_request.cancel();
        self.modal_form.submit_loading = false;
        if self.list_modal.state().visible {
            self.hide_modal()?;
        }
        self.lists.dispatch(ListAction::ClearLists)?;
        self.lists_index = 0;
        self.items_index = 0;
        self.lists_panel = ListsPanel::Lists;
        self.list_form = None;
        self.list_delete_confirmation = None;
        Ok(())
    }

    // Notifications and log

    pub fn notify(&mut self, notification: Notification) -> &mut Self {
        info!("{}", notification.message);
        self.notification = Some(notification);
        self
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) -> &mut Self {
        self.notification = None;
        self
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn add_log_entry(&mut self, entry: String) -> &mut Self {
        self.log_entries.push(entry);
        if self.log_entries.len() > LOG_CAPACITY {
            let excess = self.log_entries.len() - LOG_CAPACITY;
            self.log_entries.drain(..excess);
        }
        self
    }

    pub fn log_entries(&self) -> &[String] {
        &self.log_entries
    }

    /// Whether keystrokes should go to a text input.
    ///
    pub fn is_text_input_active(&self) -> bool {
        if self.list_modal.state().visible {
            return self.modal_needs_new_list();
        }
        match self.current_view() {
            View::Search => self.focus == Focus::SearchInput,
            View::Lists => self.list_form.is_some(),
            View::SignIn | View::Register | View::Account => self.auth_form.is_some(),
            View::Detail(_) => false,
        }
    }

    /// Send a network event to the network thread.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(net_sender) = &self.net_sender {
            if let Err(err) = net_sender.send(event) {
                error!("Recieved error from network dispatch: {}", err);
            }
        }
    }
}
