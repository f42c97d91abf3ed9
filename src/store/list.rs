//! The viewer's lists and the selected-list pointer.
//!
//! Lists are identified by `id` in every action; `slug` only appears in API
//! paths. Lists are kept sorted by name and each list's items by title. All
//! mutating actions require the lists to be loaded.

use super::{ApiResponse, Reducer, StoreError};
use crate::api::{ApiError, List, ListItem};
use crate::utils::text::locale_compare;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListState {
    pub lists: ApiResponse<Vec<List>>,
    pub selected_id: Option<String>,
}

impl ListState {
    /// Returns the loaded lists, if any.
    ///
    pub fn loaded(&self) -> Option<&[List]> {
        self.lists.data().map(Vec::as_slice)
    }

    pub fn find(&self, id: &str) -> Option<&List> {
        self.loaded()?.iter().find(|list| list.id == id)
    }

    /// Returns the selected list when it is still present.
    ///
    pub fn selected(&self) -> Option<&List> {
        self.find(self.selected_id.as_deref()?)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListAction {
    SetLists(Vec<List>),
    ListsError(Option<ApiError>),
    AddList(List),
    UpdateList { id: String, list: List },
    RemoveList { id: String },
    AddListItem { id: String, item: ListItem },
    RemoveListItem { id: String, item_id: String },
    SetSelectedList(String),
    ClearSelectedList,
    /// Forget everything, back to pending
    ClearLists,
}

impl ListAction {
    fn name(&self) -> &'static str {
        match self {
            ListAction::SetLists(_) => "SetLists",
            ListAction::ListsError(_) => "ListsError",
            ListAction::AddList(_) => "AddList",
            ListAction::UpdateList { .. } => "UpdateList",
            ListAction::RemoveList { .. } => "RemoveList",
            ListAction::AddListItem { .. } => "AddListItem",
            ListAction::RemoveListItem { .. } => "RemoveListItem",
            ListAction::SetSelectedList(_) => "SetSelectedList",
            ListAction::ClearSelectedList => "ClearSelectedList",
            ListAction::ClearLists => "ClearLists",
        }
    }
}

#[derive(Debug)]
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    const NAME: &'static str = "list";

    fn reduce(state: &ListState, action: ListAction) -> Result<ListState, StoreError> {
        let name = action.name();
        let loaded = || {
            state
                .lists
                .data()
                .cloned()
                .ok_or(StoreError::ListsNotLoaded { action: name })
        };

        let lists = match action {
            ListAction::SetLists(lists) => {
                ApiResponse::Resolved(sort_lists(lists.into_iter().map(sorted_items).collect()))
            }
            ListAction::ListsError(error) => ApiResponse::Rejected(error),
            ListAction::AddList(list) => {
                let mut lists = loaded()?;
                lists.push(sorted_items(list));
                ApiResponse::Resolved(sort_lists(lists))
            }
            ListAction::UpdateList { id, list } => {
                let lists = loaded()?
                    .into_iter()
                    .map(|existing| {
                        if existing.id == id {
                            sorted_items(list.clone())
                        } else {
                            existing
                        }
                    })
                    .collect();
                ApiResponse::Resolved(sort_lists(lists))
            }
            ListAction::RemoveList { id } => {
                let mut lists = loaded()?;
                lists.retain(|list| list.id != id);
                ApiResponse::Resolved(lists)
            }
            ListAction::AddListItem { id, item } => {
                let mut lists = loaded()?;
                if let Some(list) = lists.iter_mut().find(|list| list.id == id) {
                    let mut items = list.items.take().unwrap_or_default();
                    items.push(item);
                    list.items = Some(sort_items(items));
                }
                ApiResponse::Resolved(lists)
            }
            ListAction::RemoveListItem { id, item_id } => {
                let mut lists = loaded()?;
                if let Some(list) = lists.iter_mut().find(|list| list.id == id) {
                    if let Some(items) = list.items.as_mut() {
                        items.retain(|item| item.id != item_id);
                    }
                }
                ApiResponse::Resolved(lists)
            }
            ListAction::SetSelectedList(id) => {
                return Ok(ListState {
                    selected_id: Some(id),
                    ..state.clone()
                })
            }
            ListAction::ClearSelectedList => {
                return Ok(ListState {
                    selected_id: None,
                    ..state.clone()
                })
            }
            ListAction::ClearLists => return Ok(ListState::default()),
        };

        Ok(ListState {
            lists,
            selected_id: state.selected_id.clone(),
        })
    }
}

fn sort_lists(mut lists: Vec<List>) -> Vec<List> {
    lists.sort_by(|a, b| locale_compare(&a.name, &b.name));
    lists
}

fn sort_items(mut items: Vec<ListItem>) -> Vec<ListItem> {
    items.sort_by(|a, b| locale_compare(&a.title, &b.title));
    items
}

fn sorted_items(mut list: List) -> List {
    list.items = list.items.map(sort_items);
    list
}
