//! Visibility and target of the add/remove list modal.
//!
//! The modal only labels its target; list contents change through the list
//! store once the matching API call succeeds.

use super::{Reducer, StoreError};
use crate::api::List;
use crate::utils::MediaItem;

/// What the modal acts on.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ModalTarget {
    Add { item: MediaItem },
    Remove { list: List, item: MediaItem },
}

impl ModalTarget {
    pub fn item(&self) -> &MediaItem {
        match self {
            ModalTarget::Add { item } | ModalTarget::Remove { item, .. } => item,
        }
    }
}

/// Hidden, adding or removing. Hiding keeps the last target so a closing
/// modal can still render it.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListModalState {
    pub visible: bool,
    pub target: Option<ModalTarget>,
}

impl ListModalState {
    pub fn is_add(&self) -> bool {
        self.visible && matches!(self.target, Some(ModalTarget::Add { .. }))
    }

    pub fn is_remove(&self) -> bool {
        self.visible && matches!(self.target, Some(ModalTarget::Remove { .. }))
    }

    pub fn item(&self) -> Option<&MediaItem> {
        self.target.as_ref().map(ModalTarget::item)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListModalAction {
    ShowAddModal(MediaItem),
    ShowRemoveModal { list: List, item: MediaItem },
    HideModal,
}

#[derive(Debug)]
pub struct ListModalReducer;

impl Reducer for ListModalReducer {
    type State = ListModalState;
    type Action = ListModalAction;
    const NAME: &'static str = "list-modal";

    fn reduce(state: &ListModalState, action: ListModalAction) -> Result<ListModalState, StoreError> {
        Ok(match action {
            ListModalAction::ShowAddModal(item) => ListModalState {
                visible: true,
                target: Some(ModalTarget::Add { item }),
            },
            ListModalAction::ShowRemoveModal { list, item } => ListModalState {
                visible: true,
                target: Some(ModalTarget::Remove { list, item }),
            },
            ListModalAction::HideModal => ListModalState {
                visible: false,
                target: state.target.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MediaType;
    use crate::store::ListModalStore;
    use fake::{Fake, Faker};

    fn media(title: &str) -> MediaItem {
        MediaItem {
            db_id: None,
            tmdb_id: 603,
            media_type: MediaType::Movie,
            poster: None,
            title: title.to_string(),
            subtitle: None,
        }
    }

    #[test]
    fn starts_hidden() {
        let store = ListModalStore::default();
        assert!(!store.state().visible);
        assert_eq!(store.state().item(), None);
    }

    #[test]
    fn hide_keeps_last_item() {
        let mut store = ListModalStore::default();
        store
            .dispatch(ListModalAction::ShowAddModal(media("The Matrix")))
            .unwrap();
        assert!(store.state().is_add());

        store.dispatch(ListModalAction::HideModal).unwrap();
        assert!(!store.state().visible);
        assert!(!store.state().is_add());
        assert_eq!(store.state().item().unwrap().title, "The Matrix");
    }

    #[test]
    fn remove_mode_replaces_add_mode() {
        let list: List = Faker.fake();
        let mut store = ListModalStore::default();
        store
            .dispatch(ListModalAction::ShowAddModal(media("Alien")))
            .unwrap();
        store
            .dispatch(ListModalAction::ShowRemoveModal {
                list: list.clone(),
                item: media("Brazil"),
            })
            .unwrap();

        assert!(store.state().is_remove());
        assert!(!store.state().is_add());
        assert_eq!(
            store.state().target,
            Some(ModalTarget::Remove {
                list,
                item: media("Brazil")
            })
        );
    }
}
