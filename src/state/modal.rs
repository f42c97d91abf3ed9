//! Local form of the add/remove list modal.

use super::form::input_text;
use crate::store::ListState;
use tui_textarea::TextArea;

/// Form state shown inside the list modal. Reset every time the modal opens.
///
#[derive(Debug, Clone, Default)]
pub struct ListModalForm {
    /// Id of the list the item goes into
    pub target_list_id: Option<String>,
    /// Name of the list to create when the viewer has none
    pub new_list_name: TextArea<'static>,
    pub submit_loading: bool,
    pub error: Option<String>,
}

impl ListModalForm {
    pub fn new_list_name(&self) -> String {
        input_text(&self.new_list_name).trim().to_string()
    }

    /// Point the form at the default list once lists are loaded, keeping a
    /// choice that is still valid.
    ///
    pub fn select_default_list(&mut self, lists: &ListState) {
        let still_present = self
            .target_list_id
            .as_deref()
            .map(|id| lists.find(id).is_some())
            .unwrap_or(false);
        if !still_present {
            self.target_list_id = default_target_list(lists);
        }
    }

    /// Move the target to the next (`forward`) or previous loaded list.
    ///
    pub fn cycle_target(&mut self, lists: &ListState, forward: bool) {
        let loaded = match lists.loaded() {
            Some(loaded) if !loaded.is_empty() => loaded,
            _ => return,
        };
        let current = self
            .target_list_id
            .as_deref()
            .and_then(|id| loaded.iter().position(|list| list.id == id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % loaded.len()
        } else {
            (current + loaded.len() - 1) % loaded.len()
        };
        self.target_list_id = Some(loaded[next].id.clone());
    }
}

/// The selected list if it is still present, else the first list by name.
///
pub fn default_target_list(lists: &ListState) -> Option<String> {
    lists
        .selected()
        .or_else(|| lists.loaded()?.first())
        .map(|list| list.id.clone())
}
