//! Reducer-driven stores.
//!
//! Each store owns one slice of application state. State is only changed
//! by dispatching an action; the reducer builds a new state from the old
//! one and the store swaps it in. Reducers that reject an action leave the
//! state untouched and hand the error back to the caller.

pub mod auth;
mod error;
pub mod list;
pub mod list_modal;
mod response;

pub use auth::{AuthAction, AuthReducer, AuthState};
pub use error::StoreError;
pub use list::{ListAction, ListReducer, ListState};
pub use list_modal::{ListModalAction, ListModalReducer, ListModalState, ModalTarget};
pub use response::ApiResponse;

use log::*;
use std::fmt::Debug;

pub type AuthStore = Store<AuthReducer>;
pub type ListStore = Store<ListReducer>;
pub type ListModalStore = Store<ListModalReducer>;

/// Pure state transition for one store.
///
pub trait Reducer {
    type State: Clone + Debug + Default;
    type Action: Debug;

    /// Short name used in log output.
    const NAME: &'static str;

    fn reduce(state: &Self::State, action: Self::Action) -> Result<Self::State, StoreError>;
}

/// Holds the current state of a reducer and applies dispatched actions.
///
#[derive(Debug)]
pub struct Store<R: Reducer> {
    state: R::State,
    revision: u64,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Store::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R::State) -> Self {
        Store { state, revision: 0 }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Incremented on every accepted action.
    ///
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an action. On error the previous state is kept.
    ///
    pub fn dispatch(&mut self, action: R::Action) -> Result<(), StoreError> {
        debug!("{} store dispatch: {:?}", R::NAME, action);
        match R::reduce(&self.state, action) {
            Ok(state) => {
                self.state = state;
                self.revision += 1;
                Ok(())
            }
            Err(err) => {
                error!("{} store rejected action: {}", R::NAME, err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Counter;

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        Fail,
    }

    impl Reducer for Counter {
        type State = u32;
        type Action = CounterAction;
        const NAME: &'static str = "counter";

        fn reduce(state: &u32, action: CounterAction) -> Result<u32, StoreError> {
            match action {
                CounterAction::Increment => Ok(state + 1),
                CounterAction::Fail => Err(StoreError::ListsNotLoaded { action: "Fail" }),
            }
        }
    }

    #[test]
    fn dispatch_replaces_state_and_bumps_revision() {
        let mut store: Store<Counter> = Store::default();
        store.dispatch(CounterAction::Increment).unwrap();
        store.dispatch(CounterAction::Increment).unwrap();
        assert_eq!(*store.state(), 2);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn rejected_action_keeps_state() {
        let mut store: Store<Counter> = Store::new(5);
        assert!(store.dispatch(CounterAction::Fail).is_err());
        assert_eq!(*store.state(), 5);
        assert_eq!(store.revision(), 0);
    }
}
