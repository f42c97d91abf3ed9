use super::{ApiResponse, Reducer, StoreError};
use crate::api::{ApiError, AuthUser};

/// Authentication status of the viewer.
///
pub type AuthState = ApiResponse<AuthUser>;

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    /// Back to pending, before an identity check
    Loading,
    /// Replace the viewer identity
    SetUser(AuthUser),
    Error(Option<ApiError>),
}

#[derive(Debug)]
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;
    const NAME: &'static str = "auth";

    fn reduce(_state: &AuthState, action: AuthAction) -> Result<AuthState, StoreError> {
        Ok(match action {
            AuthAction::Loading => ApiResponse::Pending,
            AuthAction::SetUser(user) => ApiResponse::Resolved(user),
            AuthAction::Error(error) => ApiResponse::Rejected(error),
        })
    }
}

/// Returns whether the viewer is known to be signed in.
///
pub fn is_authenticated(state: &AuthState) -> bool {
    matches!(state, ApiResponse::Resolved(user) if user.is_authenticated())
}
