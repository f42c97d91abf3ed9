use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Identity of the signed-in viewer as reported by the lists/auth API.
///
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AuthUserWire")]
pub enum AuthUser {
    Unauthenticated,
    Authenticated(AuthenticatedUser),
}

impl AuthUser {
    /// Returns the user when authenticated.
    ///
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            AuthUser::Authenticated(user) => Some(user),
            AuthUser::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthUser::Authenticated(_))
    }
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        AuthUser::Authenticated(AuthenticatedUser {
            id: user.id,
            name: user.name,
            email: user.email,
        })
    }
}

/// Wire shape of `GET /auth`: `{"auth": false}` or `{"auth": true, "user": {..}}`.
///
#[derive(Deserialize)]
struct AuthUserWire {
    auth: bool,
    user: Option<AuthenticatedUser>,
}

impl TryFrom<AuthUserWire> for AuthUser {
    type Error = String;

    fn try_from(wire: AuthUserWire) -> Result<Self, Self::Error> {
        match (wire.auth, wire.user) {
            (false, _) => Ok(AuthUser::Unauthenticated),
            (true, Some(user)) => Ok(AuthUser::Authenticated(user)),
            (true, None) => Err("authenticated response without user".to_string()),
        }
    }
}

/// Defines the identity carried by an authenticated viewer.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Defines the full user record returned by sign-in, register and update.
///
#[derive(Clone, Debug, Dummy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

/// Kind of media a list item points at.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Movie,
    Tv,
    Person,
}

impl MediaType {
    /// Human readable label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::Tv => "TV Show",
            MediaType::Person => "Person",
        }
    }
}

/// Defines a named, user-owned list.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
}

impl List {
    /// Returns the list items, treating a missing collection as empty.
    ///
    pub fn items(&self) -> &[ListItem] {
        self.items.as_deref().unwrap_or(&[])
    }
}

/// Defines one media reference attached to a list.
///
#[derive(Clone, Debug, Dummy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub list_id: String,
    pub media_type: MediaType,
    pub tmdb_id: u64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Body of `POST /list-item/{listSlug}`.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListItem {
    pub media_type: MediaType,
    pub tmdb_id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

/// Body of `POST /auth/register` and `POST /auth/account/{email}`.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/sign-in`.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInParams {
    pub email: String,
    pub password: String,
}
