//! HTTP client for the lists/auth and content API.
//!
//! This module wraps `reqwest` with the conventions every call shares: the
//! configured base URL, the session cookie, and the conversion of non-2xx
//! responses into a structured [`ApiError`].

use super::error::ApiError;
use log::*;
use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Makes requests to the API and tries to conform response data to the
/// expected type.
///
pub struct Client {
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL. The underlying client
    /// keeps an in-memory cookie store so the session issued at sign-in is
    /// sent with every following request.
    ///
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// Return decoded JSON for a GET request.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(self.raw(Method::GET, path, None::<&()>).await?.json().await?)
    }

    /// Return decoded JSON for a GET request with URL-encoded query
    /// parameters.
    ///
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .http_client
            .request(Method::GET, self.url(path))
            .query(query);
        Ok(Self::check(request.send().await?).await?.json().await?)
    }

    /// Return decoded JSON for a POST request with an optional JSON body.
    ///
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        Ok(self.raw(Method::POST, path, body).await?.json().await?)
    }

    /// Make request and return the unread response for callers that only
    /// need the status. Non-2xx responses are turned into errors.
    ///
    pub async fn raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let mut request = self.http_client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::check(request.send().await?).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Pass successful responses through; read the body of failed ones and
    /// build the structured error from it.
    ///
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Unable to read response"));
        let name = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        warn!("API request failed with status {}: {}", name, message);
        Err(ApiError::Http {
            name,
            message,
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn get_decodes_json() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/auth");
                then.status(200).json_body(json!({ "auth": false }));
            })
            .await;

        let client = Client::new(&server.base_url())?;
        let body: Value = client.get("/auth").await?;
        assert_eq!(body, json!({ "auth": false }));
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn non_success_becomes_structured_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/list");
                then.status(422).body("List already exists");
            })
            .await;

        let client = Client::new(&server.base_url()).unwrap();
        let error = client
            .post::<Value, _>("/list", Some(&json!({ "name": "Favourites" })))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            ApiError::Http {
                name: "422 Unprocessable Entity".to_string(),
                message: "List already exists".to_string(),
                status: 422,
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn post_sends_json_body() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/auth/sign-in")
                    .json_body(json!({ "email": "ada@example.com", "password": "secret" }));
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let client = Client::new(&server.base_url())?;
        let _: Value = client
            .post(
                "/auth/sign-in",
                Some(&json!({ "email": "ada@example.com", "password": "secret" })),
            )
            .await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn query_values_are_encoded() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/search")
                    .query_param("query", "the dark knight")
                    .query_param("page", "2");
                then.status(200).json_body(json!({ "page": 2, "results": [] }));
            })
            .await;

        let client = Client::new(&server.base_url())?;
        let _: Value = client
            .get_with_query(
                "/search",
                &[("query", "the dark knight".to_string()), ("page", "2".to_string())],
            )
            .await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn raw_returns_response_for_empty_bodies() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/list/delete/favourites");
                then.status(204);
            })
            .await;

        let client = Client::new(&server.base_url())?;
        let response = client
            .raw(Method::POST, "/list/delete/favourites", None::<&()>)
            .await?;
        assert_eq!(response.status().as_u16(), 204);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_body_is_a_deserialization_error() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/list");
                then.status(200).body("not json");
            })
            .await;

        let client = Client::new(&server.base_url()).unwrap();
        let error = client.get::<Vec<Value>>("/list").await.unwrap_err();
        assert!(matches!(error, ApiError::Deserialization(_)));
    }
}
