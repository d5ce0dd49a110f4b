//! SupabaseClient -- [`TableStore`] over the Supabase REST (PostgREST) API.
//!
//! Selects are `GET {url}/rest/v1/{table}?select=*&order=..&limit=..`;
//! inserts are `POST {url}/rest/v1/{table}` with a one-element JSON array.
//! Both carry the key as `apikey` and as a bearer token.
//!
//! The key is wrapped in [`secrecy::SecretString`] and is never logged.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use folio_core::repository::TableStore;
use folio_types::error::BackendError;
use folio_types::query::TableQuery;

use crate::config::BackendAccess;

/// Request timeout for backend calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Supabase table store for one privilege level (service or anon key).
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    key: SecretString,
}

impl SupabaseClient {
    pub fn new(access: BackendAccess) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: access.url.trim_end_matches('/').to_string(),
            key: access.key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: reqwest::Method, table: &str) -> reqwest::RequestBuilder {
        let key = self.key.expose_secret();
        self.client
            .request(method, self.table_url(table))
            .header("apikey", key)
            .bearer_auth(key)
    }
}

/// PostgREST query parameters for a select.
pub fn select_params(query: &TableQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![("select", "*".to_string())];
    if let Some(ordering) = &query.ordering {
        params.push(("order", format!("{}.{}", ordering.column, ordering.order)));
    }
    if let Some(limit) = query.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

/// Pull a readable message out of a PostgREST error body.
///
/// PostgREST answers with `{"message": ..., "code": ..., ...}`; anything
/// else is returned as-is.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

impl TableStore for SupabaseClient {
    async fn select(&self, query: &TableQuery) -> Result<Vec<serde_json::Value>, BackendError> {
        let response = self
            .request(reqwest::Method::GET, &query.table)
            .query(&select_params(query))
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let response = check_status(response).await?;

        response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn insert(&self, table: &str, row: serde_json::Value) -> Result<(), BackendError> {
        let response = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        check_status(response).await?;
        tracing::debug!(table, "row inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Json;
    use axum::extract::{Path, Query};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use folio_types::query::SortOrder;
    use serde_json::json;

    use super::*;
    use crate::stub;

    fn client(url: &str) -> SupabaseClient {
        SupabaseClient::new(BackendAccess {
            url: url.to_string(),
            key: SecretString::from("anon-key-test"),
        })
        .unwrap()
    }

    #[test]
    fn test_select_params() {
        let query = TableQuery::select_all("blog")
            .order_by("published_at", SortOrder::Desc)
            .limit(6);
        assert_eq!(
            select_params(&query),
            vec![
                ("select", "*".to_string()),
                ("order", "published_at.desc".to_string()),
                ("limit", "6".to_string()),
            ]
        );

        let plain = TableQuery::select_all("skills");
        assert_eq!(select_params(&plain), vec![("select", "*".to_string())]);
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"code":"42501","details":null,"hint":null,"message":"permission denied for table messages"}"#;
        assert_eq!(error_message(body), "permission denied for table messages");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let c = client("https://abc.supabase.co/");
        assert_eq!(c.table_url("projects"), "https://abc.supabase.co/rest/v1/projects");
    }

    #[tokio::test]
    async fn test_select_sends_query_and_auth_headers() {
        let seen: Arc<Mutex<Option<(String, Vec<(String, String)>, String, String)>>> =
            Arc::new(Mutex::new(None));
        let seen_in_handler = seen.clone();

        let router = axum::Router::new().route(
            "/rest/v1/{table}",
            get(
                move |Path(table): Path<String>,
                      Query(params): Query<Vec<(String, String)>>,
                      headers: HeaderMap| {
                    let seen = seen_in_handler.clone();
                    async move {
                        let header = |name: &str| {
                            headers
                                .get(name)
                                .and_then(|v| v.to_str().ok())
                                .unwrap_or_default()
                                .to_string()
                        };
                        *seen.lock().unwrap() =
                            Some((table, params, header("apikey"), header("authorization")));
                        Json(json!([{"name": "Rust", "level": 9}]))
                    }
                },
            ),
        );
        let url = stub::serve(router).await;

        let query = TableQuery::select_all("skills").order_by("level", SortOrder::Desc);
        let rows = client(&url).select(&query).await.unwrap();

        assert_eq!(rows, vec![json!({"name": "Rust", "level": 9})]);
        let (table, params, apikey, auth) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(table, "skills");
        assert!(params.contains(&("select".to_string(), "*".to_string())));
        assert!(params.contains(&("order".to_string(), "level.desc".to_string())));
        assert_eq!(apikey, "anon-key-test");
        assert_eq!(auth, "Bearer anon-key-test");
    }

    #[tokio::test]
    async fn test_insert_posts_single_row_array() {
        let body_seen: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
        let body_in_handler = body_seen.clone();

        let router = axum::Router::new().route(
            "/rest/v1/messages",
            axum::routing::post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let body_seen = body_in_handler.clone();
                async move {
                    assert_eq!(headers.get("prefer").unwrap(), "return=minimal");
                    *body_seen.lock().unwrap() = Some(body);
                    StatusCode::CREATED
                }
            }),
        );
        let url = stub::serve(router).await;

        client(&url)
            .insert("messages", json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}))
            .await
            .unwrap();

        assert_eq!(
            body_seen.lock().unwrap().clone().unwrap(),
            json!([{"name": "Ada", "email": "ada@example.com", "message": "Hello"}])
        );
    }

    #[tokio::test]
    async fn test_insert_error_status_maps_to_backend_error() {
        let router = axum::Router::new().route(
            "/rest/v1/messages",
            axum::routing::post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"message": "Invalid API key"})),
                )
            }),
        );
        let url = stub::serve(router).await;

        let err = client(&url)
            .insert("messages", json!({"name": "Ada"}))
            .await
            .unwrap_err();

        match err {
            BackendError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let url = stub::unreachable_url().await;
        let err = client(&url)
            .select(&TableQuery::select_all("projects"))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Transport(_)));
    }
}
