//! Store backed by a hosted PostgREST-style service.

use intake_types::{StoreError, SurveyStore};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::debug;

/// Talks to `{base_url}/rest/v1/{collection}` with an API key.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder().build().map_err(StoreError::backend)?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Use an already configured client (proxy, timeouts, TLS roots).
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{collection}", self.base_url.trim_end_matches('/'))
    }

    fn select_url(&self, collection: &str) -> String {
        format!(
            "{}?select=*&order=created_at.desc",
            self.collection_url(collection)
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.api_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
    }
}

fn check_status(collection: &str, response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(StoreError::Status {
        collection: collection.to_string(),
        status: status.as_u16(),
        body,
    })
}

impl SurveyStore for RestStore {
    fn insert(&self, collection: &str, row: Value) -> Result<(), StoreError> {
        debug!(collection, "POST row");
        let response = self
            .authorized(self.client.post(self.collection_url(collection)))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .map_err(StoreError::backend)?;
        check_status(collection, response)?;
        Ok(())
    }

    fn select(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        debug!(collection, "GET rows");
        let response = self
            .authorized(self.client.get(self.select_url(collection)))
            .send()
            .map_err(StoreError::backend)?;
        check_status(collection, response)?
            .json::<Vec<Value>>()
            .map_err(StoreError::backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// What the server saw: lowercased request head and the raw body.
    struct Captured {
        head: String,
        body: String,
    }

    /// Serve exactly one request with `status` and `body`.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 4096];
            let head_end = loop {
                let n = stream.read(&mut chunk).unwrap();
                assert!(n > 0, "connection closed before headers");
                raw.extend_from_slice(&chunk[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&raw[..head_end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map_or(0, |value| value.trim().parse::<usize>().unwrap());
            while raw.len() < head_end + length {
                let n = stream.read(&mut chunk).unwrap();
                raw.extend_from_slice(&chunk[..n]);
            }
            let request_body = String::from_utf8_lossy(&raw[head_end..head_end + length]).into_owned();

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            Captured {
                head,
                body: request_body,
            }
        });
        (base, handle)
    }

    fn store(base: &str) -> RestStore {
        let client = Client::builder().no_proxy().build().unwrap();
        RestStore::with_client(client, base, "k")
    }

    #[test]
    fn urls_address_collection_under_rest_prefix() {
        let store = RestStore::new("https://example.supabase.co/", "anon").unwrap();
        assert_eq!(
            store.collection_url("user_surveys"),
            "https://example.supabase.co/rest/v1/user_surveys"
        );
        assert_eq!(
            store.select_url("real_estate_surveys"),
            "https://example.supabase.co/rest/v1/real_estate_surveys?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn insert_posts_row_with_key_headers() {
        let (base, server) = serve_once("201 Created", "");
        store(&base)
            .insert("user_surveys", json!({ "primary_reason": "Other" }))
            .unwrap();

        let seen = server.join().unwrap();
        assert!(seen.head.starts_with("post /rest/v1/user_surveys http/1.1\r\n"));
        assert!(seen.head.contains("\r\napikey: k\r\n"));
        assert!(seen.head.contains("\r\nauthorization: bearer k\r\n"));
        assert!(seen.head.contains("\r\nprefer: return=minimal\r\n"));
        assert!(seen.head.contains("\r\ncontent-type: application/json\r\n"));
        let body: Value = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(body, json!({ "primary_reason": "Other" }));
    }

    #[test]
    fn rejected_insert_is_a_status_error() {
        let (base, server) = serve_once("401 Unauthorized", "denied");
        let err = store(&base).insert("user_surveys", json!({ "a": 1 })).unwrap_err();
        server.join().unwrap();

        match err {
            StoreError::Status {
                collection,
                status,
                body,
            } => {
                assert_eq!(collection, "user_surveys");
                assert_eq!(status, 401);
                assert_eq!(body, "denied");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn select_reads_newest_first_query_and_decodes_array() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":"r1","created_at":"2025-05-05T00:00:00Z","primary_role":"Other"}]"#,
        );
        let rows = store(&base).select("real_estate_surveys").unwrap();

        let seen = server.join().unwrap();
        assert!(seen.head.starts_with(
            "get /rest/v1/real_estate_surveys?select=*&order=created_at.desc http/1.1\r\n"
        ));
        assert!(seen.head.contains("\r\napikey: k\r\n"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["primary_role"], "Other");
    }

    #[test]
    fn unreachable_service_is_a_backend_error() {
        // bind then drop, so the port is known to be free
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = store(&format!("http://127.0.0.1:{port}"))
            .select("user_surveys")
            .unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
