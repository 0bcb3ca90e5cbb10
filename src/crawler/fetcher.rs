//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for listing pages, one per candidate ID, no retries
//! - Mapping 404 to "no listing" and transport failures to an error message
//!
//! Non-2xx statuses other than 404 are not failures: the body is returned so
//! the caller can still try to read it.

use crate::config::HttpConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered with something other than 404
    Page {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered 404
    NotFound,

    /// Network error (timeout, connection refused, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds an HTTP client with the configured user agent and timeout
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use hidden_listings::config::HttpConfig;
/// use hidden_listings::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a listing page
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 404 | `NotFound` |
/// | Any other status | `Page` with the body |
/// | Timeout | `NetworkError` |
/// | Connection failure | `NetworkError` |
/// | Body read failure | `NetworkError` |
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(e),
    };

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return FetchResult::NotFound;
    }

    match response.text().await {
        Ok(body) => FetchResult::Page {
            status_code: status.as_u16(),
            body,
        },
        Err(e) => classify_error(e),
    }
}

fn classify_error(e: reqwest::Error) -> FetchResult {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    };

    FetchResult::NetworkError { error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(timeout_secs: u64) -> HttpConfig {
        HttpConfig {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs,
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&test_config(10));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/listing/1/"))
            .and(header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config(5)).unwrap();
        let result = fetch_page(&client, &format!("{}/listing/1/", server.uri())).await;

        match result {
            FetchResult::Page {
                status_code, body, ..
            } => {
                assert_eq!(status_code, 200);
                assert_eq!(body, "<html></html>");
            }
            other => panic!("expected page, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config(5)).unwrap();
        let result = fetch_page(&client, &format!("{}/listing/2/", server.uri())).await;

        assert!(matches!(result, FetchResult::NotFound));
    }

    #[tokio::test]
    async fn test_fetch_page_server_error_still_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config(5)).unwrap();
        let result = fetch_page(&client, &format!("{}/listing/3/", server.uri())).await;

        match result {
            FetchResult::Page {
                status_code, body, ..
            } => {
                assert_eq!(status_code, 500);
                assert_eq!(body, "oops");
            }
            other => panic!("expected page, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config(1)).unwrap();
        let result = fetch_page(&client, &format!("{}/listing/4/", server.uri())).await;

        match result {
            FetchResult::NetworkError { error } => assert_eq!(error, "Request timeout"),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = build_http_client(&test_config(2)).unwrap();
        let result = fetch_page(&client, &format!("http://127.0.0.1:{}/listing/5/", port)).await;

        assert!(matches!(result, FetchResult::NetworkError { .. }));
    }
}
