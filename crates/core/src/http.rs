use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;

use crate::error::{Result, TubecapsError};

/// Network capability used for every upstream request.
///
/// Implementations return the response body as text; a non-success status is
/// an error.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get_text(&self, url: &str, accept_language: &str) -> Result<String>;
}

#[derive(Clone, Debug)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self> {
        Self::with_options(None, None)
    }

    /// `timeout` bounds the whole request; `None` waits indefinitely.
    pub fn with_options(user_agent: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get_text(&self, url: &str, accept_language: &str) -> Result<String> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header(ACCEPT_LANGUAGE, accept_language)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TubecapsError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::oneshot,
    };

    use super::*;

    /// Serves one connection with `response` and hands back the raw request head.
    async fn serve_once(response: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let _ = tx.send(String::from_utf8_lossy(&head).to_string());
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        (format!("http://{addr}/watch?v=abc"), rx)
    }

    #[test]
    fn test_builds_client_with_options() {
        assert!(ReqwestFetcher::new().is_ok());
        assert!(ReqwestFetcher::with_options(Some("tubecaps/0.1"), Some(Duration::from_secs(10))).is_ok());
    }

    #[tokio::test]
    async fn test_success_returns_body_and_sends_accept_language() {
        let (url, request) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 11\r\nConnection: close\r\n\r\n<transcript",
        )
        .await;
        let fetcher = ReqwestFetcher::with_options(None, Some(Duration::from_secs(5))).unwrap();

        let body = fetcher.get_text(&url, "en-us").await.unwrap();
        assert_eq!(body, "<transcript");

        let head = request.await.unwrap().to_ascii_lowercase();
        assert!(head.starts_with("get /watch?v=abc http/1.1"));
        assert!(head.contains("accept-language: en-us"));
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        let (url, _request) =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await;
        let fetcher = ReqwestFetcher::with_options(None, Some(Duration::from_secs(5))).unwrap();

        let err = fetcher.get_text(&url, "en-us").await.unwrap_err();
        match err {
            TubecapsError::Status { url: failed, status } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(failed, url);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_closed_without_response_is_http_error() {
        let (url, _request) = serve_once("").await;
        let fetcher = ReqwestFetcher::with_options(None, Some(Duration::from_secs(5))).unwrap();

        let err = fetcher.get_text(&url, "en-us").await.unwrap_err();
        assert!(matches!(err, TubecapsError::Http(_)));
    }
}
