//! Ollama-backed speech generator
//!
//! One non-streaming `POST {base_url}/api/generate` per speech.

use async_trait::async_trait;
use congress_application::{GenerationError, GenerationRequest, SpeechGenerator};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request payload for Ollama's generate endpoint
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Speech generator talking to a local or remote Ollama server
pub struct OllamaSpeechGenerator {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaSpeechGenerator {
    /// Build a generator whose HTTP client gives up after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SpeechGenerator for OllamaSpeechGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = GenerateRequest {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
        };

        debug!("POST {} (model {})", self.endpoint(), request.model);
        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        match parsed.response {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(GenerationError::EmptyResponse),
        }
    }
}

fn map_transport(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP request with the given status line and body
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    fn request() -> GenerationRequest {
        GenerationRequest::new("llama3.1:8b", "Stance: support\n\nArgument:")
    }

    #[test]
    fn test_endpoint_trims_slash() {
        let generator = OllamaSpeechGenerator::with_client(
            reqwest::Client::new(),
            "http://localhost:11434/",
        );
        assert_eq!(generator.endpoint(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            model: "m",
            prompt: "p",
            stream: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"model": "m", "prompt": "p", "stream": false})
        );
    }

    #[tokio::test]
    async fn test_generate_returns_response_text() {
        let url = serve_once("200 OK", r#"{"model":"m","response":"A fine bill.","done":true}"#).await;
        let generator = OllamaSpeechGenerator::new(url, Duration::from_secs(5)).unwrap();

        let text = generator.generate(&request()).await.unwrap();
        assert_eq!(text, "A fine bill.");
    }

    #[tokio::test]
    async fn test_generate_maps_status_errors() {
        let url = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let generator = OllamaSpeechGenerator::new(url, Duration::from_secs(5)).unwrap();

        let err = generator.generate(&request()).await.unwrap_err();
        assert_eq!(err, GenerationError::Status(500));
    }

    #[tokio::test]
    async fn test_generate_empty_response() {
        let url = serve_once("200 OK", r#"{"response":"   "}"#).await;
        let generator = OllamaSpeechGenerator::new(url, Duration::from_secs(5)).unwrap();

        let err = generator.generate(&request()).await.unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let url = serve_once("200 OK", "not json").await;
        let generator = OllamaSpeechGenerator::new(url, Duration::from_secs(5)).unwrap();

        let err = generator.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_generate_unreachable() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let generator =
            OllamaSpeechGenerator::new(format!("http://{}", addr), Duration::from_secs(2)).unwrap();
        let err = generator.generate(&request()).await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Transport(_) | GenerationError::Timeout
        ));
    }
}
