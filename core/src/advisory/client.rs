use crate::advisory::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::model::{MapRegion, SpectralIndex};
use crate::telemetry::{LogManager, MetricsRecorder};
use log::warn;
use std::env;
use std::time::Duration;

/// Shown in place of an answer whenever the advisory service cannot deliver one.
pub const FALLBACK_GUIDANCE: &str =
    "The spatial processing engine is temporarily offline. Verify your API key and network connection.";

pub const GUIDANCE_MODEL: &str = "gemini-3-pro-preview";

const SYSTEM_INSTRUCTION: &str = "You are the LEAD GIS ARCHITECT for the Kenyan Coastal Ecosystem Dashboard. \
    You provide high-level technical guidance on coastal ecosystem monitoring. \
    Refer to the architecture: GEE for processing (Sentinel-2, Landsat), PostGIS for storage, \
    FastAPI for vectorization, and Leaflet for visualization. \
    Use OGC standards and GIS best practices. \
    Keep responses concise and authoritative.";

const THINKING_BUDGET: u32 = 2000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);
const API_KEY_VAR: &str = "API_KEY";

/// Failure taxonomy internal to the client; callers only ever see the
/// fallback sentence.
#[derive(thiserror::Error, Debug)]
pub enum AdvisoryError {
    #[error("{API_KEY_VAR} is not set")]
    MissingKey,
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("response carried no text")]
    EmptyResponse,
}

/// One-shot client for the hosted text-generation endpoint.
///
/// All failure modes collapse into [`FALLBACK_GUIDANCE`]; nothing escapes
/// `request_guidance` as an error. In-flight bookkeeping belongs to the
/// calling surface, not here.
pub struct AdvisoryClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl AdvisoryClient {
    /// Reads the credential from the process environment. A missing key is
    /// not fatal here; the first request simply takes the fallback path.
    pub fn from_env() -> Self {
        Self::new(env::var(API_KEY_VAR).ok())
    }

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{GUIDANCE_MODEL}:generateContent"
            ),
            api_key,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Points the client at a different host, e.g. a self-hosted proxy.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Asks the architect persona for guidance on `query`.
    ///
    /// Returns the service text verbatim, or [`FALLBACK_GUIDANCE`] on any
    /// failure. Callers must not dispatch blank queries; see
    /// [`AdvisoryPanel`](crate::advisory::AdvisoryPanel).
    pub async fn request_guidance(&self, query: &str) -> String {
        match self.dispatch(query).await {
            Ok(text) => {
                self.metrics.record_served();
                text
            }
            Err(err) => {
                warn!("advisory request failed: {err}");
                self.metrics.record_fallback();
                FALLBACK_GUIDANCE.to_string()
            }
        }
    }

    async fn dispatch(&self, query: &str) -> Result<String, AdvisoryError> {
        let api_key = self.api_key.as_deref().ok_or(AdvisoryError::MissingKey)?;
        self.logger
            .record(&format!("advisory query dispatched ({} chars)", query.len()));

        let request = GenerateContentRequest::new(SYSTEM_INSTRUCTION, query, THINKING_BUDGET);
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AdvisoryError::Status(response.status()));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.primary_text().ok_or(AdvisoryError::EmptyResponse)
    }

    /// (answers served, fallbacks shown) since construction.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

/// Canned methodology prompt for the active spectral index, routed through
/// the same guidance call as free-text queries.
pub fn spectral_prompt(index: SpectralIndex, region: &MapRegion) -> String {
    format!(
        "Analyze the significance of {index} for monitoring coastal ecosystems in {}, Kenya. \
         Explain the methodology based on Sentinel-2 Level-2A data.",
        region.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::REGIONS;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn headers_end(buffer: &[u8]) -> Option<usize> {
        buffer.windows(4).position(|window| window == b"\r\n\r\n")
    }

    /// Serves exactly one canned 200 response on an ephemeral port.
    fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buffer = Vec::new();
            let mut chunk = [0u8; 1024];

            // Drain the request: headers first, then content-length bytes.
            let mut remaining = loop {
                let read = stream.read(&mut chunk).unwrap();
                buffer.extend_from_slice(&chunk[..read]);
                if let Some(end) = headers_end(&buffer) {
                    let headers = String::from_utf8_lossy(&buffer[..end]);
                    let content_length = headers
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            if name.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .unwrap_or(0);
                    break content_length.saturating_sub(buffer.len() - end - 4);
                }
            };
            while remaining > 0 {
                let read = stream.read(&mut chunk).unwrap();
                remaining = remaining.saturating_sub(read);
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/v1beta/models/test:generateContent")
    }

    #[tokio::test]
    async fn missing_key_yields_fallback_not_panic() {
        let client = AdvisoryClient::new(None);
        let answer = client.request_guidance("What is NDVI?").await;
        assert_eq!(answer, FALLBACK_GUIDANCE);
        assert_eq!(client.metrics(), (0, 1));
    }

    #[tokio::test]
    async fn unreachable_service_yields_fallback() {
        let client = AdvisoryClient::new(Some("test-key".into()))
            .with_endpoint("http://127.0.0.1:1/v1beta/models/test:generateContent");
        let answer = client.request_guidance("What is NDVI?").await;
        assert_eq!(answer, FALLBACK_GUIDANCE);
    }

    #[tokio::test]
    async fn service_text_is_returned_verbatim() {
        let endpoint = serve_once(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"NDVI contrasts NIR and red reflectance."}]}}]}"#,
        );
        let client = AdvisoryClient::new(Some("test-key".into())).with_endpoint(endpoint);
        let answer = client.request_guidance("What is NDVI?").await;
        assert_eq!(answer, "NDVI contrasts NIR and red reflectance.");
        assert_eq!(client.metrics(), (1, 0));
    }

    #[test]
    fn spectral_prompt_names_index_and_region() {
        let prompt = spectral_prompt(SpectralIndex::Mndwi, &REGIONS[0]);
        assert!(prompt.contains("MNDWI"));
        assert!(prompt.contains("Lamu Archipelago"));
        assert!(prompt.contains("Sentinel-2 Level-2A"));
    }
}
