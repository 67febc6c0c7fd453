//! Client for the remote episode generation service.
//!
//! One endpoint, one call: POST the episode configuration as JSON, get the
//! rendered episode audio back as a byte blob. No retries and no partial
//! results; anything other than a 2xx with a non-empty body is an error
//! the screen turns into a status line.
//!
//! The blocking client is intended to run on a worker thread; the screen
//! owns the thread and the channel the outcome travels back on.

use crate::episode_form::{EpisodeDraft, Host};
use crate::segment_mix::SegmentMix;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a generation request
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("generation service returned HTTP {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("generation service returned an empty body")]
    EmptyBody,
}

/// JSON body of the generate call
#[derive(Debug, Serialize)]
pub struct EpisodeRequest {
    pub topics: Vec<String>,
    pub hosts: Vec<Host>,
    pub style: String,
    pub segments: serde_json::Map<String, serde_json::Value>,
}

impl EpisodeRequest {
    /// Assemble the request from the validated form and the current mix
    pub fn new(draft: &EpisodeDraft, mix: &SegmentMix) -> Self {
        let mut segments = serde_json::Map::new();
        for (name, pct) in mix.entries() {
            segments.insert(name.clone(), serde_json::json!(pct));
        }
        Self {
            topics: draft.topics.clone(),
            hosts: draft.hosts.clone(),
            style: draft.style.clone(),
            segments,
        }
    }
}

/// Rendered episode audio as returned by the service
#[derive(Clone, Debug)]
pub struct GeneratedAudio {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl GeneratedAudio {
    /// File extension for saving, derived from the response content type.
    /// Unknown types default to mp3, matching what the service normally
    /// renders.
    pub fn suggested_extension(&self) -> &'static str {
        match self.content_type.as_deref() {
            Some(ct) if ct.contains("wav") => "wav",
            Some(ct) if ct.contains("ogg") => "ogg",
            _ => "mp3",
        }
    }
}

/// Blocking HTTP client for the generate endpoint
pub struct GenerateClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl GenerateClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GenerateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("Radio Studio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerateError::Client(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Submit an episode and wait for the rendered audio
    pub fn generate(&self, request: &EpisodeRequest) -> Result<GeneratedAudio, GenerateError> {
        ::log::info!(
            "Requesting episode from {} ({} topics, {} hosts)",
            self.endpoint,
            request.topics.len(),
            request.hosts.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| GenerateError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .map_err(|e| GenerateError::Body(e.to_string()))?;
        if bytes.is_empty() {
            return Err(GenerateError::EmptyBody);
        }

        ::log::info!(
            "Received {} bytes of episode audio ({})",
            bytes.len(),
            content_type.as_deref().unwrap_or("unknown content type")
        );

        Ok(GeneratedAudio {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episode_form::{DEFAULT_HOSTS, DEFAULT_STYLE, DEFAULT_TOPICS};

    #[test]
    fn test_request_body_shape() {
        let draft =
            EpisodeDraft::from_inputs(DEFAULT_TOPICS, DEFAULT_HOSTS, DEFAULT_STYLE).unwrap();
        let mix = SegmentMix::default_episode();
        let request = EpisodeRequest::new(&draft, &mix);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["topics"][0], "AI ethics");
        assert_eq!(body["hosts"][0]["name"], "Maya");
        assert_eq!(body["hosts"][0]["persona"], "sarcastic film geek");
        assert_eq!(body["style"], "chill night radio");
        assert_eq!(body["segments"]["topic"], 50.0);
        assert_eq!(body["segments"].as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_suggested_extension() {
        let audio = |ct: Option<&str>| GeneratedAudio {
            bytes: vec![0],
            content_type: ct.map(str::to_string),
        };

        assert_eq!(audio(Some("audio/wav")).suggested_extension(), "wav");
        assert_eq!(audio(Some("audio/x-wav")).suggested_extension(), "wav");
        assert_eq!(audio(Some("audio/mpeg")).suggested_extension(), "mp3");
        assert_eq!(audio(Some("audio/ogg")).suggested_extension(), "ogg");
        assert_eq!(audio(None).suggested_extension(), "mp3");
    }
}
