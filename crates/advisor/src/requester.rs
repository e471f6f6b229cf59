//! The HTTP side of the advice flow.

use engine::LedgerEntry;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::{settings::AdvisorSettings, snapshot::Snapshot};

/// Reply when no advisor section is configured.
const NOT_CONFIGURED: &str = "Sorry, the advice service is not configured.";
/// Reply when the service cannot be reached or answers with an error.
const SERVICE_FAILED: &str = "Something went wrong while reaching the advice service.";
/// Reply when the service answers but produces no usable text.
const NO_ADVICE: &str = "Could not come up with any advice right now.";

#[derive(Debug)]
enum RequestError {
    BadEndpoint(String),
    Status(StatusCode),
    Transport(reqwest::Error),
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: ReplyContent,
}

#[derive(Default, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

/// Client for the external text-generation service.
///
/// All failure paths resolve to one of the fixed reply strings; the caller
/// never sees an error. Dropping the returned future abandons the in-flight
/// call, so a consumer that loses interest can simply stop polling.
#[derive(Clone, Debug)]
pub struct AdviceRequester {
    http: reqwest::Client,
    settings: Option<AdvisorSettings>,
}

impl AdviceRequester {
    /// Build a requester from the optional advisor settings.
    #[must_use]
    pub fn new(settings: Option<AdvisorSettings>) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// Ask the service for a short prose summary of the user's position.
    pub async fn request_advice(&self, entries: &[LedgerEntry], display_name: &str) -> String {
        let Some(settings) = self.settings.as_ref().filter(|s| !s.api_key.is_empty()) else {
            return NOT_CONFIGURED.to_string();
        };

        let prompt = Snapshot::collect(entries, display_name).prompt();
        match self.generate(settings, &prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => NO_ADVICE.to_string(),
            Err(err) => {
                tracing::warn!("advice request failed: {err:?}");
                SERVICE_FAILED.to_string()
            }
        }
    }

    async fn generate(
        &self,
        settings: &AdvisorSettings,
        prompt: &str,
    ) -> Result<String, RequestError> {
        let base = Url::parse(&settings.endpoint)
            .map_err(|err| RequestError::BadEndpoint(err.to_string()))?;
        let endpoint = base
            .join(&format!("v1beta/models/{}:generateContent", settings.model))
            .map_err(|err| RequestError::BadEndpoint(err.to_string()))?;

        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let res = self
            .http
            .post(endpoint)
            .header("x-goog-api-key", &settings.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(RequestError::Transport)?;

        if !res.status().is_success() {
            return Err(RequestError::Status(res.status()));
        }

        let reply = res
            .json::<GenerateResponse>()
            .await
            .map_err(RequestError::Transport)?;

        let text = reply
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_requester_answers_with_fixed_reply() {
        let requester = AdviceRequester::new(None);
        let reply = requester.request_advice(&[], "Alice").await;
        assert_eq!(reply, NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn blank_api_key_counts_as_unconfigured() {
        let requester = AdviceRequester::new(Some(AdvisorSettings {
            api_key: String::new(),
            endpoint: "https://example.invalid/".to_string(),
            model: "advice-model".to_string(),
        }));
        let reply = requester.request_advice(&[], "Alice").await;
        assert_eq!(reply, NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn unreachable_service_collapses_to_fixed_reply() {
        let requester = AdviceRequester::new(Some(AdvisorSettings {
            api_key: "key".to_string(),
            endpoint: "https://example.invalid/".to_string(),
            model: "advice-model".to_string(),
        }));
        let reply = requester.request_advice(&[], "Alice").await;
        assert_eq!(reply, SERVICE_FAILED);
    }

    #[tokio::test]
    async fn bad_endpoint_collapses_to_fixed_reply() {
        let requester = AdviceRequester::new(Some(AdvisorSettings {
            api_key: "key".to_string(),
            endpoint: "not a url".to_string(),
            model: "advice-model".to_string(),
        }));
        let reply = requester.request_advice(&[], "Alice").await;
        assert_eq!(reply, SERVICE_FAILED);
    }
}
