use crate::domain::error::AnuvadError;
use crate::domain::model::TranslationRequest;
use crate::domain::traits::Translator;
use crate::infrastructure::config::RemoteConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Standing instructions sent with every remote call. The endpoint is an
/// LLM-backed translator, so the request spells out what must survive
/// translation untouched.
const INSTRUCTIONS: &str = "Translate the text for a real-estate listing website. \
Preserve numerals, units, and proper nouns exactly as written. \
Do not add content that is not present in the source.";

#[derive(Serialize)]
struct TranslatePayload<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    instructions: &'a str,
}

#[derive(Deserialize, Debug)]
struct TranslateResponse {
    translated: Option<String>,
    error: Option<String>,
}

/// HTTP client for the remote translation endpoint.
pub struct RemoteTranslator {
    client: Client,
    remote: RemoteConfig,
}

impl RemoteTranslator {
    pub fn new(client: Client, remote: RemoteConfig) -> Self {
        Self { client, remote }
    }
}

#[async_trait]
impl Translator for RemoteTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, AnuvadError> {
        let endpoint = self
            .remote
            .endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or_else(|| {
                AnuvadError::Config("Remote translation endpoint not configured".to_string())
            })?;

        let request_id = Uuid::new_v4();
        tracing::debug!(
            %request_id,
            target_lang = %request.target_lang,
            context = request.context.as_deref().unwrap_or(""),
            "dispatching remote translation"
        );

        let payload = TranslatePayload {
            text: &request.text,
            source_lang: &request.source_lang,
            target_lang: &request.target_lang,
            context: request.context.as_deref(),
            instructions: INSTRUCTIONS,
        };

        let mut http_request = self
            .client
            .post(endpoint)
            .timeout(Duration::from_secs(self.remote.timeout_secs))
            .json(&payload);

        if let Some(api_key) = self.remote.api_key.as_deref().filter(|k| !k.is_empty()) {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            return Err(AnuvadError::Api(format!(
                "Translation endpoint returned {}",
                response.status()
            )));
        }

        let body = response.json::<TranslateResponse>().await?;

        if let Some(error) = body.error {
            return Err(AnuvadError::Api(error));
        }

        match body.translated {
            Some(translated) if !translated.is_empty() || request.text.is_empty() => {
                tracing::debug!(%request_id, "remote translation succeeded");
                Ok(translated)
            }
            _ => Err(AnuvadError::Api(
                "Translation endpoint returned no usable text".to_string(),
            )),
        }
    }

    fn provider_tag(&self) -> &str {
        &self.remote.provider
    }
}
