use crate::config::{self, ServiceConfig};
use crate::core::{cleaner, wire};
use crate::domain::model::{Credential, EnhanceMode};
use crate::domain::ports::KeyStore;
use crate::utils::error::{EnhanceError, Result};
use reqwest::Client;

/// Client for the remote text-generation service. Owns the credential
/// lifecycle and normalizes every response through the cleaner.
///
/// Holds exactly one piece of mutable state, the cached credential, written
/// only by `initialize` and `save_api_key`. Callers are expected to serialize
/// operations; the client performs a single attempt per call, no retries.
pub struct EnhanceClient<S: KeyStore> {
    config: ServiceConfig,
    store: S,
    client: Client,
    api_key: Option<Credential>,
}

impl<S: KeyStore> EnhanceClient<S> {
    pub fn new(store: S, config: ServiceConfig) -> Self {
        Self {
            config,
            store,
            client: Client::new(),
            api_key: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Loads a previously saved credential. Returns whether one is present;
    /// absence is not an error.
    pub async fn initialize(&mut self) -> Result<bool> {
        self.api_key = self
            .store
            .get(config::API_KEY_STORAGE_KEY)
            .await?
            .map(Credential::new);
        Ok(self.api_key.is_some())
    }

    /// Syntactic check plus a live probe against the service. The probe goes
    /// out with the candidate key, the probe sentinel text and mode Basic;
    /// any probe failure is reported as a rejection. The candidate is
    /// measured as given; trimming user input is the caller's job.
    pub async fn validate_api_key(&self, candidate: &str) -> Result<()> {
        if candidate.chars().count() < config::MIN_API_KEY_LENGTH {
            return Err(EnhanceError::KeyFormatError {
                min_length: config::MIN_API_KEY_LENGTH,
            });
        }

        let credential = Credential::new(candidate);
        match self
            .request(&credential, config::PROBE_INPUT, EnhanceMode::Basic)
            .await
        {
            Ok(_) => Ok(()),
            Err(e) => Err(EnhanceError::KeyRejectedError {
                reason: e.to_string(),
            }),
        }
    }

    /// Persists the candidate as given and updates the cached credential.
    pub async fn save_api_key(&mut self, candidate: &str) -> Result<()> {
        self.store.set(config::API_KEY_STORAGE_KEY, candidate).await?;
        self.api_key = Some(Credential::new(candidate));
        tracing::info!("API key saved");
        Ok(())
    }

    /// Sends the prompt for enhancement and returns the cleaned result.
    pub async fn enhance(&self, prompt: &str, mode: EnhanceMode) -> Result<String> {
        let credential = self
            .api_key
            .as_ref()
            .ok_or(EnhanceError::NotConfiguredError)?;

        let trimmed = prompt.trim();
        let length = trimmed.chars().count();
        if length < self.config.min_input_length {
            return Err(EnhanceError::InputTooShortError {
                min_length: self.config.min_input_length,
            });
        }
        if length > self.config.max_input_length {
            // Upstream only flags this in the UI counter, so warn, don't fail.
            tracing::warn!(
                "prompt is {} chars, above the soft limit of {}",
                length,
                self.config.max_input_length
            );
        }

        let raw = self.request(credential, trimmed, mode).await?;
        Ok(cleaner::clean_response(&raw))
    }

    /// One generateContent call. The URL carries the key as a query
    /// parameter, so it must never be logged.
    async fn request(
        &self,
        credential: &Credential,
        text: &str,
        mode: EnhanceMode,
    ) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.config.base_url,
            self.config.model,
            credential.as_str()
        );
        let body = wire::build_request(text, mode);

        tracing::debug!(
            "sending generation request (model: {}, mode: {}, {} chars)",
            self.config.model,
            mode,
            text.chars().count()
        );

        let limit_ms = self.config.timeout.as_millis() as u64;
        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EnhanceError::TimeoutError { limit_ms }
                } else {
                    EnhanceError::ApiError(e)
                }
            })?;

        let status = response.status();
        tracing::debug!("service responded with status {}", status);

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.pointer("/error/message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(EnhanceError::RemoteError {
                status: status.as_u16(),
                message,
            });
        }

        let data: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                EnhanceError::TimeoutError { limit_ms }
            } else {
                EnhanceError::MalformedResponseError
            }
        })?;

        data.pointer("/candidates/0/content/parts/0/text")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(EnhanceError::MalformedResponseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Arc<Mutex<HashMap<String, String>>>,
    }

    impl KeyStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            let values = self.values.lock().await;
            Ok(values.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            let mut values = self.values.lock().await;
            values.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn client() -> EnhanceClient<MemoryStore> {
        EnhanceClient::new(MemoryStore::default(), ServiceConfig::default())
    }

    #[tokio::test]
    async fn enhance_without_credential_is_not_configured() {
        let client = client();
        let err = client
            .enhance("a perfectly reasonable prompt", EnhanceMode::Basic)
            .await
            .unwrap_err();
        assert!(matches!(err, EnhanceError::NotConfiguredError));
    }

    #[tokio::test]
    async fn enhance_rejects_short_input_before_any_network_call() {
        let mut client = client();
        client
            .save_api_key("0123456789abcdefghij")
            .await
            .unwrap();
        let err = client.enhance("  short  ", EnhanceMode::Basic).await.unwrap_err();
        assert!(matches!(
            err,
            EnhanceError::InputTooShortError { min_length: 10 }
        ));
    }

    #[tokio::test]
    async fn validate_rejects_empty_and_short_keys_without_probing() {
        let client = client();
        for candidate in ["", "   ", "tooshort"] {
            let err = client.validate_api_key(candidate).await.unwrap_err();
            assert!(matches!(
                err,
                EnhanceError::KeyFormatError { min_length: 20 }
            ));
        }
    }

    #[tokio::test]
    async fn validate_measures_the_candidate_as_given() {
        // Nineteen characters raw; the format gate fires before any probe,
        // and no trimming shrinks or rescues the candidate.
        let client = client();
        let err = client
            .validate_api_key("0123456789abcdefghi")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EnhanceError::KeyFormatError { min_length: 20 }
        ));
    }

    #[tokio::test]
    async fn initialize_reports_presence_and_caches_the_key() {
        let store = MemoryStore::default();
        store
            .set(config::API_KEY_STORAGE_KEY, "0123456789abcdefghij")
            .await
            .unwrap();

        let mut client = EnhanceClient::new(store, ServiceConfig::default());
        assert!(!client.is_configured());
        assert!(client.initialize().await.unwrap());
        assert!(client.is_configured());
    }

    #[tokio::test]
    async fn initialize_without_stored_key_reports_absence() {
        let mut client = client();
        assert!(!client.initialize().await.unwrap());
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn save_persists_and_a_fresh_client_sees_it() {
        let store = MemoryStore::default();
        let mut client = EnhanceClient::new(store.clone(), ServiceConfig::default());
        client
            .save_api_key("0123456789abcdefghij")
            .await
            .unwrap();
        assert!(client.is_configured());

        let mut fresh = EnhanceClient::new(store, ServiceConfig::default());
        assert!(fresh.initialize().await.unwrap());
    }
}
