//! HTTP client for the dictionary service

use super::protocol::{ValidationResponse, VALIDATE_PATH};
use crate::error::DictionaryError;
use crate::game::dictionary::DictionaryClient;
use log::{debug, warn};
use reqwest::Url;
use std::time::Duration;

/// Default dictionary service address
pub const DEFAULT_DICTIONARY_URL: &str = "http://localhost:3000";

/// Give up on a lookup after this long
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Talks to a dictionary service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpDictionary {
    /// Create a client for the service at `base_url`
    ///
    /// The URL may include a path prefix, e.g. "http://host:3000/api".
    pub fn new(base_url: &str) -> Result<Self, DictionaryError> {
        let base_url =
            Url::parse(base_url).map_err(|e| DictionaryError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Full request URL for `word`, percent-encoding it as one path segment
    pub fn word_url(&self, word: &str) -> Result<Url, DictionaryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DictionaryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(VALIDATE_PATH)
            .push(word);
        Ok(url)
    }

    /// Ask the service about `word`, surfacing every failure
    pub async fn lookup(&self, word: &str) -> Result<bool, DictionaryError> {
        let url = self.word_url(word)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DictionaryError::Status(status));
        }
        let body: ValidationResponse = response.json().await?;
        Ok(body.exists)
    }
}

impl DictionaryClient for HttpDictionary {
    /// Fail-closed: errors count as "not a word"
    async fn exists(&self, word: &str) -> bool {
        match self.lookup(word).await {
            Ok(exists) => {
                debug!("dictionary: {} -> {}", word, exists);
                exists
            }
            Err(e) => {
                warn!("error validating word {}: {}", word, e);
                false
            }
        }
    }
}
