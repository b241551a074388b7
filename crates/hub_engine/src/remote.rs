use hub_logging::hub_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ApiKey, SearchError, SearchSettings};

/// Upper bound on entries requested from either service.
pub const RESULT_CAP: usize = 6;

/// One upstream search API: where to send the request, which query
/// parameters it takes and how its JSON payload maps to result records.
pub trait SearchEndpoint: Send + Sync {
    type Payload: DeserializeOwned;
    type Item;

    /// Service name used in configuration errors.
    const SERVICE: &'static str;

    fn endpoint(&self) -> &str;

    /// Turns user input into the effective search term, or rejects it.
    fn search_term(&self, query: &str) -> Result<String, SearchError>;

    fn query_params(&self, term: &str, api_key: &str) -> Vec<(&'static str, String)>;

    /// Maps the payload in server order. Absent lists map to an empty `Vec`.
    fn map_payload(&self, payload: Self::Payload) -> Vec<Self::Item>;
}

/// Fetch-and-map pipeline shared by every [`SearchEndpoint`].
#[derive(Debug, Clone)]
pub struct RemoteSearch {
    client: reqwest::Client,
}

impl RemoteSearch {
    pub fn new(settings: &SearchSettings) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(SearchError::from_reqwest)?;
        Ok(Self { client })
    }

    /// Runs one search. Input and credential checks happen before any network traffic.
    pub async fn run<E: SearchEndpoint>(
        &self,
        endpoint: &E,
        query: &str,
        api_key: Option<&ApiKey>,
    ) -> Result<Vec<E::Item>, SearchError> {
        let term = endpoint.search_term(query)?;
        let api_key = api_key
            .filter(|key| !key.is_blank())
            .ok_or(SearchError::Config {
                service: E::SERVICE,
            })?;

        let url = build_url(
            endpoint.endpoint(),
            &endpoint.query_params(&term, api_key.expose()),
        )?;
        hub_debug!("{} search term={:?}", E::SERVICE, term);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SearchError::from_reqwest)?;
        let status = response.status();
        let body = response.text().await.map_err(SearchError::from_reqwest)?;
        if !status.is_success() {
            return Err(SearchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let payload: E::Payload =
            serde_json::from_str(&body).map_err(|err| SearchError::Decode(err.to_string()))?;
        let items = endpoint.map_payload(payload);
        if items.is_empty() {
            return Err(SearchError::EmptyResult);
        }
        hub_debug!("{} search returned {} entries", E::SERVICE, items.len());
        Ok(items)
    }
}

fn build_url(endpoint: &str, params: &[(&'static str, String)]) -> Result<Url, SearchError> {
    let mut url = Url::parse(endpoint)
        .map_err(|err| SearchError::Network(format!("invalid endpoint {endpoint}: {err}")))?;
    url.query_pairs_mut()
        .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
    Ok(url)
}
