use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search term is empty")]
    Validation,
    #[error("missing {service} API key")]
    Config { service: &'static str },
    #[error("HTTP error! Status: {status}, Message: {body}")]
    Http { status: u16, body: String },
    #[error("no results found for this query")]
    EmptyResult,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response payload: {0}")]
    Decode(String),
    #[error("request cancelled")]
    Cancelled,
}

impl SearchError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SearchError::Network(format!("timeout: {err}"));
        }
        SearchError::Network(err.to_string())
    }
}
