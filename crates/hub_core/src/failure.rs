/// The two independent search flows on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Video,
    Article,
}

/// Why a search did not produce results, as seen by the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// The user submitted an empty search term.
    EmptyQuery,
    /// The API key for the flow is not configured.
    MissingApiKey,
    /// The endpoint answered with a non-success status.
    Http { status: u16, body: String },
    /// The endpoint answered successfully but without any entries.
    NoResults,
    /// Transport or payload problem; carries a human-readable reason.
    Other(String),
}

impl SearchFailure {
    /// Renders the user-facing error line for `flow`.
    pub fn message(&self, flow: Flow) -> String {
        match (self, flow) {
            (SearchFailure::EmptyQuery, _) => "Please enter a search term.".to_string(),
            (SearchFailure::MissingApiKey, Flow::Video) => {
                "Invalid or missing YouTube API key. Please configure it in .env.".to_string()
            }
            (SearchFailure::MissingApiKey, Flow::Article) => {
                "Invalid or missing News API key. Please configure it in .env.".to_string()
            }
            (failure, Flow::Video) => {
                format!("Failed to fetch videos: {}. Please try again.", failure.reason(flow))
            }
            (failure, Flow::Article) => {
                format!("Failed to fetch news: {}. Please try again.", failure.reason(flow))
            }
        }
    }

    fn reason(&self, flow: Flow) -> String {
        match self {
            SearchFailure::Http { status, body } => {
                format!("HTTP error! Status: {status}, Message: {body}")
            }
            SearchFailure::NoResults => match flow {
                Flow::Video => "No videos found for this query".to_string(),
                Flow::Article => "No articles found for this query".to_string(),
            },
            SearchFailure::Other(reason) => reason.clone(),
            SearchFailure::EmptyQuery => "empty search term".to_string(),
            SearchFailure::MissingApiKey => "missing API key".to_string(),
        }
    }
}
