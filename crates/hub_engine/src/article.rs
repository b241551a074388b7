use serde::Deserialize;

use crate::remote::RESULT_CAP;
use crate::{ArticleResult, SearchEndpoint, SearchError, SearchSettings};

/// Topic searched when the news box is left empty.
pub const DEFAULT_TOPIC: &str = "finance";

/// Shown in place of an article's missing description.
pub const MISSING_DESCRIPTION: &str = "No description available.";

/// NewsAPI `everything` endpoint, English articles by relevancy.
#[derive(Debug, Clone)]
pub struct ArticleSearch {
    endpoint: String,
    default_topic: String,
}

impl ArticleSearch {
    pub fn new(endpoint: impl Into<String>, default_topic: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            default_topic: default_topic.into(),
        }
    }

    pub fn from_settings(settings: &SearchSettings) -> Self {
        Self::new(
            settings.article_endpoint.clone(),
            settings.default_topic.clone(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticlePayload {
    #[serde(default)]
    articles: Option<Vec<RawArticle>>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl SearchEndpoint for ArticleSearch {
    type Payload = ArticlePayload;
    type Item = ArticleResult;

    const SERVICE: &'static str = "News";

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn search_term(&self, query: &str) -> Result<String, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            Ok(self.default_topic.clone())
        } else {
            Ok(query.to_string())
        }
    }

    fn query_params(&self, term: &str, api_key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", term.to_string()),
            ("language", "en".to_string()),
            ("sortBy", "relevancy".to_string()),
            ("apiKey", api_key.to_string()),
            ("pageSize", RESULT_CAP.to_string()),
        ]
    }

    fn map_payload(&self, payload: ArticlePayload) -> Vec<ArticleResult> {
        payload
            .articles
            .unwrap_or_default()
            .into_iter()
            .take(RESULT_CAP)
            .map(|article| ArticleResult {
                title: article.title.unwrap_or_default(),
                description: article
                    .description
                    .filter(|text| !text.trim().is_empty())
                    .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
                url: article.url.unwrap_or_default(),
            })
            .collect()
    }
}
