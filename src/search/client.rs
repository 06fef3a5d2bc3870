use crate::types::{AppError, PaperRecord, PaperResultSet, Result, SearchOutcome};
use crate::utils::config::SearchConfig;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Field set requested from the upstream record.
const SEARCH_FIELDS: &str = "title,abstract,year,authors,url";

/// Client for the Semantic Scholar `paper/search` endpoint.
///
/// Issues one bounded, read-only GET per lookup (plus any configured
/// retries) and normalizes the response into a [`PaperResultSet`]. Any
/// failure is folded into [`SearchOutcome::Failed`] rather than raised: the
/// caller decides how loudly to surface it.
pub struct PaperSearchClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    limit: usize,
    retries: u32,
}

impl PaperSearchClient {
    /// Build a client from the search configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("quill/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            limit: config.limit,
            retries: config.retries,
        })
    }

    /// Look up papers matching `query`.
    ///
    /// Returns at most the configured limit of records, preserving upstream
    /// order. An empty or whitespace query short-circuits to zero results
    /// without touching the network. Lookup failures degrade to
    /// [`SearchOutcome::Failed`]; this method never returns an error.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::Results(PaperResultSet::default());
        }

        let mut attempt: u32 = 0;
        loop {
            match self.search_once(query).await {
                Ok(set) => {
                    tracing::debug!(papers = set.len(), "paper lookup succeeded");
                    return SearchOutcome::Results(set);
                }
                Err(reason) => {
                    if attempt >= self.retries {
                        tracing::warn!(%reason, "paper lookup failed");
                        return SearchOutcome::Failed { reason };
                    }
                    attempt += 1;
                    tracing::debug!(attempt, %reason, "retrying paper lookup");
                }
            }
        }
    }

    async fn search_once(&self, query: &str) -> std::result::Result<PaperResultSet, String> {
        let mut request = self
            .http
            .get(format!("{}/paper/search", self.base_url))
            .query(&[("query", query)])
            .query(&[("limit", self.limit)])
            .query(&[("fields", SEARCH_FIELDS)]);

        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }

        let text = response
            .text()
            .await
            .map_err(|e| format!("unreadable body: {}", e))?;
        let body: SearchResponse =
            serde_json::from_str(&text).map_err(|e| format!("undecodable payload: {}", e))?;

        // A well-formed body without a `data` array means the upstream
        // answered with zero matches, which is distinct from a failed lookup.
        let records = body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(ApiPaper::into_record)
            .collect();

        Ok(PaperResultSet::from_records(records, self.limit))
    }
}

// ============= Wire Types =============

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<Vec<ApiPaper>>,
}

#[derive(Debug, Deserialize)]
struct ApiPaper {
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    year: Option<i32>,
    authors: Option<Vec<ApiAuthor>>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiAuthor {
    name: Option<String>,
}

impl ApiPaper {
    fn into_record(self) -> PaperRecord {
        PaperRecord {
            title: self.title.unwrap_or_default(),
            abstract_text: self.abstract_text,
            year: self.year,
            authors: self
                .authors
                .unwrap_or_default()
                .into_iter()
                .filter_map(|a| a.name)
                .collect(),
            url: self.url,
        }
    }
}
