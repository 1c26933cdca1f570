use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::config::SanityConfig;
use crate::content::query::ContentQuery;
use crate::content::resolver::{ContentError, ContentSource};

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Value>,
}

/// Talks to the Sanity HTTP query API.
#[derive(Clone, Debug)]
pub struct SanityClient {
    project_id: String,
    dataset: String,
    api_version: String,
    use_cdn: bool,
}

impl SanityClient {
    /// Returns `None` for a placeholder configuration so no request is ever
    /// attempted against a project that does not exist.
    pub fn from_config(config: &SanityConfig) -> Option<Self> {
        if !config.is_configured() {
            return None;
        }
        Some(Self {
            project_id: config.project_id.trim().to_string(),
            dataset: config.dataset.clone(),
            api_version: config.api_version.clone(),
            use_cdn: config.use_cdn,
        })
    }

    pub fn query_url(&self, groq: &str) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{}.sanity.io/v{}/data/query/{}?query={}",
            self.project_id,
            host,
            self.api_version,
            self.dataset,
            urlencoding::encode(groq)
        )
    }

    async fn run(&self, query: ContentQuery) -> Result<Option<Value>, ContentError> {
        let url = self.query_url(query.groq());
        debug!("Querying Sanity for {}", query);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }
        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;
        Ok(body.result)
    }
}

impl ContentSource for SanityClient {
    fn fetch(&self, query: ContentQuery) -> LocalBoxFuture<'_, Result<Option<Value>, ContentError>> {
        Box::pin(self.run(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PLACEHOLDER_PROJECT_ID, SANITY_API_VERSION};

    fn config(project_id: &str, use_cdn: bool) -> SanityConfig {
        SanityConfig {
            project_id: project_id.to_string(),
            dataset: "production".to_string(),
            api_version: SANITY_API_VERSION.to_string(),
            use_cdn,
        }
    }

    #[test]
    fn placeholder_config_builds_no_client() {
        assert!(SanityClient::from_config(&config(PLACEHOLDER_PROJECT_ID, true)).is_none());
        assert!(SanityClient::from_config(&config("", true)).is_none());
    }

    #[test]
    fn query_url_targets_cdn_and_encodes_query() {
        let client = SanityClient::from_config(&config("abc123", true)).unwrap();
        let url = client.query_url(r#"*[_type == "faq"]"#);
        assert!(url.starts_with("https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production?query="));
        assert!(url.ends_with("%2A%5B_type%20%3D%3D%20%22faq%22%5D"));
    }

    #[test]
    fn query_url_uses_live_api_without_cdn() {
        let client = SanityClient::from_config(&config("abc123", false)).unwrap();
        assert!(client.query_url("*").starts_with("https://abc123.api.sanity.io/"));
    }

    #[test]
    fn response_without_result_decodes_to_none() {
        let body: QueryResponse = serde_json::from_str(r#"{"ms": 3, "query": "*"}"#).unwrap();
        assert!(body.result.is_none());
    }
}
