//! Company registry API client implementation.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::error::RechercheEntreprisesError;
use super::request::{FilterPresence, SearchRequest};
use super::responses::SearchResponse;

/// Company registry search client
#[derive(Clone)]
pub struct RechercheEntreprisesClient {
    client: Client,
    base_url: String,
    filter_presence: FilterPresence,
}

impl RechercheEntreprisesClient {
    /// Create a new client for the API rooted at `base_url`
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, RechercheEntreprisesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            filter_presence: FilterPresence::default(),
        })
    }

    /// Choose how optional filters are judged present
    pub fn with_filter_presence(mut self, filter_presence: FilterPresence) -> Self {
        self.filter_presence = filter_presence;
        self
    }

    /// Full search URL for a request
    pub fn search_url(&self, request: &SearchRequest) -> String {
        format!(
            "{}/search?{}",
            self.base_url,
            request.query_string(self.filter_presence)
        )
    }

    /// Run one search against the registry
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, RechercheEntreprisesError> {
        let url = self.search_url(request);
        debug!(url = %url, "Querying company registry");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RechercheEntreprisesError::ApiError {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body = response.text().await?;
        let results: SearchResponse =
            serde_json::from_str(&body).map_err(RechercheEntreprisesError::InvalidResponse)?;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RechercheEntreprisesClient {
        RechercheEntreprisesClient::new(&server.uri(), 5, "test-agent").unwrap()
    }

    #[tokio::test]
    async fn test_search_sends_filters_and_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "boulangerie"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "5"))
            .and(query_param("code_postal", "94130"))
            .and(query_param("est_qualiopi", "true"))
            .and(query_param_is_missing("est_bio"))
            .and(query_param_is_missing("departement"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "nom_complet": "BOULANGERIE DU COIN", "siren": "123456789" }],
                "total_results": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = SearchRequest::new("boulangerie");
        request.page = 2;
        request.page_size = 5;
        request.code_postal = Some("94130".to_string());
        request.est_qualiopi = Some(true);
        request.est_bio = Some(false);

        let response = client_for(&server).search(&request).await.unwrap();
        let results = response.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].siren, Some(json!("123456789")));
    }

    #[tokio::test]
    async fn test_explicit_presence_sends_false_flags() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("est_bio", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = SearchRequest::new("");
        request.est_bio = Some(false);

        let client = client_for(&server).with_filter_presence(FilterPresence::Explicit);
        let response = client.search(&request).await.unwrap();
        assert!(response.results.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Too many requests"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search(&SearchRequest::new("x"))
            .await
            .unwrap_err();
        match err {
            RechercheEntreprisesError::ApiError { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Too many requests");
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search(&SearchRequest::new("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RechercheEntreprisesError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client =
            RechercheEntreprisesClient::new(&format!("http://127.0.0.1:{}", port), 5, "test-agent")
                .unwrap();
        let err = client.search(&SearchRequest::new("x")).await.unwrap_err();
        assert!(matches!(err, RechercheEntreprisesError::Request(_)));
    }
}
