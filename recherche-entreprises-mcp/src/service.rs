//! Company search service shared by every transport.

use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::error::ServiceResult;
use crate::recherche_entreprises::{RechercheEntreprisesClient, SearchRequest, SearchResult};

/// Stateless search service; holds only the immutable HTTP client
pub struct SearchService {
    pub client: RechercheEntreprisesClient,
}

impl SearchService {
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        let client = RechercheEntreprisesClient::new(
            &config.upstream.base_url,
            config.upstream.timeout_secs,
            &config.upstream.user_agent,
        )?
        .with_filter_presence(config.search.filter_presence);

        Ok(Self { client })
    }

    /// Search the registry and map the results
    pub async fn search(&self, request: &SearchRequest) -> ServiceResult<SearchResult> {
        info!(
            query = %request.query,
            page = request.page,
            page_size = request.page_size,
            "Searching companies"
        );

        let response = self.client.search(request).await.inspect_err(|e| {
            warn!(error = %e, "Company registry request failed");
        })?;

        let result = SearchResult::from_response(&request.query, &response);
        info!(
            total = %result.total_results,
            returned = result.companies.len(),
            "Company search completed"
        );
        Ok(result)
    }
}
