//! Recherche d'entreprises API integration.
//!
//! This module queries the public company registry search service
//! (https://recherche-entreprises.api.gouv.fr) and reshapes its results into
//! a text summary suitable for an assistant.

mod client;
mod company;
mod error;
mod format;
mod request;
mod responses;

pub use client::RechercheEntreprisesClient;
pub use company::{CompanyRecord, SearchResult};
pub use error::RechercheEntreprisesError;
pub use request::{FilterPresence, SearchRequest};
pub use responses::SearchResponse;

/// Default base URL for the registry API
pub const DEFAULT_BASE_URL: &str = "https://recherche-entreprises.api.gouv.fr";
