//! Normalized company records built from raw API results.

use super::responses::{Dirigeant, SearchResponse, UpstreamCompany, first_text, value_text};

/// Display-ready projection of one search result.
///
/// `None` means no usable upstream value; rendering substitutes a
/// placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyRecord {
    pub name: Option<String>,
    pub siren: Option<String>,
    pub head_office_siret: Option<String>,
    pub legal_form: Option<String>,
    pub main_activity: Option<String>,
    pub main_activity_section: Option<String>,
    pub category: Option<String>,
    pub legal_nature: Option<String>,
    pub workforce_bracket: Option<String>,
    pub category_year: Option<String>,
    pub head_office_address: Option<String>,
    pub status: Option<String>,
    pub creation_date: Option<String>,
    pub establishment_count: Option<String>,
    pub open_establishment_count: Option<String>,
    /// Comma-separated directors; empty when none are listed
    pub directors: String,
}

impl From<&UpstreamCompany> for CompanyRecord {
    fn from(c: &UpstreamCompany) -> Self {
        let siege = c.siege.as_ref();

        Self {
            name: first_text(&[
                c.nom_raison_sociale.as_ref(),
                c.nom_entreprise.as_ref(),
                c.nom_complet.as_ref(),
            ]),
            siren: value_text(c.siren.as_ref()),
            head_office_siret: first_text(&[
                c.siret_siege_social.as_ref(),
                siege.and_then(|s| s.siret.as_ref()),
            ]),
            legal_form: value_text(c.forme_juridique.as_ref()),
            main_activity: value_text(c.activite_principale.as_ref()),
            main_activity_section: value_text(c.section_activite_principale.as_ref()),
            category: value_text(c.categorie_entreprise.as_ref()),
            legal_nature: value_text(c.nature_juridique.as_ref()),
            workforce_bracket: value_text(c.tranche_effectif_salarie.as_ref()),
            category_year: value_text(c.annee_categorie_entreprise.as_ref()),
            head_office_address: first_text(&[
                c.adresse_siege_social.as_ref(),
                siege.and_then(|s| s.adresse.as_ref()),
                siege.and_then(|s| s.geo_adresse.as_ref()),
            ]),
            status: first_text(&[c.statut_entreprise.as_ref(), c.etat_administratif.as_ref()]),
            creation_date: value_text(c.date_creation.as_ref()),
            establishment_count: value_text(c.nombre_etablissements.as_ref()),
            open_establishment_count: value_text(c.nombre_etablissements_ouverts.as_ref()),
            directors: join_directors(c.dirigeants.as_deref().unwrap_or_default()),
        }
    }
}

fn describe_director(d: &Dirigeant) -> String {
    let field = |v: &Option<serde_json::Value>| value_text(v.as_ref()).unwrap_or_default();
    format!(
        "{} {} ({}, date_de_naissance={})",
        field(&d.nom),
        field(&d.prenoms),
        field(&d.qualite),
        field(&d.date_de_naissance)
    )
}

fn join_directors(dirigeants: &[Dirigeant]) -> String {
    dirigeants
        .iter()
        .map(describe_director)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of one search: reported total plus the mapped records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub query: String,
    /// Upstream total as reported, or the row count when it is not usable
    pub total_results: String,
    pub companies: Vec<CompanyRecord>,
}

impl SearchResult {
    pub fn from_response(query: &str, response: &SearchResponse) -> Self {
        let companies: Vec<CompanyRecord> = response
            .results
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(CompanyRecord::from)
            .collect();

        // A missing or falsy total falls back to the number of rows returned
        let total_results = value_text(response.total_results.as_ref())
            .unwrap_or_else(|| companies.len().to_string());

        Self {
            query: query.to_string(),
            total_results,
            companies,
        }
    }
}
