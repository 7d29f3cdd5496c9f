//! Response types for the company registry API.
//!
//! Scalar fields are kept as raw JSON values: the API mixes strings,
//! integers and nulls for the same field across records.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<UpstreamCompany>>,
    #[serde(default)]
    pub total_results: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamCompany {
    pub nom_raison_sociale: Option<Value>,
    pub nom_entreprise: Option<Value>,
    pub nom_complet: Option<Value>,
    pub siren: Option<Value>,
    pub siret_siege_social: Option<Value>,
    pub forme_juridique: Option<Value>,
    pub activite_principale: Option<Value>,
    pub section_activite_principale: Option<Value>,
    pub categorie_entreprise: Option<Value>,
    pub nature_juridique: Option<Value>,
    pub tranche_effectif_salarie: Option<Value>,
    pub annee_categorie_entreprise: Option<Value>,
    pub adresse_siege_social: Option<Value>,
    pub statut_entreprise: Option<Value>,
    pub etat_administratif: Option<Value>,
    pub date_creation: Option<Value>,
    pub nombre_etablissements: Option<Value>,
    pub nombre_etablissements_ouverts: Option<Value>,
    #[serde(default)]
    pub siege: Option<Siege>,
    #[serde(default)]
    pub dirigeants: Option<Vec<Dirigeant>>,
}

/// Registered office establishment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Siege {
    pub siret: Option<Value>,
    pub adresse: Option<Value>,
    pub geo_adresse: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dirigeant {
    pub nom: Option<Value>,
    pub prenoms: Option<Value>,
    pub qualite: Option<Value>,
    pub date_de_naissance: Option<Value>,
}

/// Text of a JSON value, or `None` when it carries nothing worth showing.
///
/// Null, `false`, `""` and `0` are all treated as missing.
pub(crate) fn value_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// First field in `candidates` that has text
pub(crate) fn first_text(candidates: &[Option<&Value>]) -> Option<String> {
    candidates.iter().find_map(|value| value_text(*value))
}
