//! Search request parameters and query-string construction.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

/// How optional filters are judged "supplied" when building the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPresence {
    /// `false` and empty strings count as not supplied
    #[default]
    Truthy,
    /// Every supplied value is sent, including `false` and empty strings
    Explicit,
}

impl FilterPresence {
    fn keeps_text(self, value: &str) -> bool {
        self == FilterPresence::Explicit || !value.is_empty()
    }

    fn keeps_flag(self, value: bool) -> bool {
        self == FilterPresence::Explicit || value
    }
}

/// Arguments of the `search_companies` tool
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct SearchRequest {
    /// Company name search; empty means no name filter
    #[schemars(description = "Recherche par nom (chaîne vide pour ne pas filtrer par nom)")]
    pub query: String,

    #[serde(default = "default_page", deserialize_with = "lenient_int")]
    #[schemars(with = "i64", description = "Numéro de page (optionnel, défaut 1)")]
    pub page: i64,

    #[serde(default = "default_page_size", deserialize_with = "lenient_int")]
    #[schemars(
        with = "i64",
        description = "Nombre de résultats par page (optionnel, défaut 10)"
    )]
    pub page_size: i64,

    #[serde(default)]
    #[schemars(description = "Code NAF/APE (optionnel)")]
    pub activite_principale: Option<String>,

    #[serde(default)]
    #[schemars(description = "Catégorie d'entreprise (optionnel : PME, ETI, GE)")]
    pub categorie_entreprise: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "Département français sur 2 chiffres (optionnel, 1 ou plusieurs, liste séparée par des virgules)"
    )]
    pub departement: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "Code postal de 5 chiffres (optionnel, 1 ou plusieurs codes postaux, liste séparée par des virgules)"
    )]
    pub code_postal: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "Tranche d'effectif salarié INSEE (optionnel : 00 : 0 salarié, 01 : 1 ou 2 salariés, 02 : 3 à 5 salariés, 03 : 6 à 9 salariés, 11 : 10 à 19 salariés, 12 : 20 à 49 salariés, 21 : 50 à 99 salariés, 22 : 100 à 199 salariés, 31 : 200 à 249 salariés, 32 : 250 à 499 salariés, 41 : 500 à 999 salariés, 42 : 1 000 à 1 999 salariés, 51 : 2 000 à 4 999 salariés, 52 : 5 000 à 9 999 salariés, 53 : 10 000 salariés et plus)"
    )]
    pub tranche_effectif_salarie: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    #[schemars(
        with = "Option<bool>",
        description = "Est une association (optionnel)"
    )]
    pub est_association: Option<bool>,

    #[serde(default, deserialize_with = "lenient_bool")]
    #[schemars(
        with = "Option<bool>",
        description = "Uniquement les entreprises ayant un établissement certifié par l'agence bio (optionnel)"
    )]
    pub est_bio: Option<bool>,

    #[serde(default, deserialize_with = "lenient_bool")]
    #[schemars(
        with = "Option<bool>",
        description = "Uniquement les entreprises ayant un établissement organisme de formation (optionnel)"
    )]
    pub est_organisme_formation: Option<bool>,

    #[serde(default, deserialize_with = "lenient_bool")]
    #[schemars(
        with = "Option<bool>",
        description = "Uniquement les entreprises ayant une certification de la marque « Qualiopi » (optionnel)"
    )]
    pub est_qualiopi: Option<bool>,
}

impl SearchRequest {
    /// Create a request with only the name query set
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: default_page(),
            page_size: default_page_size(),
            activite_principale: None,
            categorie_entreprise: None,
            departement: None,
            code_postal: None,
            tranche_effectif_salarie: None,
            est_association: None,
            est_bio: None,
            est_organisme_formation: None,
            est_qualiopi: None,
        }
    }

    /// Key/value pairs sent upstream, in a stable order.
    ///
    /// `q`, `page` and `per_page` are always present. Filters are appended
    /// only when supplied according to `presence`.
    pub fn query_pairs(&self, presence: FilterPresence) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("page", self.page.to_string()),
            ("per_page", self.page_size.to_string()),
        ];

        let text_filters = [
            ("activite_principale", &self.activite_principale),
            ("code_postal", &self.code_postal),
            ("departement", &self.departement),
            ("categorie_entreprise", &self.categorie_entreprise),
            ("tranche_effectif_salarie", &self.tranche_effectif_salarie),
        ];
        for (key, value) in text_filters {
            if let Some(value) = value.as_deref().filter(|v| presence.keeps_text(v)) {
                pairs.push((key, value.to_string()));
            }
        }

        let flag_filters = [
            ("est_association", self.est_association),
            ("est_bio", self.est_bio),
            ("est_organisme_formation", self.est_organisme_formation),
            ("est_qualiopi", self.est_qualiopi),
        ];
        for (key, value) in flag_filters {
            if let Some(value) = value.filter(|v| presence.keeps_flag(*v)) {
                pairs.push((key, value.to_string()));
            }
        }

        pairs
    }

    /// Percent-encoded query string (without the leading `?`)
    pub fn query_string(&self, presence: FilterPresence) -> String {
        self.query_pairs(presence)
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

/// Accepts an integer or a string holding one
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Text(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got \"{}\"", s))),
    }
}

/// Accepts a boolean, `"true"`/`"false"`, or null
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Text(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(serde::de::Error::custom(format!(
                "expected a boolean, got \"{}\"",
                s
            ))),
        },
    }
}
