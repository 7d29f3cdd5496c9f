//! Text rendering of search results for the assistant.

use std::fmt;

use super::company::{CompanyRecord, SearchResult};

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN_NAME: &str = "Nom inconnu";

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_AVAILABLE)
}

impl fmt::Display for CompanyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🏢 **{}**", self.name.as_deref().unwrap_or(UNKNOWN_NAME))?;
        writeln!(f, "SIREN: {}", or_na(&self.siren))?;
        writeln!(f, "SIRET siège: {}", or_na(&self.head_office_siret))?;
        writeln!(f, "Forme juridique: {}", or_na(&self.legal_form))?;
        writeln!(f, "Activité principale: {}", or_na(&self.main_activity))?;
        writeln!(f, "Section activité principale: {}", or_na(&self.main_activity_section))?;
        writeln!(f, "Catégorie: {}", or_na(&self.category))?;
        writeln!(f, "Nature juridique: {}", or_na(&self.legal_nature))?;
        writeln!(f, "Tranche effectif salarié: {}", or_na(&self.workforce_bracket))?;
        writeln!(f, "Année catégorie entreprise: {}", or_na(&self.category_year))?;
        writeln!(f, "Adresse siège: {}", or_na(&self.head_office_address))?;
        writeln!(f, "Statut: {}", or_na(&self.status))?;
        writeln!(f, "Date de création: {}", or_na(&self.creation_date))?;
        writeln!(
            f,
            "Nombre d'établissements: {} (ouverts: {})",
            or_na(&self.establishment_count),
            or_na(&self.open_establishment_count)
        )?;
        if !self.directors.is_empty() {
            writeln!(f, "Dirigeants: {}", self.directors)?;
        }
        write!(f, "---")
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Résultats de recherche d'entreprise pour \"{}\" ({} résultats):\n\n",
            self.query, self.total_results
        )?;
        for (i, company) in self.companies.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", company)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::responses::SearchResponse;
    use super::*;
    use serde_json::json;

    fn render(query: &str, response: serde_json::Value) -> String {
        let response: SearchResponse = serde_json::from_value(response).unwrap();
        SearchResult::from_response(query, &response).to_string()
    }

    #[test]
    fn test_empty_results() {
        let text = render("introuvable", json!({ "results": [], "total_results": 0 }));
        assert_eq!(
            text,
            "Résultats de recherche d'entreprise pour \"introuvable\" (0 résultats):\n\n"
        );
        assert!(!text.contains("🏢"));
    }

    #[test]
    fn test_full_record_block() {
        let text = render(
            "la poste",
            json!({
                "results": [{
                    "nom_raison_sociale": "LA POSTE",
                    "siren": "356000000",
                    "siret_siege_social": "35600000000048",
                    "forme_juridique": "5510",
                    "activite_principale": "53.10Z",
                    "section_activite_principale": "H",
                    "categorie_entreprise": "GE",
                    "nature_juridique": "5510",
                    "tranche_effectif_salarie": "53",
                    "annee_categorie_entreprise": "2021",
                    "adresse_siege_social": "9 RUE DU COLONEL PIERRE AVIA 75015 PARIS 15",
                    "etat_administratif": "A",
                    "date_creation": "1991-01-01",
                    "nombre_etablissements": 17000,
                    "nombre_etablissements_ouverts": 9000,
                    "dirigeants": [
                        { "nom": "Martin", "prenoms": "Jean", "qualite": "Gérant", "date_de_naissance": "1980-01" }
                    ]
                }],
                "total_results": 1
            }),
        );

        let expected = "Résultats de recherche d'entreprise pour \"la poste\" (1 résultats):\n\n\
            🏢 **LA POSTE**\n\
            SIREN: 356000000\n\
            SIRET siège: 35600000000048\n\
            Forme juridique: 5510\n\
            Activité principale: 53.10Z\n\
            Section activité principale: H\n\
            Catégorie: GE\n\
            Nature juridique: 5510\n\
            Tranche effectif salarié: 53\n\
            Année catégorie entreprise: 2021\n\
            Adresse siège: 9 RUE DU COLONEL PIERRE AVIA 75015 PARIS 15\n\
            Statut: A\n\
            Date de création: 1991-01-01\n\
            Nombre d'établissements: 17000 (ouverts: 9000)\n\
            Dirigeants: Martin Jean (Gérant, date_de_naissance=1980-01)\n\
            ---";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let text = render("x", json!({ "results": [{ "nom_complet": "COMPLET" }] }));
        assert!(text.contains("(1 résultats)"));
        assert!(text.contains("🏢 **COMPLET**\n"));
        assert!(text.contains("SIREN: N/A\n"));
        assert!(text.contains("Nombre d'établissements: N/A (ouverts: N/A)\n"));
        assert!(!text.contains("Dirigeants:"));
        assert!(text.ends_with("---"));

        let text = render("x", json!({ "results": [{}] }));
        assert!(text.contains("🏢 **Nom inconnu**\n"));
    }

    #[test]
    fn test_records_are_separated_by_blank_line() {
        let text = render(
            "x",
            json!({ "results": [{ "siren": "1" }, { "siren": "2" }], "total_results": 2 }),
        );
        assert_eq!(text.matches("---").count(), 2);
        assert!(text.contains("---\n\n🏢 **Nom inconnu**"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let fixture = json!({
            "results": [{ "nom_entreprise": "ACME", "dirigeants": [{ "nom": "A" }] }],
            "total_results": 3
        });
        assert_eq!(render("acme", fixture.clone()), render("acme", fixture));
    }
}
