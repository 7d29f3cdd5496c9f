//! Company registry tool definitions.

use std::collections::HashMap;

use crate::recherche_entreprises::SearchRequest;
use crate::tools::registry::{ToolMetadata, ToolName};

pub fn register(registry: &mut HashMap<ToolName, ToolMetadata>) {
    let tools = [search_companies()];
    for tool in tools {
        registry.insert(tool.name, tool);
    }
}

fn search_companies() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::SearchCompanies,
        description: "Rechercher des entreprises via l'API recherche-entreprises.api.gouv.fr",
        parameters: search_companies_parameters,
    }
}

/// Input schema generated from `SearchRequest`
fn search_companies_parameters() -> serde_json::Value {
    let schema = schemars::schema_for!(SearchRequest);
    serde_json::to_value(schema).unwrap_or_else(|_| {
        serde_json::json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        })
    })
}
