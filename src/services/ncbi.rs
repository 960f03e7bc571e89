//! NCBI Gene lookup client.
//!
//! Resolves a gene symbol to an NCBI gene id with the eSearch endpoint, then
//! fetches the eSummary document and maps it into a fully-populated
//! [`GeneRecord`]. Both calls carry a fixed 10 second deadline and are never
//! retried.

use crate::models::GeneRecord;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Fixed deadline for each eutils call.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum LookupError {
    /// The search returned no matching gene id. An expected outcome for
    /// unknown symbols, not an upstream fault.
    #[error("Gene not found")]
    NotFound,

    /// Transport failure or a response shape eutils should not produce.
    #[error("{0}")]
    Upstream(String),
}

#[derive(Clone)]
pub struct NcbiClient {
    client: Client,
    base_url: String,
}

impl NcbiClient {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| LookupError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a normalized gene symbol and return its complete record.
    pub async fn lookup(&self, symbol: &str) -> Result<GeneRecord, LookupError> {
        let gene_id = self.search_gene_id(symbol).await?;
        tracing::debug!(%symbol, %gene_id, "Resolved gene id");

        let summary_body = self.fetch_summary(&gene_id).await?;
        record_from_summary(symbol, &gene_id, &summary_body)
    }

    async fn search_gene_id(&self, symbol: &str) -> Result<String, LookupError> {
        let term = format!("{}[Gene Name] AND human[Organism]", symbol);
        let response: EsearchResponse = self
            .client
            .get(format!("{}/esearch.fcgi", self.base_url))
            .query(&[("db", "gene"), ("term", &term), ("retmode", "json")])
            .send()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?;

        response
            .esearchresult
            .idlist
            .into_iter()
            .next()
            .ok_or(LookupError::NotFound)
    }

    async fn fetch_summary(&self, gene_id: &str) -> Result<Value, LookupError> {
        self.client
            .get(format!("{}/esummary.fcgi", self.base_url))
            .query(&[("db", "gene"), ("id", gene_id), ("retmode", "json")])
            .send()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))?
            .json()
            .await
            .map_err(|e| LookupError::Upstream(e.to_string()))
    }
}

/// Extract the per-gene document from an eSummary body and map it.
///
/// The `result` object is keyed by gene id and also carries a `uids` array,
/// so the document is picked out of a generic JSON value rather than
/// deserialized as a typed map.
fn record_from_summary(symbol: &str, gene_id: &str, body: &Value) -> Result<GeneRecord, LookupError> {
    let doc = body
        .get("result")
        .and_then(|r| r.get(gene_id))
        .cloned()
        .ok_or_else(|| {
            LookupError::Upstream(format!("eSummary response missing gene {}", gene_id))
        })?;

    let doc: GeneSummaryDoc = serde_json::from_value(doc)
        .map_err(|e| LookupError::Upstream(format!("Malformed eSummary document: {}", e)))?;

    Ok(GeneRecord {
        symbol: doc.name.unwrap_or_else(|| symbol.to_string()),
        gene_id: gene_id.to_string(),
        description: doc
            .description
            .unwrap_or_else(|| "No description available".to_string()),
        summary: doc
            .summary
            .unwrap_or_else(|| "No summary available".to_string()),
        chromosome: doc.chromosome.unwrap_or_else(|| "Unknown".to_string()),
        map_location: doc.maplocation.unwrap_or_else(|| "Unknown".to_string()),
        aliases: join_aliases(doc.otheraliases),
        mim_number: join_mim_numbers(&doc.mim),
        organism: doc
            .organism
            .and_then(|o| o.scientificname)
            .unwrap_or_else(|| "Homo sapiens".to_string()),
        gene_type: doc.geneticsource.unwrap_or_else(|| "Unknown".to_string()),
    })
}

/// Render the alias field as one comma-joined display string.
///
/// eSummary serves `otheraliases` as a pre-joined string; a list form is
/// accepted as well. Empty either way renders as the literal "None".
fn join_aliases(aliases: Option<Aliases>) -> String {
    let joined = match aliases {
        Some(Aliases::Joined(s)) => s,
        Some(Aliases::List(items)) => items.join(", "),
        None => String::new(),
    };

    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

/// OMIM ids arrive as strings or numbers; render each with its string form.
fn join_mim_numbers(mim: &[Value]) -> String {
    if mim.is_empty() {
        return "Not available".to_string();
    }

    mim.iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// eutils response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct EsearchResponse {
    #[serde(default)]
    esearchresult: EsearchResult,
}

#[derive(Debug, Deserialize, Default)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeneSummaryDoc {
    name: Option<String>,
    description: Option<String>,
    summary: Option<String>,
    chromosome: Option<String>,
    maplocation: Option<String>,
    otheraliases: Option<Aliases>,
    #[serde(default)]
    mim: Vec<Value>,
    organism: Option<Organism>,
    geneticsource: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Aliases {
    Joined(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct Organism {
    scientificname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary_body(doc: Value) -> Value {
        json!({
            "header": {"type": "esummary", "version": "0.3"},
            "result": {
                "uids": ["672"],
                "672": doc
            }
        })
    }

    #[test]
    fn maps_fully_populated_document() {
        let body = summary_body(json!({
            "name": "BRCA1",
            "description": "BRCA1 DNA repair associated",
            "summary": "This gene encodes a nuclear phosphoprotein.",
            "chromosome": "17",
            "maplocation": "17q21.31",
            "otheraliases": "BRCAI, BRCC1, RNF53",
            "mim": ["113705"],
            "organism": {"scientificname": "Homo sapiens", "commonname": "human", "taxid": 9606},
            "geneticsource": "genomic"
        }));

        let record = record_from_summary("BRCA1", "672", &body).unwrap();
        assert_eq!(record.symbol, "BRCA1");
        assert_eq!(record.gene_id, "672");
        assert_eq!(record.description, "BRCA1 DNA repair associated");
        assert_eq!(record.chromosome, "17");
        assert_eq!(record.map_location, "17q21.31");
        assert_eq!(record.aliases, "BRCAI, BRCC1, RNF53");
        assert_eq!(record.mim_number, "113705");
        assert_eq!(record.organism, "Homo sapiens");
        assert_eq!(record.gene_type, "genomic");
    }

    #[test]
    fn applies_fallbacks_for_missing_fields() {
        let body = summary_body(json!({}));

        let record = record_from_summary("BRCA1", "672", &body).unwrap();
        assert_eq!(record.symbol, "BRCA1");
        assert_eq!(record.description, "No description available");
        assert_eq!(record.summary, "No summary available");
        assert_eq!(record.chromosome, "Unknown");
        assert_eq!(record.map_location, "Unknown");
        assert_eq!(record.aliases, "None");
        assert_eq!(record.mim_number, "Not available");
        assert_eq!(record.organism, "Homo sapiens");
        assert_eq!(record.gene_type, "Unknown");
    }

    #[test]
    fn joins_alias_list_and_numeric_mim_ids() {
        let body = summary_body(json!({
            "name": "TP53",
            "otheraliases": ["P53", "LFS1"],
            "mim": [191170, "151623"]
        }));

        let record = record_from_summary("TP53", "672", &body).unwrap();
        assert_eq!(record.aliases, "P53, LFS1");
        assert_eq!(record.mim_number, "191170, 151623");
    }

    #[test]
    fn empty_alias_string_renders_as_none() {
        let body = summary_body(json!({"otheraliases": ""}));

        let record = record_from_summary("BRCA1", "672", &body).unwrap();
        assert_eq!(record.aliases, "None");
    }

    #[test]
    fn missing_document_is_an_upstream_error() {
        let body = json!({"result": {"uids": ["999"]}});

        let err = record_from_summary("BRCA1", "672", &body).unwrap_err();
        assert!(matches!(err, LookupError::Upstream(_)));
    }
}
