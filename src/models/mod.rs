use serde::{Deserialize, Serialize};

/// Data source reported in every successful search response.
pub const DATA_SOURCE: &str = "NCBI Gene Database";

/// Human-readable name of the model reported to callers.
pub const AI_MODEL_NAME: &str = "Google Gemini 2.0 Flash";

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub gene: String,
}

/// Fully-populated gene record assembled from the NCBI eSummary document.
///
/// Every field carries a fallback value, so a lookup either yields a complete
/// record or an error; callers never see a partially-filled one.
#[derive(Debug, Clone)]
pub struct GeneRecord {
    pub symbol: String,
    pub gene_id: String,
    pub description: String,
    pub summary: String,
    pub chromosome: String,
    pub map_location: String,
    /// Comma-joined alias list, or "None" when the gene has no aliases.
    pub aliases: String,
    /// Comma-joined OMIM identifiers, or "Not available".
    pub mim_number: String,
    pub organism: String,
    pub gene_type: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub gene: String,
    pub gene_id: String,
    pub description: String,
    pub summary: String,
    pub chromosome: String,
    pub map_location: String,
    pub aliases: String,
    pub mim_number: String,
    pub organism: String,
    pub gene_type: String,
    pub ai_summary: String,
    pub source: &'static str,
    pub ai_model: &'static str,
}

impl SearchResponse {
    pub fn new(record: GeneRecord, ai_summary: String) -> Self {
        SearchResponse {
            success: true,
            gene: record.symbol,
            gene_id: record.gene_id,
            description: record.description,
            summary: record.summary,
            chromosome: record.chromosome,
            map_location: record.map_location,
            aliases: record.aliases,
            mim_number: record.mim_number,
            organism: record.organism,
            gene_type: record.gene_type,
            ai_summary,
            source: DATA_SOURCE,
            ai_model: AI_MODEL_NAME,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub ai_model: &'static str,
}
