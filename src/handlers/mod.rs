use crate::error::AppError;
use crate::models::{HealthResponse, SearchRequest, SearchResponse, AI_MODEL_NAME};
use crate::services::ncbi::LookupError;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};

/// Handle a gene search: validate, look up at NCBI, summarize, merge.
///
/// The two outbound calls run strictly in sequence; the summary prompt
/// depends on the lookup result. A summarization failure never fails the
/// request, it only degrades `ai_summary` to a fallback message.
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let gene_name = req.gene.trim().to_uppercase();
    if gene_name.is_empty() {
        return Err(AppError::Validation("Please enter a gene name".to_string()));
    }

    tracing::info!(gene = %gene_name, "Searching for gene");

    let record = state.ncbi.lookup(&gene_name).await.map_err(|e| match e {
        LookupError::NotFound => AppError::NotFound(e.to_string()),
        LookupError::Upstream(msg) => AppError::Upstream(msg),
    })?;

    let ai_summary = state.summarizer.summarize(&record).await;

    tracing::info!(gene = %record.symbol, gene_id = %record.gene_id, "Search completed");
    Ok(Json(SearchResponse::new(record, ai_summary)))
}

/// Liveness check. Constant, no dependencies.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "Server is running!",
        message: "Bio Re:code API v1.0",
        ai_model: AI_MODEL_NAME,
    })
}
