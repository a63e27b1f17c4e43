use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::document::actions::ResumeAction;
use crate::document::import::{import_template, linkedin_import, parse_import};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

#[derive(Debug, Deserialize)]
pub struct ApplyActionRequest {
    pub document: ResumeDocument,
    pub action: ResumeAction,
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub raw_json: String,
}

#[derive(Debug, Deserialize)]
pub struct LinkedinImportRequest {
    pub profile_url: String,
}

/// GET /api/v1/documents/new
pub async fn handle_new_document() -> Json<ResumeDocument> {
    Json(ResumeDocument::new())
}

/// POST /api/v1/documents/actions
pub async fn handle_apply_action(
    Json(req): Json<ApplyActionRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let ApplyActionRequest {
        mut document,
        action,
    } = req;
    debug!("Applying resume action: {action:?}");
    document.apply(action, Utc::now()).map_err(|e| {
        warn!("Rejected resume action: {e}");
        AppError::from(e)
    })?;
    Ok(Json(document))
}

/// POST /api/v1/documents/import
pub async fn handle_import(
    Json(req): Json<ImportRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let document = parse_import(&req.raw_json)?;
    Ok(Json(document))
}

/// POST /api/v1/documents/import/linkedin
pub async fn handle_linkedin_import(
    Json(req): Json<LinkedinImportRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    let document = linkedin_import(&req.profile_url)?;
    Ok(Json(document))
}

/// GET /api/v1/documents/import/template
pub async fn handle_import_template() -> Json<Value> {
    Json(import_template())
}
