use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::skills::{suggest_skills, SkillCategory, SkillSuggestion};
use crate::errors::AppError;
use crate::state::AppState;

const MAX_ROLE_CHARS: usize = 120;

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
    pub backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillSuggestionsResponse {
    pub title: &'static str,
    pub suggestions: Vec<SkillSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct SkillSuggestionRequest {
    #[serde(default)]
    pub category: SkillCategory,
    #[serde(default)]
    pub current_skills: Vec<String>,
}

fn validate_role(role: &str) -> Result<(), AppError> {
    if role.chars().count() > MAX_ROLE_CHARS {
        return Err(AppError::Validation(format!(
            "role must be at most {MAX_ROLE_CHARS} characters"
        )));
    }
    Ok(())
}

/// POST /api/v1/assistant/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(req): Json<RoleRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    validate_role(&req.role)?;
    let suggestions = state.suggestions.generate_suggestions(&req.role).await?;
    Ok(Json(SuggestionsResponse {
        suggestions,
        backend: state.suggestions.backend(),
    }))
}

/// POST /api/v1/assistant/summary
pub async fn handle_improve_summary(
    State(state): State<AppState>,
    Json(req): Json<RoleRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    validate_role(&req.role)?;
    let summary = state.suggestions.improve_summary(&req.role).await?;
    Ok(Json(SummaryResponse {
        summary,
        backend: state.suggestions.backend(),
    }))
}

/// POST /api/v1/skills/suggestions
pub async fn handle_skill_suggestions(
    Json(req): Json<SkillSuggestionRequest>,
) -> Json<SkillSuggestionsResponse> {
    Json(SkillSuggestionsResponse {
        title: req.category.title(),
        suggestions: suggest_skills(req.category, &req.current_skills),
    })
}
