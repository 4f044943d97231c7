//! Axum route handlers for the generation endpoints.
//!
//! Both endpoints share the same shape: validate, build the prompt, make one
//! generation call, and substitute the deterministic fallback if that call
//! fails in any way. The caller always receives 200 with usable text once
//! validation has passed; generation failures are logged for operators only.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::error;

use crate::errors::AppError;
use crate::generation::email::{build_email_prompt, fallback_email, EmailGenerationRequest};
use crate::generation::job_description::{
    build_job_description_prompt, fallback_job_description, JobDescriptionRequest,
};
use crate::generation::postprocess::markdown_to_plain_text;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionResponse {
    pub job_description: String,
}

/// POST /generate-email
pub async fn handle_generate_email(
    State(state): State<AppState>,
    Json(request): Json<EmailGenerationRequest>,
) -> Result<Json<EmailResponse>, AppError> {
    let prompt = build_email_prompt(&request);

    let email = match state.generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("email generation failed, using fallback: {e}");
            fallback_email()
        }
    };

    Ok(Json(EmailResponse { email }))
}

/// POST /generate-job-description
pub async fn handle_generate_job_description(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    if request.job_title.trim().is_empty() || request.experience_level.trim().is_empty() {
        return Err(AppError::Validation(
            "Job title and experience level are required".to_string(),
        ));
    }

    let prompt = build_job_description_prompt(&request);

    let job_description = match state.generator.generate(&prompt).await {
        // Models return markdown despite being asked not to; the fallback is
        // already plain text and skips the cleanup.
        Ok(text) => markdown_to_plain_text(&text),
        Err(e) => {
            error!("job description generation failed, using fallback: {e}");
            fallback_job_description(&request)
        }
    };

    Ok(Json(JobDescriptionResponse { job_description }))
}
