//! Axum route handler for the analyze endpoint: multipart upload in,
//! analysis text plus rendered section HTML out.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind};
use crate::report::parser::parse_report;
use crate::report::render::render_report;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Raw numbered analysis text, as produced by the backend.
    pub analysis: String,
    pub match_score: u32,
    /// The analysis parsed into sections and rendered as an HTML fragment.
    pub analysis_html: String,
}

struct AnalyzeForm {
    filename: String,
    resume: Bytes,
    job_description: String,
}

/// POST /api/analyze-resume
///
/// Multipart form: `resume` (PDF or DOCX file) + `job_description` (text).
/// Pipeline: extract text -> analyze -> parse report -> render HTML.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart).await?;

    let kind = DocumentKind::from_filename(&form.filename)
        .ok_or_else(|| AppError::Validation("File must be PDF or DOCX".to_string()))?;

    info!(filename = %form.filename, "Processing uploaded resume");
    let resume_text = extract_text(kind, &form.resume)?;

    let analysis = state
        .analyzer
        .analyze(&resume_text, &form.job_description)
        .await?;

    let sections = parse_report(&analysis.analysis);
    info!(
        match_score = analysis.match_score,
        sections = sections.len(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        analysis_html: render_report(&sections),
        match_score: analysis.match_score,
        analysis: analysis.analysis,
    }))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Validation("resume part must be a file upload".to_string())
                    })?
                    .to_string();
                resume = Some((filename, field.bytes().await?));
            }
            Some("job_description") => {
                job_description = Some(field.text().await?);
            }
            _ => {} // unknown parts ignored
        }
    }

    let (filename, resume) =
        resume.ok_or_else(|| AppError::Validation("Please select a file to upload".to_string()))?;
    let job_description = job_description
        .unwrap_or_default()
        .trim()
        .to_string();
    if job_description.is_empty() {
        return Err(AppError::Validation(
            "Please enter a job description".to_string(),
        ));
    }

    Ok(AnalyzeForm {
        filename,
        resume,
        job_description,
    })
}
