//! Axum route handlers for the Kit API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::export::{export_filename, html, markdown};
use crate::kit::generator::generate_kit;
use crate::kit::models::{GenerateKitRequest, InterviewKit};
use crate::state::AppState;

/// POST /api/v1/kits/generate
///
/// Runs the full generation pipeline for the submitted form snapshot.
/// Generation itself never fails (worst case: fallback content), so the only
/// error responses are an empty role and a generation already in flight.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateKitRequest>,
) -> Result<Json<InterviewKit>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    // Single-slot guard: the permit is held until this handler returns
    let _slot = state
        .generation_slot
        .clone()
        .try_acquire_owned()
        .map_err(|_| AppError::Conflict("a kit generation is already in flight".to_string()))?;

    let kit = generate_kit(state.llm.as_ref(), request).await;

    Ok(Json(kit))
}

/// POST /api/v1/kits/export/html
///
/// Serializes the posted kit into a standalone HTML document and answers it
/// as a download attachment.
pub async fn handle_export_html(Json(kit): Json<InterviewKit>) -> Response {
    let document = html::render(&kit);
    download_response(document, "text/html; charset=utf-8", &kit.role, "html")
}

/// POST /api/v1/kits/export/markdown
///
/// Serializes the posted kit into a Markdown document and answers it as a
/// download attachment.
pub async fn handle_export_markdown(Json(kit): Json<InterviewKit>) -> Response {
    let document = markdown::render(&kit);
    download_response(document, "text/markdown; charset=utf-8", &kit.role, "md")
}

fn download_response(document: String, content_type: &str, role: &str, extension: &str) -> Response {
    let filename = export_filename(role, extension);
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        document,
    )
        .into_response()
}
