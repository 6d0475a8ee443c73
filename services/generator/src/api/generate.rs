//! Identifier generation endpoints.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use malo_id::{IdGenerator, IdRecord};

use crate::api::error::ApiError;
use crate::api::request_context::RequestContext;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(generate_html))
        .route("/json", get(generate_json))
        .route("/api/generate-malo-id", get(generate_malo_html))
}

fn generate(generator: IdGenerator, request_id: &str) -> Result<IdRecord, ApiError> {
    let record = generator.generate().map_err(|e| {
        tracing::error!(
            error = %e,
            request_id = %request_id,
            id_type = %generator,
            "Failed to generate identifier"
        );
        ApiError::from(e).with_request_id(request_id)
    })?;

    tracing::info!(id = %record.id, id_type = %generator, "Successfully generated identifier");
    Ok(record)
}

fn render(
    state: &AppState,
    generator: IdGenerator,
    record: &IdRecord,
    request_id: &str,
) -> Result<Html<String>, ApiError> {
    let page = state.renderer().render_page(generator, record).map_err(|e| {
        tracing::error!(
            error = %e,
            request_id = %request_id,
            id_type = %generator,
            "Failed to render page"
        );
        ApiError::internal("render_failed", "Failed to render the generated identifier")
            .with_request_id(request_id)
    })?;
    Ok(Html(page))
}

fn configured_generator(state: &AppState, request_id: &str) -> Result<IdGenerator, ApiError> {
    state.generator().map_err(|e| {
        tracing::warn!(error = %e, request_id = %request_id, "ID type not configured correctly");
        ApiError::from(e).with_request_id(request_id)
    })
}

/// Render a fresh identifier of the configured family as an HTML page.
async fn generate_html(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, ApiError> {
    let generator = configured_generator(&state, &ctx.request_id)?;
    let record = generate(generator, &ctx.request_id)?;
    render(&state, generator, &record, &ctx.request_id)
}

/// Return a fresh identifier of the configured family as its JSON record.
async fn generate_json(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, ApiError> {
    let generator = configured_generator(&state, &ctx.request_id)?;
    let record = generate(generator, &ctx.request_id)?;
    Ok(Json(record))
}

/// Legacy endpoint that always renders a MaLo, independent of configuration.
async fn generate_malo_html(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, ApiError> {
    let record = generate(IdGenerator::MaLo, &ctx.request_id)?;
    render(&state, IdGenerator::MaLo, &record, &ctx.request_id)
}
