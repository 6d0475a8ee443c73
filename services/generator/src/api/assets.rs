//! Static assets compiled into the binary.

use axum::{
    extract::Path,
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::api::error::ApiError;
use crate::api::request_context::RequestContext;
use crate::state::AppState;

/// An embedded file and the content type it is served with.
#[derive(Debug, Clone, Copy)]
pub struct Asset {
    pub name: &'static str,
    pub content_type: &'static str,
    pub body: &'static [u8],
}

pub const ASSETS: &[Asset] = &[
    Asset {
        name: "style",
        content_type: "text/css",
        body: include_bytes!("../../static/style.css"),
    },
    Asset {
        name: "hfstyle",
        content_type: "text/css",
        body: include_bytes!("../../static/hfstyle.css"),
    },
    Asset {
        name: "logo",
        content_type: "image/svg+xml",
        body: include_bytes!("../../static/logo.svg"),
    },
    Asset {
        name: "symbol",
        content_type: "image/svg+xml",
        body: include_bytes!("../../static/symbol.svg"),
    },
    Asset {
        name: "favicon",
        content_type: "image/png",
        body: include_bytes!("../../static/favicon.png"),
    },
];

/// Looks up an embedded asset by its route name.
pub fn find(name: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|asset| asset.name == name)
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/{asset}", get(serve_asset))
}

async fn serve_asset(
    Path(name): Path<String>,
    ctx: RequestContext,
) -> Result<impl IntoResponse, ApiError> {
    let asset = find(&name).ok_or_else(|| {
        ApiError::not_found("asset_not_found", format!("No asset named '{name}'"))
            .with_request_id(ctx.request_id.clone())
    })?;

    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static(asset.content_type))],
        asset.body,
    ))
}
