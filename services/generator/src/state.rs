//! Application state shared across request handlers.

use std::sync::Arc;

use malo_id::{IdError, IdGenerator};

use crate::config::Config;
use crate::render::Renderer;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor. It only
/// holds immutable configuration and the parsed templates; generators
/// themselves carry no state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    renderer: Renderer,
}

impl AppState {
    /// Create a new application state, parsing the embedded templates.
    pub fn new(config: Config) -> Result<Self, minijinja::Error> {
        let renderer = Renderer::new()?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, renderer }),
        })
    }

    /// Get a reference to the page renderer.
    pub fn renderer(&self) -> &Renderer {
        &self.inner.renderer
    }

    /// Resolve the configured family tag to its generator.
    pub fn generator(&self) -> Result<IdGenerator, IdError> {
        IdGenerator::select(self.inner.config.id_type.as_deref())
    }
}
