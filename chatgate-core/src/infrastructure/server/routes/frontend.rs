//! Static frontend: `/` serves `index.html`, `/static/*` serves the directory.

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

pub fn mount(router: Router, dir: Option<&Path>) -> Router {
    let Some(dir) = dir else {
        return router;
    };

    if !dir.is_dir() {
        warn!(dir = %dir.display(), "Frontend directory not found, serving API only");
        return router;
    }

    info!(dir = %dir.display(), "Serving frontend assets");
    router
        .route_service("/", ServeFile::new(dir.join("index.html")))
        .nest_service("/static", ServeDir::new(dir))
}
