//! Single-page app serving
//!
//! Static files from the web client's build directory. Any path that is
//! not a file falls back to `index.html` so client-side routes resolve.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Build the static file service, or `None` when `static_dir` is missing.
pub fn spa_service(static_dir: &Path) -> Option<ServeDir<ServeFile>> {
    if !static_dir.is_dir() {
        tracing::warn!(
            "Static directory not found: {} (SPA serving disabled)",
            static_dir.display()
        );
        return None;
    }

    let index = static_dir.join("index.html");
    Some(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
}
