use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{
    INDEX_FILE, META_MARKER, boundary_dir, client_dist_dir, public_origin,
};

/// Served when the client bundle has not been built yet.
const FALLBACK_INDEX: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<!-- prefmap:meta -->\n</head>\n<body><div id=\"app\"></div></body>\n</html>\n";

#[derive(Clone)]
pub struct AppState {
    /// `index.html` with the meta marker still in place.
    pub index_template: Arc<str>,
    pub public_origin: Arc<str>,
    pub client_dist_dir: PathBuf,
    pub boundary_dir: PathBuf,
}

impl AppState {
    pub fn new(
        index_template: impl Into<Arc<str>>,
        public_origin: impl Into<Arc<str>>,
        client_dist_dir: PathBuf,
        boundary_dir: PathBuf,
    ) -> Self {
        Self {
            index_template: index_template.into(),
            public_origin: public_origin.into(),
            client_dist_dir,
            boundary_dir,
        }
    }

    /// Build from the environment, loading the index template once.
    pub async fn from_env() -> Self {
        let dist = client_dist_dir();
        let template = load_index_template(&dist).await;
        Self::new(template, public_origin(), dist, boundary_dir())
    }
}

async fn load_index_template(dist: &Path) -> String {
    let path = dist.join(INDEX_FILE);
    match tokio::fs::read_to_string(&path).await {
        Ok(template) => {
            if !template.contains(META_MARKER) {
                tracing::warn!(path = %path.display(), "index.html has no meta marker");
            }
            template
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "client bundle not found, serving placeholder index");
            FALLBACK_INDEX.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_bundle_falls_back_to_placeholder() {
        let dir = std::env::temp_dir().join(format!("prefmap-missing-{}", std::process::id()));
        let template = load_index_template(&dir).await;
        assert!(template.contains(META_MARKER));
        assert!(template.contains("id=\"app\""));
    }
}
