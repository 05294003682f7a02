use thiserror::Error;

use crate::adapters::http::HttpError;

/// Loader failures are fatal for a suite run: no retry, no partial results.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resource `{path}` not found under `{root}`")]
    MissingResource { path: String, root: String },

    #[error("failed to read payload file `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("yaml parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}
