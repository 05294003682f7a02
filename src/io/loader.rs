use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::adapters::http::{self, HttpMethod, HttpRequest};
use crate::io::{self, LoadError};
use crate::suite::SuiteConfig;

/// Where a test case's payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// Bundled lookup, resolved against the suite's resource root.
    Resource(String),
    /// Filesystem path, absolute or relative to the working directory.
    File(PathBuf),
    /// Built request, executed through the HTTP collaborator.
    Http(HttpRequestSpec),
}

/// Declarative request shape; the URL is assembled from the suite config at
/// load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequestSpec {
    /// Path or full URI, depending on whether `base_url` is configured.
    pub uri: String,
    pub method: HttpMethod,
    pub params: Vec<String>,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

/// Resolves `source` to a parsed JSON tree.
pub fn load(
    source: &PayloadSource,
    config: &SuiteConfig,
    resource_root: &Path,
) -> Result<Value, LoadError> {
    match source {
        PayloadSource::Resource(path) => {
            let resolved = resource_root.join(path.trim_start_matches('/'));
            if !resolved.is_file() {
                return Err(LoadError::MissingResource {
                    path: path.clone(),
                    root: resource_root.display().to_string(),
                });
            }
            read_json_file(&resolved)
        }
        PayloadSource::File(path) => read_json_file(path),
        PayloadSource::Http(request) => {
            let body = http::fetch(&HttpRequest {
                url: build_url(config, request),
                method: request.method,
                headers: request.headers.clone(),
                body: request.body.clone(),
            })?;
            io::parse_json(&body)
        }
    }
}

fn read_json_file(path: &Path) -> Result<Value, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    io::parse_json_bytes(&bytes)
}

/// `base_url[:port] + uri + ('?' + params.join("&"))`. A zero port means no
/// port suffix.
pub(crate) fn build_url(config: &SuiteConfig, request: &HttpRequestSpec) -> String {
    let base = if config.port == 0 {
        config.base_url.clone()
    } else {
        format!("{}:{}", config.base_url, config.port)
    };
    let query = if request.params.is_empty() {
        String::new()
    } else {
        format!("?{}", request.params.join("&"))
    };
    format!("{base}{}{query}", request.uri)
}
