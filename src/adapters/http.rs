use std::process::{Command, Stdio};

use thiserror::Error;

/// Request methods accepted by the suite format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully built request: the core shapes it, the transport executes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("`xh` is not available; install it or set JSONVET_XH_BIN")]
    Unavailable,
    #[error("failed to spawn http client: {0}")]
    Spawn(std::io::Error),
    #[error("http request failed: {0}")]
    Execution(String),
    #[error("http response body is not valid UTF-8: {0}")]
    BodyDecode(std::string::FromUtf8Error),
}

/// Executes `request` through the `xh` binary and returns the response body.
///
/// `--check-status` turns non-2xx statuses into process failures, so an HTTP
/// error surfaces as [`HttpError::Execution`] rather than a body to parse.
pub fn fetch(request: &HttpRequest) -> Result<String, HttpError> {
    let bin = std::env::var("JSONVET_XH_BIN").unwrap_or_else(|_| "xh".to_string());
    let mut command = Command::new(&bin);
    command
        .arg("--ignore-stdin")
        .arg("--check-status")
        .arg("--pretty=none")
        .arg("--print=b")
        .arg(request.method.as_str())
        .arg(request.url.as_str());

    for (name, value) in &request.headers {
        command.arg(format!("{name}:{value}"));
    }
    if let Some(body) = request.body.as_ref() {
        command.arg("--raw").arg(body);
    }

    let output = match command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child.wait_with_output().map_err(HttpError::Spawn)?,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(HttpError::Unavailable);
        }
        Err(error) => return Err(HttpError::Spawn(error)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8(output.stderr)
            .unwrap_or_else(|_| "failed to decode http client stderr".to_string());
        return Err(HttpError::Execution(stderr.trim().to_string()));
    }

    String::from_utf8(output.stdout).map_err(HttpError::BodyDecode)
}
