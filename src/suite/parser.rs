use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::adapters::http::HttpMethod;
use crate::domain::error::SpecError;
use crate::io::loader::{HttpRequestSpec, PayloadSource};
use crate::suite::{Expects, Mode, SuiteConfig, TestCase, expects};

/// Reads the optional top-level `config` block.
pub fn parse_config(model: &Value) -> Result<SuiteConfig, SpecError> {
    let Some(config) = model.get("config") else {
        return Ok(SuiteConfig::default());
    };
    let map = as_object(config, "`config` block must be a map")?;

    let base_url = match map.get("base_url") {
        None => String::new(),
        Some(value) => as_string(value, "`config.base_url` must be a string")?.to_string(),
    };
    let port = match map.get("port") {
        None => 0,
        Some(value) => value
            .as_u64()
            .and_then(|port| u16::try_from(port).ok())
            .ok_or_else(|| {
                SpecError::InvalidInput("`config.port` must be an integer port number".to_string())
            })?,
    };
    Ok(SuiteConfig { base_url, port })
}

/// Reads the required top-level `tests` list into test cases.
pub fn parse_tests(model: &Value) -> Result<Vec<TestCase>, SpecError> {
    let Some(tests) = model.get("tests") else {
        return Err(SpecError::InvalidInput(
            "suite must have a `tests` block".to_string(),
        ));
    };
    let Some(entries) = tests.as_array() else {
        return Err(SpecError::InvalidInput(
            "`tests` block must be a list".to_string(),
        ));
    };

    entries.iter().map(parse_test).collect()
}

fn parse_test(entry: &Value) -> Result<TestCase, SpecError> {
    let test = as_object(entry, "each test must be a map")?;
    let mode = parse_mode(test)?;
    let source = parse_source(test)?;

    let Some(expects_value) = test.get("expects") else {
        return Err(SpecError::InvalidInput(
            "test must have an `expects` block".to_string(),
        ));
    };
    let Some(items) = expects_value.as_array() else {
        return Err(SpecError::InvalidInput(
            "`expects` block must be a list".to_string(),
        ));
    };

    let expects = match mode {
        Mode::Structure => Expects::Structure(expects::parse_structure(items)?),
        Mode::Type => Expects::Type(expects::parse_types(items)?),
        Mode::Value => Expects::Value(expects::parse_values(items)?),
    };
    Ok(TestCase { source, expects })
}

fn parse_mode(test: &Map<String, Value>) -> Result<Mode, SpecError> {
    let Some(mode) = test.get("mode") else {
        return Err(SpecError::InvalidInput(
            "test must have a `mode` block; possible values: structure, type, value".to_string(),
        ));
    };
    Mode::from_token(as_string(mode, "`mode` must be a string")?)
}

/// Resolves the `data` block. When more than one source key is present the
/// precedence is `resource` > `file` > `request`.
fn parse_source(test: &Map<String, Value>) -> Result<PayloadSource, SpecError> {
    let Some(data) = test.get("data") else {
        return Err(SpecError::InvalidInput(
            "test must have a `data` block".to_string(),
        ));
    };
    let data = as_object(data, "`data` block must be a map")?;

    if let Some(resource) = data.get("resource") {
        let path = as_string(resource, "`data.resource` must be a string path")?;
        return Ok(PayloadSource::Resource(path.to_string()));
    }
    if let Some(file) = data.get("file") {
        let path = as_string(file, "`data.file` must be a string path")?;
        return Ok(PayloadSource::File(PathBuf::from(path)));
    }
    if let Some(request) = data.get("request") {
        return Ok(PayloadSource::Http(parse_request(request)?));
    }
    Err(SpecError::InvalidInput(
        "`data` block must contain a `resource`, `file`, or `request` block".to_string(),
    ))
}

fn parse_request(value: &Value) -> Result<HttpRequestSpec, SpecError> {
    let request = as_object(value, "`request` block must be a map")?;

    let Some(uri) = request.get("uri") else {
        return Err(SpecError::InvalidInput(
            "`request` block must have a `uri` block".to_string(),
        ));
    };
    let uri = as_string(uri, "`request.uri` must be a string")?.to_string();

    let Some(method) = request.get("method") else {
        return Err(SpecError::InvalidInput(
            "`request` block must have a `method` block".to_string(),
        ));
    };
    let method = parse_method(as_string(method, "`request.method` must be a string")?)?;

    let body = match request.get("body") {
        None => None,
        Some(body) => Some(as_string(body, "`request.body` must be a raw string")?.to_string()),
    };

    Ok(HttpRequestSpec {
        uri,
        method,
        params: parse_params(request)?,
        body,
        headers: parse_headers(request)?,
    })
}

fn parse_method(token: &str) -> Result<HttpMethod, SpecError> {
    match token {
        "GET" => Ok(HttpMethod::Get),
        "POST" => Ok(HttpMethod::Post),
        "PATCH" => Ok(HttpMethod::Patch),
        "DELETE" => Ok(HttpMethod::Delete),
        other => Err(SpecError::InvalidInput(format!(
            "invalid request method `{other}`; valid values: GET, POST, PATCH, DELETE"
        ))),
    }
}

fn parse_params(request: &Map<String, Value>) -> Result<Vec<String>, SpecError> {
    let Some(params) = request.get("params") else {
        return Ok(Vec::new());
    };
    if params.is_null() {
        return Ok(Vec::new());
    }
    let Some(items) = params.as_array() else {
        return Err(SpecError::InvalidInput(
            "`request.params` must be a list of `key=value` strings".to_string(),
        ));
    };
    items
        .iter()
        .map(|item| {
            as_string(item, "`request.params` entries must be strings").map(ToString::to_string)
        })
        .collect()
}

/// Headers are `"Key: Value"` strings, split on the first colon only.
fn parse_headers(request: &Map<String, Value>) -> Result<Vec<(String, String)>, SpecError> {
    let Some(headers) = request.get("headers") else {
        return Ok(Vec::new());
    };
    let Some(items) = headers.as_array() else {
        return Err(SpecError::InvalidInput(
            "`request.headers` must be a list of `Key: Value` strings".to_string(),
        ));
    };
    items
        .iter()
        .map(|item| {
            let header = as_string(item, "`request.headers` entries must be strings")?;
            let Some((key, value)) = header.split_once(':') else {
                return Err(SpecError::InvalidInput(format!(
                    "invalid header `{header}`; must contain `:` between key and value"
                )));
            };
            Ok((key.to_string(), value.trim_start().to_string()))
        })
        .collect()
}

fn as_object<'a>(value: &'a Value, message: &str) -> Result<&'a Map<String, Value>, SpecError> {
    value
        .as_object()
        .ok_or_else(|| SpecError::InvalidInput(message.to_string()))
}

fn as_string<'a>(value: &'a Value, message: &str) -> Result<&'a str, SpecError> {
    value
        .as_str()
        .ok_or_else(|| SpecError::InvalidInput(message.to_string()))
}
