//! Purpose: Fetch a JSON document from an HTTP endpoint with a single GET.
//! Exports: `RemoteClient`, `load_from_url`.
//! Role: Remote acquisition flow; the HTTP layer decodes the body before the sorted sink runs.
//! Invariants: The URL is the whole endpoint; no path segment is joined onto it.
//! Invariants: One request per call; no retries and no local timeout wrapper.
//! Invariants: Every failure surfaces as `ErrorKind::Remote` with a message.
#![allow(clippy::result_large_err)]

use super::ApiResult;
use crate::core::emit::write_sorted;
use crate::core::error::{Error, ErrorKind};
use crate::json::parse;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use url::Url;

#[derive(Clone)]
pub struct RemoteClient {
    url: Url,
    agent: ureq::Agent,
}

impl fmt::Debug for RemoteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteClient")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

/// Body shape some servers use to describe a failed request.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl RemoteClient {
    pub fn new(url: impl Into<String>) -> ApiResult<Self> {
        let url = parse_endpoint(url.into())?;
        let agent = ureq::AgentBuilder::new().build();
        Ok(Self { url, agent })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issue the GET and decode the response body into a JSON value.
    pub fn fetch_json(&self) -> ApiResult<Value> {
        debug!("GET {}", self.url);
        let response = self
            .agent
            .get(self.url.as_str())
            .set("Accept", "application/json")
            .call();

        match response {
            Ok(resp) => read_json_response(&self.url, resp),
            Err(ureq::Error::Status(code, resp)) => Err(parse_error_response(&self.url, code, resp)),
            Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Remote)
                .with_message(format!("GET {} failed: {err}", self.url))
                .with_url(self.url.as_str())
                .with_source(err)),
        }
    }
}

pub fn load_from_url(url: &str, dst: Option<&Path>) -> ApiResult<()> {
    let value = RemoteClient::new(url)?.fetch_json()?;
    write_sorted(dst, &value)
}

fn parse_endpoint(raw: String) -> ApiResult<Url> {
    let url = Url::parse(&raw).map_err(|err| {
        Error::new(ErrorKind::Remote)
            .with_message(format!("invalid url '{raw}': {err}"))
            .with_url(raw.clone())
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(Error::new(ErrorKind::Remote)
            .with_message(format!("unsupported url scheme '{scheme}' (expected http or https)"))
            .with_url(raw));
    }
    Ok(url)
}

fn read_json_response(url: &Url, response: ureq::Response) -> ApiResult<Value> {
    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|err| {
            Error::new(ErrorKind::Remote)
                .with_message(format!("failed to read response body from {url}: {err}"))
                .with_url(url.as_str())
                .with_source(err)
        })?;
    parse::from_str(&body).map_err(|err| {
        Error::new(ErrorKind::Remote)
            .with_message(format!("invalid response json from {url}: {err}"))
            .with_hint(parse::hint_for_error(&err, url.as_str()))
            .with_url(url.as_str())
            .with_source(err)
    })
}

fn parse_error_response(url: &Url, status: u16, response: ureq::Response) -> Error {
    let status_text = response.status_text().to_string();
    let body = response.into_string().unwrap_or_default();
    let message = error_message_from_body(&body).unwrap_or_else(|| {
        format!("GET {url} failed with status {status} {status_text}")
            .trim_end()
            .to_string()
    });
    Error::new(ErrorKind::Remote)
        .with_message(message)
        .with_url(url.as_str())
        .with_status(status)
}

fn error_message_from_body(body: &str) -> Option<String> {
    parse::from_str::<ErrorBody>(body)
        .ok()
        .map(|envelope| envelope.message)
        .filter(|message| !message.trim().is_empty())
}
