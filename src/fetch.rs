//! HTTP client for the SharePoint-style speeches list API.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;

use crate::error::Result;
use crate::extract::RawSpeech;

const USER_AGENT_STR: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Shape of the list API response: a `value` array of raw records.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    value: Vec<RawSpeech>,
}

/// One fetch against the list API: the verbatim body for raw dumps plus the
/// decoded records (empty on a non-2xx response).
#[derive(Debug)]
pub struct FetchResponse {
    pub body: String,
    pub records: Vec<RawSpeech>,
}

/// Blocking client for the speeches list endpoint
pub struct FetchClient {
    client: Client,
    base_url: String,
}

impl FetchClient {
    /// Create a client with the headers the endpoint expects
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json;odata=verbose;charset=utf-8"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STR));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch speeches with `SDate` inside the given UTC instant bounds
    /// (inclusive), approved records only, newest first.
    ///
    /// A non-2xx status is logged and degrades to an empty record set;
    /// connection-level failures propagate.
    pub fn fetch(&self, start_instant: &str, end_instant: &str, top: usize) -> Result<FetchResponse> {
        let filter = format!(
            "SDate ge '{}' and SDate le '{}' and OData__ModerationStatus eq 0",
            start_instant, end_instant
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("$select", "*"),
                ("$filter", filter.as_str()),
                ("$top", top.to_string().as_str()),
                ("$orderby", "SDate desc"),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            eprintln!("Error: {}", status.as_u16());
            eprintln!("{}", body);
            return Ok(FetchResponse {
                body,
                records: Vec::new(),
            });
        }

        let parsed: ListResponse = serde_json::from_str(&body)?;
        Ok(FetchResponse {
            body,
            records: parsed.value,
        })
    }
}
