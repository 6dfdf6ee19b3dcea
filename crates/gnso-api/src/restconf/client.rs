// RESTCONF HTTP client
//
// Wraps `reqwest::Client` with NSO-specific URL construction, credential
// and media-type headers, and error detection. Every endpoint (data tree,
// query, operations) goes through `send`, so all of them share the same
// auth and error semantics. Endpoint methods live in sibling modules.

use std::collections::HashMap;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde_json::value::RawValue;
use tracing::{debug, warn};
use url::Url;

use crate::auth::BasicCredentials;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Media type NSO expects for YANG-modelled JSON, in both directions.
pub const YANG_DATA_JSON: &str = "application/yang-data+json";

// ── Error envelope ───────────────────────────────────────────────────

/// Extract the textual content of a top-level `errors` member, if any.
///
/// Only the outermost object is inspected and its values stay raw; bodies
/// that are empty, not JSON, or not an object have no such member.
pub(crate) fn controller_error(body: &str) -> Option<String> {
    let members: HashMap<String, &RawValue> = serde_json::from_str(body).ok()?;
    let raw = members.get("errors")?.get();

    // A bare string is reported without its quotes.
    match serde_json::from_str::<String>(raw) {
        Ok(text) => Some(text),
        Err(_) => Some(raw.to_owned()),
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Raw HTTP client for an NSO controller's RESTCONF API.
///
/// Returns response bodies as unparsed text -- shaping them is the
/// caller's job. The base URL is the RESTCONF root, e.g.
/// `http://nso:8080/restconf`; endpoint paths are appended verbatim.
#[derive(Debug, Clone)]
pub struct RestconfClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: BasicCredentials,
}

impl RestconfClient {
    /// Create a new client from a `TransportConfig`.
    pub fn new(
        base_url: Url,
        credentials: BasicCredentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, credentials))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        credentials: BasicCredentials,
    ) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// The RESTCONF root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Concatenate the RESTCONF root and an endpoint path.
    ///
    /// `endpoint` is appended as-is (it may carry a query string), so
    /// `http://nso:8080/restconf` + `/data/x?depth=2` stays exactly that.
    pub(crate) fn url(&self, endpoint: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{endpoint}"))?)
    }

    // ── Request dispatch ─────────────────────────────────────────────

    /// Perform one authenticated exchange and normalize the outcome.
    pub(crate) async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&str>,
    ) -> Result<String, Error> {
        let url = self.url(endpoint)?;
        debug!("{method} {url}");

        let mut request = self
            .http
            .request(method, url)
            .basic_auth(
                &self.credentials.username,
                Some(self.credentials.password.expose_secret()),
            )
            .header(ACCEPT, YANG_DATA_JSON)
            .header(CONTENT_TYPE, YANG_DATA_JSON);

        if let Some(body) = body {
            request = request.body(body.to_owned());
        }

        let resp = request.send().await?;
        Self::handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response(resp: reqwest::Response) -> Result<String, Error> {
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!(%status, "controller rejected request");
            return Err(Error::Http { status, body });
        }

        if let Some(message) = controller_error(&body) {
            warn!(%status, "controller reported errors in a success response");
            return Err(Error::Controller { message });
        }

        Ok(body)
    }
}
