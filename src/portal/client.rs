// src/portal/client.rs
//! Blocking HTTP client for the RRC portal.
//!
//! A thin wrapper around `reqwest::blocking`. It sends requests and hands
//! back the status and decoded body; deciding whether a status is acceptable
//! is left to the caller via [`PortalResponse::into_ok_body`].

use super::PortalTransport;
use crate::constants::{BODY_PREVIEW_LENGTH, FORM_CONTENT_TYPE};
use crate::error::{AppError, TransportFailure};
use reqwest::blocking::{Client, Response};
use reqwest::{header, StatusCode};
use std::time::Duration;
use url::Url;

/// A portal response with the metadata needed to report a failure.
#[derive(Debug, Clone)]
pub struct PortalResponse {
    pub body: String,
    pub status: StatusCode,
    pub url: String,
}

impl PortalResponse {
    /// Returns the body if the portal answered 200 OK.
    pub fn into_ok_body(self) -> Result<String, AppError> {
        if self.status == StatusCode::OK {
            return Ok(self.body);
        }

        log::debug!(
            "{} answered {}: {}",
            self.url,
            self.status,
            preview(&self.body)
        );
        Err(AppError::Transport {
            url: self.url,
            failure: TransportFailure::HttpStatus(self.status.as_u16()),
        })
    }
}

/// Blocking reqwest client configured for the portal.
#[derive(Clone)]
pub struct PortalHttpClient {
    client: Client,
}

impl PortalHttpClient {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InvalidConfiguration(format!("HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        headers
    }
}

impl PortalTransport for PortalHttpClient {
    fn post_form(&self, url: &Url, form: &[(&'static str, String)]) -> Result<PortalResponse, AppError> {
        log::debug!("POST {} ({} form fields)", url, form.len());

        let body = encode_form(form);
        let response = self
            .client
            .post(url.clone())
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()?;

        extract_response_text(response)
    }

    fn get(&self, url: &Url) -> Result<PortalResponse, AppError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send()?;
        extract_response_text(response)
    }
}

/// Encodes form fields as `application/x-www-form-urlencoded`.
pub fn encode_form(form: &[(&'static str, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(form.iter().map(|(name, value)| (*name, value.as_str())))
        .finish()
}

/// Reads the body as UTF-8 text, replacing any invalid sequences.
fn extract_response_text(response: Response) -> Result<PortalResponse, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let bytes = response.bytes()?;

    log::debug!("{} -> {} ({} bytes)", url, status, bytes.len());

    Ok(PortalResponse {
        body: String::from_utf8_lossy(&bytes).into_owned(),
        status,
        url,
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > BODY_PREVIEW_LENGTH {
        let cut: String = body.chars().take(BODY_PREVIEW_LENGTH).collect();
        format!("{}...", cut)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    fn response(status: StatusCode) -> PortalResponse {
        PortalResponse {
            body: "<html>maintenance</html>".to_string(),
            status,
            url: "http://portal.test/EWA/wellboreQueryAction.do".to_string(),
        }
    }

    #[test]
    fn test_ok_body_passes_through() {
        assert_eq!(
            response(StatusCode::OK).into_ok_body().unwrap(),
            "<html>maintenance</html>"
        );
    }

    #[test]
    fn test_non_200_is_transport_error() {
        for status in [StatusCode::NO_CONTENT, StatusCode::FOUND, StatusCode::SERVICE_UNAVAILABLE] {
            match response(status).into_ok_body() {
                Err(AppError::Transport { url, failure }) => {
                    assert_eq!(url, "http://portal.test/EWA/wellboreQueryAction.do");
                    assert_eq!(failure, TransportFailure::HttpStatus(status.as_u16()));
                }
                other => panic!("expected transport error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_form_encoding() {
        let form = vec![
            ("searchArgs.apiNoPrefixArg", "501".to_string()),
            ("methodToCall", "search".to_string()),
            ("actionManager.actionRcrd[0].contextPathHndlr.inputValue", "/PDQ".to_string()),
        ];
        assert_eq!(
            encode_form(&form),
            "searchArgs.apiNoPrefixArg=501&methodToCall=search&actionManager.actionRcrd%5B0%5D.contextPathHndlr.inputValue=%2FPDQ"
        );
    }

    /// A client that ignores proxy settings, so requests reach the local socket.
    fn direct_client(timeout: Duration) -> PortalHttpClient {
        PortalHttpClient {
            client: Client::builder().no_proxy().timeout(timeout).build().unwrap(),
        }
    }

    fn local_url(addr: std::net::SocketAddr) -> Url {
        Url::parse(&format!("http://{}/EWA/wellboreQueryAction.do", addr)).unwrap()
    }

    #[test]
    fn test_silent_portal_times_out() {
        // Connections complete in the backlog but are never answered.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = local_url(listener.local_addr().unwrap());

        let client = direct_client(Duration::from_secs(1));
        let form = vec![("methodToCall", "search".to_string())];
        match client.post_form(&url, &form) {
            Err(AppError::Transport { failure, .. }) => {
                assert_eq!(failure, TransportFailure::TimedOut);
            }
            other => panic!("expected timeout, got {:?}", other),
        }
        drop(listener);
    }

    #[test]
    fn test_refused_connection() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let client = direct_client(Duration::from_secs(5));
        match client.get(&local_url(addr)) {
            Err(AppError::Transport {
                failure: TransportFailure::Connection(_),
                ..
            }) => {}
            other => panic!("expected connection failure, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_truncates_long_bodies() {
        let body = "x".repeat(BODY_PREVIEW_LENGTH + 10);
        assert_eq!(preview(&body).len(), BODY_PREVIEW_LENGTH + 3);
        assert_eq!(preview("short"), "short");
    }
}
