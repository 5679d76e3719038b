// src/portal/mod.rs
//! RRC portal interaction: the ability to look up leases and pull their
//! production reports.
//!
//! The portal has no API. Everything here is form posts, HTML scraping and a
//! CSV export, kept behind the [`PortalTransport`] seam so the scraping logic
//! never touches HTTP details directly.

pub mod client;
pub mod lease;
pub mod patterns;
pub mod production;

use crate::constants::{PRODUCTION_REPORT_PATH, WELLBORE_SEARCH_PATH};
use crate::error::AppError;
use url::Url;

/// The ability to talk to the portal.
///
/// Implementations only move bytes; status checking happens in
/// [`PortalResponse::into_ok_body`].
pub trait PortalTransport: Send + Sync {
    /// Sends `form` as a urlencoded POST body.
    fn post_form(&self, url: &Url, form: &[(&'static str, String)]) -> Result<PortalResponse, AppError>;

    fn get(&self, url: &Url) -> Result<PortalResponse, AppError>;
}

/// Where the portal's applications live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalEndpoints {
    ewa_base: Url,
    wellbore_search: Url,
    production_report: Url,
}

impl PortalEndpoints {
    /// Builds the endpoint set from the EWA (wellbore) and PDQ (production)
    /// application bases.
    pub fn new(ewa_base: &str, pdq_base: &str) -> Result<Self, AppError> {
        let ewa_base = parse_base(ewa_base)?;
        let pdq_base = parse_base(pdq_base)?;

        Ok(Self {
            wellbore_search: join(&ewa_base, WELLBORE_SEARCH_PATH)?,
            production_report: join(&pdq_base, PRODUCTION_REPORT_PATH)?,
            ewa_base,
        })
    }

    pub fn wellbore_search(&self) -> &Url {
        &self.wellbore_search
    }

    pub fn production_report(&self) -> &Url {
        &self.production_report
    }

    /// Resolves a link scraped from a search result against the EWA base.
    pub fn resolve_link(&self, href: &str) -> Result<Url, AppError> {
        self.ewa_base.join(href).map_err(|e| {
            log::debug!("Unusable lease detail link {:?}: {}", href, e);
            AppError::Extraction("lease detail link")
        })
    }
}

/// Parses an application base, making sure relative joins stay inside it.
fn parse_base(base: &str) -> Result<Url, AppError> {
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    Url::parse(&base)
        .map_err(|e| AppError::InvalidConfiguration(format!("portal URL {:?}: {}", base, e)))
}

fn join(base: &Url, path: &str) -> Result<Url, AppError> {
    base.join(path)
        .map_err(|e| AppError::InvalidConfiguration(format!("portal path {:?}: {}", path, e)))
}

pub use client::{PortalHttpClient, PortalResponse};
pub use lease::LeaseResolver;
pub use production::{ProductionFetcher, ReportWindow};
