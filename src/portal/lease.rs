// src/portal/lease.rs
//! Resolves an API number to the lease it produces on.
//!
//! Two dependent requests: the wellbore search gives lease number, district
//! and a link to the lease detail page; the detail page gives the well type.

use super::patterns::{first_capture, PATTERNS};
use super::{PortalEndpoints, PortalTransport};
use crate::error::AppError;
use crate::types::{LeaseDescriptor, WellIdentifier, WellType};

/// Looks up leases through a portal transport.
pub struct LeaseResolver<'a, T: ?Sized> {
    transport: &'a T,
    endpoints: &'a PortalEndpoints,
}

impl<'a, T: PortalTransport + ?Sized> LeaseResolver<'a, T> {
    pub fn new(transport: &'a T, endpoints: &'a PortalEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Resolves the lease for `well`. Any failed request or missing field
    /// fails the whole resolution.
    pub fn resolve(&self, well: &WellIdentifier) -> Result<LeaseDescriptor, AppError> {
        let search_page = self.search_wellbore(well)?;

        let lease_number = extract_lease_number(&search_page)?;
        let district = extract_district(&search_page)?;
        let detail_url = self.endpoints.resolve_link(&extract_detail_link(&search_page)?)?;

        log::debug!(
            "{}: lease {} district {}, reading {}",
            well,
            lease_number,
            district,
            detail_url
        );

        let detail_page = self.transport.get(&detail_url)?.into_ok_body()?;
        let well_type = extract_well_type(&detail_page)?;

        Ok(LeaseDescriptor {
            lease_number,
            district,
            well_type,
        })
    }

    fn search_wellbore(&self, well: &WellIdentifier) -> Result<String, AppError> {
        let form = wellbore_search_form(well);
        self.transport
            .post_form(self.endpoints.wellbore_search(), &form)?
            .into_ok_body()
    }
}

/// Form fields of the wellbore search.
pub fn wellbore_search_form(well: &WellIdentifier) -> Vec<(&'static str, String)> {
    vec![
        ("searchArgs.apiNoPrefixArg", well.county_prefix().to_string()),
        ("searchArgs.apiNoSuffixArg", well.sequence_suffix().to_string()),
        ("methodToCall", "search".to_string()),
    ]
}

pub fn extract_lease_number(search_page: &str) -> Result<String, AppError> {
    first_capture(&PATTERNS.lease_number, search_page)
        .map(str::to_string)
        .ok_or(AppError::Extraction("lease number"))
}

pub fn extract_district(search_page: &str) -> Result<String, AppError> {
    first_capture(&PATTERNS.district, search_page)
        .map(str::to_string)
        .ok_or(AppError::Extraction("district"))
}

/// The lease detail link target, with `&amp;` decoded.
pub fn extract_detail_link(search_page: &str) -> Result<String, AppError> {
    PATTERNS
        .detail_link
        .find(search_page)
        .map(|m| m.as_str().replace("&amp;", "&"))
        .ok_or(AppError::Extraction("lease detail link"))
}

/// Reads the well type label from a lease detail page.
pub fn extract_well_type(detail_page: &str) -> Result<WellType, AppError> {
    first_capture(&PATTERNS.well_type, detail_page)
        .ok_or(AppError::Extraction("well type"))?
        .parse()
}
