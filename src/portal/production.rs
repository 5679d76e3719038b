// src/portal/production.rs
//! Requests the specific-lease production report as CSV.

use super::{PortalEndpoints, PortalTransport};
use crate::constants::FIRST_PRODUCTION_YEAR;
use crate::error::AppError;
use crate::types::LeaseDescriptor;
use chrono::Datelike;

/// Fixed fields of the production query.
///
/// The PDQ application dispatches every request through a stateful action
/// manager; these values select the CSV export from a fresh session and do
/// not depend on any earlier response.
const ACTION_DISPATCH_FIELDS: &[(&str, &str)] = &[
    ("actionManager.actionRcrd[0].actionDisplayNmHndlr.inputValue", "Search Criteria"),
    ("actionManager.actionRcrd[0].actionHndlr.inputValue", "/specificLeaseQueryAction.do"),
    ("actionManager.actionRcrd[0].actionMethodHndlr.inputValue", "unspecified"),
    ("actionManager.actionRcrd[0].actionParameterHndlr.inputValue", "methodToCall"),
    ("actionManager.actionRcrd[0].actionParametersHndlr.inputValue", ""),
    ("actionManager.actionRcrd[0].contextPathHndlr.inputValue", "/PDQ"),
    ("actionManager.actionRcrd[0].hostHndlr.inputValue", "webapps.rrc.state.tx.us:80"),
    ("actionManager.actionRcrd[0].pagerParameterKeyHndlr.inputValue", ""),
    ("actionManager.actionRcrd[0].returnIndexHndlr.inputValue", "0"),
    ("actionManager.currentIndexHndlr.inputValue", "0"),
    ("actionManager.recordCountHndlr.inputValue", "1"),
    ("methodToCall", "generateSpecificLeaseCSVReport"),
    ("searchArgs.activeTabsFlagwordHndlr.inputValue", "0"),
    ("searchArgs.orderByHndlr.inputValue", ""),
    ("searchArgs.searchType", "specificLease"),
    ("searchType", "specificLease"),
    ("submit", "Submit"),
    ("viewType", "init"),
];

/// The months a production report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start_year: i32,
    pub start_month: u32,
    pub end_year: i32,
    pub end_month: u32,
}

impl ReportWindow {
    /// January of the first production year through December of `end_year`.
    pub fn through_year(end_year: i32) -> Self {
        Self {
            start_year: FIRST_PRODUCTION_YEAR,
            start_month: 1,
            end_year,
            end_month: 12,
        }
    }

    /// Through December of the current calendar year, by the local clock.
    pub fn through_current_year() -> Self {
        Self::through_year(chrono::Local::now().year())
    }
}

/// Fetches raw production reports for resolved leases.
pub struct ProductionFetcher<'a, T: ?Sized> {
    transport: &'a T,
    endpoints: &'a PortalEndpoints,
    window: ReportWindow,
}

impl<'a, T: PortalTransport + ?Sized> ProductionFetcher<'a, T> {
    pub fn new(transport: &'a T, endpoints: &'a PortalEndpoints, window: ReportWindow) -> Self {
        Self {
            transport,
            endpoints,
            window,
        }
    }

    /// Returns the report CSV for `lease` as text.
    pub fn fetch(&self, lease: &LeaseDescriptor) -> Result<String, AppError> {
        log::debug!("Requesting production report for {}", lease);
        let form = production_query_form(lease, &self.window);
        self.transport
            .post_form(self.endpoints.production_report(), &form)?
            .into_ok_body()
    }
}

/// Form fields of the production query for `lease` over `window`.
pub fn production_query_form(
    lease: &LeaseDescriptor,
    window: &ReportWindow,
) -> Vec<(&'static str, String)> {
    let mut form: Vec<(&'static str, String)> = ACTION_DISPATCH_FIELDS
        .iter()
        .map(|(name, value)| (*name, value.to_string()))
        .collect();

    form.extend([
        ("searchArgs.leaseNumberArg", lease.lease_number.clone()),
        ("searchArgs.districtCodeArg", lease.district.clone()),
        ("searchArgs.oilOrGasArg", lease.well_type.query_code().to_string()),
        ("searchArgs.startMonthArg", format!("{:02}", window.start_month)),
        ("searchArgs.startYearArg", window.start_year.to_string()),
        ("searchArgs.endMonthArg", format!("{:02}", window.end_month)),
        ("searchArgs.endYearArg", window.end_year.to_string()),
    ]);
    form
}
