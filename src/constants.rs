// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Reading these should tell you how the portal is shaped: where it lives,
//! how its report is laid out, and how long we are willing to wait for it.

// ---------------------------------------------------------------------------
// Portal locations
// ---------------------------------------------------------------------------

/// Base of the wellbore query application. Lease detail links in search
/// results are relative to this path.
pub const DEFAULT_EWA_BASE_URL: &str = "http://webapps2.rrc.state.tx.us/EWA/";

/// Base of the production data query application.
pub const DEFAULT_PDQ_BASE_URL: &str = "http://webapps.rrc.state.tx.us/PDQ/";

/// Wellbore search action, relative to the EWA base.
pub const WELLBORE_SEARCH_PATH: &str = "wellboreQueryAction.do";

/// Specific-lease CSV export action, relative to the PDQ base.
pub const PRODUCTION_REPORT_PATH: &str = "specificLeaseQueryAction.do";

/// Content type the portal's form handlers expect.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

// ---------------------------------------------------------------------------
// Identifier shape
// ---------------------------------------------------------------------------

/// Digit counts an API number may have once normalized.
pub const VALID_IDENTIFIER_LENGTHS: [usize; 3] = [10, 12, 14];

// ---------------------------------------------------------------------------
// Production report layout
// ---------------------------------------------------------------------------

/// Rows of boilerplate at the top of the CSV export.
///
/// Matches the one report layout observed so far. Nothing checks that these
/// rows really are header rows; if the portal changes its preamble, this is
/// the number that breaks.
pub const REPORT_HEADER_ROWS: usize = 10;

/// First year the portal holds monthly production for.
pub const FIRST_PRODUCTION_YEAR: i32 = 1993;

/// Column holding the operator name in a report row.
pub const OPERATOR_COLUMN: usize = 5;

/// Column holding the field name in a report row.
pub const FIELD_COLUMN: usize = 7;

// ---------------------------------------------------------------------------
// Transport boundaries
// ---------------------------------------------------------------------------

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum characters of a response body echoed into debug logs.
pub const BODY_PREVIEW_LENGTH: usize = 200;
