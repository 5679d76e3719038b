// src/pipeline.rs
//! Pipeline capability traits: the stages that turn an API number into
//! monthly production.
//!
//! Each trait describes a single capability, so each stage can be tested in
//! isolation and the batch driver only depends on [`ProductionSource`].

use crate::error::AppError;
use crate::model::MonthlyRecord;
use crate::portal::{
    LeaseResolver, PortalEndpoints, PortalTransport, ProductionFetcher, ReportWindow,
};
use crate::report::parse_production;
use crate::types::{LeaseDescriptor, WellIdentifier};

/// Resolves an identifier to the lease it reports under.
pub trait LeaseSource {
    fn resolve(&self, well: &WellIdentifier) -> Result<LeaseDescriptor, AppError>;
}

/// Retrieves the raw production report for a resolved lease.
pub trait ReportSource {
    fn fetch_report(&self, lease: &LeaseDescriptor) -> Result<String, AppError>;
}

/// Produces the monthly records for an identifier, start to finish.
pub trait ProductionSource: Sync {
    fn production(&self, well: &WellIdentifier) -> Result<Vec<MonthlyRecord>, AppError>;
}

impl<S> ProductionSource for S
where
    S: LeaseSource + ReportSource + Sync,
{
    fn production(&self, well: &WellIdentifier) -> Result<Vec<MonthlyRecord>, AppError> {
        let lease = self.resolve(well)?;
        log::info!("{}: {}", well, lease);

        let csv = self.fetch_report(&lease)?;
        parse_production(&csv, lease.well_type)
    }
}

/// The portal-backed pipeline.
pub struct WellPipeline<T> {
    transport: T,
    endpoints: PortalEndpoints,
    window: ReportWindow,
}

impl<T: PortalTransport> WellPipeline<T> {
    pub fn new(transport: T, endpoints: PortalEndpoints, window: ReportWindow) -> Self {
        Self {
            transport,
            endpoints,
            window,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: PortalTransport> LeaseSource for WellPipeline<T> {
    fn resolve(&self, well: &WellIdentifier) -> Result<LeaseDescriptor, AppError> {
        LeaseResolver::new(&self.transport, &self.endpoints).resolve(well)
    }
}

impl<T: PortalTransport> ReportSource for WellPipeline<T> {
    fn fetch_report(&self, lease: &LeaseDescriptor) -> Result<String, AppError> {
        ProductionFetcher::new(&self.transport, &self.endpoints, self.window).fetch(lease)
    }
}
