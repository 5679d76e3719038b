// src/lib.rs
//! rrc-production library: resolves well API numbers into monthly production
//! history from the Texas RRC reporting portal.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `TransportFailure`
//! - **Configuration**: `CommandLineInput`, `PipelineConfig`
//! - **Domain types**: `WellIdentifier`, `LeaseDescriptor`, `WellType`
//! - **Records**: `MonthlyRecord`, `OilRecord`, `GasRecord`, `ProductionRecord`
//! - **Portal**: `PortalTransport`, `PortalHttpClient`, `LeaseResolver`, `ProductionFetcher`
//! - **Pipeline**: `LeaseSource`, `ReportSource`, `ProductionSource`, `WellPipeline`
//! - **Batch & output**: `run_batch`, `render`, `deliver`

pub mod batch;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod portal;
pub mod report;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, TransportFailure};

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig};

// --- Domain Types ---
pub use crate::types::{LeaseDescriptor, WellIdentifier, WellType};

// --- Records ---
pub use crate::model::{GasRecord, MonthlyRecord, OilRecord, ProductionRecord};

// --- Portal ---
pub use crate::portal::{
    LeaseResolver, PortalEndpoints, PortalHttpClient, PortalResponse, PortalTransport,
    ProductionFetcher, ReportWindow,
};

// --- Parsing ---
pub use crate::report::{parse_production, parse_production_labeled};

// --- Pipeline Traits ---
pub use crate::pipeline::{LeaseSource, ProductionSource, ReportSource, WellPipeline};

// --- Batch & Output ---
pub use crate::batch::{run_batch, BatchFailure, BatchReport, WellProduction};
pub use crate::output::{deliver, render, DeliveryTarget, OutputFormat};
