use crate::error::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// What a lease produces. Selects both the query discriminator and the
/// record schema of the production report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WellType {
    Oil,
    Gas,
}

impl WellType {
    /// The `oilOrGas` argument of the production query.
    pub fn query_code(self) -> &'static str {
        match self {
            WellType::Oil => "O",
            WellType::Gas => "G",
        }
    }
}

impl FromStr for WellType {
    type Err = AppError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "oil" => Ok(WellType::Oil),
            "gas" => Ok(WellType::Gas),
            _ => Err(AppError::InvalidWellType(label.to_string())),
        }
    }
}

impl fmt::Display for WellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WellType::Oil => write!(f, "Oil"),
            WellType::Gas => write!(f, "Gas"),
        }
    }
}

/// Everything the production query needs to know about a lease.
///
/// Only the lease resolver builds one, and only once all three parts were
/// found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaseDescriptor {
    pub lease_number: String,
    pub district: String,
    pub well_type: WellType,
}

impl fmt::Display for LeaseDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lease {} (district {}, {})",
            self.lease_number, self.district, self.well_type
        )
    }
}
