//! The specific-lease production report: parsing the portal's CSV export.

mod parser;

pub use parser::{parse_production, parse_production_labeled, parse_volume};
