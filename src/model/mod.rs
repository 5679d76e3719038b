// src/model/mod.rs
//! Monthly production records, one schema per well type.
//!
//! The report's columns mean different things for oil and gas leases, so each
//! gets its own struct. Code that only needs the month, operator, field or
//! the volume figures goes through the [`ProductionRecord`] capability and
//! never matches on the variant.

use indexmap::IndexMap;
use serde::Serialize;

/// The shared view over any monthly production record.
pub trait ProductionRecord {
    /// Reporting month as printed in the report, e.g. `01/2020`.
    fn month(&self) -> &str;

    fn operator(&self) -> &str;

    fn field(&self) -> &str;

    /// Production and disposition figures keyed by column name, in report order.
    fn volumes(&self) -> IndexMap<&'static str, f64>;

    /// Every column of the record rendered as display text, keyed by column name.
    fn columns(&self) -> IndexMap<&'static str, String> {
        let mut columns = IndexMap::new();
        columns.insert("Month", self.month().to_string());
        for (name, value) in self.volumes() {
            columns.insert(name, format_volume(value));
        }
        columns.insert("Operator", self.operator().to_string());
        columns.insert("Field", self.field().to_string());
        columns
    }
}

/// A month of production on an oil lease.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OilRecord {
    pub month: String,
    pub oil_production: f64,
    pub oil_disposition: f64,
    pub gas_production: f64,
    pub gas_disposition: f64,
    pub operator: String,
    pub field: String,
}

/// A month of production on a gas lease.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GasRecord {
    pub month: String,
    pub gas_production: f64,
    pub gas_disposition: f64,
    pub condensate_production: f64,
    pub condensate_disposition: f64,
    pub operator: String,
    pub field: String,
}

/// A parsed report row, tagged by the well type it was parsed as.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MonthlyRecord {
    Oil(OilRecord),
    Gas(GasRecord),
}

impl ProductionRecord for OilRecord {
    fn month(&self) -> &str {
        &self.month
    }

    fn operator(&self) -> &str {
        &self.operator
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn volumes(&self) -> IndexMap<&'static str, f64> {
        IndexMap::from([
            ("OilProduction", self.oil_production),
            ("OilDisposition", self.oil_disposition),
            ("GasProduction", self.gas_production),
            ("GasDisposition", self.gas_disposition),
        ])
    }
}

impl ProductionRecord for GasRecord {
    fn month(&self) -> &str {
        &self.month
    }

    fn operator(&self) -> &str {
        &self.operator
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn volumes(&self) -> IndexMap<&'static str, f64> {
        IndexMap::from([
            ("GasProduction", self.gas_production),
            ("GasDisposition", self.gas_disposition),
            ("CondensateProduction", self.condensate_production),
            ("CondensateDisposition", self.condensate_disposition),
        ])
    }
}

impl MonthlyRecord {
    fn inner(&self) -> &dyn ProductionRecord {
        match self {
            MonthlyRecord::Oil(record) => record,
            MonthlyRecord::Gas(record) => record,
        }
    }
}

impl ProductionRecord for MonthlyRecord {
    fn month(&self) -> &str {
        self.inner().month()
    }

    fn operator(&self) -> &str {
        self.inner().operator()
    }

    fn field(&self) -> &str {
        self.inner().field()
    }

    fn volumes(&self) -> IndexMap<&'static str, f64> {
        self.inner().volumes()
    }
}

/// Renders a volume so whole numbers keep their decimal point (`100.0`).
///
/// Values of 1e16 and up switch to exponent form without a sign (`1e16`);
/// no reported monthly volume comes near that.
pub fn format_volume(value: f64) -> String {
    format!("{:?}", value)
}
