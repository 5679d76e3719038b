// src/output/table.rs
//! Tab-delimited rendering of a batch.

use crate::batch::WellProduction;
use crate::model::ProductionRecord;

/// Column shown first whenever the records have it.
const LEADING_COLUMN: &str = "Month";

/// The table's record columns: the sorted keys of the first record of the
/// first well, with `Month` moved to the front.
pub fn table_columns(wells: &[WellProduction]) -> Vec<&'static str> {
    let Some(first) = wells.iter().find_map(|well| well.records.first()) else {
        return Vec::new();
    };

    let mut columns: Vec<&'static str> = first.columns().keys().copied().collect();
    columns.sort_unstable();

    if let Some(pos) = columns.iter().position(|c| *c == LEADING_COLUMN) {
        let month = columns.remove(pos);
        columns.insert(0, month);
    }
    columns
}

/// Renders every record of every well as one line, prefixed by its API
/// number. Returns an empty string when there is nothing to show.
pub fn render_table(wells: &[WellProduction]) -> String {
    let columns = table_columns(wells);
    if columns.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("API");
    for column in &columns {
        out.push('\t');
        out.push_str(column);
    }
    out.push('\n');

    for well in wells {
        for record in &well.records {
            let values = record.columns();
            out.push_str(well.api.as_str());
            for column in &columns {
                out.push('\t');
                // Mixed oil and gas batches leave some columns blank.
                out.push_str(values.get(column).map(String::as_str).unwrap_or(""));
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MonthlyRecord, OilRecord};
    use crate::types::WellIdentifier;

    fn oil(month: &str, produced: f64) -> MonthlyRecord {
        MonthlyRecord::Oil(OilRecord {
            month: month.to_string(),
            oil_production: produced,
            oil_disposition: produced,
            gas_production: 0.0,
            gas_disposition: 0.0,
            operator: "ACME".to_string(),
            field: "FIELDX".to_string(),
        })
    }

    #[test]
    fn test_month_leads_sorted_columns() {
        let wells = vec![WellProduction {
            api: WellIdentifier::normalize("4250120130").unwrap(),
            records: vec![oil("01/2020", 1.0)],
        }];

        assert_eq!(
            table_columns(&wells),
            vec![
                "Month",
                "Field",
                "GasDisposition",
                "GasProduction",
                "OilDisposition",
                "OilProduction",
                "Operator",
            ]
        );
    }

    #[test]
    fn test_empty_batch_renders_nothing() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_render_table() {
        let wells = vec![
            WellProduction {
                api: WellIdentifier::normalize("42-501-20130").unwrap(),
                records: vec![oil("01/2020", 100.0), oil("02/2020", 1234.5)],
            },
            WellProduction {
                api: WellIdentifier::normalize("42-003-01234").unwrap(),
                records: vec![oil("01/2020", 7.0)],
            },
        ];

        insta::assert_snapshot!(render_table(&wells).replace('\t', " | "), @r"
        API | Month | Field | GasDisposition | GasProduction | OilDisposition | OilProduction | Operator
        4250120130 | 01/2020 | FIELDX | 0.0 | 0.0 | 100.0 | 100.0 | ACME
        4250120130 | 02/2020 | FIELDX | 0.0 | 0.0 | 1234.5 | 1234.5 | ACME
        4200301234 | 01/2020 | FIELDX | 0.0 | 0.0 | 7.0 | 7.0 | ACME
        ");
    }
}
