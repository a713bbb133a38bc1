use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use super::model::{column_roles, ColumnRole, SaleRecord, SalesDataset};

/// Date format the `Date` column must follow (ISO, what Pandas emits by default).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// DataLoadError
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the sales CSV. Fatal at
/// startup; shown as a status message when triggered from File → Open.
/// `line` is the 1-based line in the file (the header is line 1).
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: '{value}' is not a valid date (expected {DATE_FORMAT})")]
    BadDate { line: u64, value: String },

    #[error("line {line}: '{value}' is not a valid amount")]
    BadTotal { line: u64, value: String },

    #[error("line {line}: negative amount {value}")]
    NegativeTotal { line: u64, value: f64 },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a CSV file.
///
/// Expected layout: header row with at least `Date`, `Customer`, `Region`
/// and `Total` columns. `Date` must be `YYYY-MM-DD`, `Total` a finite
/// non-negative number. Any further columns are kept as opaque text and
/// survive export in their original positions.
pub fn load(path: &Path) -> Result<SalesDataset, DataLoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let roles = column_roles(&header).map_err(DataLoadError::MissingColumn)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        // 1-based file line; header is line 1, so data row n starts at n + 2.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_no as u64 + 2);

        let mut date = None;
        let mut customer = String::new();
        let mut region = String::new();
        let mut total: f64 = 0.0;
        let mut extra = Vec::new();

        for (cell, role) in record.iter().zip(&roles) {
            match role {
                ColumnRole::Date => {
                    date = Some(NaiveDate::parse_from_str(cell, DATE_FORMAT).map_err(
                        |_| DataLoadError::BadDate {
                            line,
                            value: cell.to_string(),
                        },
                    )?);
                }
                ColumnRole::Customer => customer = cell.to_string(),
                ColumnRole::Region => region = cell.to_string(),
                ColumnRole::Total => {
                    total = cell.trim().parse().map_err(|_| DataLoadError::BadTotal {
                        line,
                        value: cell.to_string(),
                    })?;
                    // NaN/inf would silently poison every downstream sum.
                    if !total.is_finite() {
                        return Err(DataLoadError::BadTotal {
                            line,
                            value: cell.to_string(),
                        });
                    }
                    if total < 0.0 {
                        return Err(DataLoadError::NegativeTotal { line, value: total });
                    }
                }
                ColumnRole::Extra(_) => extra.push(cell.to_string()),
            }
        }

        let date = date.ok_or(DataLoadError::BadDate {
            line,
            value: String::new(),
        })?;

        records.push(SaleRecord {
            date,
            customer,
            region,
            total,
            extra,
        });
    }

    Ok(SalesDataset { records, header })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_well_formed_file() {
        let file = write_csv(
            "Date,Customer,Region,Total\n\
             2024-01-01,A,East,100\n\
             2024-01-02,B,West,50.5\n",
        );
        let ds = load(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].customer, "A");
        assert_eq!(ds.records[0].region, "East");
        assert_eq!(ds.records[0].total, 100.0);
        assert_eq!(ds.records[1].date, "2024-01-02".parse().unwrap());
        assert_eq!(ds.header, ["Date", "Customer", "Region", "Total"]);
    }

    #[test]
    fn preserves_extra_columns_in_header_order() {
        let file = write_csv(
            "OrderId,Date,Customer,Region,Total,Notes\n\
             o-1,2024-01-01,A,East,100,first\n",
        );
        let ds = load(file.path()).unwrap();
        assert_eq!(
            ds.header,
            ["OrderId", "Date", "Customer", "Region", "Total", "Notes"]
        );
        assert_eq!(ds.records[0].extra, vec!["o-1", "first"]);
        assert_eq!(ds.records[0].customer, "A");
        assert_eq!(ds.records[0].total, 100.0);
    }

    #[test]
    fn rejects_missing_required_column() {
        let file = write_csv("Date,Customer,Total\n2024-01-01,A,100\n");
        match load(file.path()) {
            Err(DataLoadError::MissingColumn("Region")) => {}
            other => panic!("expected MissingColumn(Region), got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparsable_date_with_file_line() {
        let file = write_csv(
            "Date,Customer,Region,Total\n\
             2024-01-01,A,East,100\n\
             01/02/2024,B,West,50\n",
        );
        match load(file.path()) {
            Err(DataLoadError::BadDate { line, value }) => {
                assert_eq!(line, 3); // header is line 1
                assert_eq!(value, "01/02/2024");
            }
            other => panic!("expected BadDate, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparsable_or_negative_total() {
        let file = write_csv("Date,Customer,Region,Total\n2024-01-01,A,East,lots\n");
        match load(file.path()) {
            Err(DataLoadError::BadTotal { line: 2, value }) => assert_eq!(value, "lots"),
            other => panic!("expected BadTotal, got {other:?}"),
        }

        let file = write_csv("Date,Customer,Region,Total\n2024-01-01,A,East,-5\n");
        assert!(matches!(
            load(file.path()),
            Err(DataLoadError::NegativeTotal { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_non_finite_total() {
        for cell in ["NaN", "nan", "inf", "-inf", "infinity"] {
            let file = write_csv(&format!(
                "Date,Customer,Region,Total\n\
                 2024-01-01,A,East,{cell}\n\
                 2024-01-02,B,West,50\n"
            ));
            match load(file.path()) {
                Err(DataLoadError::BadTotal { line: 2, value }) => assert_eq!(value, cell),
                other => panic!("expected BadTotal for '{cell}', got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            load(Path::new("/nonexistent/sales.csv")),
            Err(DataLoadError::Csv(_))
        ));
    }
}
