use anyhow::{anyhow, Context, Result};

use super::filter::FilteredView;
use super::loader::DATE_FORMAT;
use super::model::{ColumnRole, SalesDataset};

// ---------------------------------------------------------------------------
// CSV export of the filtered view
// ---------------------------------------------------------------------------

/// Serialize the view back to CSV: the original header row first, one line
/// per record in view order, every column in its original position, no
/// synthetic index column. Reloading the output yields the same records.
pub fn export_csv(dataset: &SalesDataset, view: &FilteredView) -> Result<Vec<u8>> {
    let roles = dataset
        .column_roles()
        .map_err(|col| anyhow!("dataset header is missing required column '{col}'"))?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&dataset.header)
        .context("writing CSV header")?;

    for &i in view {
        let rec = &dataset.records[i];
        let row: Vec<String> = roles
            .iter()
            .map(|role| match role {
                ColumnRole::Date => rec.date.format(DATE_FORMAT).to_string(),
                ColumnRole::Customer => rec.customer.clone(),
                ColumnRole::Region => rec.region.clone(),
                ColumnRole::Total => rec.total.to_string(),
                ColumnRole::Extra(n) => rec.extra.get(*n).cloned().unwrap_or_default(),
            })
            .collect();
        writer
            .write_record(&row)
            .with_context(|| format!("writing CSV row for record {i}"))?;
    }

    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("flushing CSV writer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::filter::filter;
    use crate::report::loader::load;
    use crate::report::model::{DateRange, SaleRecord};
    use std::io::Write;

    fn base_header() -> Vec<String> {
        ["Date", "Customer", "Region", "Total"]
            .map(String::from)
            .to_vec()
    }

    fn record(date: &str, customer: &str, region: &str, total: f64, extra: &[&str]) -> SaleRecord {
        SaleRecord {
            date: date.parse().unwrap(),
            customer: customer.to_string(),
            region: region.to_string(),
            total,
            extra: extra.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn export_has_header_and_view_rows_only() {
        let ds = SalesDataset {
            records: vec![
                record("2024-01-01", "A", "East", 100.0, &[]),
                record("2024-01-02", "B", "West", 50.0, &[]),
                record("2024-01-03", "A", "East", 25.0, &[]),
            ],
            header: base_header(),
        };
        let view = filter(
            &ds,
            DateRange {
                start: "2024-01-01".parse().unwrap(),
                end: "2024-01-02".parse().unwrap(),
            },
        );
        let bytes = export_csv(&ds, &view).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Date,Customer,Region,Total\n\
             2024-01-01,A,East,100\n\
             2024-01-02,B,West,50\n"
        );
    }

    #[test]
    fn empty_view_exports_header_only() {
        let ds = SalesDataset {
            records: vec![record("2024-01-01", "A", "East", 100.0, &[])],
            header: base_header(),
        };
        let bytes = export_csv(&ds, &Vec::new()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Date,Customer,Region,Total\n");
    }

    #[test]
    fn export_preserves_original_column_order() {
        // Pass-through columns before and after the required ones must come
        // back out exactly where they went in.
        let input = "OrderId,Date,Customer,Region,Total,Notes\n\
                     o-1,2024-01-01,A,East,100,first\n\
                     o-2,2024-01-02,B,West,50,second\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(input.as_bytes()).unwrap();
        let ds = load(file.path()).unwrap();

        let view = filter(&ds, ds.full_range().unwrap());
        let bytes = export_csv(&ds, &view).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), input);
    }

    #[test]
    fn export_then_reload_round_trips() {
        let ds = SalesDataset {
            records: vec![
                record("2024-01-01", "A", "East", 100.5, &["o-1"]),
                record("2024-01-02", "B", "West", 50.0, &["o-2"]),
            ],
            header: ["Date", "Customer", "Region", "Total", "OrderId"]
                .map(String::from)
                .to_vec(),
        };
        let view = filter(&ds, ds.full_range().unwrap());
        let bytes = export_csv(&ds, &view).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        let reloaded = load(file.path()).unwrap();

        assert_eq!(reloaded.header, ds.header);
        assert_eq!(reloaded.records, ds.records);
    }
}
