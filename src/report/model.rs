use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// SaleRecord – one row of the sales table
// ---------------------------------------------------------------------------

/// A single sales transaction (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    /// Transaction date.
    pub date: NaiveDate,
    /// Customer identifier.
    pub customer: String,
    /// Sales region.
    pub region: String,
    /// Transaction amount. Non-negative, validated at load.
    pub total: f64,
    /// Raw cells of any extra CSV columns, in header order.
    /// Carried through untouched so export reproduces the input columns.
    pub extra: Vec<String>,
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// All records, in file order.
    pub records: Vec<SaleRecord>,
    /// The original CSV header row, in file order. Export reproduces it.
    pub header: Vec<String>,
}

/// Which record field a header column maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Date,
    Customer,
    Region,
    Total,
    /// Pass-through column; the index into `SaleRecord::extra`.
    Extra(usize),
}

/// Map each header column to the record field it fills. The first occurrence
/// of each required name wins; everything else is a pass-through column,
/// numbered in header order. `Err` names the first missing required column.
pub fn column_roles(header: &[String]) -> Result<Vec<ColumnRole>, &'static str> {
    let pos = |name: &'static str| -> Result<usize, &'static str> {
        header.iter().position(|h| h == name).ok_or(name)
    };
    let date_idx = pos("Date")?;
    let customer_idx = pos("Customer")?;
    let region_idx = pos("Region")?;
    let total_idx = pos("Total")?;

    let mut extra = 0;
    Ok((0..header.len())
        .map(|i| {
            if i == date_idx {
                ColumnRole::Date
            } else if i == customer_idx {
                ColumnRole::Customer
            } else if i == region_idx {
                ColumnRole::Region
            } else if i == total_idx {
                ColumnRole::Total
            } else {
                let role = ColumnRole::Extra(extra);
                extra += 1;
                role
            }
        })
        .collect())
}

impl SalesDataset {
    /// The role of each header column, in header order.
    pub fn column_roles(&self) -> Result<Vec<ColumnRole>, &'static str> {
        column_roles(&self.header)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest transaction date, if any records exist.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    /// Latest transaction date, if any records exist.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }

    /// The full date span of the dataset as a [`DateRange`].
    pub fn full_range(&self) -> Option<DateRange> {
        Some(DateRange {
            start: self.min_date()?,
            end: self.max_date()?,
        })
    }
}

// ---------------------------------------------------------------------------
// DateRange – the user-chosen filter interval
// ---------------------------------------------------------------------------

/// An inclusive calendar-date interval. `start > end` is representable and
/// simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether a date falls inside the interval (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when the interval is reversed and can match nothing.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = DateRange {
            start: d("2024-01-01"),
            end: d("2024-01-03"),
        };
        assert!(range.contains(d("2024-01-01")));
        assert!(range.contains(d("2024-01-02")));
        assert!(range.contains(d("2024-01-03")));
        assert!(!range.contains(d("2023-12-31")));
        assert!(!range.contains(d("2024-01-04")));
    }

    #[test]
    fn reversed_range_contains_nothing() {
        let range = DateRange {
            start: d("2024-01-03"),
            end: d("2024-01-01"),
        };
        assert!(range.is_reversed());
        assert!(!range.contains(d("2024-01-02")));
    }

    #[test]
    fn column_roles_follow_header_order() {
        let header: Vec<String> = ["OrderId", "Date", "Customer", "Region", "Total", "Notes"]
            .map(String::from)
            .to_vec();
        assert_eq!(
            column_roles(&header).unwrap(),
            vec![
                ColumnRole::Extra(0),
                ColumnRole::Date,
                ColumnRole::Customer,
                ColumnRole::Region,
                ColumnRole::Total,
                ColumnRole::Extra(1),
            ]
        );
    }

    #[test]
    fn column_roles_name_missing_column() {
        let header: Vec<String> = ["Date", "Customer", "Total"].map(String::from).to_vec();
        assert_eq!(column_roles(&header), Err("Region"));
    }
}
