use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::filter::FilteredView;
use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Summary – the three KPI scalars
// ---------------------------------------------------------------------------

/// The KPI strip: three scalars derived from the current view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Sum of `total` over the view (0.0 for an empty view).
    pub total_revenue: f64,
    /// Number of records in the view.
    pub order_count: usize,
    /// Number of distinct customers in the view.
    pub unique_customers: usize,
}

/// Compute the KPI summary for a view.
pub fn summarize(dataset: &SalesDataset, view: &FilteredView) -> Summary {
    let mut customers: BTreeSet<&str> = BTreeSet::new();
    let mut total_revenue = 0.0;
    for &i in view {
        let rec = &dataset.records[i];
        total_revenue += rec.total;
        customers.insert(rec.customer.as_str());
    }
    Summary {
        total_revenue,
        order_count: view.len(),
        unique_customers: customers.len(),
    }
}

// ---------------------------------------------------------------------------
// Time series and region breakdown
// ---------------------------------------------------------------------------

/// One `(date, total)` point per record, in view order. Not re-sorted:
/// duplicate dates appear as separate points, matching the source rows.
pub fn time_series(dataset: &SalesDataset, view: &FilteredView) -> Vec<(NaiveDate, f64)> {
    view.iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            (rec.date, rec.total)
        })
        .collect()
}

/// Sum of `total` per region over the view. Map iteration order is a detail
/// of the grouping, not of row order.
pub fn region_breakdown(dataset: &SalesDataset, view: &FilteredView) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for &i in view {
        let rec = &dataset.records[i];
        *sums.entry(rec.region.clone()).or_default() += rec.total;
    }
    sums
}
