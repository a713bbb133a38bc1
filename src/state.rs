use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::color::RegionColors;
use crate::report::aggregate::{region_breakdown, summarize, time_series, Summary};
use crate::report::filter::{filter, FilteredView};
use crate::report::model::{DateRange, SalesDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dataset is read-only
/// after load; everything else is derived from it and the date range.
pub struct AppState {
    /// Loaded dataset (None until the startup load hands it over).
    pub dataset: Option<SalesDataset>,

    /// User-chosen inclusive date range.
    pub range: Option<DateRange>,

    /// Indices of records inside the current range (cached per interaction).
    pub view: FilteredView,

    /// KPI scalars for the current view.
    pub summary: Summary,

    /// (date, total) points for the trend chart, in view order.
    pub series: Vec<(NaiveDate, f64)>,

    /// Region → summed total for the pie chart.
    pub breakdown: BTreeMap<String, f64>,

    /// Stable region → colour assignment for the pie chart.
    pub region_colors: RegionColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            range: None,
            view: Vec::new(),
            summary: Summary::default(),
            series: Vec::new(),
            breakdown: BTreeMap::new(),
            region_colors: RegionColors::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// State with a dataset already in place (the startup path).
    pub fn with_dataset(dataset: SalesDataset) -> Self {
        let mut state = Self::default();
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset: default the range to the full date
    /// span, fix region colours, and compute the derived outputs.
    pub fn set_dataset(&mut self, dataset: SalesDataset) {
        self.range = dataset.full_range();

        let mut regions: Vec<&str> = dataset.records.iter().map(|r| r.region.as_str()).collect();
        regions.sort_unstable();
        regions.dedup();
        self.region_colors = RegionColors::new(regions);

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the view and all four derived outputs. One range change
    /// triggers exactly one call.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let Some(range) = self.range else {
            return;
        };

        self.view = filter(ds, range);
        self.summary = summarize(ds, &self.view);
        self.series = time_series(ds, &self.view);
        self.breakdown = region_breakdown(ds, &self.view);

        // A reversed range legitimately matches nothing; say so rather than
        // letting it look like missing data.
        self.status_message = if range.is_reversed() {
            Some("Start date is after end date; no records match.".to_string())
        } else {
            None
        };
    }

    /// Set both ends of the range and recompute.
    pub fn set_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.range = Some(DateRange { start, end });
        self.refilter();
    }

    /// Reset the range to the dataset's full date span.
    pub fn reset_range(&mut self) {
        if let Some(ds) = &self.dataset {
            self.range = ds.full_range();
        }
        self.refilter();
    }
}
