use super::model::{DateRange, SalesDataset};

// ---------------------------------------------------------------------------
// Date-range filter: dataset + range → view indices
// ---------------------------------------------------------------------------

/// A filtered view: indices into `SalesDataset::records`, in file order.
/// Recomputed on every range change, never persisted.
pub type FilteredView = Vec<usize>;

/// Return indices of records whose date lies within `range` (inclusive on
/// both ends). Total function: a reversed range yields an empty view rather
/// than an error, and an empty view is a valid result every consumer must
/// handle.
pub fn filter(dataset: &SalesDataset, range: DateRange) -> FilteredView {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.date))
        .map(|(i, _)| i)
        .collect()
}
