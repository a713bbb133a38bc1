/// Report layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   sales_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SalesDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalesDataset  │  Vec<SaleRecord>, header row
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  inclusive date range → view indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ aggregate / export │  KPIs, time series, region sums, CSV bytes
///   └───────────────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
