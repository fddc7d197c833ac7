pub mod aggregate;
pub mod band_scale;
pub mod domain;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;

#[cfg(feature = "parallel-aggregation")]
pub use aggregate::aggregate_parallel;
pub use aggregate::{aggregate, sorted_by_key, sorted_by_value_desc, top_n_by, total};
pub use band_scale::{BandOptions, BandScale};
pub use domain::{ContinuousDomain, OrdinalDomain};
pub use primitives::year_start;
pub use scale::{DegeneratePolicy, LinearScale};
pub use time_scale::TemporalScale;
pub use types::{Metric, Movie};
