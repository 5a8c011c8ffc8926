//! Segment data structures, forecast loading, and scenario assembly

mod data;
pub mod loader;
pub mod scenario;

pub use data::{PeriodProjection, ProjectionSet, Segment};
pub use loader::{load_forecast, load_forecast_from_reader};
pub use scenario::ScenarioParams;
