//! Load segment forecasts from CSV
//!
//! Long-form layout, one row per segment-year:
//!
//! ```csv
//! segment,year,revenue,ebitda
//! Domestic,2025,0,-3804274
//! Domestic,2026,5248050,259896
//! ```
//!
//! Rows for a segment must appear in year order; segment order follows
//! first appearance.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::data::PeriodProjection;
use super::scenario::SegmentForecast;

/// One CSV row of the forecast file
#[derive(Debug, Deserialize)]
struct ForecastRow {
    segment: String,
    year: i32,
    revenue: f64,
    ebitda: f64,
}

/// Load a forecast table from a CSV file
pub fn load_forecast<P: AsRef<Path>>(path: P) -> Result<Vec<SegmentForecast>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    load_forecast_from_reader(file)
}

/// Load a forecast table from any reader
pub fn load_forecast_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<SegmentForecast>, Box<dyn std::error::Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut forecasts: Vec<SegmentForecast> = Vec::new();

    for record in csv_reader.deserialize() {
        let row: ForecastRow = record?;
        let projection = PeriodProjection {
            period: row.year,
            revenue: row.revenue,
            ebitda: row.ebitda,
        };

        match forecasts.iter_mut().find(|f| f.name == row.segment) {
            Some(forecast) => forecast.periods.push(projection),
            None => forecasts.push(SegmentForecast {
                name: row.segment,
                periods: vec![projection],
            }),
        }
    }

    log::debug!("loaded forecast for {} segments", forecasts.len());
    Ok(forecasts)
}
