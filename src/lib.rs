pub mod config;
pub mod daily;
pub mod data_loading;
pub mod energy;
pub mod report;
pub mod schema;
pub mod timeparse;

use chrono::NaiveDateTime;

/// One log row that survived timestamp parsing. The raw field values are
/// kept as written so the report layer can echo them back out unchanged.
#[derive(Debug, Clone)]
pub struct TimedSample {
    pub instant: NaiveDateTime,
    pub fields: Vec<String>,
}

/// A timed sample narrowed to the selected light-intensity channels.
/// Channel count and order are fixed for one load; see `schema`.
#[derive(Debug, Clone)]
pub struct SensorFrame {
    pub instant: NaiveDateTime,
    pub channels: Vec<f64>,
}

impl SensorFrame {
    /// Arithmetic mean across the selected channels.
    pub fn mean_intensity(&self) -> f64 {
        if self.channels.is_empty() {
            return 0.0;
        }
        self.channels.iter().sum::<f64>() / self.channels.len() as f64
    }
}

/// One row of the dashboard energy series: the trapezoid increment for the
/// interval ending at this instant, and the running total so far.
#[derive(Debug, Clone, Copy)]
pub struct EnergyPoint {
    pub instant: NaiveDateTime,
    pub instantaneous: f64,
    pub cumulative: f64,
}
