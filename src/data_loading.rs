use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs::File;
use std::path::Path;

use crate::schema::SensorColumns;
use crate::{timeparse, SensorFrame, TimedSample};

/// A loaded log: header names plus raw rows, untyped. The log is written by
/// the acquisition process and only ever read here.
#[derive(Debug, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a tracker log into memory. A missing file is the normal "logger has
/// not started yet" state and yields an empty table rather than an error.
///
/// The reader is flexible so a trailing line torn by a concurrent append
/// comes through as a short row; it is dropped later when its timestamp or
/// sensor cells fail to parse.
pub fn read_log_file(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        warn!("log file {} does not exist yet, treating as empty", path.display());
        return Ok(RawTable::default());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true) // Handle variable number of fields
        .from_reader(file);

    let columns: Vec<String> = rdr
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        match result {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => {
                debug!("skipping unreadable row: {}", e);
                continue;
            }
        }
    }

    debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(RawTable { columns, rows })
}

/// Annotates every row with its parsed instant, dropping rows whose first
/// cell parses as neither a known datetime format nor an epoch value.
/// Returns the surviving samples and the number of dropped rows.
pub fn attach_instants(table: &RawTable) -> (Vec<TimedSample>, usize) {
    let mut samples = Vec::with_capacity(table.rows.len());
    let mut dropped = 0usize;

    for row in &table.rows {
        let raw = row.first().map(String::as_str).unwrap_or("");
        match timeparse::parse_instant(raw) {
            Some(instant) => samples.push(TimedSample {
                instant,
                fields: row.clone(),
            }),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("dropped {} rows with unparseable timestamps", dropped);
    }
    (samples, dropped)
}

/// Narrows timed samples to the selected intensity channels. Rows whose
/// selected cells are missing or non-numeric are dropped, same as rows with
/// bad timestamps. Returns the frames and the number of dropped rows.
pub fn sensor_frames(samples: &[TimedSample], columns: &SensorColumns) -> (Vec<SensorFrame>, usize) {
    let mut frames = Vec::with_capacity(samples.len());
    let mut dropped = 0usize;

    for sample in samples {
        let channels: Option<Vec<f64>> = columns
            .indices
            .iter()
            .map(|&idx| {
                sample
                    .fields
                    .get(idx)
                    .and_then(|cell| cell.trim().parse::<f64>().ok())
            })
            .collect();

        match channels {
            Some(channels) => frames.push(SensorFrame {
                instant: sample.instant,
                channels,
            }),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("dropped {} rows with unreadable sensor cells", dropped);
    }
    (frames, dropped)
}
