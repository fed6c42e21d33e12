use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

use crate::data_loading::{self, RawTable};
use crate::schema::{self, SchemaKind};
use crate::{daily, energy, TimedSample};

#[derive(Debug, Clone, Serialize)]
pub struct ColumnMean {
    pub column: String,
    pub mean: f64,
}

/// Everything the presentation layer needs for one day: counts, per-column
/// means, and the proxy-energy scalar. Serializable for the `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_samples: usize,
    pub dropped_rows: usize,
    pub schema: Option<SchemaKind>,
    pub sensor_columns: Vec<String>,
    pub column_means: Vec<ColumnMean>,
    pub proxy_energy: f64,
}

/// A daily summary plus the rows it was computed from, in log order, so the
/// presentation layer can render the day's table alongside the numbers.
#[derive(Debug)]
pub struct DailyReport {
    pub summary: DailySummary,
    pub columns: Vec<String>,
    pub rows: Vec<TimedSample>,
}

/// Mean of a column over the day's rows, or `None` when any cell is
/// non-numeric (text columns are skipped from the means, same as the
/// numeric-dtype check the report has always done).
fn column_mean(rows: &[TimedSample], idx: usize) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for row in rows {
        sum += row.fields.get(idx)?.trim().parse::<f64>().ok()?;
    }
    Some(sum / rows.len() as f64)
}

/// Assembles the report for one calendar day of a loaded log.
///
/// Every degraded input (no rows for the day, unresolved schema, all rows
/// unparseable) comes back as a well-formed summary with zero counts and a
/// 0.0 estimate, so "no data yet" is distinguishable from an I/O error by
/// shape alone.
pub fn build_daily_report(table: &RawTable, date: NaiveDate, scale: f64) -> DailyReport {
    let (samples, time_dropped) = data_loading::attach_instants(table);
    let rows = daily::select_day(&samples, date);

    let selection = schema::select_sensor_columns(&table.columns);
    let (proxy, frame_dropped, schema_kind, sensor_names) = match &selection {
        Some(sel) => {
            let (frames, dropped) = data_loading::sensor_frames(&rows, sel);
            (
                energy::proxy_energy(&frames, scale),
                dropped,
                Some(sel.kind),
                sel.names.clone(),
            )
        }
        None => (0.0, 0, None, Vec::new()),
    };

    let mut column_means = Vec::new();
    for (idx, name) in table.columns.iter().enumerate().skip(1) {
        if let Some(mean) = column_mean(&rows, idx) {
            column_means.push(ColumnMean {
                column: name.clone(),
                mean,
            });
        }
    }

    DailyReport {
        summary: DailySummary {
            date,
            total_samples: rows.len(),
            dropped_rows: time_dropped + frame_dropped,
            schema: schema_kind,
            sensor_columns: sensor_names,
            column_means,
            proxy_energy: proxy,
        },
        columns: table.columns.clone(),
        rows,
    }
}

/// Renders the human-readable summary block.
pub fn format_summary(summary: &DailySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Daily Report - {}", summary.date.format("%Y-%m-%d"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Total samples: {}", summary.total_samples);
    if !summary.column_means.is_empty() {
        let _ = writeln!(out, "Mean sensor values:");
        for cm in &summary.column_means {
            let _ = writeln!(out, "  {}: {:.2}", cm.column, cm.mean);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Proxy energy (arbitrary units): {:.4}",
        summary.proxy_energy
    );
    out
}

/// Writes the day's rows to `<prefix>_daily.csv`, creating parent
/// directories as needed.
pub fn write_report_csv(prefix: &str, report: &DailyReport) -> Result<()> {
    let full_path = artifact_path(prefix, "daily.csv")?;
    println!("Writing daily rows to {}", full_path.display());

    let file = std::fs::File::create(full_path)?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(&report.columns)?;
    for row in &report.rows {
        writer.write_record(&row.fields)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the bare scalar to `<prefix>_proxy_energy.txt`, the artifact the
/// dashboard side has historically polled.
pub fn write_energy_scalar(prefix: &str, value: f64) -> Result<()> {
    let full_path = artifact_path(prefix, "proxy_energy.txt")?;
    println!("Writing proxy energy to {}", full_path.display());
    std::fs::write(full_path, format!("{:.4}", value))?;
    Ok(())
}

fn artifact_path(prefix: &str, suffix: &str) -> Result<std::path::PathBuf> {
    let path = Path::new(prefix);
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let stem = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    Ok(dir.join(format!("{}_{}", stem, suffix)))
}
