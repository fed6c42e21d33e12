use anyhow::Result;
use chrono::Local;
use clap::Parser;
use log::debug;

use solar_decoder::config::Args;
use solar_decoder::{data_loading, energy, report, schema};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    let args = Args::parse();
    let table = data_loading::read_log_file(&args.log_path)?;
    debug!(
        "loaded table with {} columns, {} rows",
        table.columns.len(),
        table.rows.len()
    );

    if args.full_log {
        // Whole-log integration, the historical proxy_energy entry point
        let (samples, _) = data_loading::attach_instants(&table);
        let total = match schema::select_sensor_columns(&table.columns) {
            Some(sel) => {
                let (frames, _) = data_loading::sensor_frames(&samples, &sel);
                energy::proxy_energy(&frames, args.scale)
            }
            None => {
                println!("No valid LDR columns found.");
                0.0
            }
        };
        println!("Proxy energy (arbitrary units): {:.4}", total);
        if let Some(prefix) = &args.output {
            report::write_energy_scalar(prefix, total)?;
        }
        return Ok(());
    }

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let daily = report::build_daily_report(&table, date, args.scale);

    if daily.summary.total_samples == 0 {
        println!("No data for {}. CSV missing or no rows for that day.", date);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&daily.summary)?);
    } else {
        print!("{}", report::format_summary(&daily.summary));
    }

    if let Some(prefix) = &args.output {
        report::write_report_csv(prefix, &daily)?;
        report::write_energy_scalar(prefix, daily.summary.proxy_energy)?;
    }

    Ok(())
}
