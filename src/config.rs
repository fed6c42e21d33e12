use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Build daily reports from a solar tracker CSV log
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the tracker CSV log
    #[arg(help = "Path to the tracker CSV log")]
    pub log_path: PathBuf,

    /// Report date (format: YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Scale factor applied to the proxy-energy integral
    #[arg(long, default_value = "1.0")]
    pub scale: f64,

    /// Output file prefix for report artifacts (e.g. /path/to/output/prefix)
    #[arg(long)]
    pub output: Option<String>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Integrate the whole log instead of a single day
    #[arg(long)]
    pub full_log: bool,
}
