use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("[x] todo v", env!("CARGO_PKG_VERSION"), " - a to-do list that forgets when you close it"), version)]
pub struct Cli {
    /// TOML file with window size and theme colors
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Append log output to this file instead of stderr
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (e.g. "debug", "tasklist=trace")
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}
