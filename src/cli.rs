use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scanwatch")]
#[command(about = "nmap host-discovery TUI with scan snapshots, diffing, and live monitoring", long_about = None)]
pub struct Cli {
    /// Initial scan target (hostname, IP, or CIDR range); prompted for if absent
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory for scan_<N>.txt files (overrides config; defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub scan_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that nmap and diff are installed
    CheckNmap,

    /// Run one scan headlessly, save it, and print the results
    Scan {
        /// Scan target (hostname, IP, or CIDR range)
        target: String,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
