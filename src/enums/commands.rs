use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::DEFAULT_DASHBOARD_PORT;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Check the configuration for problems
    Validate,
    /// List the dashboard categories and their endpoints
    Categories,
    /// Fetch every category once and print the ranked charts
    Report {
        #[clap(short, long)]
        category: Option<String>,
        #[clap(long)]
        json: bool,
        /// Pixel height of the chart surface, enables the gradient fill in JSON output
        #[clap(long)]
        surface_height: Option<u32>,
        /// Read `<slug>.json` snapshots from this directory instead of the configured source
        #[clap(long)]
        from_dir: Option<PathBuf>,
    },
    /// Serve the dashboard JSON API
    Serve {
        #[clap(short, long, default_value_t = DEFAULT_DASHBOARD_PORT)]
        port: u16,
        #[clap(long)]
        open: bool,
    },
}
