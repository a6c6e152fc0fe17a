use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "roleboard")]
#[clap(about = "Data-engineer job statistics dashboard", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/roleboard/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
