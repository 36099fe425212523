use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Job to cut, as JSON
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the algorithm of the job and the config file
    #[arg(
        short,
        long,
        value_name = "[maxrects, guillotine, bottom_left, best_fit]"
    )]
    pub algorithm: Option<String>,
    /// Run every algorithm and keep the best layout
    #[arg(long)]
    pub compare: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
