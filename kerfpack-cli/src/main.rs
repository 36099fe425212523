use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use kerfpack_cli::compare::solve_compare;
use kerfpack_cli::config::CutConfig;
use kerfpack_cli::io;
use kerfpack_cli::io::cli::Cli;
use kerfpack_cli::solve::solve;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            CutConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if args.algorithm.is_some() {
        config.algorithm = args.algorithm.clone();
    }
    config.compare |= args.compare;

    info!("[MAIN] successfully parsed CutConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_job = io::read_job(&args.input_file)?;
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));

    match config.compare {
        false => {
            let output = solve(&ext_job, &config)?;
            io::write_json(&output, &solution_path)
        }
        true => {
            let output = solve_compare(&ext_job, &config)?;
            io::write_json(&output, &solution_path)
        }
    }
}
