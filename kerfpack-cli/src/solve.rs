use anyhow::Result;
use log::info;
use thousands::Separable;

use kerfpack::calculate_with;
use kerfpack::entities::Job;
use kerfpack::io::ext_repr::ExtJob;
use kerfpack::io::{export, import};

use crate::config::CutConfig;
use crate::io::output::CutOutput;

/// Imports the job, applies the config and calculates a layout with the selected algorithm.
pub fn solve(ext_job: &ExtJob, config: &CutConfig) -> Result<CutOutput> {
    let job = import_job(ext_job, config)?;
    let layout = calculate_with(&job, &config.calc_options())?;

    info!(
        "[SOLVE] {} cut {} of {} units on {} sheet(s), {:.1}% utilization",
        job.algorithm,
        layout.placed_unit_count(),
        job.total_unit_qty(),
        layout.sheets_used(),
        layout.stats.utilization
    );

    Ok(CutOutput {
        job: ext_job.clone(),
        solution: export::export(&job, &layout),
        config: config.clone(),
    })
}

pub fn import_job(ext_job: &ExtJob, config: &CutConfig) -> Result<Job> {
    let job = config.apply(import::import(ext_job)?);
    info!(
        "[SOLVE] job with {} pieces ({} units, {} mm²) on {}x{} sheets, kerf {}",
        job.pieces.len(),
        job.total_unit_qty(),
        (job.total_piece_area().round() as u64).separate_with_commas(),
        job.sheet.width,
        job.sheet.height,
        job.kerf
    );
    Ok(job)
}
