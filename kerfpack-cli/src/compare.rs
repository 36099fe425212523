use std::cmp::Ordering;

use anyhow::{Result, bail};
use itertools::Itertools;
use log::{info, warn};
use rayon::prelude::*;

use kerfpack::entities::{Job, LayoutResult};
use kerfpack::io::ext_repr::ExtJob;
use kerfpack::io::export;
use kerfpack::packers::Algorithm;
use kerfpack::util::FPA;
use kerfpack::{CalcError, CalcOptions, calculate_with};

use crate::config::CutConfig;
use crate::io::output::{CompareOutput, ExtRanking};
use crate::solve::import_job;

/// Outcome of running every algorithm on the same job.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Successful layouts, best first
    pub ranked: Vec<LayoutResult>,
    pub failed: Vec<(Algorithm, CalcError)>,
}

impl Comparison {
    pub fn best(&self) -> Option<&LayoutResult> {
        self.ranked.first()
    }
}

/// Calculates a layout with every algorithm, in parallel. Every calculation works on its own
/// copy of the job.
pub fn compare_algorithms(job: &Job, options: &CalcOptions) -> Comparison {
    let results = Algorithm::ALL
        .par_iter()
        .map(|&algorithm| {
            let job = Job {
                algorithm,
                ..job.clone()
            };
            (algorithm, calculate_with(&job, options))
        })
        .collect::<Vec<_>>();

    let (mut ranked, failed): (Vec<_>, Vec<_>) =
        results
            .into_iter()
            .partition_map(|(algorithm, result)| match result {
                Ok(layout) => itertools::Either::Left(layout),
                Err(err) => itertools::Either::Right((algorithm, err)),
            });

    //stable: equally good layouts keep the algorithm order
    ranked.sort_by(rank_layouts);
    Comparison { ranked, failed }
}

/// More placed units first, then fewer sheets, then higher utilization.
///
/// Only MaxRects cuts every requested copy of a piece, so a layout from another algorithm
/// never outranks it on a job with quantities above one.
pub fn rank_layouts(a: &LayoutResult, b: &LayoutResult) -> Ordering {
    b.placed_unit_count()
        .cmp(&a.placed_unit_count())
        .then_with(|| a.sheets_used().cmp(&b.sheets_used()))
        .then_with(|| {
            FPA(b.stats.utilization)
                .partial_cmp(&FPA(a.stats.utilization))
                .unwrap_or(Ordering::Equal)
        })
}

/// Runs every algorithm on the job and exports the best layout.
pub fn solve_compare(ext_job: &ExtJob, config: &CutConfig) -> Result<CompareOutput> {
    let job = import_job(ext_job, config)?;
    let comparison = compare_algorithms(&job, &config.calc_options());

    for (algorithm, err) in &comparison.failed {
        warn!("[CMP] {algorithm} failed: {err}");
    }
    let Some(best) = comparison.best() else {
        match comparison.failed.into_iter().next() {
            Some((_, err)) => return Err(err.into()),
            None => bail!("no algorithm was run"),
        }
    };
    info!(
        "[CMP] best: {} with {}/{} units on {} sheet(s), {:.1}% utilization",
        best.algorithm,
        best.placed_unit_count(),
        job.total_unit_qty(),
        best.sheets_used(),
        best.stats.utilization
    );

    let ranking = comparison
        .ranked
        .iter()
        .map(|l| ExtRanking {
            algorithm: l.algorithm.to_string(),
            placed_units: Some(l.placed_unit_count()),
            sheets_used: Some(l.sheets_used()),
            utilization: Some(export::export_stats(&l.stats, l.placed_unit_count()).utilization),
            error: None,
        })
        .chain(comparison.failed.iter().map(|(algorithm, err)| ExtRanking {
            algorithm: algorithm.to_string(),
            placed_units: None,
            sheets_used: None,
            utilization: None,
            error: Some(err.to_string()),
        }))
        .collect_vec();

    Ok(CompareOutput {
        job: ext_job.clone(),
        ranking,
        solution: export::export(&job, best),
        config: config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerfpack::entities::{Piece, SheetSpec};

    fn job() -> Job {
        // guillotine needs a second sheet for this one, see the engine's scenario tests
        let pieces = vec![Piece::new(1, 300.0, 400.0, 1), Piece::new(2, 700.0, 150.0, 1)];
        Job::new(pieces, SheetSpec::new(1000.0, 600.0), 3.0, Algorithm::Guillotine).unwrap()
    }

    #[test]
    fn fewest_sheets_rank_first() {
        let comparison = compare_algorithms(&job(), &CalcOptions::default());
        assert!(comparison.failed.is_empty());
        let order = comparison.ranked.iter().map(|l| l.algorithm).collect_vec();
        assert_eq!(
            order,
            vec![
                Algorithm::MaxRects,
                Algorithm::BottomLeft,
                Algorithm::BestFit,
                Algorithm::Guillotine
            ]
        );
    }

    #[test]
    fn failures_are_collected() {
        let options = CalcOptions {
            max_sheets: Some(1),
        };
        let comparison = compare_algorithms(&job(), &options);
        assert_eq!(comparison.ranked.len(), 3);
        assert_eq!(comparison.failed.len(), 1);
        assert_eq!(comparison.failed[0].0, Algorithm::Guillotine);
        assert_eq!(comparison.best().unwrap().algorithm, Algorithm::MaxRects);
    }

    #[test]
    fn layouts_cutting_every_copy_rank_first() {
        let pieces = vec![Piece::new(1, 500.0, 500.0, 8)];
        let sheet = SheetSpec::new(1000.0, 1000.0);
        let job = Job::new(pieces, sheet, 0.0, Algorithm::Guillotine).unwrap();
        let comparison = compare_algorithms(&job, &CalcOptions::default());

        // one unit on one sheet for the others, all eight on two sheets for maxrects
        let best = comparison.best().unwrap();
        assert_eq!(best.algorithm, Algorithm::MaxRects);
        assert_eq!(best.placed_unit_count(), job.total_unit_qty());
        assert_eq!(best.sheets_used(), 2);
        let order = comparison.ranked.iter().map(|l| l.algorithm).collect_vec();
        assert_eq!(
            order,
            vec![
                Algorithm::MaxRects,
                Algorithm::Guillotine,
                Algorithm::BottomLeft,
                Algorithm::BestFit
            ]
        );
    }
}
