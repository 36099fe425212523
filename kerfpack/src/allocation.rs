use std::time::Instant;

use log::{debug, info, trace};

use crate::entities::{Job, LayoutResult, PieceUnit, Sheet};
use crate::error::CalcError;
use crate::packers::{
    Algorithm, BestFitPacker, BottomLeftPacker, GuillotinePacker, MaxRectsPacker, Packer,
};
use crate::util::assertions;

/// Limits a host can impose on a single calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CalcOptions {
    /// Maximum number of sheets that may be opened, unbounded if `None`
    pub max_sheets: Option<usize>,
}

/// Runs the job's algorithm until every unit is placed, with no limits.
pub fn calculate(job: &Job) -> Result<LayoutResult, CalcError> {
    calculate_with(job, &CalcOptions::default())
}

/// Runs the job's algorithm until every unit is placed.
///
/// The job is validated first. Every call works on its own unit queue and sheets,
/// so a [`Job`] can be calculated any number of times, with any algorithm.
pub fn calculate_with(job: &Job, options: &CalcOptions) -> Result<LayoutResult, CalcError> {
    job.validate()?;
    let start = Instant::now();

    let queue = unit_queue(job);
    let n_units = queue.len();
    let sheets = match job.algorithm {
        Algorithm::MaxRects => allocate(&MaxRectsPacker, job, queue, options),
        Algorithm::Guillotine => allocate(&GuillotinePacker, job, queue, options),
        Algorithm::BottomLeft => allocate(&BottomLeftPacker, job, queue, options),
        Algorithm::BestFit => allocate(&BestFitPacker, job, queue, options),
    }?;

    let layout = LayoutResult::new(job.algorithm, job.sheet, job.kerf, sheets);
    debug_assert!(assertions::layout_is_feasible(&layout));
    debug_assert!(assertions::stats_are_consistent(&layout.stats));

    info!(
        "[{}] placed {} units on {} sheet(s) in {:.3}ms, utilization {:.1}%",
        job.algorithm,
        n_units,
        layout.sheets_used(),
        start.elapsed().as_secs_f64() * 1000.0,
        layout.stats.utilization
    );
    Ok(layout)
}

/// Builds the queue of placeable units for the job's algorithm.
///
/// Only [`Algorithm::MaxRects`] expands a piece of quantity N into N units (copies `0..N`).
/// The other algorithms queue exactly one unit per piece, whatever its quantity.
pub fn unit_queue(job: &Job) -> Vec<PieceUnit> {
    let copies = |quantity: usize| match job.algorithm.expands_quantities() {
        true => (0..quantity).map(Some).collect::<Vec<_>>(),
        false => vec![None],
    };
    job.pieces
        .iter()
        .flat_map(|piece| copies(piece.quantity).into_iter().map(move |c| (piece, c)))
        .enumerate()
        .map(|(index, (piece, copy))| PieceUnit::new(index, piece, copy))
        .collect()
}

/// Opens sheets one by one and fills each of them by repeatedly placing the first unit
/// in queue order for which the packer finds a position.
fn allocate<P: Packer>(
    packer: &P,
    job: &Job,
    mut queue: Vec<PieceUnit>,
    options: &CalcOptions,
) -> Result<Vec<Sheet>, CalcError> {
    packer.order_queue(&mut queue);
    let mut sheets: Vec<Sheet> = vec![];

    while !queue.is_empty() {
        if let Some(limit) = options.max_sheets {
            if sheets.len() >= limit {
                return Err(CalcError::SheetLimitExceeded {
                    limit,
                    unplaced: queue.len(),
                });
            }
        }
        let mut sheet = packer.open_sheet(sheets.len() + 1, job.sheet, job.kerf);

        //restart the scan from the head of the queue after every placement
        loop {
            let found = queue
                .iter()
                .enumerate()
                .find_map(|(i, unit)| packer.find_placement(&sheet, unit).map(|p| (i, p)));
            let Some((i, placement)) = found else {
                break;
            };
            let unit = queue.remove(i);
            trace!(
                "[{}] placing unit {} at ({}, {}) on sheet {}{}",
                job.algorithm,
                unit.label(),
                placement.rect.x,
                placement.rect.y,
                sheet.id,
                if placement.rotated { ", rotated" } else { "" }
            );
            packer.place(&mut sheet, &unit, placement);
        }

        if sheet.is_empty() {
            //nothing fits an empty sheet, opening more would never terminate
            let head = &queue[0];
            return Err(CalcError::PieceTooLarge {
                piece_id: head.piece_id,
                width: head.width,
                height: head.height,
                sheet_width: job.sheet.width,
                sheet_height: job.sheet.height,
                kerf: job.kerf,
            });
        }

        debug_assert!(sheet.is_feasible());
        debug!(
            "[{}] sheet {} closed with {} pieces, density {:.3}%, {} units left",
            job.algorithm,
            sheet.id,
            sheet.placed_pieces.len(),
            sheet.density() * 100.0,
            queue.len()
        );
        sheets.push(sheet);
    }

    Ok(sheets)
}
