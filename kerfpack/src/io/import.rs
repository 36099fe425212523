use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::{Job, Piece, SheetSpec};
use crate::io::ext_repr::{ExtJob, ExtPiece};
use crate::packers::Algorithm;

/// Imports a job into the library. The job is validated before it is returned.
pub fn import(ext_job: &ExtJob) -> Result<Job> {
    ensure!(
        ext_job.pieces.iter().map(|p| p.id).all_unique(),
        "all pieces should have unique ids. ids: {:?}",
        ext_job.pieces.iter().map(|p| p.id).sorted().collect_vec()
    );

    let pieces = ext_job.pieces.iter().map(import_piece).collect_vec();
    let algorithm = ext_job
        .algorithm
        .as_deref()
        .map(Algorithm::from_selector)
        .unwrap_or_default();
    let sheet = SheetSpec::new(ext_job.sheet_width, ext_job.sheet_height);

    let job = Job::new(pieces, sheet, ext_job.kerf, algorithm).context("invalid job")?;
    Ok(job)
}

pub fn import_piece(ext_piece: &ExtPiece) -> Piece {
    let piece = Piece::new(
        ext_piece.id,
        ext_piece.width,
        ext_piece.height,
        ext_piece.quantity,
    );
    match &ext_piece.name {
        Some(name) => piece.with_name(name.clone()),
        None => piece,
    }
}
