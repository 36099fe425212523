use thiserror::Error;

/// Reasons a calculation is refused or aborted.
/// A failed calculation never yields a partial layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("no pieces to cut")]
    EmptyPieceList,

    #[error("invalid sheet dimensions {width}x{height}")]
    InvalidSheet { width: f64, height: f64 },

    #[error("invalid kerf {0}, must be a finite value >= 0")]
    InvalidKerf(f64),

    #[error("invalid piece {piece_id}: {reason}")]
    InvalidPiece { piece_id: u64, reason: &'static str },

    #[error(
        "piece {piece_id} ({width}x{height}) does not fit a {sheet_width}x{sheet_height} sheet in any orientation (kerf {kerf})"
    )]
    PieceTooLarge {
        piece_id: u64,
        width: f64,
        height: f64,
        sheet_width: f64,
        sheet_height: f64,
        kerf: f64,
    },

    #[error("sheet limit of {limit} reached with {unplaced} units still unplaced")]
    SheetLimitExceeded { limit: usize, unplaced: usize },
}

/// Discriminant of a [`CalcError`], for callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyPieceList,
    InvalidSheet,
    InvalidKerf,
    InvalidPiece,
    PieceTooLarge,
    SheetLimitExceeded,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::EmptyPieceList => ErrorKind::EmptyPieceList,
            CalcError::InvalidSheet { .. } => ErrorKind::InvalidSheet,
            CalcError::InvalidKerf(_) => ErrorKind::InvalidKerf,
            CalcError::InvalidPiece { .. } => ErrorKind::InvalidPiece,
            CalcError::PieceTooLarge { .. } => ErrorKind::PieceTooLarge,
            CalcError::SheetLimitExceeded { .. } => ErrorKind::SheetLimitExceeded,
        }
    }

    /// Id of the piece that caused the failure, if the failure is tied to one.
    pub fn piece_id(&self) -> Option<u64> {
        match self {
            CalcError::InvalidPiece { piece_id, .. } | CalcError::PieceTooLarge { piece_id, .. } => {
                Some(*piece_id)
            }
            _ => None,
        }
    }
}
