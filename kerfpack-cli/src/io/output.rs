use serde::{Deserialize, Serialize};

use kerfpack::io::ext_repr::{ExtJob, ExtLayoutResult};

use crate::config::CutConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CutOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub solution: ExtLayoutResult,
    pub config: CutConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CompareOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    /// Every algorithm, best first
    pub ranking: Vec<ExtRanking>,
    /// Layout of the best ranked algorithm
    pub solution: ExtLayoutResult,
    pub config: CutConfig,
}

/// Outcome of one algorithm in a comparison
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRanking {
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_units: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheets_used: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization: Option<f64>,
    /// Why the algorithm did not produce a layout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
