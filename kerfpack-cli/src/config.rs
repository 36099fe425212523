use serde::{Deserialize, Serialize};

use kerfpack::CalcOptions;
use kerfpack::entities::Job;
use kerfpack::packers::Algorithm;

/// Configuration of a cutting run
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CutConfig {
    /// Algorithm selector overriding the one in the job. The job's selector is used if undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Maximum number of sheets a calculation may open. Unbounded if undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sheets: Option<usize>,
    /// Run every algorithm and keep the best layout
    pub compare: bool,
}

impl CutConfig {
    pub fn calc_options(&self) -> CalcOptions {
        CalcOptions {
            max_sheets: self.max_sheets,
        }
    }

    /// Applies the algorithm override, if any, to an imported job.
    pub fn apply(&self, job: Job) -> Job {
        match &self.algorithm {
            Some(selector) => Job {
                algorithm: Algorithm::from_selector(selector),
                ..job
            },
            None => job,
        }
    }
}
