use std::time::Duration;

use common::constants::SUBTASK_DELAY;
use serde::Deserialize;

pub mod app;
pub mod report;

use report::ReportFormat;

/// Prefix shared by every environment variable the dispatcher reads.
pub const ENV_PREFIX: &str = "SUBTASKS_";

#[derive(Debug, Deserialize)]
pub struct EnvVar {
    #[serde(default)]
    pub pool_size: Option<usize>,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub run_multi_args: bool,
    #[serde(default)]
    pub report_format: ReportFormat,
}

fn default_delay_ms() -> u64 {
    SUBTASK_DELAY.as_millis() as u64
}

impl EnvVar {
    /// Reads `SUBTASKS_*` variables, after loading `.env` if one exists.
    pub fn load() -> Result<EnvVar, envy::Error> {
        dotenv::dotenv().ok();
        EnvVar::from_vars(std::env::vars())
    }

    pub fn from_vars<Iter>(vars: Iter) -> Result<EnvVar, envy::Error>
    where
        Iter: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    pub fn subtask_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
