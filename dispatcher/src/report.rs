use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::strategy::Strategy;

/// Outcome of one dispatch strategy: total wall-clock seconds and ordered outputs.
#[derive(Debug, Serialize)]
pub struct ExecutionReport<O> {
    pub strategy: Strategy,
    pub elapsed: f64,
    pub outputs: Vec<O>,
}

impl<O> ExecutionReport<O> {
    pub fn new(strategy: Strategy, elapsed: f64, outputs: Vec<O>) -> Self {
        ExecutionReport {
            strategy,
            elapsed,
            outputs,
        }
    }
}

impl<O: fmt::Display> fmt::Display for ExecutionReport<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} execution completed in  {:.3} seconds.",
            self.strategy, self.elapsed
        )?;
        write!(f, "Output:  [")?;
        for (i, output) in self.outputs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", output)?;
        }
        writeln!(f, "]")
    }
}

/// Header line naming the host's processing units, followed by a blank line.
pub fn cpu_banner(cpus: usize) -> String {
    format!("You have {} CPUs. \n", cpus)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn render<O>(&self, report: &ExecutionReport<O>) -> serde_json::Result<String>
    where
        O: fmt::Display + Serialize,
    {
        match self {
            ReportFormat::Text => Ok(report.to_string()),
            ReportFormat::Json => serde_json::to_string(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use common::models::SubtaskOutput;

    use super::*;

    fn sample() -> ExecutionReport<SubtaskOutput> {
        ExecutionReport::new(
            Strategy::Sequential,
            4.004,
            vec![
                SubtaskOutput {
                    index: 1,
                    elapsed: 1.001,
                },
                SubtaskOutput {
                    index: 2,
                    elapsed: 1.0,
                },
            ],
        )
    }

    #[test]
    fn test_cpu_banner() {
        assert_eq!(cpu_banner(8), "You have 8 CPUs. \n");
    }

    #[test]
    fn test_render_text() {
        let text = ReportFormat::Text.render(&sample()).unwrap();
        assert_eq!(
            text,
            "Sequential execution completed in  4.004 seconds.\nOutput:  [(1, 1.001), (2, 1.0)]\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        let report: ExecutionReport<SubtaskOutput> =
            ExecutionReport::new(Strategy::Parallel, 0.0, Vec::new());
        let text = ReportFormat::Text.render(&report).unwrap();
        assert_eq!(text, "Parallel execution completed in  0.000 seconds.\nOutput:  []\n");
    }

    #[test]
    fn test_render_json() {
        let json = ReportFormat::Json.render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["strategy"], "sequential");
        assert_eq!(value["elapsed"], 4.004);
        assert_eq!(value["outputs"][0]["index"], 1);
        assert_eq!(value["outputs"].as_array().unwrap().len(), 2);
    }
}
