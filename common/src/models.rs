use std::fmt;

use serde::{Deserialize, Serialize};

/// Index identifying one unit of work.
pub type TaskParam = u32;

/// Output of a single-argument subtask: its index and the seconds it took.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubtaskOutput {
    pub index: TaskParam,
    pub elapsed: f64,
}

/// Output of a two-argument subtask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiSubtaskOutput {
    pub index: TaskParam,
    pub index2: TaskParam,
    pub elapsed: f64,
}

impl fmt::Display for SubtaskOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.index, self.elapsed)
    }
}

impl fmt::Display for MultiSubtaskOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {:?})", self.index, self.index2, self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let output = SubtaskOutput {
            index: 3,
            elapsed: 1.0,
        };
        assert_eq!(output.to_string(), "(3, 1.0)");

        let output = MultiSubtaskOutput {
            index: 1,
            index2: 11,
            elapsed: 1.002,
        };
        assert_eq!(output.to_string(), "(1, 11, 1.002)");
    }

    #[test]
    fn test_serialize() {
        let output = SubtaskOutput {
            index: 2,
            elapsed: 1.001,
        };
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"index":2,"elapsed":1.001}"#);
    }
}
