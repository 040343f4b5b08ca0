use std::thread;
use std::time::{Duration, Instant};

use common::constants::SUBTASK_DELAY;
use common::models::{MultiSubtaskOutput, SubtaskOutput, TaskParam};
use common::timing::round_secs;

/// Placeholder unit of work: blocks for one second and reports how long it took.
pub fn run_subtask(index: TaskParam) -> SubtaskOutput {
    run_subtask_with_delay(index, SUBTASK_DELAY)
}

pub fn run_subtask_with_delay(index: TaskParam, delay: Duration) -> SubtaskOutput {
    // simulate the work
    let elapsed = timed_pause(delay);
    log::debug!("Subtask {} finished in {:.3}s", index, elapsed);

    SubtaskOutput { index, elapsed }
}

/// Two-argument flavour of [`run_subtask`]. `index2` is passed through untouched.
pub fn run_subtask_multi_args(index: TaskParam, index2: TaskParam) -> MultiSubtaskOutput {
    run_subtask_multi_args_with_delay(index, index2, SUBTASK_DELAY)
}

pub fn run_subtask_multi_args_with_delay(
    index: TaskParam,
    index2: TaskParam,
    delay: Duration,
) -> MultiSubtaskOutput {
    let elapsed = timed_pause(delay);
    log::debug!("Subtask ({}, {}) finished in {:.3}s", index, index2, elapsed);

    MultiSubtaskOutput {
        index,
        index2,
        elapsed,
    }
}

// sleep and measure it, rounded to milliseconds
fn timed_pause(delay: Duration) -> f64 {
    let start = Instant::now();
    thread::sleep(delay);
    round_secs(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_subtask() {
        let output = run_subtask(7);
        assert_eq!(output.index, 7);
        assert!(
            (0.95..=1.2).contains(&output.elapsed),
            "elapsed {} outside tolerance",
            output.elapsed
        );
    }

    #[test]
    fn test_run_subtask_is_repeatable() {
        let delay = Duration::from_millis(50);
        let first = run_subtask_with_delay(3, delay);
        let second = run_subtask_with_delay(3, delay);

        assert_eq!(first.index, second.index);
        for output in [first, second] {
            assert!((0.05..=0.25).contains(&output.elapsed));
        }
    }

    #[test]
    fn test_run_subtask_multi_args() {
        let output = run_subtask_multi_args_with_delay(2, 12, Duration::from_millis(20));
        assert_eq!(output.index, 2);
        assert_eq!(output.index2, 12);
        assert!(output.elapsed >= 0.02);
    }

    #[test]
    fn test_run_subtask_multi_args_default_delay() {
        let output = run_subtask_multi_args(1, 11);
        assert_eq!((output.index, output.index2), (1, 11));
        assert!((0.95..=1.2).contains(&output.elapsed));
    }

    #[test]
    fn test_zero_delay() {
        let output = run_subtask_with_delay(0, Duration::ZERO);
        assert_eq!(output.index, 0);
        assert!(output.elapsed < 0.05);
    }
}
