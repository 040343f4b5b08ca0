use std::time::Duration;

/// Subtask indices handed to both dispatch strategies.
pub const DEFAULT_ARGUMENTS: [u32; 4] = [1, 2, 3, 4];

/// Pause taken by every subtask.
pub const SUBTASK_DELAY: Duration = Duration::from_secs(1);

/// Offset added to each index to build the second argument of a multi-argument subtask.
pub const MULTI_ARG_OFFSET: u32 = 10;
