pub mod subtask;

pub use subtask::{
    run_subtask, run_subtask_multi_args, run_subtask_multi_args_with_delay,
    run_subtask_with_delay,
};
