use std::fmt;
use std::time::Instant;

use common::timing::round_secs;
use serde::Serialize;

use super::pool::{PoolError, WorkerPool};
use crate::report::ExecutionReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Parallel,
    Sequential,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Parallel => write!(f, "Parallel"),
            Strategy::Sequential => write!(f, "Sequential"),
        }
    }
}

/// Runs `f` over every argument on a worker pool and times the whole batch.
///
/// The pool is created inside the timed region and released before the clock
/// stops, on success and on failure alike. `pool_size` of `None` sizes the pool
/// to the host's processing units.
pub fn run_tasks_in_parallel<I, O, F>(
    arguments: Vec<I>,
    pool_size: Option<usize>,
    f: F,
) -> Result<ExecutionReport<O>, PoolError>
where
    I: Send + 'static,
    O: Send + 'static,
    F: Fn(I) -> O + Send + Sync + 'static,
{
    log::info!("Running {} subtasks in parallel", arguments.len());
    timed_in_pool(pool_size, move |pool| pool.map(arguments, f))
}

/// Two-argument flavour of [`run_tasks_in_parallel`].
pub fn run_pairs_in_parallel<A, B, O, F>(
    arguments: Vec<(A, B)>,
    pool_size: Option<usize>,
    f: F,
) -> Result<ExecutionReport<O>, PoolError>
where
    A: Send + 'static,
    B: Send + 'static,
    O: Send + 'static,
    F: Fn(A, B) -> O + Send + Sync + 'static,
{
    log::info!(
        "Running {} multi-argument subtasks in parallel",
        arguments.len()
    );
    timed_in_pool(pool_size, move |pool| pool.starmap(arguments, f))
}

/// Runs `f` over every argument, one after another, in input order.
pub fn run_tasks_sequentially<I, O, F>(arguments: Vec<I>, mut f: F) -> ExecutionReport<O>
where
    F: FnMut(I) -> O,
{
    log::info!("Running {} subtasks sequentially", arguments.len());
    let start = Instant::now();

    // a panic here aborts the remaining arguments
    let mut outputs = Vec::with_capacity(arguments.len());
    for argument in arguments {
        outputs.push(f(argument));
    }

    let elapsed = round_secs(start.elapsed());
    let report = ExecutionReport::new(Strategy::Sequential, elapsed, outputs);
    log::info!("Sequential run finished in {:.3}s", report.elapsed);
    report
}

fn timed_in_pool<O, D>(
    pool_size: Option<usize>,
    dispatch: D,
) -> Result<ExecutionReport<O>, PoolError>
where
    D: FnOnce(&WorkerPool) -> Result<Vec<O>, PoolError>,
{
    let start = Instant::now();

    // pool lives only inside this block; dropping it joins its workers
    let outputs = {
        let pool = match pool_size {
            Some(size) => WorkerPool::with_size(size)?,
            None => WorkerPool::new()?,
        };
        dispatch(&pool)?
    };

    let elapsed = round_secs(start.elapsed());
    let report = ExecutionReport::new(Strategy::Parallel, elapsed, outputs);
    log::info!("Parallel run finished in {:.3}s", report.elapsed);
    Ok(report)
}
