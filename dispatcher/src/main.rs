use anyhow::Context as _;
use common::constants::{DEFAULT_ARGUMENTS, MULTI_ARG_OFFSET};
use dispatcher::app::strategy::{
    run_pairs_in_parallel, run_tasks_in_parallel, run_tasks_sequentially,
};
use dispatcher::report::cpu_banner;
use dispatcher::EnvVar;
use worker::{run_subtask_multi_args_with_delay, run_subtask_with_delay};

// The pool owns its own runtime, so main stays synchronous.
fn main() -> anyhow::Result<()> {
    // configuration first, so a bad value fails before any work starts
    let env = EnvVar::load().context("Failed to read SUBTASKS_* configuration")?;
    env_logger::init();
    log::debug!("Loaded configuration: {:?}", env);

    // informational only, the pool sizes itself
    println!("{}", cpu_banner(num_cpus::get()));

    let arguments = DEFAULT_ARGUMENTS.to_vec();
    let delay = env.subtask_delay();

    // parallel run on a pool scoped to this call
    let report = run_tasks_in_parallel(arguments.clone(), env.pool_size, move |index| {
        run_subtask_with_delay(index, delay)
    })
    .context("Parallel execution failed")?;
    println!("{}", env.report_format.render(&report)?);

    if env.run_multi_args {
        // second argument is the index shifted by MULTI_ARG_OFFSET
        let pairs = arguments
            .iter()
            .map(|&index| (index, index + MULTI_ARG_OFFSET))
            .collect();
        let report = run_pairs_in_parallel(pairs, env.pool_size, move |index, index2| {
            run_subtask_multi_args_with_delay(index, index2, delay)
        })
        .context("Parallel multi-argument execution failed")?;
        println!("{}", env.report_format.render(&report)?);
    }

    // same arguments, one after another, for comparison
    let report = run_tasks_sequentially(arguments, |index| run_subtask_with_delay(index, delay));
    println!("{}", env.report_format.render(&report)?);

    Ok(())
}
