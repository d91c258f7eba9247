use joblens_api::BoardClient;
use joblens_config::JoblensConfig;
use joblens_core::JobFilter;

use crate::cli::{GlobalFlags, ListArgs};
use crate::output;
use crate::progress::Progress;

/// Handle `joblens list`.
///
/// # Errors
///
/// Fails if the board fetch fails or output cannot be rendered.
pub async fn run(
    args: &ListArgs,
    client: &BoardClient,
    config: &JoblensConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching board");
    let snapshot = client.fetch_board().await;
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    let filter = JobFilter {
        company: args.company.clone(),
        location: args.location.clone(),
        experience: args.experience.clone(),
        work_type: args.work_type.clone(),
        search: args.search.clone(),
    };

    let mut jobs = filter.apply(&snapshot.jobs);
    let limit = flags.limit.unwrap_or(config.general.default_limit);
    jobs.truncate(usize::try_from(limit)?);

    output::output_jobs(&jobs, filter.search.as_deref(), flags.format)
}
