//! Handlers for the option-list commands: `companies`, `locations`, and
//! `filters` (everything the filter selects get populated with).

use joblens_api::BoardClient;
use joblens_core::{uniq_sorted, FilterOptions};

use crate::cli::GlobalFlags;
use crate::output;
use crate::progress::Progress;

/// Handle `joblens companies`.
///
/// # Errors
///
/// Fails if the fetch fails or output cannot be rendered.
pub async fn companies(client: &BoardClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let values = client.fetch_companies().await?;
    output::output(&uniq_sorted(values), flags.format)
}

/// Handle `joblens locations`.
///
/// # Errors
///
/// Fails if the fetch fails or output cannot be rendered.
pub async fn locations(client: &BoardClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let values = client.fetch_locations().await?;
    output::output(&uniq_sorted(values), flags.format)
}

/// Handle `joblens filters`: all four option lists from a joint fetch.
///
/// # Errors
///
/// Fails if the fetch fails or output cannot be rendered.
pub async fn filters(client: &BoardClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("fetching board");
    let snapshot = client.fetch_board().await;
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    let options = FilterOptions::from_board(&snapshot.jobs, snapshot.companies, snapshot.locations);
    output::output(&options, flags.format)
}
