use joblens_api::BoardClient;
use joblens_config::JoblensConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod browse;
pub mod list;
pub mod options;

/// Dispatch a parsed command to the corresponding handler module.
///
/// # Errors
///
/// Propagates any handler failure.
pub async fn dispatch(
    command: Commands,
    client: &BoardClient,
    config: &JoblensConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => list::run(&args, client, config, flags).await,
        Commands::Companies => options::companies(client, flags).await,
        Commands::Locations => options::locations(client, flags).await,
        Commands::Filters => options::filters(client, flags).await,
        Commands::Browse => browse::run(client, config, flags).await,
    }
}
