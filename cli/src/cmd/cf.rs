use anyhow::Context as _;
use comp_core::{action, print_success, Config};
use comp_webclient::CodeforcesClient;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contest id (e.g. 1000). Inferred from the current directory path
    /// when omitted.
    #[arg()] // positional argument
    pub contest: Option<u32>,
}

pub async fn exec(args: &Args, _global_args: &GlobalArgs) -> SubcmdResult {
    let cwd = util::current_dir();

    let contest = match args.contest {
        Some(id) => id,
        None => {
            let id = util::infer_contest_id(&cwd).context(
                "No contest id given and no all-digit component found in the current directory path",
            )?;
            log::info!("Inferred contest id {} from {}", id, cwd.display());
            id
        }
    };

    let cfg = Config::from_file_finding_in_ancestors_or_default(&cwd)?;
    let cli = CodeforcesClient::new();

    let problems = action::fetch_contest(&cli, contest, &cwd, &cfg).await?;

    print_success!(
        "Successfully saved {} problems of contest {}",
        problems.len(),
        contest
    );
    Ok(())
}
