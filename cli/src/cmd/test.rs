use std::path::Path;

use comp_core::{action, build::BuildProfile, Config};

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, Default, clap::Args)]
pub struct Args {}

pub async fn exec(_args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = Config::from_file_finding_in_ancestors_or_default(util::current_dir())?;

    let profile = if global_args.perf {
        BuildProfile::Perf
    } else {
        BuildProfile::Debug
    };

    // Relative dir keeps artifact paths (and report headers) short: "./B".
    action::verify(Path::new("."), profile, &cfg).await
}
