use comp_core::{action, print_success, Config};
use std::path::PathBuf;

use super::{GlobalArgs, SubcmdResult};
use crate::util;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Solution file names; the configured extension is appended when missing.
    #[arg(required = true)]
    pub names: Vec<PathBuf>,
}

pub fn exec(args: &Args, _: &GlobalArgs) -> SubcmdResult {
    let cfg = Config::from_file_finding_in_ancestors_or_default(util::current_dir())?;
    for name in &args.names {
        let path = action::init_solution_file(name, &cfg)?;
        print_success!("Initialized {}", path.display());
    }
    Ok(())
}
