pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}
use std::path::{Path, PathBuf};

use comp_webclient::{CodeforcesClient, Problem};
use error::*;

use crate::build::{BuildProfile, Compiler};
use crate::config::Config;
use crate::{build, fsutil, storage, style, verify};

/// Acquisition: fetch every problem of `contest`, bootstrap one solution
/// file per problem from the configured template and persist all sample
/// testcase pairs into `dir`. Fatal on any fetch or scrape failure; no
/// partial problem list is produced.
pub async fn fetch_contest(
    cli: &CodeforcesClient,
    contest: u32,
    dir: impl AsRef<Path>,
    cfg: &Config,
) -> Result<Vec<Problem>> {
    let dir = dir.as_ref();
    log::info!("Loading contest {} ...", contest);

    let problems = cli
        .fetch_problems(contest)
        .await
        .with_context(|| format!("Failed to fetch problems of contest {}", contest))?;

    for p in &problems {
        self::init_solution_file(dir.join(&p.name), cfg)?;
        storage::save_problem_testcases(dir, p)
            .with_context(|| format!("Failed to save testcases of problem {}", p.name))?;
    }
    Ok(problems)
}

/// Writes the configured template to `path`, appending the solution
/// extension when the name does not already carry it. Overwrites an
/// existing file, matching acquisition's bootstrap semantics.
pub fn init_solution_file(path: impl AsRef<Path>, cfg: &Config) -> Result<PathBuf> {
    let path = path.as_ref();
    let suffix = format!(".{}", cfg.solution.extension);
    let path = if path.to_string_lossy().ends_with(&suffix) {
        path.to_owned()
    } else {
        PathBuf::from(format!("{}{}", path.display(), suffix))
    };
    log::info!("Initializing {} ...", path.display());
    fsutil::write(&path, &cfg.solution.template)?;
    Ok(path)
}

/// Verification: compile the latest solution source in `dir`, then replay
/// every testcase pair of the artifact, rendering a colorized report.
/// Rendering is the whole job; no pass/fail verdict is computed.
pub async fn verify(dir: impl AsRef<Path>, profile: BuildProfile, cfg: &Config) -> Result<()> {
    let dir = dir.as_ref();
    let source = build::find_latest_source(dir, &cfg.solution.extension)?;
    log::info!("Compiling {} ...", source.display());

    let outcome = Compiler::new(&cfg.build).compile(profile, &source).await?;
    if !outcome.succeeded {
        // Terminal for this invocation: a broken artifact must not run.
        style::print_block("Compilation failed. No tests run.", style::FATAL);
        return Ok(());
    }

    let basename = outcome
        .artifact
        .file_name()
        .and_then(|s| s.to_str())
        .context("Artifact has no UTF-8 file name")?;
    let testcases = storage::discover_testcases(dir, basename)?;
    if testcases.is_empty() {
        log::warn!("No testcase files matching '{}*.in' in {}", basename, dir.display());
    }

    let runner = verify::Runner::new(&outcome.artifact);
    for t in &testcases {
        println!("== {} ==", t.name);

        let input = fsutil::read_to_string(&t.input_path)?;
        println!("Input:");
        style::print_block(input.trim(), style::INPUT);

        if let Some(expected_path) = &t.expected_path {
            let expected = fsutil::read_to_string(expected_path)?;
            println!("Expected:");
            style::print_block(expected.trim(), style::EXPECTED);
        }

        println!("Actual:");
        let res = runner.run(&input).await?;
        if !res.stdout.is_empty() {
            style::print_block(res.stdout.trim(), style::STDOUT);
        }
        if !res.stderr.is_empty() {
            style::print_block(res.stderr.trim(), style::STDERR);
        }
        if !res.status.success() {
            // Informational only; the remaining testcases still run.
            log::warn!("{}: process exited with {}", t.name, res.status);
        }

        println!();
    }
    Ok(())
}
