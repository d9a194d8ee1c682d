use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use tokio::process::Command;

use crate::{config::BuildConfig, fsutil};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildProfile {
    /// Hardened stdlib checks plus full debug symbols.
    #[default]
    Debug,
    /// Optimized, no instrumentation.
    Perf,
}

/// Transient result of one compiler invocation; only the exit status of the
/// compiler is observed.
#[derive(Debug, Clone)]
pub struct CompilationOutcome {
    pub artifact: PathBuf,
    pub succeeded: bool,
}

const WARNING_FLAGS: &[&str] = &["-Wall", "-Wextra", "-Wconversion"];
const PERF_FLAGS: &[&str] = &["-O2"];
const DEBUG_FLAGS: &[&str] = &["-D_GLIBCXX_DEBUG", "-g", "-ggdb3"];

/// The solution source to compile is the most recently modified match of the
/// configured extension, independent of name ordering.
pub fn find_latest_source(dir: impl AsRef<Path>, extension: &str) -> anyhow::Result<PathBuf> {
    let pattern = glob::Pattern::new(&format!("*.{}", extension))
        .with_context(|| format!("Invalid solution extension '{}'", extension))?;
    let source = fsutil::find_most_recently_modified_file(&dir, &pattern)?;
    Ok(source)
}

#[derive(Debug, Clone, Copy)]
pub struct Compiler<'a> {
    cfg: &'a BuildConfig,
}

impl<'a> Compiler<'a> {
    pub fn new(cfg: &'a BuildConfig) -> Self {
        Self { cfg }
    }

    fn args(&self, profile: BuildProfile, source: &Path, artifact: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = WARNING_FLAGS.iter().copied().map(OsString::from).collect();
        args.push("-DLOCAL".into());
        args.push(format!("-std={}", self.cfg.std).into());
        let profile_flags = match profile {
            BuildProfile::Perf => PERF_FLAGS,
            BuildProfile::Debug => DEBUG_FLAGS,
        };
        args.extend(profile_flags.iter().copied().map(OsString::from));
        args.push("-o".into());
        args.push(artifact.as_os_str().to_owned());
        args.push(source.as_os_str().to_owned());
        args
    }

    /// Compiles `source` into a sibling executable named after its stem.
    /// A non-zero compiler exit is not an `Err`: it is a `succeeded = false`
    /// outcome the caller must treat as terminal for the verification run.
    pub async fn compile(
        &self,
        profile: BuildProfile,
        source: &Path,
    ) -> anyhow::Result<CompilationOutcome> {
        let artifact = source.with_extension("");
        let status = Command::new(&self.cfg.compiler)
            .args(self.args(profile, source, &artifact))
            .status()
            .await
            .with_context(|| format!("Failed to spawn compiler '{}'", self.cfg.compiler))?;
        Ok(CompilationOutcome {
            artifact,
            succeeded: status.success(),
        })
    }
}
