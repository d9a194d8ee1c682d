pub mod cf;
pub mod init;
pub mod test;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    /// Runs `test` when no subcommand is given.
    #[command(subcommand)]
    pub subcmd: Option<Subcommand>,

    /// Build with the performance profile (-O2) instead of the debug profile.
    #[arg(long, global = true)]
    pub perf: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    #[command(alias("fetch"))]
    Cf(cf::Args),

    Init(init::Args),

    #[command(alias("t"))]
    Test(test::Args),
}

pub type SubcmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec_subcmd(&self) -> SubcmdResult {
        use Subcommand::*;
        match &self.subcmd {
            Some(Cf(args)) => cf::exec(args, self).await,
            Some(Init(args)) => init::exec(args, self),
            Some(Test(args)) => test::exec(args, self).await,
            None => test::exec(&test::Args::default(), self).await,
        }
    }
}
