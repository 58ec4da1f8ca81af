use clap::Parser;
use eyre::Result;
use log::{debug, info};

use ytscribe::app::{self, RunStatus};
use ytscribe::journal::FileJournal;
use ytscribe::youtube::YouTubeProvider;

mod cli;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    let paths = cli.paths();
    debug!("Paths: {paths:?}");

    let mut journal = FileJournal::open(&paths.log)?;
    let provider = YouTubeProvider::default();

    let status = app::run(&paths, &provider, &mut journal).await?;
    info!("Run finished: {status:?}");

    // Handled failures are already in the log; only fatal errors change the exit code
    if status != RunStatus::Saved {
        debug!("No output written to {}", paths.output.display());
    }

    Ok(())
}
