use clap::Parser;
use std::path::PathBuf;

use ytscribe::app::Paths;
use ytscribe::config;

#[derive(Parser)]
#[command(
    name = "ytscribe",
    about = "Save a YouTube video's transcript as JSON",
    version
)]
pub struct Cli {
    /// Configuration file (JSON with a "lang" field)
    #[arg(long, default_value = config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Input file (JSON with a "url" field)
    #[arg(long, default_value = config::INPUT_FILE)]
    pub input: PathBuf,

    /// Where to write the transcript
    #[arg(long, default_value = config::OUTPUT_FILE)]
    pub output: PathBuf,

    /// Log file, appended to on every run
    #[arg(long, default_value = config::LOG_FILE)]
    pub log: PathBuf,
}

impl Cli {
    pub fn paths(&self) -> Paths {
        Paths {
            config: self.config.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
            log: self.log.clone(),
        }
    }
}
