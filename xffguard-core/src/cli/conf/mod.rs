mod check;

pub use check::*;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a configuration file and exit
    Check {
        /// Path to the JSON configuration file
        path: PathBuf,

        /// Print the validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, json } => check(&path, json),
    }
}
