use std::path::PathBuf;

use clap::Parser;

use crate::trello::client::Credentials;

#[derive(Debug, Parser)]
#[command(
    name = "trud",
    version,
    about = "Daily status report for Epic cards on a Trello board",
    long_about = "Summarizes the Epic cards on a Trello board: blocked, waiting on PM input,\n\
                  off track, in progress, dev complete and QE accepted.\n\
                  \n\
                  The report is printed to stdout; logs go to stderr (see RUST_LOG)."
)]
pub struct Cli {
    /// Trello API key
    #[arg(long)]
    pub api_key: String,

    /// Trello API token
    #[arg(long)]
    pub api_token: String,

    /// Board name on which to report
    #[arg(long)]
    pub board_name: String,

    /// TOML file with HTTP settings (default: <config dir>/trud/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log API traffic at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            api_token: self.api_token.clone(),
        }
    }
}
