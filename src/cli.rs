use crate::version::long_version;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, long_version = long_version(), about)]
pub struct Cli {
    /// Directory to start the session in (defaults to the current one)
    pub directory: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write logs to this file, filtered by RUST_LOG
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Run a single command line and exit
    #[arg(short, long, value_name = "LINE")]
    pub exec: Option<String>,
}
