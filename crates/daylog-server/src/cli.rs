use std::path::PathBuf;

use clap::Parser;

/// Command-line parser for the `daylog` binary.
///
/// Every server/database flag overrides the value loaded from config files
/// and `DAYLOG_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "daylog", version, about = "daylog - personal log server")]
pub struct Cli {
    /// Config file to use instead of ./daylog.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// libSQL database file (":memory:" for a throwaway database)
    #[arg(short, long)]
    pub database: Option<String>,

    /// Directory with a prebuilt browser UI to serve
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
