use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docsift")]
#[command(about = "Estimate how long indexing a document folder will take, and what it will cost")]
#[command(version)]
pub struct Cli {
    /// Folder to analyse. Prompted for when omitted; an empty answer uses ./documents
    pub folder: Option<PathBuf>,

    /// TOML file overriding the analyzer constants
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable emoji markers in the text report
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sectioned console report
    Text,
    /// Pretty-printed JSON
    Json,
}
