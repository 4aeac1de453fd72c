use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "chat-invoker")]
#[clap(about = "Ask the Anthropic Messages API one question", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Option<Commands>,
}
