use clap::{Args, Subcommand};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Send one prompt and print the first text block of the reply
    Ask(AskArgs),
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AskArgs {
    #[clap(short, long)]
    pub prompt: Option<String>,
    #[clap(short, long)]
    pub model: Option<String>,
    #[clap(long)]
    pub max_tokens: Option<u32>,
}
