use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use chat_invoker::errors::ErrorHandler;
use chat_invoker::structs::cli::Cli;
use chat_invoker::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match CommandRunner::new(cli.config).run_command(cli.command, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
