use clap::Parser;
use roleboard::structs::cli::Cli;
use roleboard::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);
    if let Err(e) = runner.run_command(cli.command).await {
        log::error!("{} {}", e.severity().emoji(), e.user_message());
        return Err(e.into());
    }
    Ok(())
}
