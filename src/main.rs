use anyhow::Result;

use ladder_ranking::cli::{Cli, Command};
use ladder_ranking::config::AppConfig;
use ladder_ranking::{
    handle_approve, handle_completions, handle_event, handle_leaderboard, handle_pending,
    handle_report, handle_request, handle_serve, handle_set_event, handle_standing, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = load_config(&cli)?;
    execute_command(&cli.command, config)
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = AppConfig::from_env()?;
    Ok(config.with_overrides(cli.store, cli.state_path.clone()))
}

fn execute_command(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port, config),
        Command::Request {
            requester,
            opponent,
        } => handle_request(config, requester, opponent),
        Command::Approve {
            requester,
            approver,
        } => handle_approve(config, requester, approver),
        Command::Report { winner, loser } => handle_report(config, winner, loser),
        Command::SetEvent { start, end } => handle_set_event(config, *start, *end),
        Command::Standing { player } => handle_standing(config, player),
        Command::Leaderboard => handle_leaderboard(config),
        Command::Pending { player } => handle_pending(config, player.as_deref()),
        Command::Event => handle_event(config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
