pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod http;
pub mod labels;
pub mod presentation;
pub mod rate_limiter;
pub mod rating;
pub mod services;
pub mod store;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser};
use cli::Cli;
use clap_complete::Shell;
use std::future::Future;

use crate::config::AppConfig;
use crate::domain::{EventWindow, PlayerId};
use crate::services::LadderService;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_request(config: AppConfig, requester: &str, opponent: &str) -> Result<()> {
    block_on(async {
        let ladder = LadderService::from_config(&config)?;
        let request = ladder
            .request_match(&PlayerId::from(requester), &PlayerId::from(opponent))
            .await?;
        println!("{}", presentation::request_message(&request));
        Ok(())
    })
}

pub fn handle_approve(config: AppConfig, requester: &str, approver: &str) -> Result<()> {
    block_on(async {
        let ladder = LadderService::from_config(&config)?;
        let request = ladder
            .approve(&PlayerId::from(requester), &PlayerId::from(approver))
            .await?;
        println!("{}", presentation::approve_message(&request));
        Ok(())
    })
}

pub fn handle_report(config: AppConfig, winner: &str, loser: &str) -> Result<()> {
    block_on(async {
        let ladder = LadderService::from_config(&config)?;
        let outcome = ladder
            .report_result(&PlayerId::from(winner), &PlayerId::from(loser))
            .await?;
        println!("{}", presentation::outcome_message(&outcome));
        Ok(())
    })
}

pub fn handle_set_event(config: AppConfig, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<()> {
    block_on(async {
        let ladder = LadderService::from_config(&config)?;
        let event = ladder.set_event_window(EventWindow::new(start, end)).await?;
        println!("{}", presentation::event_message(&event));
        Ok(())
    })
}

pub fn handle_standing(config: AppConfig, player: &str) -> Result<()> {
    let ladder = LadderService::from_config(&config)?;
    let player = PlayerId::from(player);

    match ladder.standing(&player)? {
        Some(standing) => println!(
            "{}",
            presentation::standing_line(standing.rank, &standing.record)
        ),
        None => println!("{player} has not played on the ladder yet."),
    }
    Ok(())
}

pub fn handle_leaderboard(config: AppConfig) -> Result<()> {
    let ladder = LadderService::from_config(&config)?;
    let records = ladder.leaderboard()?;

    if records.is_empty() {
        println!("The ladder is empty.");
    }
    for (i, record) in records.iter().enumerate() {
        println!("{}", presentation::standing_line(i + 1, record));
    }
    Ok(())
}

pub fn handle_pending(config: AppConfig, player: Option<&str>) -> Result<()> {
    let ladder = LadderService::from_config(&config)?;
    let player = player.map(PlayerId::from);
    let requests = ladder.pending_requests(player.as_ref())?;

    if requests.is_empty() {
        println!("No open match requests.");
    }
    for request in &requests {
        println!("{}", presentation::pending_line(request));
    }
    Ok(())
}

pub fn handle_event(config: AppConfig) -> Result<()> {
    let ladder = LadderService::from_config(&config)?;
    match ladder.event_window()? {
        Some(event) => println!("{}", presentation::event_message(&event)),
        None => println!("No event is scheduled."),
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn block_on<F: Future<Output = Result<()>>>(future: F) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(future)
}
