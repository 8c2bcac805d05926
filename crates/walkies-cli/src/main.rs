//! Walkies CLI Application
//!
//! Command-line front end for the Walkies dog-walking app. Each run seeds a
//! fresh store from the bundled demo data and executes one command against it.

mod args;
mod cli;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use walkies_core::{OperationStatus, StoreBuilder, WalkiesError};
use Commands::*;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let renderer = TerminalRenderer::new(!args.no_color);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let status = match err.downcast_ref::<WalkiesError>() {
                Some(walkies_err) => OperationStatus::from(walkies_err),
                None => OperationStatus::failure(format!("{err:#}")),
            };
            renderer.render_status(&status);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let Args {
        no_color,
        json,
        today,
        command,
    } = args;

    let store = StoreBuilder::new()
        .with_demo_data()
        .build()
        .context("Failed to load demo data")?;
    let today = today.unwrap_or_else(walkies_core::today);

    info!("Walkies started for {today}");

    let mut cli = Cli::new(store, TerminalRenderer::new(!no_color), today, json);
    match command {
        Some(Dog { command }) => cli.handle_dog_command(command),
        Some(Walker { command }) => cli.handle_walker_command(command),
        Some(Walk { command }) => cli.handle_walk_command(command),
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Book(args)) => cli.handle_book(args),
        Some(Profile { command }) => cli.handle_profile_command(command),
        Some(Card { command }) => cli.handle_card_command(command),
        Some(Inbox { command }) => cli.handle_inbox_command(command),
        None => cli.handle_home(),
    }
}
