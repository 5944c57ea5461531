//! Wayfarer CLI Application
//!
//! Command-line front end for the Wayfarer trip planner.

mod args;
mod cli;
mod renderer;
mod shell;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::{params::ListPlans, ChatConfig, ChatSession, PlanStoreBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        seed_file,
        empty,
        no_color,
        json,
        latency_ms,
        command,
    } = Args::parse();

    let mut builder = PlanStoreBuilder::new().with_seed_file(seed_file);
    if empty {
        builder = builder.empty();
    }
    let store = builder.build().context("Failed to initialize plan store")?;

    let renderer = TerminalRenderer::new(!no_color);
    let chat = ChatSession::new(ChatConfig {
        latency: Duration::from_millis(latency_ms),
    });

    info!("Wayfarer started with {} plans", store.len());
    let mut cli = Cli::new(store, renderer, chat).with_json(json);

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Dashboard) => cli.dashboard(),
        Some(Chat(args)) => cli.chat(args).await,
        Some(Shell) => shell::run(&mut cli).await,
        None => cli.list_plans(&ListPlans::default()),
    }
}
