//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use env_logger::Env;
use tournament_dash::{
    cli::{Commands, Dashboard},
    commands::{
        handle_open,
        roster::{handle_generate, handle_teams},
        simulation::{handle_overview, handle_simulation_action, SimulationAction},
        weeks::handle_weeks,
        CommandContext,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    let app = Dashboard::parse();
    let ctx = CommandContext::from_options(&app.options)?;

    match app.command {
        Commands::Teams => handle_teams(&ctx).await?,
        Commands::Generate => handle_generate(&ctx).await?,
        Commands::Weeks { week, start } => handle_weeks(&ctx, week, start).await?,
        Commands::Overview => handle_overview(&ctx).await?,
        Commands::PlayNext => handle_simulation_action(&ctx, SimulationAction::PlayNext).await?,
        Commands::PlayAll => handle_simulation_action(&ctx, SimulationAction::PlayAll).await?,
        Commands::Clear => handle_simulation_action(&ctx, SimulationAction::Clear).await?,
        Commands::Open { route } => handle_open(&ctx, route).await?,
    }

    Ok(())
}
