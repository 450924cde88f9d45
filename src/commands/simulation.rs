//! Simulation commands: overview, play next, play all, clear

use crate::{
    commands::{
        common::{show_route, CommandContext},
        output::{render_simulation, OutputFormat},
    },
    sync::FixtureSyncController,
    Result,
};

/// Which write to run after the overview mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationAction {
    PlayNext,
    PlayAll,
    Clear,
}

/// Handle the overview command
pub async fn handle_overview(ctx: &CommandContext) -> Result<()> {
    let overview = FixtureSyncController::new(ctx.api.clone());
    overview.mount().await;
    ctx.emit(&render_simulation(&overview.snapshot(), ctx.format)?);
    Ok(())
}

/// Handle play-next, play-all and clear
pub async fn handle_simulation_action(
    ctx: &CommandContext,
    action: SimulationAction,
) -> Result<()> {
    let overview = FixtureSyncController::new(ctx.api.clone());
    overview.mount().await;

    match action {
        SimulationAction::PlayNext => {
            overview.play_next_round().await;
        }
        SimulationAction::PlayAll => {
            overview.play_all_rounds().await;
        }
        SimulationAction::Clear => {
            if let Some(route) = overview.clear_fixtures().await {
                let state = overview.snapshot();
                overview.unmount();
                if let (OutputFormat::Table, Some(message)) = (ctx.format, state.message()) {
                    ctx.emit(message);
                    ctx.emit("");
                }
                ctx.emit(&show_route(ctx, route).await?);
                return Ok(());
            }
        }
    }

    ctx.emit(&render_simulation(&overview.snapshot(), ctx.format)?);
    Ok(())
}
