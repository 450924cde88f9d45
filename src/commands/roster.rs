//! Roster commands: list teams and generate fixtures

use crate::{
    commands::{
        common::{show_route, CommandContext},
        output::render_roster,
    },
    sync::RosterLoader,
    Result,
};

/// Handle the teams command
pub async fn handle_teams(ctx: &CommandContext) -> Result<()> {
    let roster = RosterLoader::new(ctx.api.clone());
    roster.mount().await;
    ctx.emit(&render_roster(&roster.snapshot(), ctx.format)?);
    Ok(())
}

/// Handle the generate command
///
/// Mounts the roster first, as the button lives on that view, then follows
/// the navigation the action hands back.
pub async fn handle_generate(ctx: &CommandContext) -> Result<()> {
    let roster = RosterLoader::new(ctx.api.clone());
    roster.mount().await;

    match roster.generate_fixtures().await {
        Some(route) => {
            roster.unmount();
            ctx.emit(&show_route(ctx, route).await?);
        }
        None => ctx.emit(&render_roster(&roster.snapshot(), ctx.format)?),
    }
    Ok(())
}
