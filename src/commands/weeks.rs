//! Weekly fixtures command

use crate::{
    cli::types::Week,
    commands::{
        common::{show_route, CommandContext},
        output::render_weeks,
    },
    sync::WeekGroupingView,
    Result,
};

/// Handle the weeks command
pub async fn handle_weeks(ctx: &CommandContext, week: Option<Week>, start: bool) -> Result<()> {
    let weeks = WeekGroupingView::new(ctx.api.clone());
    weeks.mount().await;
    ctx.emit(&render_weeks(&weeks.snapshot(), ctx.format, week)?);

    if start {
        let route = weeks.start_simulation();
        weeks.unmount();
        ctx.emit("");
        ctx.emit(&show_route(ctx, route).await?);
    }
    Ok(())
}
