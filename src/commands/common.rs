//! Shared command plumbing: building the API client and showing a route.

use crate::{
    api::ApiClient,
    cli::GlobalOptions,
    commands::output::{render_roster, render_simulation, render_weeks, OutputFormat},
    core::ApiConfig,
    sync::{FixtureSyncController, RosterLoader, Route, WeekGroupingView},
    Result,
};

/// Resources every command needs
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub api: ApiClient,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn new(api: ApiClient, format: OutputFormat) -> Self {
        Self { api, format }
    }

    /// Resolve connection settings from flags and environment.
    pub fn from_options(options: &GlobalOptions) -> Result<Self> {
        let config = ApiConfig::resolve(options.base_url.clone(), options.timeout_secs)?;
        log::debug!("using tournament API at {}", config.base_url());
        Ok(Self::new(
            ApiClient::new(&config)?,
            OutputFormat::from_json_flag(options.json),
        ))
    }

    pub fn emit(&self, text: &str) {
        println!("{}", text);
    }
}

/// Mount the view behind `route` and return its rendering.
pub async fn show_route(ctx: &CommandContext, route: Route) -> Result<String> {
    match route {
        Route::Roster => {
            let roster = RosterLoader::new(ctx.api.clone());
            roster.mount().await;
            render_roster(&roster.snapshot(), ctx.format)
        }
        Route::Weeks => {
            let weeks = WeekGroupingView::new(ctx.api.clone());
            weeks.mount().await;
            render_weeks(&weeks.snapshot(), ctx.format, None)
        }
        Route::Fixture => {
            let overview = FixtureSyncController::new(ctx.api.clone());
            overview.mount().await;
            render_simulation(&overview.snapshot(), ctx.format)
        }
    }
}

/// Handle the open command
pub async fn handle_open(ctx: &CommandContext, route: Route) -> Result<()> {
    let text = show_route(ctx, route).await?;
    ctx.emit(&text);
    Ok(())
}
