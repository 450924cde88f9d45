//! Text and JSON rendering of view snapshots.

use serde::Serialize;

use crate::{
    api::types::{Fixture, Prediction, Team, TeamStats},
    cli::types::Week,
    sync::{RosterData, SimulationData, ViewState, WeekData, WeekGroups},
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// Render a snapshot the way the dashboard shows it: a loading line while
/// requests are pending, otherwise the error banner if one is set, otherwise
/// the view's tables. The message line follows whichever was shown.
pub fn render_state<D: Serialize>(
    state: &ViewState<D>,
    format: OutputFormat,
    loading_text: &str,
    body: impl FnOnce(&D) -> String,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(state)?);
    }

    let mut out = if state.is_loading() {
        loading_text.to_string()
    } else if let Some(error) = state.error() {
        format!("Error: {}", error)
    } else {
        body(state.data())
    };
    if let Some(message) = state.message() {
        out.push_str("\n\n");
        out.push_str(message);
    }
    Ok(out)
}

pub fn render_roster(state: &ViewState<RosterData>, format: OutputFormat) -> Result<String> {
    render_state(state, format, "Loading teams...", |data| {
        roster_table(&data.teams)
    })
}

pub fn render_simulation(
    state: &ViewState<SimulationData>,
    format: OutputFormat,
) -> Result<String> {
    render_state(state, format, "Loading data...", |data| {
        [
            standings_table(&data.standings),
            fixtures_table(&data.fixtures),
            predictions_table(&data.predictions),
        ]
        .join("\n\n")
    })
}

/// `only` narrows the table output to a single week; JSON output is the full snapshot.
pub fn render_weeks(
    state: &ViewState<WeekData>,
    format: OutputFormat,
    only: Option<Week>,
) -> Result<String> {
    render_state(state, format, "Loading fixtures...", |data| {
        weeks_tables(&data.groups, only)
    })
}

/// One row per team, in roster order.
pub fn roster_rows(teams: &[Team]) -> Vec<Vec<String>> {
    teams.iter().map(|team| vec![team.name.clone()]).collect()
}

fn roster_table(teams: &[Team]) -> String {
    table("Tournament Teams", &["Team Names"], roster_rows(teams))
}

fn standings_table(standings: &[TeamStats]) -> String {
    let rows = standings
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.wins.to_string(),
                s.losses.to_string(),
                s.draws.to_string(),
                s.goal_difference.to_string(),
                s.points.to_string(),
            ]
        })
        .collect();
    table("Team Points", &["Team", "W", "L", "D", "GD", "P"], rows)
}

fn fixtures_table(fixtures: &[Fixture]) -> String {
    let rows = fixtures
        .iter()
        .map(|f| {
            vec![
                f.week.to_string(),
                f.home_team.name.clone(),
                f.away_team.name.clone(),
            ]
        })
        .collect();
    table("Weekly Fixtures", &["Week", "Home", "Away"], rows)
}

fn predictions_table(predictions: &[Prediction]) -> String {
    let rows = predictions
        .iter()
        .map(|p| vec![p.name.clone(), format!("{:.2}", p.percentage)])
        .collect();
    table("Predictions", &["Team", "Percentage %"], rows)
}

fn weeks_tables(groups: &WeekGroups, only: Option<Week>) -> String {
    let sections: Vec<String> = groups
        .iter()
        .filter(|(week, _)| only.map_or(true, |w| w == **week))
        .map(|(week, fixtures)| {
            let rows = fixtures
                .iter()
                .map(|f| {
                    let score = match (f.home_score, f.away_score) {
                        (Some(h), Some(a)) => format!("{} - {}", h, a),
                        _ => String::new(),
                    };
                    vec![f.home_team.name.clone(), f.away_team.name.clone(), score]
                })
                .collect();
            table(
                &format!("Week {}", week),
                &["Home Team", "Away Team", "Score"],
                rows,
            )
        })
        .collect();

    if sections.is_empty() {
        "No fixtures.".to_string()
    } else {
        sections.join("\n\n")
    }
}

/// Plain-text table with left-aligned, width-fitted columns.
fn table(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![title.to_string(), line(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}
