//! Full fixture list grouped by week.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    api::{endpoints::Resource, types::Fixture, ApiClient},
    cli::types::Week,
    sync::{route::Route, state::ViewState, view::View},
};

/// Fixtures per week, weeks ascending.
pub type WeekGroups = BTreeMap<Week, Vec<Fixture>>;

/// Partition `fixtures` by week. Within a week, fixtures keep the order they
/// arrived in.
pub fn group_by_week(fixtures: Vec<Fixture>) -> WeekGroups {
    let mut groups = WeekGroups::new();
    for fixture in fixtures {
        groups.entry(fixture.week).or_default().push(fixture);
    }
    groups
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WeekData {
    pub groups: WeekGroups,
}

#[derive(Debug)]
pub struct WeekGroupingView {
    api: ApiClient,
    view: View<WeekData>,
}

impl WeekGroupingView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            view: View::default(),
        }
    }

    pub fn snapshot(&self) -> ViewState<WeekData> {
        self.view.snapshot()
    }

    pub fn view(&self) -> &View<WeekData> {
        &self.view
    }

    pub fn unmount(&self) {
        self.view.unmount();
    }

    pub async fn mount(&self) -> bool {
        self.view
            .read(
                Resource::AllFixtures,
                self.api.fetch_all_fixtures(),
                |data, fixtures| data.groups = group_by_week(fixtures),
            )
            .await
    }

    /// No request; just the way into the simulation overview.
    pub fn start_simulation(&self) -> Route {
        Route::Fixture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::types::Team,
        cli::types::{FixtureId, TeamId},
    };

    fn fixture(id: u64, week: u32) -> Fixture {
        Fixture {
            id: FixtureId::new(id),
            home_team: Team {
                id: TeamId::new(1),
                name: "Arsenal".to_string(),
            },
            away_team: Team {
                id: TeamId::new(2),
                name: "Chelsea".to_string(),
            },
            home_score: None,
            away_score: None,
            week: Week::new(week),
            result: None,
        }
    }

    fn ids(fixtures: &[Fixture]) -> Vec<u64> {
        fixtures.iter().map(|f| f.id.as_u64()).collect()
    }

    #[test]
    fn test_two_weeks_keep_arrival_order() {
        let groups = group_by_week(vec![fixture(5, 1), fixture(3, 1), fixture(4, 2)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(ids(&groups[&Week::new(1)]), vec![5, 3]);
        assert_eq!(ids(&groups[&Week::new(2)]), vec![4]);
    }

    #[test]
    fn test_interleaved_weeks_are_not_sorted_within_group() {
        let groups = group_by_week(vec![
            fixture(9, 3),
            fixture(1, 1),
            fixture(8, 3),
            fixture(2, 1),
            fixture(7, 3),
        ]);

        let weeks: Vec<_> = groups.keys().copied().collect();
        assert_eq!(weeks, vec![Week::new(1), Week::new(3)]);
        assert_eq!(ids(&groups[&Week::new(3)]), vec![9, 8, 7]);
        assert_eq!(ids(&groups[&Week::new(1)]), vec![1, 2]);
    }

    #[test]
    fn test_empty_input_gives_no_groups() {
        assert!(group_by_week(Vec::new()).is_empty());
    }

    #[test]
    fn test_groups_serialize_with_week_keys() {
        let data = WeekData {
            groups: group_by_week(vec![fixture(1, 2)]),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["groups"]["2"][0]["id"], 1);
    }
}
