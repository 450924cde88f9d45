//! Derived state owned by a single view.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::endpoints::Resource;

/// Snapshot of one view: its data slices plus loading and feedback fields.
///
/// `data` is only ever replaced wholesale by a controller applying a
/// successful response. `error` is the banner for read failures and keeps the
/// most recent failure text; `message` is the outcome line of the last write
/// action. `errors` tracks the latest failure per resource and forgets a
/// resource once it succeeds again.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState<D> {
    data: D,
    loading: bool,
    error: Option<String>,
    errors: BTreeMap<Resource, String>,
    message: Option<String>,
    #[serde(skip)]
    in_flight: BTreeMap<Resource, usize>,
}

impl<D> ViewState<D> {
    pub fn new(data: D) -> Self {
        Self {
            data,
            loading: false,
            error: None,
            errors: BTreeMap::new(),
            message: None,
            in_flight: BTreeMap::new(),
        }
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// True while any request issued by this view is unresolved.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_resource(&self, resource: Resource) -> bool {
        self.in_flight.contains_key(&resource)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_for(&self, resource: Resource) -> Option<&str> {
        self.errors.get(&resource).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Resource, String> {
        &self.errors
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub(crate) fn begin(&mut self, resource: Resource) {
        *self.in_flight.entry(resource).or_insert(0) += 1;
        self.loading = true;
    }

    pub(crate) fn finish(&mut self, resource: Resource) {
        if let Some(count) = self.in_flight.get_mut(&resource) {
            *count -= 1;
            if *count == 0 {
                self.in_flight.remove(&resource);
            }
        }
        self.loading = !self.in_flight.is_empty();
    }

    pub(crate) fn record_success(&mut self, resource: Resource) {
        self.errors.remove(&resource);
    }

    /// Latest failure wins the banner; the per-resource slot keeps the rest.
    pub(crate) fn record_error(&mut self, resource: Resource, text: String) {
        self.errors.insert(resource, text.clone());
        self.error = Some(text);
    }

    pub(crate) fn record_message(&mut self, resource: Resource, text: String, failed: bool) {
        if failed {
            self.errors.insert(resource, text.clone());
        } else {
            self.errors.remove(&resource);
        }
        self.message = Some(text);
    }
}

impl<D: Default> Default for ViewState<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state: ViewState<Vec<u8>> = ViewState::default();
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.message().is_none());
        assert!(state.errors().is_empty());
        assert!(state.data().is_empty());
    }

    #[test]
    fn test_loading_until_every_request_settles() {
        let mut state: ViewState<()> = ViewState::default();
        state.begin(Resource::UpcomingFixtures);
        state.begin(Resource::Standings);
        state.begin(Resource::Standings);

        state.finish(Resource::UpcomingFixtures);
        assert!(state.is_loading());
        assert!(!state.is_loading_resource(Resource::UpcomingFixtures));

        state.finish(Resource::Standings);
        assert!(state.is_loading_resource(Resource::Standings));
        state.finish(Resource::Standings);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_finish_without_begin_is_harmless() {
        let mut state: ViewState<()> = ViewState::default();
        state.finish(Resource::Teams);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_latest_error_wins_banner_but_slots_keep_both() {
        let mut state: ViewState<()> = ViewState::default();
        state.record_error(Resource::UpcomingFixtures, "Failed to fetch data".into());
        state.record_error(Resource::Standings, "Failed to fetch team points data".into());

        assert_eq!(state.error(), Some("Failed to fetch team points data"));
        assert_eq!(
            state.error_for(Resource::UpcomingFixtures),
            Some("Failed to fetch data")
        );
        assert_eq!(state.errors().len(), 2);
    }

    #[test]
    fn test_success_clears_slot_not_banner() {
        let mut state: ViewState<()> = ViewState::default();
        state.record_error(Resource::Standings, "Failed to fetch team points data".into());
        state.record_success(Resource::Standings);

        assert!(state.error_for(Resource::Standings).is_none());
        assert_eq!(state.error(), Some("Failed to fetch team points data"));
    }

    #[test]
    fn test_message_is_independent_of_error() {
        let mut state: ViewState<()> = ViewState::default();
        state.record_error(Resource::Predictions, "Failed to fetch prediction data".into());
        state.record_message(Resource::PlayAllRounds, "Failed to play all fixtures".into(), true);
        state.record_message(
            Resource::PlayAllRounds,
            "All fixtures played successfully!".into(),
            false,
        );

        assert_eq!(state.message(), Some("All fixtures played successfully!"));
        assert!(state.error_for(Resource::PlayAllRounds).is_none());
        assert_eq!(state.error(), Some("Failed to fetch prediction data"));
    }

    #[test]
    fn test_serializes_without_in_flight_counts() {
        let mut state: ViewState<Vec<u8>> = ViewState::new(vec![1, 2]);
        state.begin(Resource::Teams);
        state.record_error(Resource::Teams, "Failed to fetch teams".into());

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["loading"], serde_json::json!(true));
        assert_eq!(json["errors"]["teams"], "Failed to fetch teams");
        assert!(json.get("in_flight").is_none());
    }
}
