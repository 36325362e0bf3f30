// SPDX-License-Identifier: MPL-2.0
//! Gallery screen state container.
//!
//! All mutable screen state (the record collection, the load indicator, the
//! selection, the fetch generation) lives here behind explicit transition
//! methods, so the update loop stays a thin dispatcher and every transition
//! is testable without a renderer.

use crate::error::FetchError;
use crate::gallery::PhotoRecord;

/// Which load indicator, if any, the grid header shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// No fetch in flight.
    Idle,
    /// First load: nothing to show yet, the grid area shows a loading state.
    Loading,
    /// User-initiated refresh: the previous grid stays rendered.
    Refreshing,
}

/// What a completed fetch did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The collection was replaced wholesale with the fetched batch.
    Replaced,
    /// The fetch failed; the collection is untouched, the indicator cleared.
    Failed,
    /// The response belongs to a superseded fetch and was discarded.
    Stale,
}

#[derive(Debug, Default)]
pub struct State {
    records: Vec<PhotoRecord>,
    indicator: Option<IndicatorKind>,
    selected: Option<usize>,
    issued_generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndicatorKind {
    FirstLoad,
    Refresh,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as issued and returns its generation tag.
    ///
    /// Only the completion carrying the latest issued generation is ever
    /// applied; see [`State::apply_fetch`]. A fetch issued while the grid
    /// already holds records is a refresh, so the grid stays rendered.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_generation += 1;
        self.indicator = Some(if self.records.is_empty() {
            IndicatorKind::FirstLoad
        } else {
            IndicatorKind::Refresh
        });
        self.issued_generation
    }

    /// Applies a fetch completion tagged with `generation`.
    ///
    /// Out-of-date completions are discarded without touching anything: the
    /// indicator belongs to the newer fetch still in flight. On success the
    /// collection is replaced in server order and the selection cleared; on
    /// failure the collection keeps its current value (empty on a failed
    /// first load, stale on a failed refresh).
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<PhotoRecord>, FetchError>,
    ) -> FetchOutcome {
        if generation != self.issued_generation {
            return FetchOutcome::Stale;
        }

        self.indicator = None;
        match result {
            Ok(records) => {
                self.records = records;
                self.selected = None;
                FetchOutcome::Replaced
            }
            Err(_) => FetchOutcome::Failed,
        }
    }

    /// Binds the record at `index` as selected, opening the overlay.
    ///
    /// Re-selecting while the overlay is already bound overwrites the binding
    /// (last write wins). Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.records.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Clears the selection, hiding the overlay. A no-op when nothing is
    /// selected.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&PhotoRecord> {
        self.selected.and_then(|index| self.records.get(index))
    }

    #[must_use]
    pub fn indicator(&self) -> Indicator {
        match self.indicator {
            None => Indicator::Idle,
            Some(IndicatorKind::FirstLoad) => Indicator::Loading,
            Some(IndicatorKind::Refresh) => Indicator::Refreshing,
        }
    }

    /// Generation of the most recently issued fetch.
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.issued_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> PhotoRecord {
        PhotoRecord {
            id: id.to_string(),
            author: format!("Author {}", id),
            width: 200,
            height: 300,
            url: format!("http://x/{}", id),
            download_url: format!("http://x/{}/dl", id),
        }
    }

    fn batch(ids: &[&str]) -> Vec<PhotoRecord> {
        ids.iter().map(|id| record(id)).collect()
    }

    #[test]
    fn starts_empty_and_idle() {
        let state = State::new();
        assert!(state.records().is_empty());
        assert_eq!(state.indicator(), Indicator::Idle);
        assert!(state.selected_record().is_none());
    }

    #[test]
    fn first_fetch_shows_loading_indicator() {
        let mut state = State::new();
        state.begin_fetch();
        assert_eq!(state.indicator(), Indicator::Loading);
    }

    #[test]
    fn successful_fetch_replaces_collection_in_order() {
        let mut state = State::new();
        let generation = state.begin_fetch();

        let outcome = state.apply_fetch(generation, Ok(batch(&["2", "0", "1"])));

        assert_eq!(outcome, FetchOutcome::Replaced);
        assert_eq!(state.indicator(), Indicator::Idle);
        let ids: Vec<_> = state.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "0", "1"]);
    }

    #[test]
    fn failed_first_fetch_leaves_grid_empty_and_clears_indicator() {
        let mut state = State::new();
        let generation = state.begin_fetch();

        let outcome = state.apply_fetch(generation, Err(FetchError::Status(500)));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(state.records().is_empty());
        assert_eq!(state.indicator(), Indicator::Idle);
    }

    #[test]
    fn refresh_keeps_prior_records_while_in_flight() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["a", "b", "c"])));

        state.begin_fetch();

        assert_eq!(state.indicator(), Indicator::Refreshing);
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn refresh_success_swaps_three_records_for_five() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["a", "b", "c"])));

        let generation = state.begin_fetch();
        let outcome = state.apply_fetch(generation, Ok(batch(&["1", "2", "3", "4", "5"])));

        assert_eq!(outcome, FetchOutcome::Replaced);
        assert_eq!(state.records().len(), 5);
        assert!(state.records().iter().all(|r| r.id.parse::<u32>().is_ok()));
    }

    #[test]
    fn refresh_failure_keeps_stale_records() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["a", "b"])));

        let generation = state.begin_fetch();
        let outcome = state.apply_fetch(generation, Err(FetchError::Network("down".into())));

        assert_eq!(outcome, FetchOutcome::Failed);
        assert_eq!(state.records().len(), 2);
        assert_eq!(state.indicator(), Indicator::Idle);
    }

    #[test]
    fn superseded_fetch_completion_is_discarded() {
        let mut state = State::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // The older response arrives late, after a newer fetch was issued.
        let outcome = state.apply_fetch(first, Ok(batch(&["old"])));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(state.records().is_empty());
        assert_ne!(state.indicator(), Indicator::Idle);

        let outcome = state.apply_fetch(second, Ok(batch(&["new"])));
        assert_eq!(outcome, FetchOutcome::Replaced);
        assert_eq!(state.records()[0].id, "new");
    }

    #[test]
    fn stale_success_cannot_overwrite_newer_batch() {
        let mut state = State::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        state.apply_fetch(second, Ok(batch(&["fresh"])));
        let outcome = state.apply_fetch(first, Ok(batch(&["stale"])));

        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(state.records()[0].id, "fresh");
    }

    #[test]
    fn select_binds_exactly_the_clicked_record() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["x", "y"])));

        assert!(state.select(1));
        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("y"));
    }

    #[test]
    fn reselect_overwrites_binding_last_write_wins() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["x", "y"])));

        state.select(0);
        state.select(1);

        assert_eq!(state.selected_record().map(|r| r.id.as_str()), Some("y"));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["x"])));

        assert!(!state.select(5));
        assert!(state.selected_record().is_none());
    }

    #[test]
    fn dismiss_clears_binding_and_is_idempotent() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["x"])));
        state.select(0);

        state.dismiss();
        assert!(state.selected_record().is_none());

        // Dismissing an already-hidden overlay changes nothing.
        state.dismiss();
        assert!(state.selected_record().is_none());
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn replacing_collection_clears_selection() {
        let mut state = State::new();
        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["x", "y"])));
        state.select(1);

        let generation = state.begin_fetch();
        state.apply_fetch(generation, Ok(batch(&["z"])));

        assert!(state.selected_record().is_none());
    }
}
