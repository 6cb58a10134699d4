use std::sync::Arc;

use log::debug;

use crate::CallbackRegistry;
use crate::types::{ChartUpdate, ControlEvent, LaunchTable, SelectionState};

/// Owns the selection state and recomputes the charts affected by each
/// control event. Events must be delivered one at a time.
pub struct ReactiveController {
    table: Arc<LaunchTable>,
    registry: Arc<CallbackRegistry>,
    state: SelectionState,
}

impl ReactiveController {
    pub fn new(table: Arc<LaunchTable>, registry: Arc<CallbackRegistry>) -> Self {
        let state = SelectionState::initial(table.bounds());
        Self {
            table,
            registry,
            state,
        }
    }

    /// Copy of the current selection
    pub fn snapshot(&self) -> SelectionState {
        self.state.clone()
    }

    /// Apply a control event and recompute every output depending on it.
    pub fn dispatch(&mut self, event: ControlEvent) -> Vec<ChartUpdate> {
        let control = event.control();
        match event {
            ControlEvent::SiteDropdown(site) => self.state.site = site,
            ControlEvent::PayloadSlider(range) => self.state.payload_range = range,
        }

        let state = self.snapshot();
        let updates: Vec<ChartUpdate> = self
            .registry
            .dependents_of(control)
            .into_iter()
            .map(|callback| ChartUpdate {
                output: callback.output_id(),
                figure: callback.compute(&self.table, &state),
            })
            .collect();
        debug!(
            "Dispatched {} (site={}, payload={:?}) -> {} update(s)",
            control,
            state.site,
            <[f64; 2]>::from(state.payload_range),
            updates.len()
        );
        updates
    }

    /// Compute every registered output for the current selection.
    pub fn render_all(&self) -> Vec<ChartUpdate> {
        let state = self.snapshot();
        self.registry
            .all()
            .map(|callback| ChartUpdate {
                output: callback.output_id(),
                figure: callback.compute(&self.table, &state),
            })
            .collect()
    }
}
