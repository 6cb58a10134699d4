use crate::ChartCallback;
use crate::filter::filter_by_payload;
use crate::types::{
    ChartFigure, ControlId, LaunchTable, OutputId, ScatterSeries, SelectionState, SiteSelector,
};

/// Payload vs. outcome scatter, colored by booster category.
pub struct PayloadScatterCallback {
    inputs: Vec<ControlId>,
}

impl Default for PayloadScatterCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadScatterCallback {
    pub fn new() -> Self {
        Self {
            inputs: vec![ControlId::SiteDropdown, ControlId::PayloadSlider],
        }
    }
}

impl ChartCallback for PayloadScatterCallback {
    fn output_id(&self) -> OutputId {
        OutputId::SuccessPayloadScatterChart
    }

    fn inputs(&self) -> &[ControlId] {
        &self.inputs
    }

    fn compute(&self, table: &LaunchTable, state: &SelectionState) -> ChartFigure {
        let title = match &state.site {
            SiteSelector::All => "Payload vs. outcome for all sites".to_string(),
            SiteSelector::Site(site) => format!("Payload vs. outcome at {site}"),
        };
        ChartFigure::Scatter(ScatterSeries {
            title,
            points: filter_by_payload(table, &state.site, state.payload_range),
        })
    }
}
