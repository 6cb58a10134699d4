use crate::ChartCallback;
use crate::aggregate::aggregate_outcomes;
use crate::types::{ChartFigure, ControlId, LaunchTable, OutputId, SelectionState};

/// Pie chart of launch outcomes, driven by the site selector only.
pub struct OutcomePieCallback {
    inputs: Vec<ControlId>,
}

impl Default for OutcomePieCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomePieCallback {
    pub fn new() -> Self {
        Self {
            inputs: vec![ControlId::SiteDropdown],
        }
    }
}

impl ChartCallback for OutcomePieCallback {
    fn output_id(&self) -> OutputId {
        OutputId::SuccessPieChart
    }

    fn inputs(&self) -> &[ControlId] {
        &self.inputs
    }

    fn compute(&self, table: &LaunchTable, state: &SelectionState) -> ChartFigure {
        ChartFigure::Pie(aggregate_outcomes(table, &state.site))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_payload_slider() {
        let callback = OutcomePieCallback::new();
        assert!(callback.depends_on(ControlId::SiteDropdown));
        assert!(!callback.depends_on(ControlId::PayloadSlider));
    }
}
