use crate::types::{ChartFigure, ControlId, LaunchTable, OutputId, SelectionState};

/// Core trait that chart callbacks must provide
pub trait ChartCallback: Send + Sync {
    /// Output this callback publishes to (e.g., "success-pie-chart")
    fn output_id(&self) -> OutputId;

    /// Controls whose changes trigger a recomputation
    fn inputs(&self) -> &[ControlId];

    /// Recompute the figure for the given state
    fn compute(&self, table: &LaunchTable, state: &SelectionState) -> ChartFigure;

    /// Whether a change of `control` affects this output
    fn depends_on(&self, control: ControlId) -> bool {
        self.inputs().contains(&control)
    }
}
