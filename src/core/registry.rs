use crate::ChartCallback;
use crate::charts::{OutcomePieCallback, PayloadScatterCallback};
use crate::types::{ControlId, OutputId};

/// Registry of chart callbacks, keyed by the output they publish to
pub struct CallbackRegistry {
    callbacks: Vec<Box<dyn ChartCallback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Registry holding the pie and scatter callbacks of the dashboard
    pub fn with_default_charts() -> Self {
        let mut registry = Self::new();
        registry.register(OutcomePieCallback::new());
        registry.register(PayloadScatterCallback::new());
        registry
    }

    /// Register a callback. A later registration for the same output
    /// replaces the earlier one.
    pub fn register<T: ChartCallback + 'static>(&mut self, callback: T) {
        let output = callback.output_id();
        self.callbacks.retain(|c| c.output_id() != output);
        self.callbacks.push(Box::new(callback));
    }

    /// Get the callback publishing to an output
    pub fn get(&self, output: OutputId) -> Option<&dyn ChartCallback> {
        self.callbacks
            .iter()
            .find(|c| c.output_id() == output)
            .map(|c| c.as_ref())
    }

    /// Callbacks that must rerun when `control` changes, in registration order
    pub fn dependents_of(&self, control: ControlId) -> Vec<&dyn ChartCallback> {
        self.callbacks
            .iter()
            .filter(|c| c.depends_on(control))
            .map(|c| c.as_ref())
            .collect()
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn ChartCallback> {
        self.callbacks.iter().map(|c| c.as_ref())
    }

    /// Get all registered output ids
    pub fn all_outputs(&self) -> Vec<OutputId> {
        self.callbacks.iter().map(|c| c.output_id()).collect()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChartFigure, LaunchTable, SelectionState};

    struct StubCallback(OutputId, Vec<ControlId>);

    impl ChartCallback for StubCallback {
        fn output_id(&self) -> OutputId {
            self.0
        }

        fn inputs(&self) -> &[ControlId] {
            &self.1
        }

        fn compute(&self, _table: &LaunchTable, _state: &SelectionState) -> ChartFigure {
            unreachable!("not computed in registry tests")
        }
    }

    #[test]
    fn site_change_reaches_both_charts() {
        let registry = CallbackRegistry::with_default_charts();
        let outputs: Vec<OutputId> = registry
            .dependents_of(ControlId::SiteDropdown)
            .iter()
            .map(|c| c.output_id())
            .collect();
        assert_eq!(
            outputs,
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
    }

    #[test]
    fn slider_change_reaches_scatter_only() {
        let registry = CallbackRegistry::with_default_charts();
        let outputs: Vec<OutputId> = registry
            .dependents_of(ControlId::PayloadSlider)
            .iter()
            .map(|c| c.output_id())
            .collect();
        assert_eq!(outputs, vec![OutputId::SuccessPayloadScatterChart]);
    }

    #[test]
    fn re_registering_an_output_replaces_it() {
        let mut registry = CallbackRegistry::with_default_charts();
        registry.register(StubCallback(
            OutputId::SuccessPieChart,
            vec![ControlId::PayloadSlider],
        ));
        assert_eq!(registry.all_outputs().len(), 2);
        assert!(
            registry
                .get(OutputId::SuccessPieChart)
                .unwrap()
                .depends_on(ControlId::PayloadSlider)
        );
    }
}
