pub mod outcome_pie;
pub mod payload_scatter;

pub use outcome_pie::OutcomePieCallback;
pub use payload_scatter::PayloadScatterCallback;
