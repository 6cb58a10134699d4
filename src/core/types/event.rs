use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{ChartFigure, PayloadRange, SiteSelector};

/// Identifiers of the controls that feed state into the dashboard
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

/// Identifiers of the chart sinks
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

/// A value change emitted by one control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value", rename_all = "kebab-case")]
pub enum ControlEvent {
    SiteDropdown(SiteSelector),
    PayloadSlider(PayloadRange),
}

impl ControlEvent {
    pub fn control(&self) -> ControlId {
        match self {
            ControlEvent::SiteDropdown(_) => ControlId::SiteDropdown,
            ControlEvent::PayloadSlider(_) => ControlId::PayloadSlider,
        }
    }
}

/// Recomputed figure for one output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartUpdate {
    pub output: OutputId,
    pub figure: ChartFigure,
}
