use serde::Serialize;

use crate::types::OutcomeClass;

/// Segment label of a proportion chart: a site id or an outcome class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SegmentName {
    Site(String),
    Class(OutcomeClass),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: SegmentName,
    pub count: usize,
}

/// Labelled counts rendered as one pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSeries {
    pub title: String,
    pub segments: Vec<Segment>,
}

impl NamedSeries {
    pub fn total(&self) -> usize {
        self.segments.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flattened `(label, count)` pairs
    pub fn pairs(&self) -> Vec<(String, usize)> {
        self.segments
            .iter()
            .map(|s| {
                let label = match &s.name {
                    SegmentName::Site(site) => site.clone(),
                    SegmentName::Class(class) => class.to_string(),
                };
                (label, s.count)
            })
            .collect()
    }
}

/// One scatter point; the booster category is only a color key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    pub booster_version_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// Figure data handed to the chart sink of one output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartFigure {
    Pie(NamedSeries),
    Scatter(ScatterSeries),
}

impl ChartFigure {
    pub fn as_pie(&self) -> Option<&NamedSeries> {
        match self {
            ChartFigure::Pie(series) => Some(series),
            ChartFigure::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterSeries> {
        match self {
            ChartFigure::Scatter(series) => Some(series),
            ChartFigure::Pie(_) => None,
        }
    }
}
