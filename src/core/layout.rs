use log::warn;
use serde::Serialize;

use crate::types::config::{Config, SliderConfig};
use crate::types::{ALL_SITES, LaunchTable, SelectionState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
}

impl RangeSlider {
    pub fn from_config(slider: &SliderConfig) -> Self {
        Self {
            min: slider.min(),
            max: slider.max(),
            step: slider.step(),
            marks: slider_marks(slider.min(), slider.max(), slider.mark_every()),
        }
    }
}

/// Static description of the dashboard widgets, sent once to the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_options: Vec<SiteOption>,
    pub slider: RangeSlider,
    pub initial: SelectionState,
}

impl DashboardLayout {
    pub fn build(table: &LaunchTable, config: &Config) -> Self {
        let mut site_options = vec![SiteOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        site_options.extend(table.sites().into_iter().map(|site| SiteOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        Self {
            title: config.dashboard().title().to_string(),
            site_options,
            slider: RangeSlider::from_config(&config.slider()),
            initial: SelectionState::initial(table.bounds()),
        }
    }
}

/// Upper bound on generated slider ticks
pub const MAX_SLIDER_MARKS: usize = 1000;

/// Tick labels from `min` through `max` (inclusive) every `every` units.
/// Spacings that would produce more than [`MAX_SLIDER_MARKS`] ticks yield none.
pub fn slider_marks(min: f64, max: f64, every: f64) -> Vec<SliderMark> {
    if every <= 0.0 || min > max {
        return Vec::new();
    }
    let intervals = ((max - min) / every).floor();
    if !intervals.is_finite() || intervals >= MAX_SLIDER_MARKS as f64 {
        warn!(
            "Slider mark spacing {every} over {min}..={max} gives too many marks; omitting marks"
        );
        return Vec::new();
    }
    (0..=intervals as usize)
        .map(|i| {
            let value = min + every * i as f64;
            SliderMark {
                value,
                label: format!("{value}"),
            }
        })
        .collect()
}
