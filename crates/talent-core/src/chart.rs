//! Declarative chart descriptions for the rendering layer.
//!
//! Builders here are pure: they never look at anything but their argument and
//! never validate business invariants beyond what the chart shape requires.

use crate::dataset::FUNNEL_STAGES;
use crate::error::{HubError, Result};
use crate::types::{FunnelStage, ServiceLineMetric};
use serde::{Deserialize, Serialize};

pub const BILLED_COLOR: &str = "#4f46e5";
pub const BENCH_COLOR: &str = "#f97316";
pub const ENABLEMENT_COLOR: &str = "#a8a29e";

pub const FUNNEL_RAMP: [&str; FUNNEL_STAGES] = ["#6366f1", "#818cf8", "#a5b4fc", "#c7d2fe"];

const DONUT_HOLE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Donut,
    HorizontalBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Bottom,
    Hidden,
}

/// Where a segment's value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueLabels {
    /// Only on hover, together with the percentage.
    Hover,
    Inline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub value: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub segments: Vec<Segment>,
    pub legend: LegendPosition,
    pub value_labels: ValueLabels,
    /// Text drawn in the middle of a donut.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_label: Option<String>,
    /// Inner radius as a fraction of the outer radius; donuts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f32>,
}

impl ChartSpec {
    pub fn labels(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.segments.iter().map(|s| s.value).collect()
    }

    pub fn colors(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.color.as_str()).collect()
    }

    pub fn total(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.value)).sum()
    }

    /// Share of each segment in percent. An all-zero series yields zeros.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.segments
            .iter()
            .map(|s| {
                if total == 0 {
                    0.0
                } else {
                    f64::from(s.value) * 100.0 / total as f64
                }
            })
            .collect()
    }
}

/// Donut chart of one service line: billed, bench, enablement.
///
/// The center label is always the headcount total, even when the segments do
/// not add up to it.
pub fn build_service_line_chart(metric: &ServiceLineMetric) -> ChartSpec {
    let segments = [
        ("Billed", metric.billed_count, BILLED_COLOR),
        ("Bench", metric.bench_count, BENCH_COLOR),
        ("Enablement", metric.enablement_count, ENABLEMENT_COLOR),
    ]
    .into_iter()
    .map(|(label, value, color)| Segment {
        label: label.to_string(),
        value,
        color: color.to_string(),
    })
    .collect();

    ChartSpec {
        kind: ChartKind::Donut,
        segments,
        legend: LegendPosition::Bottom,
        value_labels: ValueLabels::Hover,
        center_label: Some(metric.total_headcount.to_string()),
        hole: Some(DONUT_HOLE),
    }
}

/// Horizontal bar "funnel" over the four interview stages.
pub fn build_funnel_chart(counts: &[u32]) -> Result<ChartSpec> {
    if counts.len() != FUNNEL_STAGES {
        return Err(HubError::InvalidFunnelLength {
            expected: FUNNEL_STAGES,
            actual: counts.len(),
        });
    }

    let segments = FunnelStage::all()
        .iter()
        .zip(counts)
        .zip(FUNNEL_RAMP)
        .map(|((stage, &value), color)| Segment {
            label: stage.label().to_string(),
            value,
            color: color.to_string(),
        })
        .collect();

    Ok(ChartSpec {
        kind: ChartKind::HorizontalBar,
        segments,
        legend: LegendPosition::Hidden,
        value_labels: ValueLabels::Inline,
        center_label: None,
        hole: None,
    })
}
