use talent_core::chart::{ChartKind, ChartSpec, ValueLabels};

use super::escape;

const DONUT_SIZE: f64 = 200.0;
const DONUT_RADIUS: f64 = 80.0;
const EMPTY_RING: &str = "#e2e8f0";

const BAR_WIDTH: u64 = 420;
const BAR_HEIGHT: u64 = 40;
const BAR_GAP: u64 = 16;
const BAR_LEFT_MARGIN: u64 = 100;
const BAR_RIGHT_MARGIN: u64 = 12;
const BAR_TOP_MARGIN: u64 = 20;
const LABEL_COLOR: &str = "#1e293b";

pub fn render_chart(spec: &ChartSpec) -> String {
    match spec.kind {
        ChartKind::Donut => render_donut(spec),
        ChartKind::HorizontalBar => render_bars(spec),
    }
}

/// Ring chart built from stroked circles, one per segment, starting at 12 o'clock.
fn render_donut(spec: &ChartSpec) -> String {
    let hole = f64::from(spec.hole.unwrap_or(0.0)).clamp(0.0, 0.95);
    let inner = DONUT_RADIUS * hole;
    let thickness = DONUT_RADIUS - inner;
    let r = inner + thickness / 2.0;
    let circumference = 2.0 * std::f64::consts::PI * r;
    let c = DONUT_SIZE / 2.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg class=\"chart donut\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {DONUT_SIZE} {DONUT_SIZE}\" role=\"img\">"
    ));
    svg.push_str(&format!(
        "<circle cx=\"{c}\" cy=\"{c}\" r=\"{r:.2}\" fill=\"none\" stroke=\"{EMPTY_RING}\" stroke-width=\"{thickness:.2}\"/>"
    ));

    let mut offset = 0.0;
    for (segment, pct) in spec.segments.iter().zip(spec.percentages()) {
        if segment.value == 0 {
            continue;
        }
        let dash = circumference * pct / 100.0;
        let gap = circumference - dash;
        let tooltip = match spec.value_labels {
            ValueLabels::Hover => format!("{}: {} ({pct:.1}%)", segment.label, segment.value),
            ValueLabels::Inline => format!("{}: {}", segment.label, segment.value),
        };
        svg.push_str(&format!(
            "<circle cx=\"{c}\" cy=\"{c}\" r=\"{r:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{thickness:.2}\" \
             stroke-dasharray=\"{dash:.3} {gap:.3}\" stroke-dashoffset=\"{:.3}\" transform=\"rotate(-90 {c} {c})\">\
             <title>{}</title></circle>",
            escape(&segment.color),
            -offset,
            escape(&tooltip),
        ));
        offset += dash;
    }

    if let Some(ref label) = spec.center_label {
        svg.push_str(&format!(
            "<text x=\"{c}\" y=\"{c}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"28\" font-weight=\"bold\" fill=\"{LABEL_COLOR}\">{}</text>",
            escape(label)
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Horizontal bars scaled against the largest value, labels on the left.
fn render_bars(spec: &ChartSpec) -> String {
    let rows = spec.segments.len() as u64;
    let row_height = BAR_HEIGHT + BAR_GAP;
    let height = BAR_TOP_MARGIN + row_height * rows;
    let available = BAR_WIDTH - BAR_LEFT_MARGIN - BAR_RIGHT_MARGIN;
    let max = spec
        .segments
        .iter()
        .map(|s| u64::from(s.value))
        .max()
        .unwrap_or(0);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg class=\"chart bars\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {BAR_WIDTH} {height}\" role=\"img\">"
    ));

    for (idx, segment) in spec.segments.iter().enumerate() {
        let y = BAR_TOP_MARGIN + idx as u64 * row_height;
        let value = u64::from(segment.value);
        let raw = value
            .saturating_mul(available)
            .checked_div(max)
            .unwrap_or(0);
        let width = if raw == 0 && value > 0 { 1 } else { raw };

        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"end\" dominant-baseline=\"central\" font-size=\"13\" font-weight=\"bold\" fill=\"{LABEL_COLOR}\">{}</text>",
            BAR_LEFT_MARGIN - 8,
            y + BAR_HEIGHT / 2,
            escape(&segment.label)
        ));
        svg.push_str(&format!(
            "<rect x=\"{BAR_LEFT_MARGIN}\" y=\"{y}\" width=\"{width}\" height=\"{BAR_HEIGHT}\" rx=\"4\" fill=\"{}\"><title>{}: {}</title></rect>",
            escape(&segment.color),
            escape(&segment.label),
            segment.value
        ));
        if spec.value_labels == ValueLabels::Inline {
            // Inside the bar when it fits, just past its end otherwise.
            let (x, anchor) = if width >= 40 {
                (BAR_LEFT_MARGIN + width - 8, "end")
            } else {
                (BAR_LEFT_MARGIN + width + 6, "start")
            };
            svg.push_str(&format!(
                "<text x=\"{x}\" y=\"{}\" text-anchor=\"{anchor}\" dominant-baseline=\"central\" font-size=\"13\" font-weight=\"bold\" fill=\"{LABEL_COLOR}\">{}</text>",
                y + BAR_HEIGHT / 2,
                segment.value
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use talent_core::chart::{build_funnel_chart, build_service_line_chart};
    use talent_core::types::ServiceLineMetric;

    fn looks_like_svg(svg: &str) -> bool {
        svg.starts_with("<svg") && svg.ends_with("</svg>")
    }

    fn metric(total: u32, billed: u32, bench: u32, enablement: u32) -> ServiceLineMetric {
        ServiceLineMetric {
            code: "da".into(),
            display_name: "DA".into(),
            full_name: "Data & Analytics".into(),
            total_headcount: total,
            billed_count: billed,
            bench_count: bench,
            enablement_count: enablement,
        }
    }

    #[test]
    fn donut_has_one_arc_per_nonzero_segment_and_center_label() {
        let svg = render_chart(&build_service_line_chart(&metric(350, 290, 35, 25)));
        assert!(looks_like_svg(&svg));
        // background ring + three arcs
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains(">350</text>"));
        assert!(svg.contains("#4f46e5"));
        assert!(svg.contains("Billed: 290 (82.9%)"));
    }

    #[test]
    fn donut_skips_zero_segments() {
        let svg = render_chart(&build_service_line_chart(&metric(10, 10, 0, 0)));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn empty_donut_is_just_the_ring() {
        let svg = render_chart(&build_service_line_chart(&metric(0, 0, 0, 0)));
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains(">0</text>"));
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let svg = render_chart(&build_funnel_chart(&[65, 55, 35, 25]).unwrap());
        assert!(looks_like_svg(&svg));
        assert_eq!(svg.matches("<rect").count(), 4);
        // widest bar takes the full available width
        assert!(svg.contains(&format!("width=\"{}\"", BAR_WIDTH - BAR_LEFT_MARGIN - BAR_RIGHT_MARGIN)));
        let new = svg.find(">New<").unwrap();
        let allocated = svg.find(">Allocated<").unwrap();
        assert!(new < allocated);
        assert!(svg.contains(">25</text>"));
    }

    #[test]
    fn all_zero_bars_render_without_panicking() {
        let svg = render_chart(&build_funnel_chart(&[0, 0, 0, 0]).unwrap());
        assert!(svg.contains("width=\"0\""));
    }
}
