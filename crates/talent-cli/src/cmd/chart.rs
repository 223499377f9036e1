use crate::output::print_json;
use clap::Subcommand;
use std::path::Path;
use talent_core::chart::{build_funnel_chart, build_service_line_chart, ChartSpec};

#[derive(Subcommand)]
pub enum ChartSubcommand {
    /// Donut chart for one service line
    ServiceLine {
        /// Service line code or display name
        code: String,
        /// Print rendered SVG instead of the JSON spec
        #[arg(long)]
        svg: bool,
    },
    /// Interview funnel bar chart
    Funnel {
        /// Print rendered SVG instead of the JSON spec
        #[arg(long)]
        svg: bool,
    },
}

pub fn run(root: &Path, subcmd: ChartSubcommand, json: bool) -> anyhow::Result<()> {
    let ctx = super::load_context(root)?;
    let (spec, svg) = match subcmd {
        ChartSubcommand::ServiceLine { code, svg } => {
            (build_service_line_chart(ctx.dataset.service_line(&code)?), svg)
        }
        ChartSubcommand::Funnel { svg } => (build_funnel_chart(&ctx.dataset.interview_funnel)?, svg),
    };

    if svg {
        println!("{}", talent_server::render::render_chart(&spec));
    } else if json {
        print_json(&spec)?;
    } else {
        print_summary(&spec);
    }
    Ok(())
}

fn print_summary(spec: &ChartSpec) {
    if let Some(ref center) = spec.center_label {
        println!("Total: {center}");
    }
    let pcts = spec.percentages();
    for (seg, pct) in spec.segments.iter().zip(pcts) {
        println!("  {:<12} {:>6}  {:>5.1}%  {}", seg.label, seg.value, pct, seg.color);
    }
}
