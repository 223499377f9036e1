use crate::output::{print_json, print_table};
use clap::Subcommand;
use std::path::Path;
use talent_core::dashboard::TableSpec;
use talent_core::filter::DashboardFilter;
use talent_core::format::{
    format_allocation_row, format_talent_row_with, ALLOCATION_HEADERS, TALENT_HEADERS,
};

#[derive(Subcommand)]
pub enum TableSubcommand {
    /// Recent allocations
    Allocations {
        /// Date range in days: 30 or 90
        #[arg(long)]
        range: Option<String>,
    },
    /// Talent pool
    Talent {
        /// Service line codes or names, comma-separated (default: all)
        #[arg(long)]
        sl: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: TableSubcommand, json: bool) -> anyhow::Result<()> {
    let ctx = super::load_context(root)?;
    let ds = &ctx.dataset;

    match subcmd {
        TableSubcommand::Allocations { range } => {
            let filter = DashboardFilter::from_query(None, range.as_deref())?;
            let today = chrono::Local::now().date_naive();
            let rows: Vec<_> = filter
                .allocations(&ds.recent_allocations, today)
                .into_iter()
                .map(format_allocation_row)
                .collect();
            if json {
                print_json(&TableSpec {
                    headers: ALLOCATION_HEADERS.iter().map(|h| h.to_string()).collect(),
                    rows,
                })?;
            } else {
                print_table(&ALLOCATION_HEADERS, rows.iter().map(|r| r.cells()).collect());
            }
        }
        TableSubcommand::Talent { sl } => {
            let filter = DashboardFilter::from_query(sl.as_deref(), None)?;
            let rows: Vec<_> = filter
                .talent(&ds.service_lines, &ds.talent_pool)
                .into_iter()
                .map(|t| format_talent_row_with(t, ctx.config.badge_hashing))
                .collect();
            if json {
                print_json(&TableSpec {
                    headers: TALENT_HEADERS.iter().map(|h| h.to_string()).collect(),
                    rows,
                })?;
            } else {
                print_table(&TALENT_HEADERS, rows.iter().map(|r| r.cells()).collect());
            }
        }
    }
    Ok(())
}
