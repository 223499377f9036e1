//! Page-level composition: one [`DashboardView`] per request.

use crate::chart::{build_funnel_chart, build_service_line_chart, ChartSpec};
use crate::config::HubConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::filter::{DashboardFilter, DateRange};
use crate::format::{
    format_allocation_row, format_forecast_cards, format_talent_row_with, AllocationRow, StatCard,
    TalentRow, ALLOCATION_HEADERS, TALENT_HEADERS,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// HubContext
// ---------------------------------------------------------------------------

/// Read-only data every view is built from. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HubContext {
    pub dataset: Arc<Dataset>,
    pub config: Arc<HubConfig>,
}

impl HubContext {
    /// Validates the dataset under the configured totals policy.
    pub fn new(dataset: Dataset, config: HubConfig) -> Result<Self> {
        dataset.check(config.totals_policy)?;
        Ok(Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        })
    }

    /// Load config (or defaults) and the dataset for a project root.
    pub fn load(root: &Path) -> Result<Self> {
        let config = HubConfig::load_or_default(root)?;
        let dataset = Dataset::for_project(root, &config)?;
        for w in dataset.validate(config.totals_policy) {
            tracing::warn!(level = ?w.level, "{}", w.message);
        }
        Self::new(dataset, config)
    }
}

// ---------------------------------------------------------------------------
// DashboardView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterPanel {
    pub service_lines: Vec<FilterOption>,
    pub ranges: Vec<FilterOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceLineCard {
    pub code: String,
    pub name: String,
    pub full_name: String,
    pub chart: ChartSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSpec<R> {
    pub headers: Vec<String>,
    pub rows: Vec<R>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub header: Header,
    pub filters: FilterPanel,
    pub service_lines: Vec<ServiceLineCard>,
    pub forecast: Vec<StatCard>,
    pub funnel: ChartSpec,
    pub allocations: TableSpec<AllocationRow>,
    pub talent: TableSpec<TalentRow>,
}

impl DashboardView {
    pub fn build(ctx: &HubContext, filter: &DashboardFilter, today: NaiveDate) -> Result<Self> {
        let ds = &ctx.dataset;
        let cfg = &ctx.config;

        let filters = FilterPanel {
            service_lines: ds
                .service_lines
                .iter()
                .map(|m| FilterOption {
                    value: m.code.clone(),
                    label: m.display_name.clone(),
                    selected: filter.selects(m),
                })
                .collect(),
            ranges: DateRange::all()
                .iter()
                .map(|r| FilterOption {
                    value: r.to_string(),
                    label: r.label().to_string(),
                    selected: *r == filter.range,
                })
                .collect(),
        };

        let service_lines = filter
            .service_lines(&ds.service_lines)
            .into_iter()
            .map(|m| ServiceLineCard {
                code: m.code.clone(),
                name: m.display_name.clone(),
                full_name: m.full_name.clone(),
                chart: build_service_line_chart(m),
            })
            .collect();

        let allocations = TableSpec {
            headers: headers(&ALLOCATION_HEADERS),
            rows: filter
                .allocations(&ds.recent_allocations, today)
                .into_iter()
                .map(format_allocation_row)
                .collect(),
        };

        let talent = TableSpec {
            headers: headers(&TALENT_HEADERS),
            rows: filter
                .talent(&ds.service_lines, &ds.talent_pool)
                .into_iter()
                .map(|t| format_talent_row_with(t, cfg.badge_hashing))
                .collect(),
        };

        Ok(Self {
            header: Header {
                title: cfg.title.clone(),
                subtitle: cfg.subtitle.clone(),
            },
            filters,
            service_lines,
            forecast: format_forecast_cards(&ds.bench_forecast),
            funnel: build_funnel_chart(&ds.interview_funnel)?,
            allocations,
            talent,
        })
    }
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|h| h.to_string()).collect()
}
